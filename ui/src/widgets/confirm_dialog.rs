//! Centered confirmation window for destructive actions.

use egui::{Align2, Button, Context, RichText, Window};
use syc_business::management::crud::ConfirmPrompt;

use crate::utils::colors::COLOR_RED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

/// Shows `prompt` and returns the choice made this frame, if any.
///
/// Closing the window with its `x` counts as cancel.
pub fn confirm_dialog(ctx: &Context, prompt: &ConfirmPrompt) -> Option<ConfirmChoice> {
    let mut open = true;
    let mut choice = None;

    Window::new(prompt.title.as_str())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(prompt.message.as_str());
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button(prompt.cancel_label).clicked() {
                    choice = Some(ConfirmChoice::Cancel);
                }
                let confirm = Button::new(RichText::new(prompt.confirm_label).color(COLOR_RED));
                if ui.add(confirm).clicked() {
                    choice = Some(ConfirmChoice::Confirm);
                }
            });
        });

    if !open {
        choice = Some(ConfirmChoice::Cancel);
    }
    choice
}
