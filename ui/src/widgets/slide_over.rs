//! Right-anchored panel for forms and record details.

use egui::{Align2, Button, ComboBox, Context, Grid, RichText, TextEdit, Ui, Window};
use syc_business::management::form::{FieldInput, FormField};
use syc_business::reports::DetailField;

const SLIDE_OVER_WIDTH: f32 = 360.0;

/// What the slide-over produced this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

/// Output of one [`slide_over`] frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOverResponse<R> {
    /// What the contents returned; `None` while the window is hidden.
    pub inner: Option<R>,
    /// The `x` was clicked.
    pub closed: bool,
}

/// Window pinned to the right edge.
pub fn slide_over<R>(
    ctx: &Context,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> SlideOverResponse<R> {
    let mut open = true;

    let inner = Window::new(title)
        .id(egui::Id::new("slide_over"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, [-8.0, 8.0])
        .default_width(SLIDE_OVER_WIDTH)
        .show(ctx, add_contents)
        .and_then(|response| response.inner);

    SlideOverResponse {
        inner,
        closed: !open,
    }
}

/// Labelled inputs followed by cancel and submit buttons.
pub fn entity_form(ui: &mut Ui, fields: Vec<FormField<'_>>, submit_label: &str) -> Option<FormAction> {
    let mut action = None;

    Grid::new("entity_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for field in fields {
                ui.label(field.label);
                match field.input {
                    FieldInput::Text { value, placeholder } => {
                        ui.add(TextEdit::singleline(value).hint_text(placeholder));
                    }
                    FieldInput::Secret { value, placeholder } => {
                        ui.add(
                            TextEdit::singleline(value)
                                .password(true)
                                .hint_text(placeholder),
                        );
                    }
                    FieldInput::Choice(choice) => {
                        let labels = choice.labels();
                        let mut selected = choice.selected();
                        ComboBox::from_id_salt(field.label)
                            .selected_text(labels.get(selected).copied().unwrap_or_default())
                            .show_ui(ui, |ui| {
                                for (index, label) in labels.iter().enumerate() {
                                    ui.selectable_value(&mut selected, index, *label);
                                }
                            });
                        choice.select(selected);
                    }
                }
                ui.end_row();
            }
        });

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            action = Some(FormAction::Cancel);
        }
        if ui.add(Button::new(RichText::new(submit_label).strong())).clicked() {
            action = Some(FormAction::Submit);
        }
    });

    action
}

/// Read-only label/value pairs.
pub fn detail_fields(ui: &mut Ui, fields: &[DetailField]) {
    Grid::new("detail_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for field in fields {
                ui.weak(field.label);
                ui.label(field.value.as_str());
                ui.end_row();
            }
        });
}
