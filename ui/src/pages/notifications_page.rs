//! Notification feed grouped by day, with delete confirmation.

use egui::{Align, Frame, Layout, RichText, Ui};
use syc_business::NotificationCenter;
use syc_business::management::crud::Record as _;
use syc_business::notifications::{EMPTY_BODY, EMPTY_TITLE, Notification};

use crate::state::State;
use crate::utils::colors::tone_color;
use crate::widgets::{ConfirmChoice, confirm_dialog};

pub fn notifications_page(state: &mut State, ui: &mut Ui) {
    let center = state.ctx.state_mut::<NotificationCenter>();

    ui.heading("Notifications");
    ui.add_space(8.0);

    if center.is_empty() {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(40.0);
            ui.strong(EMPTY_TITLE);
            ui.weak(EMPTY_BODY);
        });
        return;
    }

    let mut delete = None;
    for group in center.groups() {
        ui.strong(group.label);
        for notification in group.items {
            if notification_item(ui, notification) {
                delete = Some(notification.id);
            }
        }
        ui.add_space(12.0);
    }

    if let Some(id) = delete {
        center.request_delete(id);
    }

    if let Some(prompt) = center.crud.delete_target().map(|target| target.delete_prompt()) {
        match confirm_dialog(ui.ctx(), &prompt) {
            Some(ConfirmChoice::Confirm) => {
                center.confirm_delete();
            }
            Some(ConfirmChoice::Cancel) => center.crud.cancel_delete(),
            None => {}
        }
    }
}

/// Returns `true` when its delete button was clicked.
fn notification_item(ui: &mut Ui, notification: &Notification) -> bool {
    let mut delete = false;
    let color = tone_color(notification.variant.tone());

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(notification.initial.to_string())
                    .strong()
                    .size(18.0)
                    .color(color),
            );
            ui.vertical(|ui| {
                ui.strong(notification.title.as_str());
                ui.label(notification.body.as_str());
                ui.weak(notification.time_label.as_str());
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                delete = ui
                    .button("🗑")
                    .on_hover_text("Delete notification")
                    .clicked();
            });
        });
    });

    delete
}
