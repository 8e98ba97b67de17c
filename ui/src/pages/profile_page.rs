//! Admin profile: account card, edit and password slide-overs, language
//! and logout.

use egui::{Align, ComboBox, Frame, Layout, RichText, Ui};
use syc_business::AdminProfile;
use syc_business::management::form::{FormDraft as _, Options as _};
use syc_business::profile::Language;

use crate::state::State;
use crate::utils::colors::COLOR_BLUE;
use crate::widgets::{ConfirmChoice, FormAction, confirm_dialog, entity_form, slide_over};

pub fn profile_page(state: &mut State, ui: &mut Ui) {
    let profile = state.ctx.state_mut::<AdminProfile>();

    ui.heading("Admin Profile");
    ui.weak("Manage your admin account details, password and preferences.");
    ui.add_space(12.0);

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(profile.initial().to_string())
                    .size(28.0)
                    .strong()
                    .color(COLOR_BLUE),
            );
            ui.vertical(|ui| {
                ui.strong(profile.name.as_str());
                ui.weak(profile.email.as_str());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Edit profile").clicked() {
                    profile.open_edit();
                }
            });
        });
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("Language");
        ComboBox::from_id_salt("profile_language")
            .selected_text(profile.language.label())
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(&mut profile.language, *language, language.label());
                }
            });
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui.button("Change password").clicked() {
            profile.open_change_password();
        }
        if ui.button("Logout").clicked() {
            profile.request_logout();
        }
    });

    if let Some(draft) = profile.draft_mut() {
        let response = slide_over(ui.ctx(), "Edit profile", |ui| {
            entity_form(ui, draft.fields(), "Save changes")
        });
        match response.inner.flatten() {
            Some(FormAction::Submit) => profile.save_edit(),
            Some(FormAction::Cancel) => profile.cancel_edit(),
            None if response.closed => profile.cancel_edit(),
            None => {}
        }
    }

    if let Some(draft) = profile.password_draft_mut() {
        let response = slide_over(ui.ctx(), "Change password", |ui| {
            entity_form(ui, draft.fields(), "Update password")
        });
        match response.inner.flatten() {
            Some(FormAction::Submit) => profile.submit_change_password(),
            Some(FormAction::Cancel) => profile.cancel_change_password(),
            None if response.closed => profile.cancel_change_password(),
            None => {}
        }
    }

    let mut sign_out = false;
    if profile.is_confirming_logout() {
        match confirm_dialog(ui.ctx(), &AdminProfile::logout_prompt()) {
            Some(ConfirmChoice::Confirm) => sign_out = profile.confirm_logout(),
            Some(ConfirmChoice::Cancel) => profile.cancel_logout(),
            None => {}
        }
    }

    if sign_out {
        state.logout();
    }
}
