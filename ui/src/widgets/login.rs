//! Login widget for admin authentication.
//!
//! Displays a centered form with email, password and remember-me inputs,
//! and a spinner while the simulated login call is in flight.

use egui::{Align, Button, Checkbox, Key, Layout, Response, RichText, TextEdit, Ui};
use syc_business::{AuthState, AuthStatus, LoginInput};
use syc_states::{StateCtx, Time};

use crate::utils::colors::COLOR_RED;

const FORM_WIDTH: f32 = 320.0;

/// Displays the login form, or the loading state during authentication.
pub fn login_widget(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let status = state_ctx.state::<AuthState>().status.clone();

    match status {
        AuthStatus::Authenticating { .. } => show_loading(ui),
        AuthStatus::Failed(error) => show_login_form(state_ctx, ui, Some(&error)),
        AuthStatus::NotAuthenticated | AuthStatus::Authenticated { .. } => {
            show_login_form(state_ctx, ui, None)
        }
    }
}

fn header(ui: &mut Ui) {
    ui.add_space(40.0);
    ui.heading("Admin Login");
    ui.weak("Please enter the admin credentials to get started.");
    ui.add_space(24.0);
}

/// Shows the loading state during authentication.
fn show_loading(ui: &mut Ui) -> Response {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        header(ui);
        ui.spinner();
        ui.label("Signing in...");
    })
    .response
}

/// Shows the login form with optional error message.
fn show_login_form(state_ctx: &mut StateCtx, ui: &mut Ui, error: Option<&str>) -> Response {
    let mut should_login = false;
    let input = state_ctx.state_mut::<LoginInput>();

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            header(ui);

            ui.allocate_ui(egui::vec2(FORM_WIDTH, 0.0), |ui| {
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.label("Email address");
                    ui.add(
                        TextEdit::singleline(&mut input.email)
                            .hint_text("Email address")
                            .desired_width(FORM_WIDTH),
                    );
                    ui.add_space(8.0);

                    ui.label("Password");
                    let password = ui.add(
                        TextEdit::singleline(&mut input.password)
                            .password(true)
                            .hint_text("Password")
                            .desired_width(FORM_WIDTH),
                    );
                    if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        should_login = true;
                    }
                    ui.add_space(8.0);

                    ui.add(Checkbox::new(&mut input.remember_me, "Remember me"));

                    if let Some(err) = error {
                        ui.add_space(8.0);
                        ui.colored_label(COLOR_RED, err);
                    }

                    ui.add_space(16.0);
                    let continue_button = Button::new(RichText::new("Continue").strong())
                        .min_size(egui::vec2(FORM_WIDTH, 32.0));
                    if ui.add(continue_button).clicked() {
                        should_login = true;
                    }
                });
            });
        })
        .response;

    if should_login {
        let now = state_ctx.state::<Time>().now();
        let input = state_ctx.state::<LoginInput>().clone();
        state_ctx.state_mut::<AuthState>().submit(&input, now);
    }

    response
}
