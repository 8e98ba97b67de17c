use std::time::Duration;

use egui::{Align, Layout, RichText};
use syc_business::entities::{Accountant, Company, CompanyAccount, EmailAddress, Locksmith, Operator};
use syc_business::reports::movement::MovementDirection;
use syc_business::reports::operators::OperatorMode;
use syc_business::{AdminProfile, AuthState, Route};

use crate::{pages, state::State, widgets};

/// Repaint cadence while a login is in flight, so the delay elapses
/// without user input.
const AUTH_POLL: Duration = Duration::from_millis(100);

pub struct SycAdminApp {
    state: State,
}

impl SycAdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for SycAdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        if !self.state.is_authenticated() {
            egui::CentralPanel::default().show(ctx, |ui| {
                pages::login_page(&mut self.state, ui);
            });
            if self.state.ctx.state::<AuthState>().status.is_authenticating() {
                ctx.request_repaint_after(AUTH_POLL);
            }
            return;
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            top_bar(&mut self.state, ui);
        });

        if let Some(notice) = &self.state.notice {
            egui::TopBottomPanel::bottom("notice_panel").show(ctx, |ui| {
                ui.label(notice.as_str());
            });
        }

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(route) = widgets::sidebar(ui, self.state.route()) {
                        self.state.navigate(route);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                route_page(&mut self.state, ui);
            });
        });
    }
}

fn top_bar(state: &mut State, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("SYC Admin").strong().size(18.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let name = state.ctx.state::<AdminProfile>().name.clone();
            if ui.button(name).clicked() {
                state.navigate(Route::Profile);
            }
            if ui
                .button("🔔")
                .on_hover_text(Route::Notifications.label())
                .clicked()
            {
                state.navigate(Route::Notifications);
            }
        });
    });
}

fn route_page(state: &mut State, ui: &mut egui::Ui) {
    match state.route() {
        // Signed in already; the login route has nothing left to show.
        Route::Login => {
            state.navigate(Route::Dashboard);
            pages::dashboard_page(state, ui);
        }
        Route::Dashboard => pages::dashboard_page(state, ui),
        Route::Notifications => pages::notifications_page(state, ui),

        Route::CompanyList => pages::management_page::<CompanyAccount>(state, ui),
        Route::CompanyDaily => pages::company_daily_page(state, ui),
        Route::CompanyWeekly => pages::company_weekly_page(state, ui),

        Route::DailyLocksmiths => pages::locksmith_daily_page(state, ui),
        Route::WeeklyLocksmiths => pages::locksmith_weekly_page(state, ui),
        Route::WeeklyCompaniesIn => pages::companies_movement_page(state, ui, MovementDirection::In),
        Route::WeeklyCompaniesOut => {
            pages::companies_movement_page(state, ui, MovementDirection::Out);
        }
        Route::WeeklyCancelled => pages::cancellations_page(state, ui),
        Route::DailyOperators => pages::operators_page(state, ui, OperatorMode::Daily),
        Route::WeeklyOperators => pages::operators_page(state, ui, OperatorMode::Weekly),
        Route::MonthlyOperators => pages::operators_page(state, ui, OperatorMode::Monthly),
        Route::Revenue => pages::revenue_page(state, ui),

        Route::Locksmiths => pages::management_page::<Locksmith>(state, ui),
        Route::Operators => pages::management_page::<Operator>(state, ui),
        Route::Accountants => pages::management_page::<Accountant>(state, ui),
        Route::Companies => pages::management_page::<Company>(state, ui),
        Route::EmailAddresses => pages::management_page::<EmailAddress>(state, ui),

        Route::Profile => pages::profile_page(state, ui),
    }
}
