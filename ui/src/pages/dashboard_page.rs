//! Landing page after login: KPI cards and shortcuts into the reports.

use egui::{Frame, RichText, Ui};
use syc_business::Dashboard;
use syc_business::dashboard::{DashboardRange, QUICK_REPORTS};
use syc_business::management::form::Options as _;

use crate::state::State;
use crate::widgets::stat_card;

pub fn dashboard_page(state: &mut State, ui: &mut Ui) {
    let mut navigate = None;
    let dashboard = state.ctx.state_mut::<Dashboard>();

    ui.heading("Admin Dashboard");
    ui.weak("Operational and business performance overview.");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for range in DashboardRange::ALL {
            ui.selectable_value(&mut dashboard.range, *range, range.label());
        }
    });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for card in dashboard.cards() {
            stat_card(ui, Some(card.label), &card.value, card.sub_label);
        }
    });
    ui.add_space(16.0);

    ui.strong("Quick reports");
    ui.horizontal_wrapped(|ui| {
        for quick in &QUICK_REPORTS {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(200.0);
                ui.vertical(|ui| {
                    if ui.link(RichText::new(quick.title).strong()).clicked() {
                        navigate = Some(quick.route);
                    }
                    for item in quick.items {
                        ui.weak(*item);
                    }
                });
            });
        }
    });

    if let Some(route) = navigate {
        state.navigate(route);
    }
}
