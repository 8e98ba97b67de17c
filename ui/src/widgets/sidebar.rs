//! Navigation tree built from the route table.

use egui::{CollapsingHeader, Ui};
use syc_business::route::{NavItem, SIDEBAR};
use syc_business::Route;

/// Draws the sidebar and returns the route clicked this frame.
pub fn sidebar(ui: &mut Ui, current: Route) -> Option<Route> {
    let mut clicked = None;

    for item in &SIDEBAR {
        match *item {
            NavItem::Link(route) => {
                if nav_link(ui, route, current) {
                    clicked = Some(route);
                }
            }
            NavItem::Section { label, children } => {
                CollapsingHeader::new(label)
                    .default_open(item.contains(current))
                    .show(ui, |ui| {
                        for &route in children {
                            if nav_link(ui, route, current) {
                                clicked = Some(route);
                            }
                        }
                    });
            }
        }
    }

    clicked
}

fn nav_link(ui: &mut Ui, route: Route, current: Route) -> bool {
    ui.selectable_label(route == current, route.label())
        .on_hover_text(route.path())
        .clicked()
}
