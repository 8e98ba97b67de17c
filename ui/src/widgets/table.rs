//! Typora-like table pieces shared by the management lists and reports.
//!
//! Tables are plain `egui::Grid`s wrapped in framed cells; `egui_extras`
//! table rows do not take clicks reliably under `egui_kittest`.

use egui::{Color32, Frame, InnerResponse, Margin, RichText, Stroke, Ui};
use syc_business::management::list::{Badge, Cell};

use crate::utils::colors::tone_color;

/// Border color for Typora-like table style (subtle gray)
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for Typora-like table style (light gray)
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Header cell with background.
pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Outer border around a grid.
pub fn bordered<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, add_contents)
}

/// Pill with the badge's tone.
pub fn badge(ui: &mut Ui, badge: &Badge) {
    let color = tone_color(badge.tone);
    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&badge.label).small().strong().color(color));
        });
}

/// One table value. A missing cell renders blank.
pub fn cell(ui: &mut Ui, cell: Option<&Cell>) {
    match cell {
        Some(Cell::Text(text)) => {
            ui.label(text.as_str());
        }
        Some(Cell::Number(number)) => {
            ui.label(number.to_string());
        }
        Some(Cell::Stacked { primary, secondary }) => {
            ui.vertical(|ui| {
                ui.label(primary.as_str());
                if !secondary.is_empty() {
                    ui.weak(secondary.as_str());
                }
            });
        }
        Some(Cell::Badge(value)) => badge(ui, value),
        None => {
            ui.label("");
        }
    }
}
