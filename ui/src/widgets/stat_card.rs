use egui::{Frame, RichText, Ui};

/// Boxed figure: an optional label, the value, then a caption.
pub fn stat_card(ui: &mut Ui, label: Option<&str>, value: &str, caption: &str) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            if let Some(label) = label {
                ui.weak(label);
            }
            ui.label(RichText::new(value).size(22.0).strong());
            ui.weak(caption);
        });
    });
}
