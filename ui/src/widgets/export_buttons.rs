use egui::Ui;
use syc_business::ExportFormat;

/// `Export CSV` / `Export PDF` pair. Returns the format clicked this frame.
pub fn export_buttons(ui: &mut Ui) -> Option<ExportFormat> {
    let mut clicked = None;
    for format in [ExportFormat::Csv, ExportFormat::Pdf] {
        if ui.button(format!("Export {format}")).clicked() {
            clicked = Some(format);
        }
    }
    clicked
}
