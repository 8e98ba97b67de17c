//! Delivery of export tables to the platform.
//!
//! Behind a trait so tests can capture exports instead of opening native
//! dialogs.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: CSV is saved through an `rfd` save dialog.
//! - **Web (WASM)**: CSV is copied to the clipboard.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use syc_business::{ExportFormat, ExportTable, PDF_UNAVAILABLE};

/// Receives CSV exports.
pub trait ExportSink {
    /// Delivers the CSV and returns the status line to show, or `None` when
    /// the user backed out.
    fn save_csv(&self, ctx: &egui::Context, table: &ExportTable) -> Option<String>;
}

/// Saves through the platform: a file dialog natively, the clipboard on web.
#[derive(Debug, Default)]
pub struct SystemExportSink;

impl ExportSink for SystemExportSink {
    #[cfg(not(target_arch = "wasm32"))]
    fn save_csv(&self, _ctx: &egui::Context, table: &ExportTable) -> Option<String> {
        use rfd::FileDialog;

        let file_name = table.file_name(ExportFormat::Csv);
        let path = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(&file_name)
            .set_title("Export CSV")
            .save_file()?;

        match table.write(ExportFormat::Csv, &path) {
            Ok(()) => Some(format!("Saved {}", path.display())),
            Err(err) => {
                log::error!("CSV export failed: {err}");
                Some(err.to_string())
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn save_csv(&self, ctx: &egui::Context, table: &ExportTable) -> Option<String> {
        ctx.copy_text(table.to_csv());
        Some(format!("Copied {} to the clipboard", table.file_name(ExportFormat::Csv)))
    }
}

/// Keeps every export in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryExportSink {
    saved: Rc<RefCell<Vec<ExportTable>>>,
}

impl MemoryExportSink {
    pub fn saved(&self) -> Vec<ExportTable> {
        self.saved.borrow().clone()
    }
}

impl ExportSink for MemoryExportSink {
    fn save_csv(&self, _ctx: &egui::Context, table: &ExportTable) -> Option<String> {
        self.saved.borrow_mut().push(table.clone());
        Some(format!("Saved {}", table.file_name(ExportFormat::Csv)))
    }
}

/// Runs one export and returns the status line for it.
pub fn deliver(
    sink: &dyn ExportSink,
    ctx: &egui::Context,
    table: &ExportTable,
    format: ExportFormat,
) -> Option<String> {
    match table.render(format) {
        Ok(_) => sink.save_csv(ctx, table),
        Err(err) => {
            info!("{} skipped: {err}", table.file_name(format));
            Some(PDF_UNAVAILABLE.to_owned())
        }
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;

    fn table() -> ExportTable {
        let mut table = ExportTable::new("Locksmiths list", &["Name", "City"]);
        table.push_row(["Ali", "Leeds"]);
        table
    }

    #[test]
    fn test_csv_reaches_the_sink() {
        let sink = MemoryExportSink::default();
        let ctx = egui::Context::default();

        let status = deliver(&sink, &ctx, &table(), ExportFormat::Csv);

        assert_eq!(status.as_deref(), Some("Saved locksmiths-list.csv"));
        assert_eq!(sink.saved().len(), 1, "one export recorded");
    }

    #[test]
    fn test_pdf_reports_unavailable() {
        let sink = MemoryExportSink::default();
        let ctx = egui::Context::default();

        let status = deliver(&sink, &ctx, &table(), ExportFormat::Pdf);

        assert_eq!(status.as_deref(), Some(PDF_UNAVAILABLE));
        assert!(sink.saved().is_empty(), "PDF never reaches the sink");
    }
}
