//! Generic report page body.
//!
//! Every report renders the same way: heading, a toolbar with the report's
//! own filters plus export buttons, the summary strip, the line table and
//! a detail slide-over for the opened line. Actions that need more than the
//! report itself (export, delete) are handed back to the page.

use egui::{Align, Grid, Layout, ScrollArea, Ui};
use syc_business::ExportFormat;
use syc_business::reports::{Report, ReportItem as _};
use ustr::Ustr;

use super::export_buttons::export_buttons;
use super::slide_over::{detail_fields, slide_over};
use super::stat_card::stat_card;
use super::table::{bordered, cell, data_cell, header_cell};

const DELETE_ICON: &str = "🗑";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Export(ExportFormat),
    Delete(Ustr),
}

/// Draws `report`. `toolbar` renders the report's filter controls.
pub fn report_view<R: Report>(
    ui: &mut Ui,
    report: &mut R,
    deletable: bool,
    toolbar: impl FnOnce(&mut Ui, &mut R),
) -> Option<ReportAction> {
    let mut action = None;

    ui.heading(report.title());
    ui.weak(report.description());
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        toolbar(ui, report);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if let Some(format) = export_buttons(ui) {
                action = Some(ReportAction::Export(format));
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for stat in report.summary() {
            stat_card(ui, None, &stat.value, stat.label);
        }
    });
    ui.add_space(8.0);

    if let Some(row_action) = lines(ui, report, deletable) {
        match row_action {
            RowAction::View(id) => report.detail_mut().open(id),
            RowAction::Delete(id) => action = Some(ReportAction::Delete(id)),
        }
    }

    detail(ui, report);

    action
}

enum RowAction {
    View(Ustr),
    Delete(Ustr),
}

fn lines<R: Report>(ui: &mut Ui, report: &R, deletable: bool) -> Option<RowAction> {
    let visible = report.visible();
    if visible.is_empty() {
        ui.weak(report.empty_message());
        return None;
    }

    let columns = report.columns();
    let mut clicked = None;

    bordered(ui, |ui| {
        ScrollArea::horizontal().show(ui, |ui| {
            Grid::new(report.title())
                .num_columns(columns.len() + 1)
                .striped(true)
                .spacing([16.0, 0.0])
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for column in columns {
                        header_cell(ui, |ui| {
                            ui.strong(*column);
                        });
                    }
                    header_cell(ui, |ui| {
                        ui.strong("Actions");
                    });
                    ui.end_row();

                    for item in &visible {
                        let cells = item.cells();
                        for index in 0..columns.len() {
                            data_cell(ui, |ui| cell(ui, cells.get(index)));
                        }
                        data_cell(ui, |ui| {
                            ui.horizontal(|ui| {
                                if ui.button("View").clicked() {
                                    clicked = Some(RowAction::View(item.row_id()));
                                }
                                if deletable
                                    && ui.button(DELETE_ICON).on_hover_text("Delete").clicked()
                                {
                                    clicked = Some(RowAction::Delete(item.row_id()));
                                }
                            });
                        });
                        ui.end_row();
                    }
                });
        });
    });

    clicked
}

fn detail<R: Report>(ui: &Ui, report: &mut R) {
    let Some(item) = report.selected() else {
        // The opened line may have been filtered away.
        if report.detail().is_open() {
            report.detail_mut().close();
        }
        return;
    };
    let heading = item.heading().to_owned();
    let fields = item.details();

    let response = slide_over(ui.ctx(), &heading, |ui| {
        detail_fields(ui, &fields);
        ui.add_space(16.0);
        ui.button("Close").clicked()
    });

    if response.closed || response.inner == Some(true) {
        report.detail_mut().close();
    }
}

#[cfg(test)]
mod report_view_tests {
    use chrono::NaiveDate;
    use egui_kittest::Harness;
    use kittest::Queryable as _;
    use syc_business::reports::company_daily::DailyCompanyReport;

    use super::*;

    struct Fixture {
        report: DailyCompanyReport,
        actions: Vec<ReportAction>,
    }

    fn harness() -> Harness<'static, Fixture> {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        Harness::builder()
            .with_size(egui::vec2(1200.0, 800.0))
            .build_ui_state(
                |ui, fixture: &mut Fixture| {
                    if let Some(action) = report_view(ui, &mut fixture.report, false, |_, _| {}) {
                        fixture.actions.push(action);
                    }
                },
                Fixture {
                    report: DailyCompanyReport::seeded(today),
                    actions: Vec::new(),
                },
            )
    }

    #[test]
    fn test_header_and_summary_render() {
        let mut harness = harness();
        harness.run();

        assert!(harness.query_by_label("Daily company report").is_some(), "title shown");
        assert!(harness.query_by_label("jobs completed").is_some(), "summary stat shown");
        assert!(harness.query_by_label(DELETE_ICON).is_none(), "read-only report");
    }

    #[test]
    fn test_view_opens_and_close_dismisses_detail() {
        let mut harness = harness();
        harness.run();

        harness
            .query_all_by_label("View")
            .next()
            .expect("at least one line")
            .click();
        harness.run();
        assert!(harness.state().report.detail().is_open(), "detail opened");

        harness.get_by_label("Close").click();
        harness.run();
        assert!(!harness.state().report.detail().is_open(), "detail closed");
    }

    #[test]
    fn test_export_click_is_returned() {
        let mut harness = harness();
        harness.run();

        harness.get_by_label("Export PDF").click();
        harness.run();

        assert_eq!(
            harness.state().actions,
            [ReportAction::Export(ExportFormat::Pdf)]
        );
    }
}
