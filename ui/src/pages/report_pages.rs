//! Report pages. Each one picks its report out of [`ReportSuite`], adds
//! its own filter controls and hands the rest to `report_view`.

use chrono::NaiveDate;
use egui::{ComboBox, ProgressBar, Ui};
use egui_extras::DatePickerButton;
use syc_business::{ExportFormat, ExportTable};
use syc_business::format::percent;
use syc_business::management::crud::Record as _;
use syc_business::management::form::Options;
use syc_business::reports::movement::MovementDirection;
use syc_business::reports::operators::{OperatorMode, OperatorPeriod};
use syc_business::reports::revenue::RevenueDimension;
use syc_business::reports::{Report, ReportSuite};

use crate::state::State;
use crate::utils::export::deliver;
use crate::widgets::{ConfirmChoice, ReportAction, confirm_dialog, report_view};

type PendingExport = Option<(ExportTable, ExportFormat)>;

/// Dropdown over a closed option set. Returns whether the value changed.
fn choice_combo<O: Options>(ui: &mut Ui, id_salt: &str, value: &mut O) -> bool {
    let before = *value;
    ComboBox::from_id_salt(id_salt)
        .selected_text(value.label())
        .show_ui(ui, |ui| {
            for option in O::ALL {
                ui.selectable_value(value, *option, option.label());
            }
        });
    *value != before
}

fn date_picker(ui: &mut Ui, id_salt: &str, date: &mut NaiveDate) {
    ui.add(DatePickerButton::new(date).id_salt(id_salt));
}

/// Draws a read-only report and returns the export it asked for.
fn read_only<R: Report>(
    ui: &mut Ui,
    report: &mut R,
    toolbar: impl FnOnce(&mut Ui, &mut R),
) -> PendingExport {
    match report_view(ui, report, false, toolbar)? {
        ReportAction::Export(format) => Some((report.export(), format)),
        ReportAction::Delete(_) => None,
    }
}

fn finish(state: &mut State, ui: &Ui, export: PendingExport) {
    if let Some((table, format)) = export {
        state.notice = deliver(state.export_sink.as_ref(), ui.ctx(), &table, format);
    }
}

pub fn company_daily_page(state: &mut State, ui: &mut Ui) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let export = read_only(ui, &mut suite.company_daily, |ui, report| {
        date_picker(ui, "company_daily_date", &mut report.date);
    });
    finish(state, ui, export);
}

pub fn company_weekly_page(state: &mut State, ui: &mut Ui) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let export = read_only(ui, &mut suite.company_weekly, |ui, report| {
        choice_combo(ui, "company_weekly_range", &mut report.range);
    });
    finish(state, ui, export);
}

pub fn locksmith_daily_page(state: &mut State, ui: &mut Ui) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let export = read_only(ui, &mut suite.locksmith_daily, |ui, report| {
        date_picker(ui, "locksmith_daily_date", &mut report.date);
    });
    finish(state, ui, export);
}

pub fn locksmith_weekly_page(state: &mut State, ui: &mut Ui) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let export = read_only(ui, &mut suite.locksmith_weekly, |ui, report| {
        choice_combo(ui, "locksmith_weekly_range", &mut report.range);
    });
    finish(state, ui, export);
}

pub fn companies_movement_page(state: &mut State, ui: &mut Ui, direction: MovementDirection) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let report = match direction {
        MovementDirection::In => &mut suite.companies_in,
        MovementDirection::Out => &mut suite.companies_out,
    };
    let export = read_only(ui, report, |ui, report| {
        choice_combo(ui, "companies_movement_range", &mut report.range);
    });
    finish(state, ui, export);
}

pub fn operators_page(state: &mut State, ui: &mut Ui, mode: OperatorMode) {
    let suite = state.ctx.state_mut::<ReportSuite>();
    let report = match mode {
        OperatorMode::Daily => &mut suite.operators_daily,
        OperatorMode::Weekly => &mut suite.operators_weekly,
        OperatorMode::Monthly => &mut suite.operators_monthly,
    };
    let export = read_only(ui, report, |ui, report| {
        let mut period = report.period();
        match &mut period {
            OperatorPeriod::Day(date) => date_picker(ui, "operators_day", date),
            OperatorPeriod::Week(range) => {
                choice_combo(ui, "operators_week", range);
            }
            OperatorPeriod::Month(range) => {
                choice_combo(ui, "operators_month", range);
            }
        }
        report.set_period(period);
    });
    finish(state, ui, export);
}

pub fn cancellations_page(state: &mut State, ui: &mut Ui) {
    let report = &mut state.ctx.state_mut::<ReportSuite>().cancellations;

    let action = report_view(ui, report, true, |ui, report| {
        let mut range = report.range();
        if choice_combo(ui, "cancellations_range", &mut range) {
            report.set_range(range);
        }
    });

    let mut export = None;
    match action {
        Some(ReportAction::Export(format)) => export = Some((report.export(), format)),
        Some(ReportAction::Delete(id)) => {
            report.request_delete(id);
        }
        None => {}
    }

    if let Some(prompt) = report.delete_target().map(|target| target.delete_prompt()) {
        match confirm_dialog(ui.ctx(), &prompt) {
            Some(ConfirmChoice::Confirm) => {
                report.confirm_delete();
            }
            Some(ConfirmChoice::Cancel) => report.cancel_delete(),
            None => {}
        }
    }

    finish(state, ui, export);
}

pub fn revenue_page(state: &mut State, ui: &mut Ui) {
    let report = &mut state.ctx.state_mut::<ReportSuite>().revenue;

    let export = read_only(ui, report, |ui, report| {
        for dimension in RevenueDimension::ALL {
            if ui
                .selectable_label(report.dimension() == *dimension, dimension.label())
                .clicked()
            {
                report.set_dimension(*dimension);
            }
        }
        ui.separator();
        choice_combo(ui, "revenue_range", &mut report.range);
    });

    ui.add_space(16.0);
    ui.strong(report.chart_title());
    if let Some(line) = report.top_contributor_line() {
        ui.weak(line);
    }
    for line in report.visible() {
        ui.horizontal(|ui| {
            ui.label(line.name.as_str());
            let fraction = (line.share / 100.0) as f32;
            ui.add(ProgressBar::new(fraction).text(percent(line.share)));
        });
    }

    finish(state, ui, export);
}
