use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::mean;
use super::filters::{MonthRange, WeekRange};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::percent;
use crate::management::form::Options as _;
use crate::management::list::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorMode {
    Daily,
    Weekly,
    Monthly,
}

/// Filter control shown in the toolbar; its shape depends on the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPeriod {
    Day(NaiveDate),
    Week(WeekRange),
    Month(MonthRange),
}

impl OperatorPeriod {
    fn default_for(mode: OperatorMode, today: NaiveDate) -> Self {
        match mode {
            OperatorMode::Daily => Self::Day(today),
            OperatorMode::Weekly => Self::Week(WeekRange::default()),
            OperatorMode::Monthly => Self::Month(MonthRange::default()),
        }
    }

    fn label(self, today: NaiveDate) -> String {
        match self {
            Self::Day(date) if date == today => "Today".to_owned(),
            Self::Day(date) => date.to_string(),
            Self::Week(range) => range.label().to_owned(),
            Self::Month(range) => range.label().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorOverviewItem {
    pub id: Ustr,
    pub operator_name: String,
    /// Label of the selected period, e.g. `Today` or `Last week`.
    pub period: String,
    pub tickets_handled: i64,
    pub avg_handle_minutes: f64,
    pub first_response_seconds: u32,
    pub resolution_rate: f64,
}

impl ReportItem for OperatorOverviewItem {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.operator_name
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.operator_name),
            Cell::text(&self.period),
            Cell::Number(self.tickets_handled),
            Cell::text(format!("{:.1} min", self.avg_handle_minutes)),
            Cell::text(format!("{}s", self.first_response_seconds)),
            Cell::text(format!("{}%", self.resolution_rate)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Period", self.period.clone()),
            DetailField::new("Tickets handled", self.tickets_handled.to_string()),
            DetailField::new("Avg handle time", format!("{:.1} min", self.avg_handle_minutes)),
            DetailField::new("First response", format!("{}s", self.first_response_seconds)),
            DetailField::new("Resolution rate", format!("{}%", self.resolution_rate)),
        ]
    }
}

/// Operator performance snapshot.
///
/// The three modes share one data set; the period selector only relabels the
/// `Period` column and the export name.
#[derive(Debug, Clone)]
pub struct OperatorOverviewReport {
    mode: OperatorMode,
    period: OperatorPeriod,
    today: NaiveDate,
    items: Vec<OperatorOverviewItem>,
    detail: DetailSelection,
}

impl OperatorOverviewReport {
    pub fn new(mode: OperatorMode, items: Vec<OperatorOverviewItem>, today: NaiveDate) -> Self {
        let mut report = Self {
            mode,
            period: OperatorPeriod::default_for(mode, today),
            today,
            items,
            detail: DetailSelection::default(),
        };
        report.relabel();
        report
    }

    pub fn seeded(mode: OperatorMode, today: NaiveDate) -> Self {
        Self::new(mode, seed(), today)
    }

    pub fn mode(&self) -> OperatorMode {
        self.mode
    }

    pub fn period(&self) -> OperatorPeriod {
        self.period
    }

    /// Ignores a period whose shape does not match the mode.
    pub fn set_period(&mut self, period: OperatorPeriod) {
        let fits = matches!(
            (self.mode, period),
            (OperatorMode::Daily, OperatorPeriod::Day(_))
                | (OperatorMode::Weekly, OperatorPeriod::Week(_))
                | (OperatorMode::Monthly, OperatorPeriod::Month(_))
        );
        if fits && self.period != period {
            self.period = period;
            self.relabel();
        }
    }

    pub fn tickets_handled(&self) -> i64 {
        self.items.iter().map(|item| item.tickets_handled).sum()
    }

    pub fn avg_resolution_rate(&self) -> f64 {
        mean(self.items.iter().map(|item| item.resolution_rate))
    }

    fn relabel(&mut self) {
        let label = self.period.label(self.today);
        for item in &mut self.items {
            item.period.clone_from(&label);
        }
    }
}

impl Report for OperatorOverviewReport {
    type Item = OperatorOverviewItem;

    fn title(&self) -> &'static str {
        match self.mode {
            OperatorMode::Daily => "Operator overview (daily)",
            OperatorMode::Weekly => "Operator overview (weekly)",
            OperatorMode::Monthly => "Operator overview (monthly)",
        }
    }

    fn description(&self) -> &'static str {
        match self.mode {
            OperatorMode::Daily => "Same-day operator performance for staffing and QA.",
            OperatorMode::Weekly => "Weekly operator trends to support staffing and training.",
            OperatorMode::Monthly => "Monthly operator trends used in performance reviews.",
        }
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Operator",
            "Period",
            "Tickets handled",
            "Avg handle time",
            "First response",
            "Resolution rate",
        ]
    }

    fn empty_message(&self) -> &'static str {
        "No operator activity recorded for this range."
    }

    fn visible(&self) -> Vec<&OperatorOverviewItem> {
        self.items.iter().collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(self.tickets_handled().to_string(), "tickets handled"),
            SummaryStat::new(percent(self.avg_resolution_rate()), "avg resolution rate"),
        ]
    }

    fn export_suffix(&self) -> String {
        match self.period {
            OperatorPeriod::Day(date) => date.to_string(),
            OperatorPeriod::Week(range) => range.label().to_owned(),
            OperatorPeriod::Month(range) => range.label().to_owned(),
        }
    }

    fn detail(&self) -> &DetailSelection {
        &self.detail
    }

    fn detail_mut(&mut self) -> &mut DetailSelection {
        &mut self.detail
    }
}

pub fn seed() -> Vec<OperatorOverviewItem> {
    [
        ("op-1", "Operator 01", 58, 7.4, 42, 92.0),
        ("op-2", "Operator 02", 46, 8.2, 55, 88.0),
        ("op-3", "Operator 03", 39, 9.1, 60, 86.0),
    ]
    .into_iter()
    .map(
        |(id, name, tickets_handled, avg_handle_minutes, first_response_seconds, resolution_rate)| {
            OperatorOverviewItem {
                id: Ustr::from(id),
                operator_name: name.to_owned(),
                period: String::new(),
                tickets_handled,
                avg_handle_minutes,
                first_response_seconds,
                resolution_rate,
            }
        },
    )
    .collect()
}
