//! Weekly cancellations by reason. Unlike the other reports its lines can be
//! removed from the view, through the same confirm workflow as the
//! management pages.

use chrono::NaiveDate;
use log::warn;
use ustr::Ustr;

use super::aggregate::share;
use super::filters::{WeekRange, week_start};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::percent;
use crate::management::crud::{ConfirmPrompt, CrudOrchestrator, CrudOutcome, Record};
use crate::management::form::Options as _;
use crate::management::list::Cell;
use crate::repository::InMemoryRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationReason {
    pub id: Ustr,
    pub reason: String,
    pub count: i64,
    pub top_company: String,
    pub top_operator: String,
    pub week_start: NaiveDate,
}

impl Record for CancellationReason {
    type Draft = ();

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.reason
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Remove cancellation reason?",
            format!("This will remove “{}” from this weekly view.", self.reason),
        )
    }
}

/// A reason together with its share of the visible total.
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationLine {
    pub reason: CancellationReason,
    pub share: f64,
}

impl ReportItem for CancellationLine {
    fn row_id(&self) -> Ustr {
        self.reason.id
    }

    fn heading(&self) -> &str {
        &self.reason.reason
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.reason.reason),
            Cell::Number(self.reason.count),
            Cell::text(percent(self.share)),
            Cell::text(&self.reason.top_company),
            Cell::text(&self.reason.top_operator),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Count", self.reason.count.to_string()),
            DetailField::new("Share", percent(self.share)),
            DetailField::new("Top company", self.reason.top_company.clone()),
            DetailField::new("Top operator", self.reason.top_operator.clone()),
        ]
    }
}

pub struct WeeklyCancellationsReport {
    crud: CrudOrchestrator<CancellationReason, InMemoryRepository<CancellationReason>>,
    range: WeekRange,
    today: NaiveDate,
    detail: DetailSelection,
    /// Visible lines for the current range, rebuilt on every change.
    lines: Vec<CancellationLine>,
}

impl std::fmt::Debug for WeeklyCancellationsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeeklyCancellationsReport")
            .field("range", &self.range)
            .field("today", &self.today)
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl WeeklyCancellationsReport {
    pub fn new(reasons: Vec<CancellationReason>, today: NaiveDate) -> Self {
        let mut report = Self {
            crud: CrudOrchestrator::new(InMemoryRepository::new(reasons)),
            range: WeekRange::ThisWeek,
            today,
            detail: DetailSelection::default(),
            lines: Vec::new(),
        };
        report.refresh();
        report
    }

    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed(week_start(today)), today)
    }

    pub fn range(&self) -> WeekRange {
        self.range
    }

    pub fn set_range(&mut self, range: WeekRange) {
        if self.range != range {
            self.range = range;
            self.refresh();
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today != today {
            self.today = today;
            self.refresh();
        }
    }

    /// Sum of counts over the visible reasons.
    pub fn total(&self) -> i64 {
        self.lines.iter().map(|line| line.reason.count).sum()
    }

    /// Closes the detail slide-over, then asks for confirmation.
    pub fn request_delete(&mut self, id: Ustr) -> bool {
        self.detail.close();
        self.crud.request_delete(id)
    }

    pub fn delete_target(&self) -> Option<&CancellationReason> {
        self.crud.delete_target()
    }

    pub fn cancel_delete(&mut self) {
        self.crud.cancel_delete();
    }

    pub fn confirm_delete(&mut self) -> Option<CrudOutcome> {
        let outcome = self.crud.confirm_delete().unwrap_or_else(|err| {
            warn!("Cancellation reason was not removed: {err}");
            None
        });
        self.refresh();
        outcome
    }

    fn refresh(&mut self) {
        let visible: Vec<&CancellationReason> = self
            .crud
            .records()
            .iter()
            .filter(|reason| self.range.contains(reason.week_start, self.today))
            .collect();
        let total: i64 = visible.iter().map(|reason| reason.count).sum();
        self.lines = visible
            .into_iter()
            .map(|reason| CancellationLine {
                share: share(reason.count, total),
                reason: reason.clone(),
            })
            .collect();
    }
}

impl Report for WeeklyCancellationsReport {
    type Item = CancellationLine;

    fn title(&self) -> &'static str {
        "Weekly cancellations"
    }

    fn description(&self) -> &'static str {
        "Breakdown of cancellations by reason to support quality and product improvements."
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Reason", "Count", "Share", "Top company", "Top operator"]
    }

    fn empty_message(&self) -> &'static str {
        "No cancellations recorded for this range."
    }

    fn visible(&self) -> Vec<&CancellationLine> {
        self.lines.iter().collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        vec![SummaryStat::new(
            self.total().to_string(),
            "total cancellations in this range.",
        )]
    }

    fn export_suffix(&self) -> String {
        self.range.label().to_owned()
    }

    fn detail(&self) -> &DetailSelection {
        &self.detail
    }

    fn detail_mut(&mut self) -> &mut DetailSelection {
        &mut self.detail
    }
}

pub fn seed(week_start: NaiveDate) -> Vec<CancellationReason> {
    [
        ("wc-1", "Customer no-show", 23, "SafeKeys Ltd", "Operator 04"),
        ("wc-2", "Quote too high", 18, "DoorFix Solutions", "Operator 02"),
        ("wc-3", "Locksmith delayed", 12, "Rapid Locks UK", "Operator 01"),
        ("wc-4", "Customer resolved themselves", 9, "City Access Services", "Operator 06"),
    ]
    .into_iter()
    .map(|(id, reason, count, company, operator)| CancellationReason {
        id: Ustr::from(id),
        reason: reason.to_owned(),
        count,
        top_company: company.to_owned(),
        top_operator: operator.to_owned(),
        week_start,
    })
    .collect()
}
