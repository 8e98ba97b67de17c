//! Companies joining (IN) or leaving (OUT) the platform per week.

use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::{Contribution, Totals};
use super::filters::{WeekRange, week_label, week_start};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::pounds;
use crate::management::form::Options as _;
use crate::management::list::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementDirection {
    In,
    Out,
}

impl MovementDirection {
    fn reason_label(self) -> &'static str {
        match self {
            Self::In => "Reason joined",
            Self::Out => "Reason left/paused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyMovementItem {
    pub id: Ustr,
    pub company_name: String,
    pub city: String,
    pub week_start: NaiveDate,
    pub jobs_in_range: i64,
    pub revenue_in_range: i64,
    pub reason: String,
    pub direction: MovementDirection,
}

impl Contribution for CompanyMovementItem {
    fn jobs(&self) -> i64 {
        self.jobs_in_range
    }

    fn revenue(&self) -> i64 {
        self.revenue_in_range
    }
}

impl ReportItem for CompanyMovementItem {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.company_name
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.company_name),
            Cell::text(&self.city),
            Cell::text(week_label(self.week_start)),
            Cell::Number(self.jobs_in_range),
            Cell::text(pounds(self.revenue_in_range)),
            Cell::text(&self.reason),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new(
                "Week & city",
                format!("{} • {}", week_label(self.week_start), self.city),
            ),
            DetailField::new("Jobs in range", self.jobs_in_range.to_string()),
            DetailField::new("Revenue impact", pounds(self.revenue_in_range)),
            DetailField::new(self.direction.reason_label(), self.reason.clone()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CompanyMovementReport {
    direction: MovementDirection,
    items: Vec<CompanyMovementItem>,
    pub range: WeekRange,
    today: NaiveDate,
    detail: DetailSelection,
}

impl CompanyMovementReport {
    pub fn new(direction: MovementDirection, items: Vec<CompanyMovementItem>, today: NaiveDate) -> Self {
        Self {
            direction,
            items,
            range: WeekRange::ThisWeek,
            today,
            detail: DetailSelection::default(),
        }
    }

    pub fn seeded(direction: MovementDirection, today: NaiveDate) -> Self {
        Self::new(direction, seed(direction, week_start(today)), today)
    }

    pub fn direction(&self) -> MovementDirection {
        self.direction
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.visible())
    }
}

impl Report for CompanyMovementReport {
    type Item = CompanyMovementItem;

    fn title(&self) -> &'static str {
        match self.direction {
            MovementDirection::In => "Weekly companies IN",
            MovementDirection::Out => "Weekly companies OUT",
        }
    }

    fn description(&self) -> &'static str {
        match self.direction {
            MovementDirection::In => "New companies joining SYC Mobile in the selected week range.",
            MovementDirection::Out => "Companies that churned or paused in the selected week range.",
        }
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Company", "City", "Week", "Jobs in range", "Revenue impact", "Reason"]
    }

    fn empty_message(&self) -> &'static str {
        "No company movement for this range."
    }

    fn visible(&self) -> Vec<&CompanyMovementItem> {
        self.items
            .iter()
            .filter(|item| item.direction == self.direction)
            .filter(|item| self.range.contains(item.week_start, self.today))
            .collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        let totals = self.totals();
        vec![
            SummaryStat::new(totals.count.to_string(), "companies"),
            SummaryStat::new(totals.jobs.to_string(), "jobs in range"),
            SummaryStat::new(pounds(totals.revenue), "total revenue impact"),
        ]
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

pub fn seed(direction: MovementDirection, week_start: NaiveDate) -> Vec<CompanyMovementItem> {
    let rows: &[(&str, &str, &str, i64, i64, &str)] = match direction {
        MovementDirection::In => &[
            ("ci-1", "SafeKeys Ltd", "London", 42, 2_450, "New onboarding"),
            ("ci-2", "DoorFix Solutions", "Manchester", 35, 2_090, "Expanded coverage region"),
        ],
        MovementDirection::Out => &[
            ("co-1", "Prime Locks Ltd", "Birmingham", 12, 650, "Paused operations"),
            ("co-2", "QuickFix Doors", "Leeds", 7, 390, "Moved to competitor"),
        ],
    };
    rows.iter()
        .map(|&(id, name, city, jobs, revenue, reason)| CompanyMovementItem {
            id: Ustr::from(id),
            company_name: name.to_owned(),
            city: city.to_owned(),
            week_start,
            jobs_in_range: jobs,
            revenue_in_range: revenue,
            reason: reason.to_owned(),
            direction,
        })
        .collect()
}
