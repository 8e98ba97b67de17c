use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::{Contribution, Totals};
use super::filters::{WeekRange, week_label, week_start};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::pounds;
use crate::management::form::Options as _;
use crate::management::list::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyLocksmithItem {
    pub id: Ustr,
    pub locksmith_name: String,
    pub region: String,
    pub week_start: NaiveDate,
    pub jobs_total: i64,
    pub cancellations: i64,
    pub revenue: i64,
    pub avg_rating: f64,
}

impl Contribution for WeeklyLocksmithItem {
    fn jobs(&self) -> i64 {
        self.jobs_total
    }

    fn cancellations(&self) -> i64 {
        self.cancellations
    }

    fn revenue(&self) -> i64 {
        self.revenue
    }
}

impl ReportItem for WeeklyLocksmithItem {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.locksmith_name
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.locksmith_name),
            Cell::text(&self.region),
            Cell::text(week_label(self.week_start)),
            Cell::Number(self.jobs_total),
            Cell::Number(self.cancellations),
            Cell::text(pounds(self.revenue)),
            Cell::text(format!("{:.1}", self.avg_rating)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new(
                "Week & region",
                format!("{} • {}", week_label(self.week_start), self.region),
            ),
            DetailField::new("Jobs total", self.jobs_total.to_string()),
            DetailField::new("Cancellations", self.cancellations.to_string()),
            DetailField::new("Revenue", pounds(self.revenue)),
            DetailField::new("Avg rating", format!("{:.1} / 5", self.avg_rating)),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct WeeklyLocksmithReport {
    items: Vec<WeeklyLocksmithItem>,
    pub range: WeekRange,
    today: NaiveDate,
    detail: DetailSelection,
}

impl WeeklyLocksmithReport {
    pub fn new(items: Vec<WeeklyLocksmithItem>, today: NaiveDate) -> Self {
        Self {
            items,
            range: WeekRange::ThisWeek,
            today,
            detail: DetailSelection::default(),
        }
    }

    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed(week_start(today)), today)
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.visible())
    }
}

impl Report for WeeklyLocksmithReport {
    type Item = WeeklyLocksmithItem;

    fn title(&self) -> &'static str {
        "Weekly locksmith report"
    }

    fn description(&self) -> &'static str {
        "Weekly view of locksmith performance used for QA and payout summaries."
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Locksmith",
            "Region",
            "Week",
            "Jobs total",
            "Cancellations",
            "Revenue",
            "Avg rating",
        ]
    }

    fn empty_message(&self) -> &'static str {
        "No locksmith data for this range."
    }

    fn visible(&self) -> Vec<&WeeklyLocksmithItem> {
        self.items
            .iter()
            .filter(|item| self.range.contains(item.week_start, self.today))
            .collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        let totals = self.totals();
        vec![
            SummaryStat::new(totals.jobs.to_string(), "jobs in range"),
            SummaryStat::new(totals.cancellations.to_string(), "cancellations"),
            SummaryStat::new(pounds(totals.revenue), "total revenue"),
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

pub fn seed(week_start: NaiveDate) -> Vec<WeeklyLocksmithItem> {
    [
        ("wl-1", "John Miller", "London", 86, 4, 4_800, 4.8),
        ("wl-2", "Sarah Collins", "Manchester", 73, 2, 4_250, 4.9),
        ("wl-3", "Adam Brown", "Bristol", 51, 3, 3_010, 4.7),
    ]
    .into_iter()
    .map(
        |(id, name, region, jobs_total, cancellations, revenue, avg_rating)| WeeklyLocksmithItem {
            id: Ustr::from(id),
            locksmith_name: name.to_owned(),
            region: region.to_owned(),
            week_start,
            jobs_total,
            cancellations,
            revenue,
            avg_rating,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_strip() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let report = WeeklyLocksmithReport::seeded(today);

        let values: Vec<_> = report.summary().into_iter().map(|stat| stat.value).collect();
        assert_eq!(values, ["210", "9", "£12,060"]);
    }

    #[test]
    fn test_details_carry_week_and_region() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let report = WeeklyLocksmithReport::seeded(today);

        let details = report.visible()[0].details();
        assert_eq!(details[0].value, "Week 50 • London");
        assert_eq!(details[4].value, "4.8 / 5");
    }
}
