use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::{Contribution, Totals};
use super::filters::{WeekRange, week_label, week_start};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::pounds;
use crate::management::form::Options as _;
use crate::management::list::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyCompanyItem {
    pub id: Ustr,
    pub company_name: String,
    /// Monday of the reported week.
    pub week_start: NaiveDate,
    pub jobs_total: i64,
    pub cancellations: i64,
    pub revenue: i64,
}

impl Contribution for WeeklyCompanyItem {
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

impl ReportItem for WeeklyCompanyItem {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.company_name
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.company_name),
            Cell::text(week_label(self.week_start)),
            Cell::Number(self.jobs_total),
            Cell::Number(self.cancellations),
            Cell::text(pounds(self.revenue)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Week", week_label(self.week_start)),
            DetailField::new("Jobs total", self.jobs_total.to_string()),
            DetailField::new("Cancellations", self.cancellations.to_string()),
            DetailField::new("Revenue", pounds(self.revenue)),
        ]
    }
}

/// Weekly company performance for trend analysis and billing.
#[derive(Debug, Clone)]
pub struct WeeklyCompanyReport {
    items: Vec<WeeklyCompanyItem>,
    pub range: WeekRange,
    today: NaiveDate,
    detail: DetailSelection,
}

impl WeeklyCompanyReport {
    pub fn new(items: Vec<WeeklyCompanyItem>, today: NaiveDate) -> Self {
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

    /// Re-anchors the week range, e.g. after midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.visible())
    }
}

impl Report for WeeklyCompanyReport {
    type Item = WeeklyCompanyItem;

    fn title(&self) -> &'static str {
        "Weekly company report"
    }

    fn description(&self) -> &'static str {
        "Aggregated weekly company performance used for trend analysis and billing."
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Company", "Week", "Jobs total", "Cancellations", "Revenue"]
    }

    fn empty_message(&self) -> &'static str {
        "No company activity for this week."
    }

    fn visible(&self) -> Vec<&WeeklyCompanyItem> {
        self.items
            .iter()
            .filter(|item| self.range.contains(item.week_start, self.today))
            .collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        let totals = self.totals();
        vec![
            SummaryStat::new(totals.jobs.to_string(), "jobs this range"),
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

pub fn seed(week_start: NaiveDate) -> Vec<WeeklyCompanyItem> {
    [
        ("wr-1", "SafeKeys Ltd", 185, 7, 10_450),
        ("wr-2", "DoorFix Solutions", 142, 6, 8_580),
        ("wr-3", "Rapid Locks UK", 61, 4, 4_230),
        ("wr-4", "City Access Services", 28, 2, 1_640),
    ]
    .into_iter()
    .map(|(id, name, jobs_total, cancellations, revenue)| WeeklyCompanyItem {
        id: Ustr::from(id),
        company_name: name.to_owned(),
        week_start,
        jobs_total,
        cancellations,
        revenue,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 3).unwrap()
    }

    #[test]
    fn test_this_week_totals() {
        let report = WeeklyCompanyReport::seeded(today());
        let totals = report.totals();

        assert_eq!(totals.jobs, 416);
        assert_eq!(totals.cancellations, 19);
        assert_eq!(totals.revenue, 24_900);
        assert_eq!(report.visible()[0].cells()[1], Cell::text("Week 49"));
    }

    #[test]
    fn test_last_week_is_empty_for_current_fixtures() {
        let mut report = WeeklyCompanyReport::seeded(today());
        report.range = WeekRange::LastWeek;

        assert!(report.visible().is_empty());
        assert_eq!(report.summary()[2].value, "£0");
    }

    #[test]
    fn test_range_follows_today() {
        let mut report = WeeklyCompanyReport::seeded(today());
        report.set_today(today().checked_add_days(Days::new(7)).unwrap());

        assert!(report.visible().is_empty());
        report.range = WeekRange::LastWeek;
        assert_eq!(report.visible().len(), 4);
        report.range = WeekRange::Last4Weeks;
        assert_eq!(report.visible().len(), 4);
    }

    #[test]
    fn test_export_suffix_names_range() {
        let report = WeeklyCompanyReport::seeded(today());
        assert_eq!(report.export().name, "weekly-company-report-this-week");
    }
}
