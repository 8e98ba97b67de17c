use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::{Contribution, Totals};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::pounds;
use crate::management::list::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyLocksmithItem {
    pub id: Ustr,
    pub locksmith_name: String,
    pub region: String,
    pub date: NaiveDate,
    pub jobs_completed: i64,
    pub cancellations: i64,
    pub revenue: i64,
    pub avg_response_minutes: u32,
    pub avg_rating: f64,
}

impl Contribution for DailyLocksmithItem {
    fn jobs(&self) -> i64 {
        self.jobs_completed
    }

    fn cancellations(&self) -> i64 {
        self.cancellations
    }

    fn revenue(&self) -> i64 {
        self.revenue
    }
}

impl ReportItem for DailyLocksmithItem {
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
            Cell::Number(self.jobs_completed),
            Cell::Number(self.cancellations),
            Cell::text(pounds(self.revenue)),
            Cell::text(format!("{} min", self.avg_response_minutes)),
            Cell::text(format!("{:.1}", self.avg_rating)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Date & region", format!("{} • {}", self.date, self.region)),
            DetailField::new("Jobs completed", self.jobs_completed.to_string()),
            DetailField::new("Cancellations", self.cancellations.to_string()),
            DetailField::new("Revenue", pounds(self.revenue)),
            DetailField::new("Avg response", format!("{} min", self.avg_response_minutes)),
            DetailField::new("Avg rating", format!("{:.1} / 5", self.avg_rating)),
        ]
    }
}

/// Per-locksmith performance for one day.
#[derive(Debug, Clone)]
pub struct DailyLocksmithReport {
    items: Vec<DailyLocksmithItem>,
    pub date: NaiveDate,
    detail: DetailSelection,
}

impl DailyLocksmithReport {
    pub fn new(items: Vec<DailyLocksmithItem>, date: NaiveDate) -> Self {
        Self {
            items,
            date,
            detail: DetailSelection::default(),
        }
    }

    /// Fixture lines dated `today`, filtered to `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed(today), today)
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.visible())
    }
}

impl Report for DailyLocksmithReport {
    type Item = DailyLocksmithItem;

    fn title(&self) -> &'static str {
        "Daily locksmith report"
    }

    fn description(&self) -> &'static str {
        "Per-locksmith performance for a given day, used for QA and payouts."
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Locksmith",
            "Region",
            "Jobs completed",
            "Cancellations",
            "Revenue",
            "Avg response",
            "Rating",
        ]
    }

    fn empty_message(&self) -> &'static str {
        "No locksmith activity for this date."
    }

    fn visible(&self) -> Vec<&DailyLocksmithItem> {
        self.items.iter().filter(|item| item.date == self.date).collect()
    }

    fn summary(&self) -> Vec<SummaryStat> {
        let totals = self.totals();
        vec![
            SummaryStat::new(totals.jobs.to_string(), "jobs completed"),
            SummaryStat::new(totals.cancellations.to_string(), "cancellations"),
            SummaryStat::new(pounds(totals.revenue), "total revenue"),
        ]
    }

    fn export_suffix(&self) -> String {
        self.date.to_string()
    }

    fn detail(&self) -> &DetailSelection {
        &self.detail
    }

    fn detail_mut(&mut self) -> &mut DetailSelection {
        &mut self.detail
    }
}

pub fn seed(date: NaiveDate) -> Vec<DailyLocksmithItem> {
    [
        ("dl-1", "John Miller", "London", 18, 1, 980, 21, 4.8),
        ("dl-2", "Sarah Collins", "Manchester", 15, 0, 820, 24, 4.9),
        ("dl-3", "Adam Brown", "Bristol", 11, 2, 610, 27, 4.6),
    ]
    .into_iter()
    .map(
        |(id, name, region, jobs_completed, cancellations, revenue, avg_response_minutes, avg_rating)| {
            DailyLocksmithItem {
                id: Ustr::from(id),
                locksmith_name: name.to_owned(),
                region: region.to_owned(),
                date,
                jobs_completed,
                cancellations,
                revenue,
                avg_response_minutes,
                avg_rating,
            }
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
    }

    #[test]
    fn test_seeded_day_totals() {
        let report = DailyLocksmithReport::seeded(today());
        let totals = report.totals();

        assert_eq!(totals.jobs, 44);
        assert_eq!(totals.cancellations, 3);
        assert_eq!(totals.revenue, 2410);
        assert_eq!(report.summary()[2].value, "£2,410");
    }

    #[test]
    fn test_other_date_is_empty() {
        let mut report = DailyLocksmithReport::seeded(today());
        report.date = today().checked_sub_days(Days::new(1)).unwrap();

        assert!(report.visible().is_empty());
        assert_eq!(report.totals(), Totals::default());
        assert_eq!(report.empty_message(), "No locksmith activity for this date.");
    }

    #[test]
    fn test_export_includes_date_and_rows() {
        let report = DailyLocksmithReport::seeded(today());
        let export = report.export();

        assert_eq!(export.name, "daily-locksmith-report-2025-12-10");
        assert_eq!(export.rows.len(), 3);
        assert_eq!(
            export.rows[0],
            ["John Miller", "London", "18", "1", "£980", "21 min", "4.8"]
        );
    }

    #[test]
    fn test_detail_selection() {
        let mut report = DailyLocksmithReport::seeded(today());
        report.detail_mut().open(Ustr::from("dl-2"));

        let selected = report.selected().unwrap();
        assert_eq!(selected.heading(), "Sarah Collins");
        assert_eq!(selected.details()[5].value, "4.9 / 5");

        report.detail_mut().close();
        assert!(report.selected().is_none());
    }
}
