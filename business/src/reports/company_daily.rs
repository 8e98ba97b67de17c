use chrono::NaiveDate;
use ustr::Ustr;

use super::aggregate::{Contribution, Totals};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::format::pounds;
use crate::management::list::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCompanyItem {
    pub id: Ustr,
    pub company_name: String,
    pub date: NaiveDate,
    pub jobs_completed: i64,
    pub cancellations: i64,
    pub revenue: i64,
    pub avg_response_minutes: u32,
}

impl Contribution for DailyCompanyItem {
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

impl ReportItem for DailyCompanyItem {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.company_name
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.company_name),
            Cell::Number(self.jobs_completed),
            Cell::Number(self.cancellations),
            Cell::text(pounds(self.revenue)),
            Cell::text(format!("{} min", self.avg_response_minutes)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Date", self.date.to_string()),
            DetailField::new("Jobs completed", self.jobs_completed.to_string()),
            DetailField::new("Cancellations", self.cancellations.to_string()),
            DetailField::new("Revenue", pounds(self.revenue)),
            DetailField::new("Avg response", format!("{} min", self.avg_response_minutes)),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct DailyCompanyReport {
    items: Vec<DailyCompanyItem>,
    pub date: NaiveDate,
    detail: DetailSelection,
}

impl DailyCompanyReport {
    pub fn new(items: Vec<DailyCompanyItem>, date: NaiveDate) -> Self {
        Self {
            items,
            date,
            detail: DetailSelection::default(),
        }
    }

    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(seed(today), today)
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.visible())
    }
}

impl Report for DailyCompanyReport {
    type Item = DailyCompanyItem;

    fn title(&self) -> &'static str {
        "Daily company report"
    }

    fn description(&self) -> &'static str {
        "Per-company performance for a specific day, including jobs, cancellations and revenue."
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Company", "Jobs completed", "Cancellations", "Revenue", "Avg response"]
    }

    fn empty_message(&self) -> &'static str {
        "No company activity for this date."
    }

    fn visible(&self) -> Vec<&DailyCompanyItem> {
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

pub fn seed(date: NaiveDate) -> Vec<DailyCompanyItem> {
    [
        ("dr-1", "SafeKeys Ltd", 28, 1, 1650, 23),
        ("dr-2", "DoorFix Solutions", 19, 2, 1180, 27),
        ("dr-3", "Rapid Locks UK", 9, 1, 540, 31),
        ("dr-4", "City Access Services", 4, 0, 230, 29),
    ]
    .into_iter()
    .map(
        |(id, name, jobs_completed, cancellations, revenue, avg_response_minutes)| DailyCompanyItem {
            id: Ustr::from(id),
            company_name: name.to_owned(),
            date,
            jobs_completed,
            cancellations,
            revenue,
            avg_response_minutes,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_seeded_day() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let report = DailyCompanyReport::seeded(today);

        let summary: Vec<_> = report.summary().into_iter().map(|stat| stat.value).collect();
        assert_eq!(summary, ["60", "4", "£3,600"]);
    }

    #[test]
    fn test_only_exact_date_matches() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let mut items = seed(today);
        items[0].date = NaiveDate::from_ymd_opt(2025, 12, 9).unwrap();
        let report = DailyCompanyReport::new(items, today);

        assert_eq!(report.visible().len(), 3);
        assert_eq!(report.totals().jobs, 32);
    }
}
