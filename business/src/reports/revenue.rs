//! Revenue breakdown by company, locksmith or operator.

use ustr::Ustr;

use super::aggregate::{Contribution, Totals, round2, share};
use super::{DetailField, DetailSelection, Report, ReportItem, SummaryStat};
use crate::entities::options;
use crate::format::{percent, pounds, pounds_pence};
use crate::management::form::Options as _;
use crate::management::list::Cell;

options! {
    pub enum RevenueDimension {
        Company => "By Company",
        Locksmith => "By Locksmith",
        Operator => "By Operator",
    }
}

options! {
    pub enum RevenueRange {
        ThisWeek => "This week",
        ThisMonth => "This month",
        Last3Months => "Last 3 months",
    }
}

impl RevenueDimension {
    /// `Company`, `Locksmith` or `Operator`.
    pub fn entity_label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Locksmith => "Locksmith",
            Self::Operator => "Operator",
        }
    }
}

/// Raw fixture figures for one contributor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueEntry {
    pub id: Ustr,
    pub name: String,
    pub jobs: i64,
    pub revenue: i64,
}

impl Contribution for RevenueEntry {
    fn jobs(&self) -> i64 {
        self.jobs
    }

    fn revenue(&self) -> i64 {
        self.revenue
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueLine {
    pub id: Ustr,
    pub name: String,
    /// `Company: SafeKeys Ltd`.
    pub heading: String,
    pub jobs: i64,
    pub revenue: i64,
    pub avg_per_job: f64,
    pub share: f64,
}

impl ReportItem for RevenueLine {
    fn row_id(&self) -> Ustr {
        self.id
    }

    fn heading(&self) -> &str {
        &self.heading
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::Number(self.jobs),
            Cell::text(pounds(self.revenue)),
            Cell::text(pounds_pence(self.avg_per_job)),
            Cell::text(percent(self.share)),
        ]
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("Jobs", self.jobs.to_string()),
            DetailField::new("Total revenue", pounds(self.revenue)),
            DetailField::new("Avg per job", pounds_pence(self.avg_per_job)),
            DetailField::new("Revenue share", percent(self.share)),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RevenueReport {
    companies: Vec<RevenueEntry>,
    locksmiths: Vec<RevenueEntry>,
    operators: Vec<RevenueEntry>,
    dimension: RevenueDimension,
    /// Presentational only: the fixtures carry no dates.
    pub range: RevenueRange,
    lines: Vec<RevenueLine>,
    detail: DetailSelection,
}

impl RevenueReport {
    pub fn new(
        companies: Vec<RevenueEntry>,
        locksmiths: Vec<RevenueEntry>,
        operators: Vec<RevenueEntry>,
    ) -> Self {
        let mut report = Self {
            companies,
            locksmiths,
            operators,
            dimension: RevenueDimension::Company,
            range: RevenueRange::ThisWeek,
            lines: Vec::new(),
            detail: DetailSelection::default(),
        };
        report.refresh();
        report
    }

    pub fn seeded() -> Self {
        Self::new(
            entries(&[
                ("c-1", "SafeKeys Ltd", 142, 8_250),
                ("c-2", "DoorFix Solutions", 118, 6_970),
                ("c-3", "Rapid Locks UK", 91, 5_240),
                ("c-4", "City Access Services", 65, 3_550),
            ]),
            entries(&[
                ("l-1", "John Miller", 76, 4_320),
                ("l-2", "Sarah Collins", 69, 4_110),
                ("l-3", "Adam Brown", 52, 2_930),
            ]),
            entries(&[
                ("o-1", "Operator 01", 102, 5_850),
                ("o-2", "Operator 02", 88, 5_040),
                ("o-3", "Operator 03", 67, 3_830),
            ]),
        )
    }

    pub fn dimension(&self) -> RevenueDimension {
        self.dimension
    }

    /// Switching dimension also closes the detail slide-over, since the
    /// selected line no longer exists.
    pub fn set_dimension(&mut self, dimension: RevenueDimension) {
        if self.dimension != dimension {
            self.dimension = dimension;
            self.detail.close();
            self.refresh();
        }
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.entries())
    }

    /// Line with the highest revenue.
    pub fn top(&self) -> Option<&RevenueLine> {
        self.lines.iter().max_by_key(|line| line.revenue)
    }

    /// `SafeKeys Ltd contributes 34.4% of revenue in this view.`
    pub fn top_contributor_line(&self) -> Option<String> {
        self.top().map(|line| {
            format!(
                "{} contributes {} of revenue in this view.",
                line.name,
                percent(line.share)
            )
        })
    }

    /// `Top company by revenue`.
    pub fn chart_title(&self) -> String {
        format!("Top {} by revenue", self.dimension.entity_label().to_lowercase())
    }

    fn entries(&self) -> &[RevenueEntry] {
        match self.dimension {
            RevenueDimension::Company => &self.companies,
            RevenueDimension::Locksmith => &self.locksmiths,
            RevenueDimension::Operator => &self.operators,
        }
    }

    fn refresh(&mut self) {
        let total = self.totals().revenue;
        let entity = self.dimension.entity_label();
        self.lines = self
            .entries()
            .iter()
            .map(|entry| RevenueLine {
                id: entry.id,
                name: entry.name.clone(),
                heading: format!("{entity}: {}", entry.name),
                jobs: entry.jobs,
                revenue: entry.revenue,
                avg_per_job: Totals::of([entry]).revenue_per_job(),
                share: share(entry.revenue, total),
            })
            .collect();
    }
}

impl Report for RevenueReport {
    type Item = RevenueLine;

    fn title(&self) -> &'static str {
        match self.dimension {
            RevenueDimension::Company => "Revenue by company",
            RevenueDimension::Locksmith => "Revenue by locksmith",
            RevenueDimension::Operator => "Revenue by operator",
        }
    }

    fn description(&self) -> &'static str {
        "Breakdown of completed jobs and revenue for payouts and finance exports."
    }

    fn columns(&self) -> &'static [&'static str] {
        match self.dimension {
            RevenueDimension::Company => &["Company", "Jobs", "Revenue", "Avg / job", "Share"],
            RevenueDimension::Locksmith => &["Locksmith", "Jobs", "Revenue", "Avg / job", "Share"],
            RevenueDimension::Operator => &["Operator", "Jobs", "Revenue", "Avg / job", "Share"],
        }
    }

    fn empty_message(&self) -> &'static str {
        "No revenue data for this selection yet."
    }

    fn visible(&self) -> Vec<&RevenueLine> {
        self.lines.iter().collect()
    }

    /// Rendered as stat cards rather than a summary strip.
    fn summary(&self) -> Vec<SummaryStat> {
        let totals = self.totals();
        vec![
            SummaryStat::new(pounds(totals.revenue), "Total revenue"),
            SummaryStat::new(totals.jobs.to_string(), "Total jobs"),
            SummaryStat::new(
                pounds_pence(round2(totals.revenue_per_job())),
                "Average revenue per job",
            ),
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

fn entries(rows: &[(&str, &str, i64, i64)]) -> Vec<RevenueEntry> {
    rows.iter()
        .map(|&(id, name, jobs, revenue)| RevenueEntry {
            id: Ustr::from(id),
            name: name.to_owned(),
            jobs,
            revenue,
        })
        .collect()
}
