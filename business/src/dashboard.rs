use std::any::Any;

use syc_states::State;

use crate::entities::options;
use crate::format::{percent, pounds};
use crate::route::Route;

options! {
    pub enum DashboardRange {
        Last7Days => "Last 7 days",
        Last30Days => "Last 30 days",
        Last90Days => "Last 90 days",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardKpis {
    pub total_jobs: i64,
    pub total_revenue: i64,
    pub cancellation_rate: f64,
    pub companies_in: i64,
    pub companies_out: i64,
}

impl Default for DashboardKpis {
    fn default() -> Self {
        Self {
            total_jobs: 768,
            total_revenue: 15_432,
            cancellation_rate: 4.2,
            companies_in: 21,
            companies_out: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub sub_label: &'static str,
}

/// Shortcut card into a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReport {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub route: Route,
}

pub const QUICK_REPORTS: [QuickReport; 3] = [
    QuickReport {
        title: "Locksmith Reports",
        items: &["Daily locksmith performance", "Weekly locksmith performance"],
        route: Route::DailyLocksmiths,
    },
    QuickReport {
        title: "Companies IN / OUT",
        items: &["Weekly companies joining", "Weekly companies leaving"],
        route: Route::WeeklyCompaniesIn,
    },
    QuickReport {
        title: "Operators & Revenue",
        items: &["Operator overview (daily/weekly/monthly)", "Revenue breakdown"],
        route: Route::DailyOperators,
    },
];

#[derive(Debug, Default, Clone)]
pub struct Dashboard {
    pub range: DashboardRange,
    pub kpis: DashboardKpis,
}

impl Dashboard {
    /// The figures are a fixed snapshot; the range only changes the caption.
    pub fn cards(&self) -> Vec<KpiCard> {
        let kpis = &self.kpis;
        vec![
            KpiCard {
                label: "Total jobs",
                value: kpis.total_jobs.to_string(),
                sub_label: "Completed in range",
            },
            KpiCard {
                label: "Total revenue",
                value: pounds(kpis.total_revenue),
                sub_label: "Across all companies",
            },
            KpiCard {
                label: "Cancellation rate",
                value: percent(kpis.cancellation_rate),
                sub_label: "Of all booked jobs",
            },
            KpiCard {
                label: "Companies IN / OUT",
                value: format!("{} / {}", kpis.companies_in, kpis.companies_out),
                sub_label: "Joined vs. left",
            },
        ]
    }
}

impl State for Dashboard {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
