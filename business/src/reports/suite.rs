use std::any::Any;

use chrono::NaiveDate;
use syc_states::State;

use super::cancellations::WeeklyCancellationsReport;
use super::company_daily::DailyCompanyReport;
use super::company_weekly::WeeklyCompanyReport;
use super::locksmith_daily::DailyLocksmithReport;
use super::locksmith_weekly::WeeklyLocksmithReport;
use super::movement::{CompanyMovementReport, MovementDirection};
use super::operators::{OperatorMode, OperatorOverviewReport};
use super::revenue::RevenueReport;

/// Every report page, stored as one state.
///
/// Several pages share a report type (companies in/out, the three operator
/// views), so they cannot each be keyed by type in the state context.
#[derive(Debug)]
pub struct ReportSuite {
    pub company_daily: DailyCompanyReport,
    pub company_weekly: WeeklyCompanyReport,
    pub locksmith_daily: DailyLocksmithReport,
    pub locksmith_weekly: WeeklyLocksmithReport,
    pub companies_in: CompanyMovementReport,
    pub companies_out: CompanyMovementReport,
    pub cancellations: WeeklyCancellationsReport,
    pub operators_daily: OperatorOverviewReport,
    pub operators_weekly: OperatorOverviewReport,
    pub operators_monthly: OperatorOverviewReport,
    pub revenue: RevenueReport,
    today: NaiveDate,
}

impl ReportSuite {
    /// Fixture data anchored on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            company_daily: DailyCompanyReport::seeded(today),
            company_weekly: WeeklyCompanyReport::seeded(today),
            locksmith_daily: DailyLocksmithReport::seeded(today),
            locksmith_weekly: WeeklyLocksmithReport::seeded(today),
            companies_in: CompanyMovementReport::seeded(MovementDirection::In, today),
            companies_out: CompanyMovementReport::seeded(MovementDirection::Out, today),
            cancellations: WeeklyCancellationsReport::seeded(today),
            operators_daily: OperatorOverviewReport::seeded(OperatorMode::Daily, today),
            operators_weekly: OperatorOverviewReport::seeded(OperatorMode::Weekly, today),
            operators_monthly: OperatorOverviewReport::seeded(OperatorMode::Monthly, today),
            revenue: RevenueReport::seeded(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Re-anchors the week-ranged reports. Daily reports keep the date the
    /// admin picked.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today == today {
            return;
        }
        self.today = today;
        self.company_weekly.set_today(today);
        self.locksmith_weekly.set_today(today);
        self.companies_in.set_today(today);
        self.companies_out.set_today(today);
        self.cancellations.set_today(today);
    }
}

impl State for ReportSuite {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Report as _;

    #[test]
    fn test_seeded_suite_shows_this_weeks_lines() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let suite = ReportSuite::seeded(today);

        assert!(!suite.company_weekly.visible().is_empty());
        assert!(!suite.companies_in.visible().is_empty());
        assert_eq!(suite.companies_out.direction(), MovementDirection::Out);
        assert_eq!(suite.operators_monthly.mode(), OperatorMode::Monthly);
    }

    #[test]
    fn test_set_today_keeps_picked_daily_date() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let mut suite = ReportSuite::seeded(today);
        let picked = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap();
        suite.company_daily.date = picked;

        let tomorrow = NaiveDate::from_ymd_opt(2025, 12, 11).unwrap();
        suite.set_today(tomorrow);

        assert_eq!(suite.today(), tomorrow);
        assert_eq!(suite.company_daily.date, picked);
    }
}
