//! Period selectors used by the report toolbars.

use chrono::{Datelike as _, Days, NaiveDate};

use crate::entities::options;

options! {
    /// Week window relative to the current week.
    pub enum WeekRange {
        ThisWeek => "This week",
        LastWeek => "Last week",
        Last4Weeks => "Last 4 weeks",
    }
}

options! {
    pub enum MonthRange {
        ThisMonth => "This month",
        LastMonth => "Last month",
        Last3Months => "Last 3 months",
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// `"Week 49"` for any date inside ISO week 49.
pub fn week_label(date: NaiveDate) -> String {
    format!("Week {}", date.iso_week().week())
}

impl WeekRange {
    /// First and last Monday covered, inclusive.
    pub fn bounds(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let this_week = week_start(today);
        let weeks_back = |weeks: u64| {
            this_week
                .checked_sub_days(Days::new(weeks * 7))
                .unwrap_or(this_week)
        };
        match self {
            Self::ThisWeek => (this_week, this_week),
            Self::LastWeek => (weeks_back(1), weeks_back(1)),
            Self::Last4Weeks => (weeks_back(3), this_week),
        }
    }

    /// Whether the week starting at `week` falls inside the range.
    pub fn contains(self, week: NaiveDate, today: NaiveDate) -> bool {
        let (first, last) = self.bounds(today);
        let week = week_start(week);
        first <= week && week <= last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-12-10 is a Wednesday.
        assert_eq!(week_start(date(2025, 12, 10)), date(2025, 12, 8));
        assert_eq!(week_start(date(2025, 12, 8)), date(2025, 12, 8));
        assert_eq!(week_start(date(2025, 12, 14)), date(2025, 12, 8));
    }

    #[test]
    fn test_week_label_uses_iso_week() {
        assert_eq!(week_label(date(2025, 12, 1)), "Week 49");
    }

    #[test]
    fn test_week_ranges() {
        let today = date(2025, 12, 10);
        let this_week = date(2025, 12, 8);
        let last_week = date(2025, 12, 1);
        let four_back = date(2025, 11, 10);

        assert!(WeekRange::ThisWeek.contains(this_week, today));
        assert!(!WeekRange::ThisWeek.contains(last_week, today));
        assert!(WeekRange::LastWeek.contains(last_week, today));
        assert!(!WeekRange::LastWeek.contains(this_week, today));
        assert!(WeekRange::Last4Weeks.contains(date(2025, 11, 17), today));
        assert!(!WeekRange::Last4Weeks.contains(four_back, today));
    }

    #[test]
    fn test_future_weeks_are_excluded() {
        let today = date(2025, 12, 10);
        assert!(!WeekRange::Last4Weeks.contains(date(2025, 12, 15), today));
    }
}
