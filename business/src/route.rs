//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display
//! and the sidebar tree built from it.

use serde::{Deserialize, Serialize};
use std::any::Any;
use syc_states::State;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Login page - shown whenever the admin is not authenticated
    #[default]
    Login,
    Dashboard,
    Notifications,

    // Company reports
    CompanyList,
    CompanyDaily,
    CompanyWeekly,

    // Admin reports
    DailyLocksmiths,
    WeeklyLocksmiths,
    WeeklyCompaniesIn,
    WeeklyCompaniesOut,
    WeeklyCancelled,
    DailyOperators,
    WeeklyOperators,
    MonthlyOperators,
    Revenue,

    // Management
    Locksmiths,
    Operators,
    Accountants,
    Companies,
    EmailAddresses,

    Profile,
}

impl Route {
    pub const ALL: [Self; 21] = [
        Self::Login,
        Self::Dashboard,
        Self::Notifications,
        Self::CompanyList,
        Self::CompanyDaily,
        Self::CompanyWeekly,
        Self::DailyLocksmiths,
        Self::WeeklyLocksmiths,
        Self::WeeklyCompaniesIn,
        Self::WeeklyCompaniesOut,
        Self::WeeklyCancelled,
        Self::DailyOperators,
        Self::WeeklyOperators,
        Self::MonthlyOperators,
        Self::Revenue,
        Self::Locksmiths,
        Self::Operators,
        Self::Accountants,
        Self::Companies,
        Self::EmailAddresses,
        Self::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Notifications => "/notifications",
            Self::CompanyList => "/company/list",
            Self::CompanyDaily => "/company/daily",
            Self::CompanyWeekly => "/company/weekly",
            Self::DailyLocksmiths => "/reports/daily-locksmiths",
            Self::WeeklyLocksmiths => "/reports/weekly-locksmiths",
            Self::WeeklyCompaniesIn => "/reports/weekly-companies-in",
            Self::WeeklyCompaniesOut => "/reports/weekly-companies-out",
            Self::WeeklyCancelled => "/reports/weekly-cancelled",
            Self::DailyOperators => "/reports/daily-operators",
            Self::WeeklyOperators => "/reports/weekly-operators",
            Self::MonthlyOperators => "/reports/monthly-operators",
            Self::Revenue => "/reports/locksmith-revenue",
            Self::Locksmiths => "/management/view-locksmiths",
            Self::Operators => "/management/view-operators",
            Self::Accountants => "/management/view-accountants",
            Self::Companies => "/management/companies",
            Self::EmailAddresses => "/management/email-addresses",
            Self::Profile => "/profile",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Notifications => "Notifications",
            Self::CompanyList => "Company List",
            Self::CompanyDaily => "Daily Company Report",
            Self::CompanyWeekly => "Weekly Company Report",
            Self::DailyLocksmiths => "Daily Locksmith Report",
            Self::WeeklyLocksmiths => "Weekly Locksmith Report",
            Self::WeeklyCompaniesIn => "Companies IN (Weekly)",
            Self::WeeklyCompaniesOut => "Companies OUT (Weekly)",
            Self::WeeklyCancelled => "Weekly Cancellations",
            Self::DailyOperators => "Operator Overview (Daily)",
            Self::WeeklyOperators => "Operator Overview (Weekly)",
            Self::MonthlyOperators => "Operator Overview (Monthly)",
            Self::Revenue => "Revenue Reports",
            Self::Locksmiths => "Locksmiths",
            Self::Operators => "Operators",
            Self::Accountants => "Accountants",
            Self::Companies => "Companies",
            Self::EmailAddresses => "Email Addresses",
            Self::Profile => "Admin Profile",
        }
    }

    /// Exact path lookup. `/` maps to the dashboard.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Self::Dashboard);
        }
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Like [`Route::from_path`] but unknown paths land on the dashboard.
    pub fn resolve(path: &str) -> Self {
        Self::from_path(path).unwrap_or(Self::Dashboard)
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One entry of the sidebar tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(Route),
    Section {
        label: &'static str,
        children: &'static [Route],
    },
}

impl NavItem {
    pub fn contains(&self, route: Route) -> bool {
        match self {
            Self::Link(link) => *link == route,
            Self::Section { children, .. } => children.contains(&route),
        }
    }
}

pub const SIDEBAR: [NavItem; 5] = [
    NavItem::Link(Route::Dashboard),
    NavItem::Section {
        label: "Reports",
        children: &[
            Route::DailyLocksmiths,
            Route::WeeklyLocksmiths,
            Route::WeeklyCompaniesIn,
            Route::WeeklyCompaniesOut,
            Route::WeeklyCancelled,
            Route::DailyOperators,
            Route::WeeklyOperators,
            Route::MonthlyOperators,
            Route::Revenue,
        ],
    },
    NavItem::Section {
        label: "Company Reports",
        children: &[Route::CompanyList, Route::CompanyDaily, Route::CompanyWeekly],
    },
    NavItem::Section {
        label: "Management",
        children: &[
            Route::Locksmiths,
            Route::Operators,
            Route::Accountants,
            Route::Companies,
            Route::EmailAddresses,
        ],
    },
    NavItem::Link(Route::Profile),
];
