//! Pages module for the application.
//!
//! One function per [`syc_business::Route`]; `app` picks which one runs.

mod dashboard_page;
mod login_page;
mod management_page;
mod notifications_page;
mod profile_page;
mod report_pages;

pub use dashboard_page::dashboard_page;
pub use login_page::login_page;
pub use management_page::management_page;
pub use notifications_page::notifications_page;
pub use profile_page::profile_page;
pub use report_pages::{
    cancellations_page, companies_movement_page, company_daily_page, company_weekly_page,
    locksmith_daily_page, locksmith_weekly_page, operators_page, revenue_page,
};
