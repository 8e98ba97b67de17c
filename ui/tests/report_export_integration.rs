use kittest::Queryable as _;
use syc_business::reports::ReportSuite;
use syc_business::{PDF_UNAVAILABLE, Route};

use crate::common::TestCtx;

mod common;

/// Tests that every report route renders its heading.
#[test]
fn test_report_routes_render() {
    let cases = [
        (Route::CompanyDaily, "Daily company report"),
        (Route::WeeklyCancelled, "Weekly cancellations"),
    ];

    for (route, heading) in cases {
        let mut ctx = TestCtx::signed_in(route);
        ctx.harness_mut().run();
        assert!(
            ctx.harness().query_by_label(heading).is_some(),
            "{heading} should be displayed on {}",
            route.path()
        );
    }
}

/// Tests that a report CSV reaches the sink with the report's rows.
#[test]
fn test_report_csv_export() {
    let mut ctx = TestCtx::signed_in(Route::WeeklyCancelled);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Export CSV").click();
    ctx.harness_mut().run();

    let saved = ctx.exports().saved();
    assert_eq!(saved.len(), 1, "One CSV delivered");
    assert!(
        saved[0].name.starts_with("weekly-cancellations"),
        "File is named after the report: {}",
        saved[0].name
    );
    assert_eq!(saved[0].rows.len(), 4, "Every seeded reason exported");
}

/// Tests that PDF export shows the unavailable notice.
#[test]
fn test_report_pdf_unavailable() {
    let mut ctx = TestCtx::signed_in(Route::CompanyDaily);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Export PDF").click();
    ctx.harness_mut().run();

    assert!(ctx.exports().saved().is_empty(), "Nothing delivered");
    assert!(
        ctx.harness().query_by_label(PDF_UNAVAILABLE).is_some(),
        "PDF notice should be displayed"
    );
}

/// Tests deleting a cancellation reason through the dialog.
#[test]
fn test_delete_cancellation_reason() {
    let mut ctx = TestCtx::signed_in(Route::WeeklyCancelled);
    ctx.harness_mut().run();

    ctx.harness()
        .query_all_by_label("🗑")
        .next()
        .expect("deletable rows")
        .click();
    ctx.harness_mut().run();
    ctx.harness_mut().get_by_label("Delete").click();
    ctx.harness_mut().run();

    let report = &ctx.state().ctx.state::<ReportSuite>().cancellations;
    assert_eq!(report.total(), 18 + 12 + 9, "First reason removed from the total");
}

/// Tests that navigation clears a stale notice.
#[test]
fn test_navigation_clears_notice() {
    let mut ctx = TestCtx::signed_in(Route::CompanyDaily);
    ctx.harness_mut().run();
    ctx.harness_mut().get_by_label("Export PDF").click();
    ctx.harness_mut().run();
    assert!(ctx.state().notice.is_some(), "Notice set by export");

    ctx.harness_mut().get_by_label("Dashboard").click();
    ctx.harness_mut().run();

    assert_eq!(ctx.state().route(), Route::Dashboard, "Sidebar navigates");
    assert!(ctx.state().notice.is_none(), "Notice cleared");
}
