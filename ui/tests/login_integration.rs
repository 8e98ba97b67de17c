use chrono::TimeDelta;
use kittest::Queryable as _;
use syc_business::login_state::MISSING_CREDENTIALS;
use syc_business::{AuthState, LoginInput, Route};

use crate::common::TestCtx;

mod common;

/// Tests that the login form is displayed with all expected elements.
#[test]
fn test_login_form_displayed() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("Admin Login").is_some(),
        "Admin Login heading should be displayed"
    );
    assert!(
        harness.query_by_label("Email address").is_some(),
        "Email label should be displayed"
    );
    assert!(
        harness.query_by_label("Remember me").is_some(),
        "Remember me checkbox should be displayed"
    );
    assert!(
        harness.query_by_label("Continue").is_some(),
        "Continue button should be displayed"
    );
    assert!(
        harness.query_by_label("SYC Admin").is_none(),
        "App chrome is hidden before login"
    );
}

/// Tests that empty credentials are rejected with an inline error.
#[test]
fn test_empty_credentials_show_error() {
    let mut ctx = TestCtx::new_app();

    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Continue").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert!(
        ctx.harness().query_by_label(MISSING_CREDENTIALS).is_some(),
        "Missing credentials error should be displayed"
    );
    assert!(!ctx.state().is_authenticated(), "Should stay signed out");
}

/// Tests the full flow: submit, spinner for the login delay, then dashboard.
#[test]
fn test_login_completes_after_delay() {
    let mut ctx = TestCtx::new_app();
    ctx.harness_mut().step();

    {
        let input = ctx.state_mut().ctx.state_mut::<LoginInput>();
        input.email = "admin@sycmobile.com".to_owned();
        input.password = "secret".to_owned();
    }
    ctx.harness_mut().get_by_label("Continue").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert!(
        ctx.state().ctx.state::<AuthState>().status.is_authenticating(),
        "Submit should start authenticating"
    );
    assert!(
        ctx.harness().query_by_label("Signing in...").is_some(),
        "Spinner text should be displayed"
    );

    ctx.advance(TimeDelta::milliseconds(500));
    ctx.harness_mut().step();
    assert!(!ctx.state().is_authenticated(), "Delay has not elapsed yet");

    ctx.advance(TimeDelta::milliseconds(300));
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert!(ctx.state().is_authenticated(), "Login should complete");
    assert_eq!(ctx.state().route(), Route::Dashboard, "Lands on the dashboard");
    assert!(
        ctx.state().ctx.state::<LoginInput>().password.is_empty(),
        "Password is cleared after login"
    );
    assert!(
        ctx.harness().query_by_label("Admin Dashboard").is_some(),
        "Dashboard should be displayed"
    );
}

/// Tests that logout goes through the confirmation dialog and back to login.
#[test]
fn test_logout_from_profile() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Logout").click();
    ctx.harness_mut().run();
    assert!(
        ctx.harness().query_by_label("Log out?").is_some(),
        "Confirmation dialog should be displayed"
    );

    ctx.harness_mut().get_by_label("Yes, log out").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert!(!ctx.state().is_authenticated(), "Should be signed out");
    assert_eq!(ctx.state().route(), Route::Login, "Back on the login route");
    assert!(
        ctx.harness().query_by_label("Admin Login").is_some(),
        "Login form should be displayed"
    );
}
