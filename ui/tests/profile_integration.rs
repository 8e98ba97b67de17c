use kittest::Queryable as _;
use syc_business::profile::Language;
use syc_business::{AdminProfile, Route};

use crate::common::TestCtx;

mod common;

/// Tests editing the profile through the slide-over.
#[test]
fn test_edit_profile_saves_draft() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Edit profile").click();
    ctx.harness_mut().run();
    assert!(
        ctx.state().ctx.state::<AdminProfile>().is_editing(),
        "Slide-over should open"
    );

    ctx.state_mut()
        .ctx
        .state_mut::<AdminProfile>()
        .draft_mut()
        .expect("editing")
        .name = "Sara Malik".to_owned();
    ctx.harness_mut().get_by_label("Save changes").click();
    ctx.harness_mut().run();

    let profile = ctx.state().ctx.state::<AdminProfile>();
    assert!(!profile.is_editing(), "Slide-over should close");
    assert_eq!(profile.name, "Sara Malik", "Draft applied");
    assert_eq!(profile.initial(), 'S', "Avatar follows the name");
}

/// Tests that cancelling the edit keeps the saved profile.
#[test]
fn test_cancel_edit_discards_draft() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Edit profile").click();
    ctx.harness_mut().run();
    ctx.state_mut()
        .ctx
        .state_mut::<AdminProfile>()
        .draft_mut()
        .expect("editing")
        .name = "Someone Else".to_owned();
    ctx.harness_mut().get_by_label("Cancel").click();
    ctx.harness_mut().run();

    let profile = ctx.state().ctx.state::<AdminProfile>();
    assert!(!profile.is_editing(), "Slide-over should close");
    assert_eq!(profile.name, "Admin User", "Draft discarded");
}

/// Tests that the password slide-over closes on submit and drops the values.
#[test]
fn test_change_password_closes_panel() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Change password").click();
    ctx.harness_mut().run();
    assert!(
        ctx.state().ctx.state::<AdminProfile>().is_changing_password(),
        "Slide-over should open"
    );

    {
        let profile = ctx.state_mut().ctx.state_mut::<AdminProfile>();
        let draft = profile.password_draft_mut().expect("changing password");
        draft.current = "secret".to_owned();
        draft.new = "n3w-secret".to_owned();
        draft.confirm = "n3w-secret".to_owned();
    }
    ctx.harness_mut().get_by_label("Update password").click();
    ctx.harness_mut().run();

    let profile = ctx.state_mut().ctx.state_mut::<AdminProfile>();
    assert!(!profile.is_changing_password(), "Slide-over should close");
    assert!(profile.password_draft_mut().is_none(), "No draft left open");
    assert!(
        ctx.harness().query_by_label("Update password").is_none(),
        "Form is gone"
    );
    assert!(ctx.state().is_authenticated(), "Still signed in");
}

/// Tests that cancelling the password slide-over keeps the session.
#[test]
fn test_cancel_change_password() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Change password").click();
    ctx.harness_mut().run();
    ctx.harness_mut().get_by_label("Cancel").click();
    ctx.harness_mut().run();

    assert!(
        !ctx.state().ctx.state::<AdminProfile>().is_changing_password(),
        "Slide-over should close"
    );
    assert_eq!(ctx.state().route(), Route::Profile, "Still on the profile");
}

/// Tests that cancelling the logout dialog keeps the session.
#[test]
fn test_cancel_logout_keeps_session() {
    let mut ctx = TestCtx::signed_in(Route::Profile);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("Logout").click();
    ctx.harness_mut().run();
    ctx.harness_mut().get_by_label("Cancel").click();
    ctx.harness_mut().run();

    assert!(ctx.state().is_authenticated(), "Still signed in");
    assert_eq!(ctx.state().route(), Route::Profile, "Still on the profile");
    assert_eq!(
        ctx.state().ctx.state::<AdminProfile>().language,
        Language::English,
        "Language untouched"
    );
}
