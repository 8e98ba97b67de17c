use kittest::Queryable as _;
use syc_business::notifications::{EMPTY_BODY, EMPTY_TITLE};
use syc_business::{NotificationCenter, Route};

use crate::common::TestCtx;

mod common;

fn notification_count(ctx: &TestCtx<'_>) -> usize {
    ctx.state()
        .ctx
        .state::<NotificationCenter>()
        .crud
        .records()
        .len()
}

/// Tests that the bell in the top bar opens the grouped feed.
#[test]
fn test_bell_opens_notifications() {
    let mut ctx = TestCtx::signed_in(Route::Dashboard);
    ctx.harness_mut().run();

    ctx.harness_mut().get_by_label("🔔").click();
    ctx.harness_mut().run();

    assert_eq!(ctx.state().route(), Route::Notifications, "Bell navigates");
    let harness = ctx.harness();
    assert!(harness.query_by_label("Today").is_some(), "Today group shown");
    assert!(harness.query_by_label("Yesterday").is_some(), "Yesterday group shown");
    assert!(
        harness.query_by_label("Cancellation spike").is_some(),
        "Seeded notification shown"
    );
}

/// Tests that a notification is removed only after confirmation.
#[test]
fn test_delete_notification() {
    let mut ctx = TestCtx::signed_in(Route::Notifications);
    ctx.harness_mut().run();
    let before = notification_count(&ctx);

    ctx.harness()
        .query_all_by_label("🗑")
        .next()
        .expect("a delete button per notification")
        .click();
    ctx.harness_mut().run();

    assert!(
        ctx.harness()
            .query_by_label("Delete this notification?")
            .is_some(),
        "Confirmation dialog should be displayed"
    );
    assert_eq!(notification_count(&ctx), before, "Nothing removed yet");

    ctx.harness_mut().get_by_label("Delete").click();
    ctx.harness_mut().run();

    assert_eq!(notification_count(&ctx), before - 1, "One notification removed");
    assert!(
        ctx.harness().query_by_label("Daily company report ready").is_none(),
        "The first notification is gone"
    );
}

/// Tests the empty state once the feed is cleared.
#[test]
fn test_empty_state() {
    let mut ctx = TestCtx::signed_in(Route::Notifications);
    ctx.state_mut()
        .ctx
        .add_state(NotificationCenter::new(Vec::new()));
    ctx.harness_mut().run();

    assert!(
        ctx.harness().query_by_label(EMPTY_TITLE).is_some(),
        "Empty title should be displayed"
    );
    assert!(
        ctx.harness().query_by_label(EMPTY_BODY).is_some(),
        "Empty body should be displayed"
    );
}
