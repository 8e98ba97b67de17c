//! Login flow driven by a virtual frame clock.

use chrono::{DateTime, TimeDelta, TimeZone as _, Utc};
use syc_business::login_state::{DEV_TOKEN, LOGIN_DELAY, MISSING_CREDENTIALS};
use syc_business::{AuthState, AuthStatus, LoginInput};
use syc_states::{StateCtx, Time};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 10, 9, 0, 0).unwrap()
}

fn filled() -> LoginInput {
    LoginInput {
        email: "admin@example.com".to_owned(),
        password: "secret".to_owned(),
        remember_me: true,
    }
}

mod auth_status_tests {
    use super::*;

    #[test]
    fn test_default_is_not_authenticated() {
        let status = AuthStatus::default();
        assert!(!status.is_authenticated(), "fresh status is signed out");
        assert!(status.user().is_none());
        assert!(status.token().is_none());
        assert!(status.error().is_none());
    }

    #[test]
    fn test_failed_exposes_message() {
        let status = AuthStatus::Failed("nope".to_owned());
        assert_eq!(status.error(), Some("nope"));
        assert!(!status.is_authenticating());
    }
}

mod submit_tests {
    use super::*;

    #[test]
    fn test_missing_email_fails_with_message() {
        let mut auth = AuthState::default();
        let input = LoginInput {
            email: String::new(),
            ..filled()
        };
        auth.submit(&input, start());

        assert_eq!(auth.status.error(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_whitespace_email_is_kept_as_typed() {
        let mut auth = AuthState::default();
        let input = LoginInput {
            email: " ".to_owned(),
            ..filled()
        };
        auth.submit(&input, start());

        assert!(auth.status.is_authenticating());
        assert!(auth.poll(start() + LOGIN_DELAY));
        assert_eq!(auth.status.user().map(|user| user.email.as_str()), Some(" "));
    }

    #[test]
    fn test_missing_password_fails_with_message() {
        let mut auth = AuthState::default();
        let input = LoginInput {
            password: String::new(),
            ..filled()
        };
        auth.submit(&input, start());

        assert_eq!(auth.status.error(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_login_completes_after_delay() {
        let mut auth = AuthState::default();
        auth.submit(&filled(), start());
        assert!(auth.status.is_authenticating(), "submit starts the call");

        assert!(!auth.poll(start() + TimeDelta::milliseconds(799)));
        assert!(auth.status.is_authenticating(), "still waiting at 799ms");

        assert!(auth.poll(start() + LOGIN_DELAY));
        let user = auth.status.user().unwrap();
        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(auth.status.token(), Some(DEV_TOKEN));

        assert!(!auth.poll(start() + LOGIN_DELAY * 2), "completes only once");
    }

    #[test]
    fn test_resubmit_while_authenticating_is_ignored() {
        let mut auth = AuthState::default();
        auth.submit(&filled(), start());
        auth.submit(&LoginInput::default(), start() + TimeDelta::milliseconds(100));

        assert!(auth.status.is_authenticating(), "empty resubmit must not fail the pending call");
        assert!(auth.poll(start() + LOGIN_DELAY));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut auth = AuthState::default();
        auth.submit(&LoginInput::default(), start());
        auth.submit(&filled(), start());

        assert!(auth.status.is_authenticating());
    }

    #[test]
    fn test_logout_returns_to_signed_out() {
        let mut auth = AuthState::default();
        auth.submit(&filled(), start());
        auth.poll(start() + LOGIN_DELAY);
        auth.logout();

        assert_eq!(auth.status, AuthStatus::NotAuthenticated);
    }
}

mod state_ctx_tests {
    use super::*;

    #[test]
    fn test_login_through_state_ctx_and_time() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::new(start()));
        ctx.add_state(filled());
        ctx.add_state(AuthState::default());

        let now = ctx.state::<Time>().now();
        let input = ctx.state::<LoginInput>().clone();
        ctx.state_mut::<AuthState>().submit(&input, now);

        *ctx.state_mut::<Time>().as_mut() += LOGIN_DELAY;
        let now = ctx.state::<Time>().now();
        assert!(ctx.state_mut::<AuthState>().poll(now));
        assert!(ctx.state::<AuthState>().is_authenticated());
    }
}
