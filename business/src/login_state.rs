//! Login state and authentication flow.
//!
//! This module tracks:
//! - Email / password / remember-me input
//! - Authentication status (signed out, authenticating, signed in, failed)
//! - The session token handed out on success
//!
//! ## Simulated backend
//!
//! There is no authentication service. A submit with both fields filled
//! enters [`AuthStatus::Authenticating`] and completes once
//! [`LOGIN_DELAY`] has elapsed on the frame clock ([`syc_states::Time`]).
//! The UI calls [`AuthState::poll`] every frame with the current time, so
//! the delay needs no timers or background tasks.

use std::any::Any;

use chrono::{DateTime, TimeDelta, Utc};
use log::info;
use syc_states::State;

/// Shown when either field is empty on submit.
pub const MISSING_CREDENTIALS: &str = "Enter both email and password to continue.";

/// Round-trip time of the simulated login call.
pub const LOGIN_DELAY: TimeDelta = TimeDelta::milliseconds(800);

/// Token handed out by the simulated backend.
pub const DEV_TOKEN: &str = "dev-token";

/// Input state for the login form.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl State for LoginInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Result/status of authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Not authenticated yet, or logged out.
    #[default]
    NotAuthenticated,
    /// Waiting for the simulated call started at `since`.
    Authenticating {
        since: DateTime<Utc>,
        email: String,
        remember: bool,
    },
    Authenticated {
        user: AdminUser,
        token: String,
        remember: bool,
    },
    /// Validation failed; the message is shown under the form.
    Failed(String),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, Self::Authenticating { .. })
    }

    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    /// Starts the login if both fields are filled; otherwise fails with
    /// [`MISSING_CREDENTIALS`]. Ignored while a login is in flight.
    pub fn submit(&mut self, input: &LoginInput, now: DateTime<Utc>) {
        if self.status.is_authenticating() {
            return;
        }

        let email = input.email.as_str();
        if email.is_empty() || input.password.is_empty() {
            info!("Login rejected: missing credentials");
            self.status = AuthStatus::Failed(MISSING_CREDENTIALS.to_owned());
            return;
        }

        info!("Login started for {email}");
        self.status = AuthStatus::Authenticating {
            since: now,
            email: email.to_owned(),
            remember: input.remember_me,
        };
    }

    /// Completes a pending login once [`LOGIN_DELAY`] has passed.
    ///
    /// Returns `true` on the frame the admin becomes authenticated.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        let AuthStatus::Authenticating {
            since,
            email,
            remember,
        } = &self.status
        else {
            return false;
        };
        if now - *since < LOGIN_DELAY {
            return false;
        }

        info!("Login completed for {email}");
        self.status = AuthStatus::Authenticated {
            user: AdminUser {
                id: "admin-user".to_owned(),
                name: "Admin".to_owned(),
                email: email.clone(),
            },
            token: DEV_TOKEN.to_owned(),
            remember: *remember,
        };
        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.status.user() {
            info!("Logged out {}", user.email);
        }
        self.status = AuthStatus::NotAuthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }
}

impl State for AuthState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
