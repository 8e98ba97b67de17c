use chrono::{DateTime, Utc};
use log::{error, info, warn};
use syc_business::entities::{Accountant, Company, CompanyAccount, EmailAddress, Locksmith, Operator};
use syc_business::management::Tabular;
use syc_business::reports::ReportSuite;
use syc_business::{
    AdminProfile, AuthState, BusinessConfig, Dashboard, EntityModule, LoginInput,
    NotificationCenter, Route, SyncEvent,
};
use syc_states::{StateCtx, Time};

use crate::utils::export::{ExportSink, SystemExportSink};

/// The main application state.
///
/// Note: We manually implement Default because the export sink is a trait
/// object and the config comes from the environment.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Where CSV exports go.
    pub export_sink: Box<dyn ExportSink>,
    /// Copy `Utc::now()` into [`Time`] every frame. Off in tests, which move
    /// the clock by hand.
    pub live_clock: bool,
    /// Status line from the last export or sync failure.
    pub notice: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Ignoring SYC_* overrides: {err}");
            BusinessConfig::default()
        });

        Self::build(config, Utc::now(), Box::new(SystemExportSink), true)
    }
}

impl State {
    /// Frozen clock at `now`, in-memory repositories and the given sink.
    pub fn test(now: DateTime<Utc>, export_sink: Box<dyn ExportSink>) -> Self {
        let config = BusinessConfig {
            remote_sync: false,
            ..BusinessConfig::default()
        };
        Self::build(config, now, export_sink, false)
    }

    fn build(
        config: BusinessConfig,
        now: DateTime<Utc>,
        export_sink: Box<dyn ExportSink>,
        live_clock: bool,
    ) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::new(now));
        ctx.add_state(Route::default());
        ctx.add_state(LoginInput::default());
        ctx.add_state(AuthState::default());
        ctx.add_state(Dashboard::default());
        ctx.add_state(AdminProfile::default());
        ctx.add_state(NotificationCenter::seeded());
        ctx.add_state(ReportSuite::seeded(now.date_naive()));

        ctx.add_state(EntityModule::open(&config, Locksmith::seed()));
        ctx.add_state(EntityModule::open(&config, Operator::seed()));
        ctx.add_state(EntityModule::open(&config, Accountant::seed()));
        ctx.add_state(EntityModule::open(&config, Company::seed()));
        ctx.add_state(EntityModule::open(&config, EmailAddress::seed()));
        ctx.add_state(EntityModule::open(&config, CompanyAccount::seed()));

        ctx.add_state(config);

        Self {
            ctx,
            export_sink,
            live_clock,
            notice: None,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.ctx.state::<Time>().now()
    }

    pub fn route(&self) -> Route {
        *self.ctx.state::<Route>()
    }

    pub fn navigate(&mut self, route: Route) {
        let current = self.ctx.state_mut::<Route>();
        if *current != route {
            info!("Navigate {} -> {}", current.path(), route.path());
            *current = route;
            self.notice = None;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.ctx.state::<AuthState>().is_authenticated()
    }

    /// Per-frame bookkeeping before anything is drawn: advance the clock,
    /// finish a pending login and collect sync results.
    pub fn tick(&mut self) {
        if self.live_clock {
            self.ctx.state_mut::<Time>().set(Utc::now());
        }
        let now = self.now();

        if self.ctx.state_mut::<AuthState>().poll(now) {
            self.ctx.state_mut::<LoginInput>().password.clear();
            if self.route() == Route::Login {
                self.navigate(Route::Dashboard);
            }
        }

        self.ctx.state_mut::<ReportSuite>().set_today(now.date_naive());

        self.drain_sync::<Locksmith>();
        self.drain_sync::<Operator>();
        self.drain_sync::<Accountant>();
        self.drain_sync::<Company>();
        self.drain_sync::<EmailAddress>();
        self.drain_sync::<CompanyAccount>();
    }

    /// Signs out and returns to the login page.
    pub fn logout(&mut self) {
        self.ctx.state_mut::<AuthState>().logout();
        self.navigate(Route::Login);
    }

    fn drain_sync<T: Tabular>(&mut self) {
        for event in self.ctx.state_mut::<EntityModule<T>>().poll_sync() {
            if let SyncEvent::Failed { op, id, error } = event {
                error!("{} sync of {id} ({op:?}) failed: {error}", T::LIST.title);
                self.notice = Some(format!(
                    "Could not sync {} {id}: {error}",
                    T::LIST.entity_label.to_lowercase()
                ));
            }
        }
    }
}
