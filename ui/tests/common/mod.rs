use chrono::{DateTime, TimeDelta, TimeZone as _, Utc};
use egui_kittest::Harness;
use syc_business::{AuthState, LoginInput, Route};
use syc_states::Time;
use syc_ui::SycAdminApp;
use syc_ui::state::State;
use syc_ui::utils::export::MemoryExportSink;

/// Wide enough for table layouts next to the sidebar.
const WINDOW: egui::Vec2 = egui::vec2(1400.0, 900.0);

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 10, 9, 0, 0).unwrap()
}

pub struct TestCtx<'a> {
    harness: Harness<'a, SycAdminApp>,
    exports: MemoryExportSink,
}

impl<'a> TestCtx<'a> {
    /// Signed out, on the login page.
    pub fn new_app() -> Self {
        let exports = MemoryExportSink::default();
        let state = State::test(fixed_now(), Box::new(exports.clone()));
        let app = SycAdminApp::new(state);
        let harness = Harness::builder().with_size(WINDOW).build_eframe(|_| app);

        Self { harness, exports }
    }

    /// Signed in and showing `route`.
    #[allow(unused)]
    pub fn signed_in(route: Route) -> Self {
        let mut ctx = Self::new_app();
        ctx.login("admin@sycmobile.com", "secret");
        ctx.state_mut().navigate(route);
        ctx.harness.step();
        ctx
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, SycAdminApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, SycAdminApp> {
        &self.harness
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    pub fn state_mut(&mut self) -> &mut State {
        self.harness.state_mut().state_mut()
    }

    #[allow(unused)]
    pub fn exports(&self) -> &MemoryExportSink {
        &self.exports
    }

    /// Moves the frozen clock forward.
    pub fn advance(&mut self, delta: TimeDelta) {
        self.state_mut()
            .ctx
            .update::<Time, _>(|time| {
                let next = time.now() + delta;
                time.set(next);
            })
            .unwrap();
    }

    /// Submits credentials through the state and waits out the login delay.
    #[allow(unused)]
    pub fn login(&mut self, email: &str, password: &str) {
        let now = self.state().now();
        let input = LoginInput {
            email: email.to_owned(),
            password: password.to_owned(),
            remember_me: false,
        };
        self.state_mut()
            .ctx
            .state_mut::<AuthState>()
            .submit(&input, now);
        self.advance(TimeDelta::milliseconds(800));
        self.harness.step();
        self.harness.step();
    }
}
