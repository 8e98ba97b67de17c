use std::any::Any;

use chrono::{DateTime, NaiveDate, Utc};

use crate::State;

/// Frame clock.
///
/// The app writes the wall clock into it once per frame; tests write whatever
/// instant they need, so anything time-dependent reads from here instead of
/// calling `Utc::now()` directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn today(&self) -> NaiveDate {
        self.virt.date_naive()
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.virt = now;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn test_today_follows_virtual_clock() {
        let mut time = Time::default();
        let instant = Utc.with_ymd_and_hms(2025, 12, 10, 23, 59, 0).unwrap();
        time.set(instant);

        assert_eq!(time.now(), instant);
        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2025, 12, 10).unwrap());
    }

    #[test]
    fn test_as_mut_moves_clock() {
        let mut time = Time::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        *time.as_mut() += chrono::Duration::milliseconds(800);

        assert_eq!(time.as_ref().timestamp_millis() % 1000, 800);
    }
}
