use chrono::{DateTime, Utc};
use ustr::Ustr;

/// Issues `{prefix}-{unix millis}` ids.
///
/// Ids never repeat: when the clock has not advanced past the last issued
/// value (same millisecond, or a clock step backwards) the previous value is
/// bumped by one instead.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, prefix: &str, now: DateTime<Utc>) -> Ustr {
        let millis = now.timestamp_millis();
        self.last = if millis > self.last {
            millis
        } else {
            self.last + 1
        };
        Ustr::from(&format!("{prefix}-{}", self.last))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn test_id_carries_prefix_and_millis() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_765_000_000_123).unwrap();
        assert_eq!(ids.next("ls", now).as_str(), "ls-1765000000123");
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_000).unwrap();

        let first = ids.next("co", now);
        let second = ids.next("co", now);

        assert_ne!(first, second);
        assert_eq!(second.as_str(), "co-1001");
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        ids.next("op", Utc.timestamp_millis_opt(5_000).unwrap());
        let after = ids.next("op", Utc.timestamp_millis_opt(4_000).unwrap());
        assert_eq!(after.as_str(), "op-5001");
    }
}
