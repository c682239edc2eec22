use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use chrono::Utc;

/// source of wall-clock time in nanoseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_nanos(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> u64 {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or_default()
    }
}

/// Timestamp ids. Never hands out the same id twice: when the clock did not
/// move since the last call the next id is the last one plus one.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> String {
        let now = self.clock.now_nanos();
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        now.max(prev.saturating_add(1)).to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod test {

    use super::{Clock, IdGenerator, SystemClock};

    struct FrozenClock(u64);

    impl Clock for FrozenClock {
        fn now_nanos(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_frozen_clock_still_increases() {
        let ids = IdGenerator::new(FrozenClock(1_700_000_000_000_000_000));
        assert_eq!(ids.next_id(), "1700000000000000000");
        assert_eq!(ids.next_id(), "1700000000000000001");
        assert_eq!(ids.next_id(), "1700000000000000002");
    }

    #[test]
    fn test_system_clock() {
        let ids = IdGenerator::default();
        let first: u64 = ids.next_id().parse().expect("number");
        let second: u64 = ids.next_id().parse().expect("number");
        assert!(first > 1_600_000_000_000_000_000);
        assert!(second > first);
        assert!(SystemClock.now_nanos() > 0);
    }
}
