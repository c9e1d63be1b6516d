use std::time::{Duration, Instant};

/// The wall-clock instant after which no more questions are asked.
/// `None` is a deadline too far away for the clock to represent; it never passes.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    instant: Option<Instant>,
}

impl Deadline {
    pub fn after(duration: Duration) -> Self {
        Deadline {
            instant: Instant::now().checked_add(duration),
        }
    }

    pub fn has_passed(&self) -> bool {
        match self.instant {
            Some(instant) => Instant::now() >= instant,
            None => false,
        }
    }

    pub fn remaining(&self) -> Duration {
        match self.instant {
            Some(instant) => instant.saturating_duration_since(Instant::now()),
            None => Duration::from_secs(u64::MAX),
        }
    }
}
