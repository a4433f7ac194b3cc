use chrono::{DateTime, Duration, Utc};

/// Cadence of both the countdown and the elapsed-time display.
pub fn tick_interval() -> Duration {
    Duration::seconds(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown,
    Elapsed,
}

/// A periodic timer owned by the session state that started it. Dropping the
/// state drops the ticker; there is nothing left to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    kind: TimerKind,
    interval: Duration,
    next_due: DateTime<Utc>,
}

impl Ticker {
    pub fn start(kind: TimerKind, now: DateTime<Utc>, interval: Duration) -> Self {
        Self {
            kind,
            interval,
            next_due: now + interval,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn next_due(&self) -> DateTime<Utc> {
        self.next_due
    }

    /// Number of ticks that fell due at or before `now`. The ticker advances
    /// past all of them.
    pub fn poll(&mut self, now: DateTime<Utc>) -> u32 {
        let mut fired = 0;
        while self.next_due <= now {
            self.next_due += self.interval;
            fired += 1;
        }
        fired
    }
}
