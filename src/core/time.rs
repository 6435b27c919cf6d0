use std::time::{Duration, Instant};

/// A fixed-period schedule polled from a context's own loop. `poll_at`
/// reports how many whole periods elapsed since the last fire and advances
/// the baseline, so a late loop iteration fires the backlog instead of
/// dropping it.
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Ticker {
        Ticker::anchored(period, Instant::now())
    }

    pub fn anchored(period: Duration, now: Instant) -> Ticker {
        Ticker { period, last: now }
    }

    pub fn poll(&mut self) -> u64 {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> u64 {
        if self.period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while now.duration_since(self.last) >= self.period {
            self.last += self.period;
            fired += 1;
        }
        fired
    }
}
