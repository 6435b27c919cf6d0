use std::time::{Duration, Instant};

use crate::core::time::Ticker;
use crate::window::surface::Surface;

pub const SCROLL_PERIOD: Duration = Duration::from_millis(50);

/// Advances a surface's scroll offset while playback runs: `scroll_speed`
/// pixels every 50 ms. Each context drives its own surface from the same
/// snapshot fields; nothing about scrolling crosses the channel.
pub struct ScrollDriver {
    schedule: Option<Ticker>,
}

impl ScrollDriver {
    pub fn new() -> ScrollDriver {
        ScrollDriver { schedule: None }
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// (Re)starts the 50 ms schedule. An already-running schedule is
    /// cancelled first, so the driver never double-schedules.
    pub fn start(&mut self, now: Instant) {
        self.schedule = Some(Ticker::anchored(SCROLL_PERIOD, now));
    }

    /// Cancels the schedule; takes effect immediately.
    pub fn stop(&mut self) {
        self.schedule = None;
    }

    /// Applies any elapsed scroll periods to the surface at the current
    /// speed.
    pub fn pump(&mut self, now: Instant, speed: i64, surface: &mut dyn Surface) {
        if let Some(ticker) = self.schedule.as_mut() {
            let fired = ticker.poll_at(now);
            if fired > 0 {
                surface.scroll_by(speed * fired as i64);
            }
        }
    }
}

impl Default for ScrollDriver {
    fn default() -> Self {
        ScrollDriver::new()
    }
}
