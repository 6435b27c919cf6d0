use crate::core::snapshot::{PresentationSnapshot, TimerMode};

/// Renders seconds as `±HH:MM:SS`, hours unbounded. Both contexts display
/// the clock through this one function, so the two renderings always match
/// byte for byte.
pub fn format_time(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let abs = seconds.unsigned_abs();
    let hrs = abs / 3600;
    let mins = (abs % 3600) / 60;
    let secs = abs % 60;
    format!("{}{:02}:{:02}:{:02}", sign, hrs, mins, secs)
}

/// Numeric coercion for manual time fields: anything unreadable becomes 0,
/// before any clamping.
pub fn coerce_field(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

impl PresentationSnapshot {
    /// One elapsed second of clock time. Stopwatch counts up without bound;
    /// countdown counts down, and reaching zero stops the clock and playback
    /// together. `time` never goes below zero.
    pub fn tick_second(&mut self) {
        match self.timer_mode {
            TimerMode::Stopwatch => self.time += 1,
            TimerMode::Countdown => {
                let next = self.time - 1;
                if next <= 0 {
                    self.time = 0;
                    self.is_timer_running = false;
                    self.is_playing = false;
                } else {
                    self.time = next;
                }
            }
        }
    }

    /// Switching modes resets the clock: countdown restores the configured
    /// duration, stopwatch restarts from zero. Run state is untouched.
    pub fn set_timer_mode(&mut self, mode: TimerMode) {
        self.timer_mode = mode;
        self.time = match mode {
            TimerMode::Countdown => self.initial_countdown_time,
            TimerMode::Stopwatch => 0,
        };
    }

    /// Configures the countdown duration and applies it to the clock
    /// immediately. Minutes and seconds are clamped to `[0,59]` first.
    pub fn apply_countdown_duration(&mut self, minutes: i64, seconds: i64) {
        let minutes = minutes.clamp(0, 59);
        let seconds = seconds.clamp(0, 59);
        self.initial_countdown_time = minutes * 60 + seconds;
        self.time = self.initial_countdown_time;
    }

    /// Sets the clock directly, independent of mode and run state. Hours are
    /// unbounded (negative hours read as 0), minutes and seconds clamp to
    /// `[0,59]`.
    pub fn set_manual_time(&mut self, hours: i64, minutes: i64, seconds: i64) {
        let hours = hours.max(0);
        let minutes = minutes.clamp(0, 59);
        let seconds = seconds.clamp(0, 59);
        self.time = hours * 3600 + minutes * 60 + seconds;
    }
}
