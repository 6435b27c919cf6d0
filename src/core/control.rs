use std::time::{Duration, Instant};

use log::info;

use crate::core::channel::{Channel, Message};
use crate::core::colors::Color;
use crate::core::engine_options::{EngineOptions, Preset};
use crate::core::flow::Playback;
use crate::core::point::Point;
use crate::core::scroll::ScrollDriver;
use crate::core::snapshot::{Orientation, PresentationSnapshot, TimerMode};
use crate::core::time::Ticker;
use crate::core::timer::format_time;
use crate::window::surface::Surface;

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// The authoritative side of a session. Owns the one canonical snapshot,
/// rebroadcasts it whole on every change, answers `sync_state` requests, and
/// folds position reports from the presentation side back into it. Also runs
/// the session clock; presentation contexts never tick, they display whatever
/// `time` was last broadcast.
pub struct ControlContext<S: Surface> {
    channel: Channel,
    snapshot: PresentationSnapshot,
    clock: Ticker,
    scroll: ScrollDriver,
    preview: S,
    drag: Option<Point>,
}

impl<S: Surface> ControlContext<S> {
    pub fn new(options: &EngineOptions, preview: S) -> ControlContext<S> {
        let snapshot = PresentationSnapshot {
            timer_position: Point::from((24.0, 16.0)),
            initial_countdown_time: 300,
            ..PresentationSnapshot::default()
        };

        let mut context = ControlContext {
            channel: Channel::open(options.channel.as_str()),
            snapshot,
            clock: Ticker::new(CLOCK_PERIOD),
            scroll: ScrollDriver::new(),
            preview,
            drag: None,
        };

        info!("|= control context on '{}'", options.channel);
        context.publish();
        context
    }

    pub fn snapshot(&self) -> &PresentationSnapshot {
        &self.snapshot
    }

    pub fn preview(&self) -> &S {
        &self.preview
    }

    pub fn time_display(&self) -> String {
        format_time(self.snapshot.time)
    }

    /// Drains the channel and advances the clock and preview scroll. Call
    /// from the control loop; nothing here blocks.
    pub fn pump(&mut self, now: Instant) {
        while let Some(message) = self.channel.try_recv() {
            match message {
                Message::SyncState => self.publish(),
                Message::TimerMoved(position) => {
                    // already clamped against the reporting surface's own
                    // geometry; taken verbatim
                    self.snapshot.timer_position = position;
                    self.publish();
                }
                Message::StateUpdate(_) => {}
            }
        }

        if self.snapshot.is_timer_running {
            let ticks = self.clock.poll_at(now);
            if ticks > 0 {
                for _ in 0..ticks {
                    self.snapshot.tick_second();
                }
                if !self.snapshot.is_playing {
                    // countdown ran out and halted the session
                    self.scroll.stop();
                }
                self.publish();
            }
        }

        self.scroll
            .pump(now, self.snapshot.scroll_speed, &mut self.preview);
    }

    pub fn set_text(&mut self, text: &str) {
        self.snapshot.text = text.to_string();
        self.publish();
    }

    pub fn set_scroll_speed(&mut self, now: Instant, speed: i64) {
        self.snapshot.scroll_speed = speed.clamp(1, 10);
        if self.scroll.is_scheduled() {
            // restart so the new speed applies on a fresh schedule
            self.scroll.start(now);
        }
        self.publish();
    }

    pub fn set_font_size(&mut self, size: i64) {
        self.snapshot.font_size = size.clamp(16, 80);
        self.publish();
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.snapshot.background_color = color;
        self.publish();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.snapshot.text_color = color;
        self.publish();
    }

    pub fn set_timer_color(&mut self, color: Color) {
        self.snapshot.timer_color = color;
        self.publish();
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        self.snapshot.mirror = mirror;
        self.publish();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.snapshot.orientation = orientation;
        self.publish();
    }

    pub fn set_timer_mode(&mut self, mode: TimerMode) {
        self.snapshot.set_timer_mode(mode);
        self.publish();
    }

    pub fn apply_countdown_duration(&mut self, minutes: i64, seconds: i64) {
        self.snapshot.apply_countdown_duration(minutes, seconds);
        self.publish();
    }

    pub fn set_manual_time(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.snapshot.set_manual_time(hours, minutes, seconds);
        self.publish();
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        preset.apply_to(&mut self.snapshot);
        self.publish();
    }

    /// One transition for the coupled play/clock pair.
    pub fn toggle_play(&mut self, now: Instant) {
        let playback = Playback::of(&self.snapshot).toggled();
        playback.apply_to(&mut self.snapshot);

        if playback.is_running() {
            self.clock = Ticker::anchored(CLOCK_PERIOD, now);
            self.scroll.start(now);
        } else {
            self.scroll.stop();
        }
        self.publish();
    }

    /// Back to the top of the script, clock restored, session idle.
    pub fn reset(&mut self) {
        self.preview.scroll_to_top();
        self.snapshot.time = match self.snapshot.timer_mode {
            TimerMode::Countdown => self.snapshot.initial_countdown_time,
            TimerMode::Stopwatch => 0,
        };
        Playback::Idle.apply_to(&mut self.snapshot);
        self.scroll.stop();
        self.publish();
    }

    pub fn begin_timer_drag(&mut self, cursor: Point) {
        self.drag = Some(cursor - self.snapshot.timer_position);
    }

    pub fn drag_timer_to(&mut self, cursor: Point) {
        if let Some(grab) = self.drag {
            let position = (cursor - grab)
                .clamp_to(self.preview.container_size(), self.preview.widget_size());
            self.snapshot.timer_position = position;
            self.publish();
        }
    }

    pub fn release_timer_drag(&mut self) {
        self.drag = None;
    }

    /// The sole side effect of every mutation: re-render the preview and
    /// rebroadcast the whole snapshot.
    fn publish(&mut self) {
        self.preview.apply(&self.snapshot);
        self.channel
            .post(Message::StateUpdate(self.snapshot.clone()));
    }
}
