use std::time::Instant;

use crate::core::channel::{Channel, Message};
use crate::core::point::Point;
use crate::core::scroll::ScrollDriver;
use crate::core::snapshot::PresentationSnapshot;
use crate::core::timer::format_time;
use crate::window::surface::Surface;

/// The mirroring side of a session. Holds nothing authoritative: it asks for
/// a snapshot once at startup, then replaces its whole rendering with each
/// `state_update` that arrives. Scrolling is derived locally from the
/// snapshot's play fields; the clock is displayed as broadcast, never ticked
/// here.
pub struct PresentationContext<S: Surface> {
    channel: Channel,
    surface: S,
    rendering: PresentationSnapshot,
    scroll: ScrollDriver,
    drag: Option<Point>,
}

impl<S: Surface> PresentationContext<S> {
    pub fn new(channel_name: &str, surface: S) -> PresentationContext<S> {
        let channel = Channel::open(channel_name);
        // catch up with whatever state already exists
        channel.post(Message::SyncState);

        PresentationContext {
            channel,
            surface,
            rendering: PresentationSnapshot::default(),
            scroll: ScrollDriver::new(),
            drag: None,
        }
    }

    pub fn rendering(&self) -> &PresentationSnapshot {
        &self.rendering
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn time_display(&self) -> String {
        format_time(self.rendering.time)
    }

    /// Drains the channel and advances local scrolling. Call from the
    /// presentation loop; nothing here blocks.
    pub fn pump(&mut self, now: Instant) {
        while let Some(message) = self.channel.try_recv() {
            if let Message::StateUpdate(snapshot) = message {
                self.apply(snapshot, now);
            }
            // sync_state requests and position reports are answered by the
            // control side, not here
        }

        self.scroll
            .pump(now, self.rendering.scroll_speed, &mut self.surface);
    }

    fn apply(&mut self, snapshot: PresentationSnapshot, now: Instant) {
        let speed_changed = snapshot.scroll_speed != self.rendering.scroll_speed;

        if snapshot.is_playing {
            if !self.scroll.is_scheduled() || speed_changed {
                self.scroll.start(now);
            }
        } else {
            self.scroll.stop();
        }

        self.rendering = snapshot;
        self.surface.apply(&self.rendering);
    }

    pub fn begin_timer_drag(&mut self, cursor: Point) {
        self.drag = Some(cursor - self.rendering.timer_position);
    }

    /// Instant local feedback while the gesture lasts; nothing is shared
    /// until release.
    pub fn drag_timer_to(&mut self, cursor: Point) {
        if let Some(grab) = self.drag {
            let position = (cursor - grab)
                .clamp_to(self.surface.container_size(), self.surface.widget_size());
            self.rendering.timer_position = position;
            self.surface.apply(&self.rendering);
        }
    }

    /// Reports the final position. It becomes canonical only once the
    /// control side rebroadcasts it.
    pub fn release_timer_drag(&mut self) {
        if self.drag.take().is_some() {
            self.channel
                .post(Message::TimerMoved(self.rendering.timer_position));
        }
    }
}
