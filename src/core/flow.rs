use crate::core::snapshot::PresentationSnapshot;

/// Play state of a session. Scrolling and the clock are separate snapshot
/// fields, but the play control drives them as one transition, so they flip
/// together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Running,
}

impl Playback {
    pub fn of(snapshot: &PresentationSnapshot) -> Playback {
        if snapshot.is_playing {
            Playback::Running
        } else {
            Playback::Idle
        }
    }

    pub fn toggled(self) -> Playback {
        match self {
            Playback::Idle => Playback::Running,
            Playback::Running => Playback::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        match self {
            Playback::Idle => false,
            Playback::Running => true,
        }
    }

    /// Writes both coupled flags at once.
    pub fn apply_to(self, snapshot: &mut PresentationSnapshot) {
        let running = self.is_running();
        snapshot.is_playing = running;
        snapshot.is_timer_running = running;
    }
}
