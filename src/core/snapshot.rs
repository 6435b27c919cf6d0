use serde::{Deserialize, Serialize};

use crate::core::colors::Color;
use crate::core::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Stopwatch,
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The full set of presentation fields broadcast as one `state_update`
/// message. There is exactly one authoritative copy, owned by the control
/// context; every other context only renders the last copy it received.
///
/// Missing wire fields fall back to the defaults below, so a partial payload
/// still produces a renderable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationSnapshot {
    pub text: String,
    pub is_playing: bool,
    pub scroll_speed: i64,
    pub font_size: i64,
    pub time: i64,
    pub is_timer_running: bool,
    pub background_color: Color,
    pub text_color: Color,
    pub timer_color: Color,
    pub mirror: bool,
    pub timer_mode: TimerMode,
    pub initial_countdown_time: i64,
    pub timer_position: Point,
    pub orientation: Orientation,
}

impl Default for PresentationSnapshot {
    fn default() -> Self {
        PresentationSnapshot {
            text: String::new(),
            is_playing: false,
            scroll_speed: 2,
            font_size: 32,
            time: 0,
            is_timer_running: false,
            background_color: Color::BLACK,
            text_color: Color::WHITE,
            timer_color: Color::SKY,
            mirror: false,
            timer_mode: TimerMode::Stopwatch,
            initial_countdown_time: 0,
            timer_position: Point::from((32.0, 16.0)),
            orientation: Orientation::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_follow_the_message_schema() {
        let value = serde_json::to_value(PresentationSnapshot::default()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "text",
            "isPlaying",
            "scrollSpeed",
            "fontSize",
            "time",
            "isTimerRunning",
            "backgroundColor",
            "textColor",
            "timerColor",
            "mirror",
            "timerMode",
            "initialCountdownTime",
            "timerPosition",
            "orientation",
        ] {
            assert!(object.contains_key(key), "missing wire field {}", key);
        }

        assert_eq!(value["timerMode"], "stopwatch");
        assert_eq!(value["orientation"], "horizontal");
        assert_eq!(value["timerPosition"]["left"], 32.0);
        assert_eq!(value["timerPosition"]["top"], 16.0);
    }

    #[test]
    fn missing_wire_fields_take_the_documented_defaults() {
        let snapshot: PresentationSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(snapshot.text, "");
        assert_eq!(snapshot.font_size, 32);
        assert_eq!(snapshot.text_color, Color::WHITE);
        assert!(!snapshot.mirror);
        assert_eq!(snapshot.background_color, Color::BLACK);
        assert_eq!(snapshot.time, 0);
        assert_eq!(snapshot.timer_color, Color::SKY);
        assert_eq!(snapshot.timer_position, Point::from((32.0, 16.0)));
        assert_eq!(snapshot.scroll_speed, 2);
    }

    #[test]
    fn partial_payload_keeps_the_rest_at_defaults() {
        let snapshot: PresentationSnapshot =
            serde_json::from_str(r##"{"text":"hello","fontSize":48,"timerMode":"countdown"}"##)
                .unwrap();

        assert_eq!(snapshot.text, "hello");
        assert_eq!(snapshot.font_size, 48);
        assert_eq!(snapshot.timer_mode, TimerMode::Countdown);
        assert_eq!(snapshot.scroll_speed, 2);
        assert_eq!(snapshot.orientation, Orientation::Horizontal);
    }
}
