mod core;
mod window;

pub use crate::core::channel::{Channel, Message};
pub use crate::core::colors::Color;
pub use crate::core::control::ControlContext;
pub use crate::core::engine_options::{EngineOptions, Preset};
pub use crate::core::flow::Playback;
pub use crate::core::point::Point;
pub use crate::core::presentation::PresentationContext;
pub use crate::core::scroll::ScrollDriver;
pub use crate::core::snapshot::{Orientation, PresentationSnapshot, TimerMode};
pub use crate::core::time::Ticker;
pub use crate::core::timer::{coerce_field, format_time};
pub use crate::core::*;
pub use crate::window::spawn::{open_presentation_window, window_rect, PresentationWindow};
pub use crate::window::surface::{HeadlessSurface, Surface};
