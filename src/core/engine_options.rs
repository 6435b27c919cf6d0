use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::colors::Color;
use crate::core::snapshot::PresentationSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    pub title: String,
    /// Name of the broadcast channel every context of this session opens.
    pub channel: String,
    /// Available screen size, used to place the presentation window.
    pub screen_size: (u32, u32),
}

impl EngineOptions {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<EngineOptions> {
        let text = std::fs::read_to_string(path)?;
        Ok(ron::from_str(text.as_str())?)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        match EngineOptions::load("resources/data/config.ron") {
            Ok(options) => options,
            Err(_) => EngineOptions {
                title: String::from("Teleprompter"),
                channel: String::from("teleprompter_channel"),
                screen_size: (1920, 1080),
            },
        }
    }
}

/// A named styling preset, loadable from `resources/data/presets/*.ron` and
/// applied onto the control snapshot in one go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub background_color: Color,
    pub text_color: Color,
    pub timer_color: Color,
    pub font_size: i64,
    pub mirror: bool,
}

impl Preset {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Preset> {
        let text = std::fs::read_to_string(path)?;
        Ok(ron::from_str(text.as_str())?)
    }

    pub fn apply_to(&self, snapshot: &mut PresentationSnapshot) {
        snapshot.background_color = self.background_color;
        snapshot.text_color = self.text_color;
        snapshot.timer_color = self.timer_color;
        snapshot.font_size = self.font_size.clamp(16, 80);
        snapshot.mirror = self.mirror;
    }
}
