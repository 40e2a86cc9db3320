//! Viewport presets and gameplay tuning
//!
//! The simulation never mutates settings on its own; a resize command is
//! the only way the snapshot changes, and components re-derive their
//! size-dependent geometry from the new snapshot when it does.

use serde::{Deserialize, Serialize};

use crate::consts::REFERENCE_WIDTH;

/// Named viewport size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(SizePreset::Small),
            "medium" | "med" => Some(SizePreset::Medium),
            "large" => Some(SizePreset::Large),
            _ => None,
        }
    }

    /// Viewport (width, height) for this preset
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            SizePreset::Small => (480.0, 720.0),
            SizePreset::Medium => (600.0, 900.0),
            SizePreset::Large => (720.0, 1200.0),
        }
    }
}

/// Game settings snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Current viewport preset
    pub preset: SizePreset,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,

    // === Simulation tuning ===
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Obstacle scroll speed in pixels per tick at the reference width
    pub base_speed: f32,
    /// Seconds between obstacle pair spawns
    pub spawn_interval: f32,
    /// Seconds within which two primary activations count as a double click
    pub double_click_interval: f32,
    /// Seconds of pre-run countdown
    pub countdown_duration: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(SizePreset::Medium)
    }
}

impl Settings {
    /// Create settings for a viewport preset
    pub fn from_preset(preset: SizePreset) -> Self {
        let (width, height) = preset.dimensions();
        Self {
            preset,
            width,
            height,
            tick_rate: 80,
            gravity: 0.25,
            base_speed: 5.0,
            spawn_interval: 1.3,
            double_click_interval: 0.4,
            countdown_duration: 3.0,
        }
    }

    /// Switch to the named preset. Unknown names are rejected as a no-op.
    pub fn resize(&mut self, name: &str) -> bool {
        match SizePreset::from_str(name) {
            Some(preset) => {
                self.preset = preset;
                (self.width, self.height) = preset.dimensions();
                true
            }
            None => false,
        }
    }

    /// Ratio of the current width to the reference width. Keeps perceived
    /// speeds and sizes consistent across presets.
    pub fn scale_factor(&self) -> f32 {
        self.width / REFERENCE_WIDTH
    }

    /// Y coordinate of the floor line
    pub fn floor_y(&self) -> f32 {
        self.height - self.height / 10.0
    }

    /// Obstacle spawn interval in ticks
    pub fn spawn_interval_ticks(&self) -> u32 {
        (self.spawn_interval * self.tick_rate as f32).round() as u32
    }

    /// Double-click window in ticks
    pub fn double_click_ticks(&self) -> u64 {
        (self.double_click_interval * self.tick_rate as f32).round() as u64
    }

    /// Countdown duration in ticks
    pub fn countdown_ticks(&self) -> u32 {
        (self.countdown_duration * self.tick_rate as f32).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        let settings = Settings::default();
        assert_eq!(settings.preset, SizePreset::Medium);
        assert_eq!(settings.width, 600.0);
        assert_eq!(settings.scale_factor(), 1.0);
    }

    #[test]
    fn test_resize_known_presets() {
        let mut settings = Settings::default();

        assert!(settings.resize("small"));
        assert_eq!(settings.preset, SizePreset::Small);
        assert_eq!(settings.width, 480.0);

        assert!(settings.resize("large"));
        assert_eq!(settings.preset, SizePreset::Large);
        assert_eq!(settings.width, 720.0);
        assert!(settings.scale_factor() > 1.0);
    }

    #[test]
    fn test_resize_unknown_preset_is_noop() {
        let mut settings = Settings::default();
        assert!(!settings.resize("gigantic"));
        assert_eq!(settings.preset, SizePreset::Medium);
        assert_eq!(settings.width, 600.0);
    }

    #[test]
    fn test_derived_tick_counts() {
        let settings = Settings::default();
        assert_eq!(settings.spawn_interval_ticks(), 104);
        assert_eq!(settings.double_click_ticks(), 32);
        assert_eq!(settings.countdown_ticks(), 240);
        assert_eq!(settings.floor_y(), 810.0);
    }
}
