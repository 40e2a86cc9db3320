//! Gapwing - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (physics, obstacles, scoring, game state)
//! - `settings`: Viewport presets and gameplay tuning
//! - `leaderboard`: Ranked name/score list with capacity retention
//! - `persistence`: File-backed leaderboard storage

pub mod leaderboard;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use leaderboard::Leaderboard;
pub use persistence::LeaderboardStore;
pub use settings::{Settings, SizePreset};

/// Game configuration constants
pub mod consts {
    /// Width the medium preset was tuned at; speeds and sizes scale off it
    pub const REFERENCE_WIDTH: f32 = 600.0;
    /// Height of the medium preset, the vertical scaling reference
    pub const REFERENCE_HEIGHT: f32 = 900.0;

    /// Flyer sprite extent at the reference width (pixels)
    pub const FLYER_BASE_SIZE: (f32, f32) = (68.0, 48.0);
    /// The flyer sits at one fifth of the viewport width
    pub const FLYER_X_DIVISOR: f32 = 5.0;
    /// Velocity set by an impulse, overwriting any prior velocity (up is negative)
    pub const LAUNCH_VELOCITY: f32 = -6.0;
    /// Ceiling collision line (the flyer may overshoot the top edge a bit)
    pub const CEILING_Y: f32 = -100.0;

    /// Obstacle sprite extent at the reference viewport (pixels)
    pub const OBSTACLE_BASE_SIZE: (f32, f32) = (104.0, 640.0);
    /// Bottom edge of the gap, as fractions of viewport height
    pub const OBSTACLE_HEIGHT_FRACTIONS: [f32; 3] = [0.6, 0.5, 0.7];
    /// Viewport height divisor giving the gap between a pair's members
    pub const OBSTACLE_GAP_DIVISOR: f32 = 3.0;
    /// Horizontal margin past the right edge where pairs spawn
    pub const SPAWN_X_MARGIN: f32 = 100.0;
    /// Obstacles whose x-center crosses this line are despawned
    pub const DESPAWN_X: f32 = -100.0;
    /// Hard cap on live obstacle rectangles (performance bound, not gameplay)
    pub const MAX_LIVE_OBSTACLES: usize = 8;

    /// Ticks a "+1" score marker stays alive
    pub const MARKER_LIFETIME_TICKS: u32 = 60;
}
