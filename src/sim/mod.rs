//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies (persistence enters through the
//!   store handle the scoring engine holds)

pub mod flyer;
pub mod obstacles;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use flyer::Flyer;
pub use obstacles::{Obstacle, ObstacleField};
pub use rect::Rect;
pub use score::{ScoreMarker, Scoring};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
