//! Actor physics
//!
//! The flyer falls under gravity and rises on impulse. Physics never
//! clamps to the viewport; boundary violation is a collision concern
//! handled by the controller.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{FLYER_BASE_SIZE, FLYER_X_DIVISOR, LAUNCH_VELOCITY};
use crate::settings::Settings;

/// The player-controlled actor
#[derive(Debug, Clone)]
pub struct Flyer {
    /// Center position
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vel_y: f32,
    /// Bounding box extent, scaled to the current viewport
    pub size: Vec2,
}

impl Flyer {
    /// Create a flyer at the spawn point for the given viewport
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: spawn_point(settings),
            vel_y: 0.0,
            size: scaled_size(settings),
        }
    }

    /// Apply gravity and advance position. Called exactly once per
    /// active, unpaused tick.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;
    }

    /// Set velocity to the launch constant, overwriting any prior
    /// velocity (not additive).
    pub fn impulse(&mut self) {
        self.vel_y = LAUNCH_VELOCITY;
    }

    /// Return to the spawn point with zero velocity
    pub fn reset(&mut self, settings: &Settings) {
        self.vel_y = 0.0;
        self.pos = spawn_point(settings);
    }

    /// Keep the flyer's relative vertical position across a viewport
    /// change; x snaps back to its fixed fraction of the new width.
    pub fn reposition_for_viewport_change(&mut self, old_height: f32, settings: &Settings) {
        let rel_y = self.pos.y / old_height;
        self.size = scaled_size(settings);
        self.pos = Vec2::new(settings.width / FLYER_X_DIVISOR, rel_y * settings.height);
    }

    /// Current axis-aligned bounding box
    pub fn bbox(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

fn spawn_point(settings: &Settings) -> Vec2 {
    Vec2::new(settings.width / FLYER_X_DIVISOR, settings.height / 2.0)
}

fn scaled_size(settings: &Settings) -> Vec2 {
    let (w, h) = FLYER_BASE_SIZE;
    Vec2::new(w, h) * settings.scale_factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_point() {
        let settings = Settings::default();
        let flyer = Flyer::new(&settings);
        assert_eq!(flyer.pos, Vec2::new(120.0, 450.0));
        assert_eq!(flyer.vel_y, 0.0);
    }

    #[test]
    fn test_integrate_accumulates_gravity() {
        let settings = Settings::default();
        let mut flyer = Flyer::new(&settings);
        let y0 = flyer.pos.y;

        flyer.integrate(settings.gravity);
        assert_eq!(flyer.vel_y, 0.25);
        assert_eq!(flyer.pos.y, y0 + 0.25);

        flyer.integrate(settings.gravity);
        assert_eq!(flyer.vel_y, 0.5);
        assert_eq!(flyer.pos.y, y0 + 0.75);
    }

    #[test]
    fn test_drift_is_monotonic_without_impulse() {
        let settings = Settings::default();
        let mut flyer = Flyer::new(&settings);

        let mut last_vel = flyer.vel_y;
        let mut last_y = flyer.pos.y;
        for _ in 0..100 {
            flyer.integrate(settings.gravity);
            assert!(flyer.vel_y > last_vel);
            assert!(flyer.pos.y > last_y);
            last_vel = flyer.vel_y;
            last_y = flyer.pos.y;
        }
    }

    #[test]
    fn test_reset() {
        let settings = Settings::default();
        let mut flyer = Flyer::new(&settings);
        flyer.vel_y = 10.0;
        flyer.integrate(settings.gravity);

        flyer.reset(&settings);
        assert_eq!(flyer.vel_y, 0.0);
        assert_eq!(flyer.pos, Vec2::new(120.0, 450.0));
    }

    #[test]
    fn test_reposition_preserves_relative_y() {
        let mut settings = Settings::default();
        let mut flyer = Flyer::new(&settings);
        flyer.pos.y = 225.0; // quarter of the way down a 900px viewport

        let old_height = settings.height;
        assert!(settings.resize("small"));
        flyer.reposition_for_viewport_change(old_height, &settings);

        assert_eq!(flyer.pos.y, 180.0); // quarter of 720
        assert_eq!(flyer.pos.x, 96.0); // fifth of 480
    }

    proptest! {
        #[test]
        fn impulse_overrides_any_velocity(v in -500.0f32..500.0) {
            let settings = Settings::default();
            let mut flyer = Flyer::new(&settings);
            flyer.vel_y = v;
            flyer.impulse();
            prop_assert_eq!(flyer.vel_y, LAUNCH_VELOCITY);
        }
    }
}
