//! Obstacle field
//!
//! Owns the live collection of obstacle pairs: spawning, scrolling,
//! capacity enforcement, pass detection for scoring, and collision
//! testing. Every obstacle carries a stable id assigned at spawn; the
//! credited set keys off those ids rather than object identity.

use std::collections::HashSet;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::{
    DESPAWN_X, MAX_LIVE_OBSTACLES, OBSTACLE_BASE_SIZE, OBSTACLE_GAP_DIVISOR,
    OBSTACLE_HEIGHT_FRACTIONS, REFERENCE_HEIGHT, REFERENCE_WIDTH, SPAWN_X_MARGIN,
};
use crate::settings::Settings;

/// One member of an obstacle pair
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Stable id assigned at spawn
    pub id: u32,
    pub rect: Rect,
    /// True for the lower member of the pair. The render layer flips the
    /// sprite for the upper member; scoring credits only the lower one.
    pub bottom: bool,
}

/// Live obstacle collection
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    /// Live rectangles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    /// Ids already credited for scoring
    credited: HashSet<u32>,
    next_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one obstacle pair off-screen right.
    ///
    /// The gap's bottom edge sits at one of a few preset height fractions
    /// rather than a continuous distribution; that bounds variance and
    /// keeps every gap reachable.
    pub fn spawn(&mut self, settings: &Settings, rng: &mut Pcg32) {
        let fraction = OBSTACLE_HEIGHT_FRACTIONS[rng.random_range(0..OBSTACLE_HEIGHT_FRACTIONS.len())];
        let gap_bottom_y = settings.height * fraction;
        let gap = settings.height / OBSTACLE_GAP_DIVISOR;
        let x = settings.width + SPAWN_X_MARGIN;

        let (base_w, base_h) = OBSTACLE_BASE_SIZE;
        let size = Vec2::new(
            base_w * settings.width / REFERENCE_WIDTH,
            base_h * settings.height / REFERENCE_HEIGHT,
        );

        let bottom_id = self.next_id();
        self.obstacles.push(Obstacle {
            id: bottom_id,
            rect: Rect::from_midtop(Vec2::new(x, gap_bottom_y), size),
            bottom: true,
        });

        let top_id = self.next_id();
        self.obstacles.push(Obstacle {
            id: top_id,
            rect: Rect::from_midbottom(Vec2::new(x, gap_bottom_y - gap), size),
            bottom: false,
        });
    }

    /// Scroll all live rectangles leftward, then enforce the capacity
    /// cap by discarding the oldest entries.
    pub fn advance(&mut self, settings: &Settings) {
        let dx = settings.base_speed * settings.scale_factor();
        for obstacle in &mut self.obstacles {
            obstacle.rect.center.x -= dx;
        }

        if self.obstacles.len() > MAX_LIVE_OBSTACLES {
            let excess = self.obstacles.len() - MAX_LIVE_OBSTACLES;
            for dropped in self.obstacles.drain(..excess) {
                self.credited.remove(&dropped.id);
            }
        }
    }

    /// Remove rectangles that have scrolled past the despawn line,
    /// releasing their credit entries so the set stays bounded.
    pub fn prune_offscreen(&mut self) {
        let credited = &mut self.credited;
        self.obstacles.retain(|obstacle| {
            if obstacle.rect.center.x <= DESPAWN_X {
                credited.remove(&obstacle.id);
                false
            } else {
                true
            }
        });
    }

    /// Check whether the actor has newly passed an obstacle pair.
    ///
    /// Only the bottom member of a pair is tested, so a pair is credited
    /// exactly once; a true result marks the id as credited.
    pub fn check_pass(&mut self, actor_x: f32) -> bool {
        for obstacle in &self.obstacles {
            if obstacle.bottom
                && obstacle.rect.center.x < actor_x
                && !self.credited.contains(&obstacle.id)
            {
                self.credited.insert(obstacle.id);
                return true;
            }
        }
        false
    }

    /// AABB collision against any live rectangle
    pub fn check_collision(&self, actor_box: &Rect) -> bool {
        self.obstacles.iter().any(|o| actor_box.intersects(&o.rect))
    }

    /// Clear the live set and the credited set
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.credited.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
