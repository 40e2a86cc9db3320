//! Scoring engine
//!
//! Owns the running score, the session high score, the transient "+1"
//! markers, and the leaderboard-qualification flow. The leaderboard
//! itself persists through the store handle held here.

use glam::Vec2;

use crate::consts::MARKER_LIFETIME_TICKS;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::persistence::LeaderboardStore;

/// A short-lived floating "+1" marker
#[derive(Debug, Clone, Copy)]
pub struct ScoreMarker {
    pub pos: Vec2,
    /// Remaining ticks before the marker is pruned
    pub lifetime: u32,
}

/// Running score, high score, and leaderboard qualification
#[derive(Debug)]
pub struct Scoring {
    /// Score of the current run
    pub score: u32,
    /// Best score seen this session, seeded from the leaderboard top
    pub high_score: u32,
    /// Active transient markers
    pub markers: Vec<ScoreMarker>,
    /// True once a finished run has qualified and awaits a name
    pub pending_entry: bool,
    pub leaderboard: Leaderboard,
    store: LeaderboardStore,
}

impl Scoring {
    /// Load the leaderboard and seed the session high score from its
    /// top entry.
    pub fn new(store: LeaderboardStore) -> Self {
        let leaderboard = store.load();
        let high_score = leaderboard.top_score().unwrap_or(0);
        Self {
            score: 0,
            high_score,
            markers: Vec::new(),
            pending_entry: false,
            leaderboard,
            store,
        }
    }

    /// Credit one cleared obstacle pair and drop a marker at `pos`
    pub fn on_pass(&mut self, pos: Vec2) {
        self.score += 1;
        self.markers.push(ScoreMarker {
            pos,
            lifetime: MARKER_LIFETIME_TICKS,
        });
    }

    /// Age markers: each rises one pixel and loses one tick of life.
    /// Runs once per tick regardless of session state so residual
    /// markers fade across transitions.
    pub fn tick_events(&mut self) {
        for marker in &mut self.markers {
            marker.lifetime -= 1;
            marker.pos.y -= 1.0;
        }
        self.markers.retain(|m| m.lifetime > 0);
    }

    /// Close out a run: fold the score into the high score and decide
    /// whether to request a name for the leaderboard. Called exactly
    /// once when a collision ends the run.
    pub fn finalize_run(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        if self.leaderboard.qualifies(self.score) {
            self.pending_entry = true;
            log::info!("score {} qualifies for the leaderboard", self.score);
        }
    }

    /// Submit the pending score under `name`. Blank names fall back to
    /// the default. Returns whether a submission occurred.
    pub fn submit(&mut self, name: &str) -> bool {
        if !self.pending_entry || self.score == 0 {
            return false;
        }
        self.leaderboard.add_score(name, self.score);
        self.store.save(&self.leaderboard);
        self.pending_entry = false;
        true
    }

    /// Clear run-local state: score, markers, pending submission
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.markers.clear();
        self.pending_entry = false;
    }

    /// Leaderboard rows for display
    pub fn top_entries(&self, limit: usize) -> &[LeaderboardEntry] {
        self.leaderboard.top(limit)
    }
}
