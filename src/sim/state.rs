//! Game state and session phases
//!
//! The controller's top-level mode plus everything the render layer
//! reads: flyer, obstacle field, scoring, floor scroll, countdown.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::flyer::Flyer;
use super::obstacles::ObstacleField;
use super::score::Scoring;
use crate::persistence::LeaderboardStore;
use crate::settings::Settings;

/// Current session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start menu
    Menu,
    /// Pre-run countdown
    Countdown,
    /// Run in progress
    Active,
    /// Run in progress, frozen
    Paused,
    /// Run ended
    Over,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    /// Session seed for the obstacle RNG
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation tick counter, advances every tick in every phase
    pub time_ticks: u64,
    /// Ticks elapsed in the current countdown
    pub countdown_ticks: u32,
    /// Ticks since the last obstacle spawn
    pub spawn_ticks: u32,
    /// Floor scroll offset (cosmetic), wraps modulo viewport width
    pub floor_scroll: f32,
    /// Tick of the last primary activation, for double-click pause
    pub last_click_tick: Option<u64>,
    pub flyer: Flyer,
    pub field: ObstacleField,
    pub scoring: Scoring,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session in the start menu
    pub fn new(seed: u64, settings: &Settings, store: LeaderboardStore) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            time_ticks: 0,
            countdown_ticks: 0,
            spawn_ticks: 0,
            floor_scroll: 0.0,
            last_click_tick: None,
            flyer: Flyer::new(settings),
            field: ObstacleField::new(),
            scoring: Scoring::new(store),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Menu -> Countdown
    pub fn begin_countdown(&mut self) {
        self.phase = GamePhase::Countdown;
        self.countdown_ticks = 0;
        log::debug!("countdown started");
    }

    /// Countdown elapsed -> Active, with the flyer at its spawn point
    /// and the field empty
    pub fn start_run(&mut self, settings: &Settings) {
        self.flyer.reset(settings);
        self.field.reset();
        self.spawn_ticks = 0;
        self.phase = GamePhase::Active;
        log::debug!("run started");
    }

    /// Over -> Active with a clean run
    pub fn restart(&mut self, settings: &Settings) {
        self.flyer.reset(settings);
        self.field.reset();
        self.scoring.reset_run();
        self.spawn_ticks = 0;
        self.phase = GamePhase::Active;
        log::debug!("run restarted");
    }

    /// Over -> Menu with the same resets as a restart
    pub fn return_to_menu(&mut self, settings: &Settings) {
        self.flyer.reset(settings);
        self.field.reset();
        self.scoring.reset_run();
        self.spawn_ticks = 0;
        self.phase = GamePhase::Menu;
        log::debug!("returned to menu");
    }

    /// Apply a resize command in any phase. Unknown preset names are a
    /// logged no-op. Size-derived geometry is recomputed; the flyer
    /// keeps its relative vertical position.
    pub fn apply_resize(&mut self, name: &str, settings: &mut Settings) -> bool {
        let old_height = settings.height;
        if !settings.resize(name) {
            log::warn!("ignoring resize to unknown preset {name:?}");
            return false;
        }
        self.flyer.reposition_for_viewport_change(old_height, settings);
        log::info!("viewport resized to {} ({}x{})", name, settings.width, settings.height);
        true
    }
}
