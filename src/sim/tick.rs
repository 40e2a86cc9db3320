//! Fixed timestep controller tick
//!
//! The host loop calls [`tick`] once per fixed tick with the input
//! snapshot gathered since the last tick. All state transitions and
//! gameplay updates happen here, in a fixed order.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::consts::CEILING_Y;
use crate::settings::Settings;

/// Input snapshot for a single tick.
///
/// Held keys are level-triggered (re-checked every tick); the rest are
/// discrete commands surfaced by the UI layer.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump input currently held. Holding it re-issues the impulse every
    /// qualifying tick; this is deliberate gameplay behavior.
    pub jump_held: bool,
    /// Dedicated pause key pressed this tick
    pub pause_key: bool,
    /// Primary button pressed this tick (double-click pause channel)
    pub primary_click: bool,
    /// Start command from the menu
    pub start: bool,
    /// Restart command from the game-over screen
    pub restart: bool,
    /// Return-to-menu command from the game-over screen
    pub menu: bool,
    /// Resize to the named viewport preset
    pub resize: Option<String>,
    /// Leaderboard name submission
    pub submit_name: Option<String>,
}

/// Advance the game by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput, settings: &mut Settings) {
    // Resize can arrive in any phase
    if let Some(name) = &input.resize {
        state.apply_resize(name, settings);
    }

    // Name submission only makes sense once a run has ended
    if let Some(name) = &input.submit_name {
        if state.phase == GamePhase::Over {
            state.scoring.submit(name);
        }
    }

    // Discrete session commands
    match state.phase {
        GamePhase::Menu if input.start => state.begin_countdown(),
        GamePhase::Over if input.restart => state.restart(settings),
        GamePhase::Over if input.menu => state.return_to_menu(settings),
        _ => {}
    }

    // Pause: the dedicated key toggles immediately; the primary channel
    // needs two activations inside the double-click window. Neither
    // applies during countdown.
    if matches!(state.phase, GamePhase::Active | GamePhase::Paused) {
        if input.pause_key {
            toggle_pause(state);
        }
        if input.primary_click {
            if let Some(last) = state.last_click_tick {
                if state.time_ticks - last < settings.double_click_ticks() {
                    toggle_pause(state);
                }
            }
            state.last_click_tick = Some(state.time_ticks);
        }
    }

    state.time_ticks += 1;

    // During countdown only the timer advances
    if state.phase == GamePhase::Countdown {
        state.countdown_ticks += 1;
        if state.countdown_ticks >= settings.countdown_ticks() {
            state.start_run(settings);
        }
        return;
    }

    // Floor scroll animates in every other phase, menus included
    state.floor_scroll -= settings.scale_factor();
    if state.floor_scroll <= -settings.width {
        state.floor_scroll = 0.0;
    }

    if state.phase != GamePhase::Active {
        // Residual markers keep fading outside active play
        state.scoring.tick_events();
        return;
    }

    // Level-triggered jump: held input re-impulses every tick
    if input.jump_held {
        state.flyer.impulse();
    }

    // Spawn cadence
    state.spawn_ticks += 1;
    if state.spawn_ticks >= settings.spawn_interval_ticks() {
        state.spawn_ticks = 0;
        let GameState { field, rng, .. } = state;
        field.spawn(settings, rng);
    }

    // Obstacles move and expire before scoring and collision checks, so
    // a just-expired rectangle can neither score nor collide
    state.field.advance(settings);
    state.field.prune_offscreen();

    if state.field.check_pass(state.flyer.pos.x) {
        let marker_pos =
            state.flyer.pos + Vec2::new(20.0, -30.0) * settings.scale_factor();
        state.scoring.on_pass(marker_pos);
    }

    state.flyer.integrate(settings.gravity);
    state.scoring.tick_events();

    if collided(state, settings) {
        state.phase = GamePhase::Over;
        state.scoring.finalize_run();
        log::info!("run over at score {}", state.scoring.score);
    }
}

fn toggle_pause(state: &mut GameState) {
    state.phase = match state.phase {
        GamePhase::Active => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Active,
        other => other,
    };
}

/// Obstacle or boundary collision for the current flyer box
fn collided(state: &GameState, settings: &Settings) -> bool {
    let bbox = state.flyer.bbox();
    if state.field.check_collision(&bbox) {
        return true;
    }
    bbox.top() <= CEILING_Y || bbox.bottom() >= settings.floor_y()
}
