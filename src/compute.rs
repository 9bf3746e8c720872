//! Top-level game-logic entry points.
//!
//! `init_state` builds a fresh game, `tick` advances it by one step, and
//! `choose_upgrade` resolves a pending level-up.  All randomness comes
//! through the injected `RandomSource` so callers control determinism
//! (tests use seeded or scripted sources).

use glam::Vec2;
use tracing::trace;

use crate::arena::Arena;
use crate::clock::{Action, Clock, Millis};
use crate::collision;
use crate::combat;
use crate::config::SimConfig;
use crate::entities::{Appearance, CombatParams, GameState, Phase, Player, Progression};
use crate::health;
use crate::input::InputState;
use crate::movement;
use crate::random::RandomSource;
use crate::upgrades::UpgradeRegistry;

pub use crate::progression::{choose_upgrade, choose_upgrade_at};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh game: player centred, no other entities, stock upgrades at level 0.
pub fn init_state(config: SimConfig) -> GameState {
    GameState {
        player: Player {
            position: Vec2::new(config.world_width / 2.0, config.world_height / 2.0),
            velocity: Vec2::ZERO,
            lives: config.max_lives,
            invincible: false,
            appearance: Appearance::Normal,
        },
        enemies: Arena::new(),
        projectiles: Arena::new(),
        crystals: Arena::new(),
        combat: CombatParams::new(&config),
        progression: Progression::new(&config),
        upgrades: UpgradeRegistry::default(),
        clock: Clock::new(),
        score: 0,
        phase: Phase::Running,
        events: Vec::new(),
        config,
    }
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by `delta` ms.
///
/// Order within a tick: advance every timer, steer and integrate, run due
/// one-shot timers, resolve overlaps, then spawn and fire if still running.
/// A tick that ends in a pause still counts toward the spawn and fire
/// intervals; the pending progress carries over to the first tick after
/// resume.  While leveling up or after game over nothing moves and no timer
/// advances.
pub fn tick(state: &mut GameState, input: &InputState, delta: Millis, rng: &mut impl RandomSource) {
    if !state.phase.is_running() {
        return;
    }
    state.clock.advance(delta);
    state.clock.spawn.accumulate(delta);
    state.clock.fire.accumulate(delta);

    // ── 1. Movement ──────────────────────────────────────────────────────────
    movement::steer_player(state, input);
    movement::steer_enemies(state, rng);
    movement::integrate(state, delta);

    // ── 2. Expired timers ────────────────────────────────────────────────────
    run_due_actions(state);

    // ── 3. Overlaps ──────────────────────────────────────────────────────────
    collision::resolve(state, rng);
    if !state.phase.is_running() {
        return;
    }

    // ── 4. Spawn and fire intervals ──────────────────────────────────────────
    if state.clock.spawn.take_due(state.progression.spawn_interval_ms) {
        combat::spawn_enemy(state, rng);
    }
    if state.clock.fire.take_due(state.combat.fire_cooldown_ms) {
        combat::fire(state, input.pointer);
    }
}

/// Fire every one-shot action whose deadline has passed.  Actions aimed at
/// an entity that no longer exists do nothing.
pub fn run_due_actions(state: &mut GameState) {
    for action in state.clock.take_due() {
        match action {
            Action::ExpireProjectile(projectile) => {
                if !combat::expire_projectile(state, projectile) {
                    trace!(?projectile, "expiry for a projectile that is already gone");
                }
            }
            Action::ClearInvincibility => health::clear_invincibility(state),
        }
    }
}
