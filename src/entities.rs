//! All game entity types.  Pure data; behaviour lives in the
//! system modules (`movement`, `combat`, `health`, `progression`) and is
//! driven from `compute::tick`.

use glam::Vec2;

use crate::arena::Arena;
use crate::clock::{Clock, Millis, TimerId};
use crate::config::SimConfig;
use crate::events::SimEvent;
use crate::upgrades::{UpgradeKind, UpgradeRegistry};

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Running,
    /// Frozen until one of `choices` is picked.
    LevelingUp { choices: Vec<UpgradeKind> },
    /// Terminal.
    GameOver,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Cosmetic only; the renderer picks a colour from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Normal,
    /// Shown for the length of the invincibility window.
    Flashing,
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub lives: u8,
    pub invincible: bool,
    pub appearance: Appearance,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub created_at: Millis,
    /// Lifetime timer, cancelled when the projectile dies early.
    pub expiry: TimerId,
}

/// Experience pickup.  Never moves.
#[derive(Clone, Debug)]
pub struct Crystal {
    pub position: Vec2,
}

// ── Tunable state ─────────────────────────────────────────────────────────────

/// Weapon parameters the upgrades act on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatParams {
    pub fire_cooldown_ms: Millis,
    pub bullet_speed: f32,
    pub projectile_count: u32,
}

impl CombatParams {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            fire_cooldown_ms: config.fire_cooldown_ms,
            bullet_speed: config.bullet_speed,
            projectile_count: config.projectile_count,
        }
    }
}

/// Experience, level, and the difficulty values that scale with level.
#[derive(Clone, Debug, PartialEq)]
pub struct Progression {
    pub experience: u32,
    pub level: u32,
    pub experience_to_next: u32,
    pub enemy_speed: f32,
    pub spawn_interval_ms: Millis,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation.  Every system function takes `&mut GameState`, so
/// independent games never share anything.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: SimConfig,
    pub player: Player,
    pub enemies: Arena<Enemy>,
    pub projectiles: Arena<Projectile>,
    pub crystals: Arena<Crystal>,
    pub combat: CombatParams,
    pub progression: Progression,
    pub upgrades: UpgradeRegistry,
    pub clock: Clock,
    pub score: u32,
    pub phase: Phase,
    /// Produced during ticks; drained by the caller.
    pub events: Vec<SimEvent>,
}

impl GameState {
    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
