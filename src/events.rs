//! Everything a tick reports outward: entity lifecycle for the renderer and
//! display values for the HUD.

use glam::Vec2;

use crate::arena::Handle;
use crate::upgrades::UpgradeKind;

/// One upgrade as offered on the level-up prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeChoice {
    pub kind: UpgradeKind,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    EnemySpawned { enemy: Handle, position: Vec2 },
    ProjectileFired { projectile: Handle, position: Vec2, velocity: Vec2 },
    ProjectileExpired { projectile: Handle },
    EnemyKilled { enemy: Handle, projectile: Handle, position: Vec2 },
    CrystalSpawned { crystal: Handle, position: Vec2 },
    CrystalCollected { crystal: Handle },
    ScoreChanged { score: u32 },
    ExperienceChanged { experience: u32, experience_to_next: u32 },
    /// `indicator` is the life marker to hide.
    PlayerDamaged { lives: u8, indicator: usize },
    InvincibilityEnded,
    LevelUp { level: u32, choices: Vec<UpgradeChoice> },
    UpgradeApplied { kind: UpgradeKind, level: u32 },
    GameOver { score: u32 },
}
