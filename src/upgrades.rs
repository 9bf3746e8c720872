//! Upgrade registry.
//!
//! Each upgrade is a tag; its effect is a pure function over
//! [`CombatParams`], and its level lives in the registry rather than in a
//! closure.

use std::fmt;

use crate::config::SimConfig;
use crate::entities::CombatParams;
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    /// Shorter fire cooldown, floored at the configured minimum.
    RapidFire,
    /// Faster projectiles, no cap.
    FastBullets,
    /// One more projectile per volley, no cap.
    MultiShot,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [
        UpgradeKind::RapidFire,
        UpgradeKind::FastBullets,
        UpgradeKind::MultiShot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UpgradeKind::RapidFire => "Rapid Fire",
            UpgradeKind::FastBullets => "Fast Bullets",
            UpgradeKind::MultiShot => "Multi-Shot",
        }
    }

    /// Text offered to the player while the upgrade sits at `level`.  It
    /// describes what picking it would give, so it speaks of `level + 1`.
    pub fn description(self, level: u32, config: &SimConfig) -> String {
        let next = level + 1;
        match self {
            UpgradeKind::RapidFire => format!("Shoot faster (Lv. {next})"),
            UpgradeKind::FastBullets => format!("Increase bullet speed (Lv. {next})"),
            UpgradeKind::MultiShot => format!(
                "Shoot {} projectiles",
                config.projectile_count + next * config.multi_shot_step
            ),
        }
    }

    /// One application of the upgrade.
    pub fn apply(self, params: CombatParams, config: &SimConfig) -> CombatParams {
        match self {
            UpgradeKind::RapidFire => CombatParams {
                fire_cooldown_ms: params
                    .fire_cooldown_ms
                    .saturating_sub(config.rapid_fire_step_ms)
                    .max(config.min_fire_cooldown_ms),
                ..params
            },
            UpgradeKind::FastBullets => CombatParams {
                bullet_speed: params.bullet_speed + config.fast_bullets_step,
                ..params
            },
            UpgradeKind::MultiShot => CombatParams {
                projectile_count: params.projectile_count + config.multi_shot_step,
                ..params
            },
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeRegistry {
    entries: Vec<Upgrade>,
}

impl Default for UpgradeRegistry {
    fn default() -> Self {
        Self::with_kinds(&UpgradeKind::ALL)
    }
}

impl UpgradeRegistry {
    /// Registry holding `kinds` at level 0.  Repeated kinds are kept once so
    /// names stay unique.
    pub fn with_kinds(kinds: &[UpgradeKind]) -> Self {
        let mut entries: Vec<Upgrade> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if !entries.iter().any(|u| u.kind == kind) {
                entries.push(Upgrade { kind, level: 0 });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[Upgrade] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current level of `kind`; 0 when it is not registered.
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        self.entries
            .iter()
            .find(|u| u.kind == kind)
            .map(|u| u.level)
            .unwrap_or(0)
    }

    /// Draw up to `count` distinct kinds, uniformly without replacement.
    pub fn offer(&self, count: usize, rng: &mut impl RandomSource) -> Vec<UpgradeKind> {
        let mut kinds: Vec<UpgradeKind> = self.entries.iter().map(|u| u.kind).collect();
        rng.shuffle(&mut kinds);
        kinds.truncate(count);
        kinds
    }

    /// Bump `kind` by one level and return the new level.
    pub fn level_up(&mut self, kind: UpgradeKind) -> Option<u32> {
        let entry = self.entries.iter_mut().find(|u| u.kind == kind)?;
        entry.level += 1;
        Some(entry.level)
    }

    /// Prompt line for an offered upgrade, as shown to the player.
    pub fn prompt(&self, kind: UpgradeKind, config: &SimConfig) -> String {
        format!("{}: {}", kind.name(), kind.description(self.level(kind), config))
    }
}
