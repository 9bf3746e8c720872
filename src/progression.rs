//! Experience, level-ups, and the pause for an upgrade choice.
//!
//! ```text
//! Running ──(threshold reached)──▶ LevelingUp ──(upgrade chosen)──▶ Running
//!    │
//!    └──(last life lost)──▶ GameOver
//! ```

use tracing::{info, warn};

use crate::arena::Handle;
use crate::config::SimConfig;
use crate::entities::{GameState, Phase, Progression};
use crate::error::SimError;
use crate::events::{SimEvent, UpgradeChoice};
use crate::movement;
use crate::random::RandomSource;
use crate::upgrades::UpgradeKind;

impl Progression {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            experience: 0,
            level: 1,
            experience_to_next: config.experience_to_next,
            enemy_speed: config.enemy_speed,
            spawn_interval_ms: config.spawn_interval_ms,
        }
    }

    /// Add one experience point.  Returns true when the threshold is met;
    /// the caller is then expected to call `level_up`.
    pub fn gain_experience(&mut self) -> bool {
        self.experience += 1;
        self.experience >= self.experience_to_next
    }

    /// Reset experience and make the game harder.
    pub fn level_up(&mut self, config: &SimConfig) {
        self.experience = 0;
        self.level += 1;
        self.experience_to_next += config.experience_growth;
        self.enemy_speed += config.enemy_speed_growth;
        self.spawn_interval_ms = self
            .spawn_interval_ms
            .saturating_sub(config.spawn_interval_step_ms)
            .max(config.min_spawn_interval_ms);
    }
}

/// Player walked over a crystal.
pub fn collect_crystal(state: &mut GameState, crystal: Handle, rng: &mut impl RandomSource) -> bool {
    if !state.phase.is_running() || state.crystals.remove(crystal).is_none() {
        return false;
    }
    state.emit(SimEvent::CrystalCollected { crystal });

    if state.progression.gain_experience() {
        enter_level_up(state, rng);
    }
    let Progression {
        experience,
        experience_to_next,
        ..
    } = state.progression;
    state.emit(SimEvent::ExperienceChanged {
        experience,
        experience_to_next,
    });
    true
}

/// Apply the level-up, freeze the field, and offer upgrades.  With nothing
/// to offer the game keeps running instead of pausing forever.
pub fn enter_level_up(state: &mut GameState, rng: &mut impl RandomSource) {
    let config = &state.config;
    state.progression.level_up(config);
    let choices = state.upgrades.offer(config.upgrade_choices, rng);

    info!(
        level = state.progression.level,
        enemy_speed = state.progression.enemy_speed,
        spawn_interval_ms = state.progression.spawn_interval_ms,
        "level up"
    );

    if choices.is_empty() {
        warn!("no upgrades available to offer; continuing without a pause");
        state.emit(SimEvent::LevelUp {
            level: state.progression.level,
            choices: Vec::new(),
        });
        return;
    }

    movement::freeze_all(state);
    let offered: Vec<UpgradeChoice> = choices
        .iter()
        .map(|&kind| UpgradeChoice {
            kind,
            label: state.upgrades.prompt(kind, &state.config),
        })
        .collect();
    state.phase = Phase::LevelingUp { choices };
    state.emit(SimEvent::LevelUp {
        level: state.progression.level,
        choices: offered,
    });
}

/// Take one of the offered upgrades and resume.  On error nothing changes.
pub fn choose_upgrade(state: &mut GameState, kind: UpgradeKind) -> Result<u32, SimError> {
    let Phase::LevelingUp { choices } = &state.phase else {
        warn!(%kind, "upgrade selected while not leveling up");
        return Err(SimError::NotLevelingUp);
    };
    if !choices.contains(&kind) {
        warn!(%kind, "upgrade selected that was not offered");
        return Err(SimError::UpgradeNotOffered(kind));
    }

    let level = state
        .upgrades
        .level_up(kind)
        .ok_or(SimError::UpgradeNotOffered(kind))?;
    state.combat = kind.apply(state.combat, &state.config);
    state.phase = Phase::Running;

    info!(%kind, level, combat = ?state.combat, "upgrade applied");
    state.emit(SimEvent::UpgradeApplied { kind, level });
    Ok(level)
}

/// Same as `choose_upgrade`, picking by position on the prompt.
pub fn choose_upgrade_at(state: &mut GameState, index: usize) -> Result<u32, SimError> {
    let kind = match &state.phase {
        Phase::LevelingUp { choices } => choices
            .get(index)
            .copied()
            .ok_or(SimError::NoSuchChoice(index))?,
        _ => return Err(SimError::NotLevelingUp),
    };
    choose_upgrade(state, kind)
}
