//! Tunable gameplay constants.
//!
//! Every field has a default matching the stock game, so a config file only
//! needs to name the values it changes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::clock::Millis;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world_width: f32,
    pub world_height: f32,

    /// Edge length of each entity's square hitbox.
    pub player_size: f32,
    pub enemy_size: f32,
    pub projectile_size: f32,
    pub crystal_size: f32,

    /// Units per second on each held axis.
    pub player_speed: f32,
    pub max_lives: u8,
    pub invincibility_ms: Millis,

    /// How far outside the world edge new enemies appear.
    pub spawn_margin: f32,
    /// Half-width of the random heading offset, radians.
    pub pursuit_jitter: f32,

    pub fire_cooldown_ms: Millis,
    pub min_fire_cooldown_ms: Millis,
    pub bullet_speed: f32,
    pub projectile_count: u32,
    pub spread_degrees: f32,
    pub projectile_lifetime_ms: Millis,

    pub experience_to_next: u32,
    pub experience_growth: u32,
    pub enemy_speed: f32,
    pub enemy_speed_growth: f32,
    pub spawn_interval_ms: Millis,
    pub spawn_interval_step_ms: Millis,
    pub min_spawn_interval_ms: Millis,

    pub rapid_fire_step_ms: Millis,
    pub fast_bullets_step: f32,
    pub multi_shot_step: u32,
    pub upgrade_choices: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            player_size: 40.0,
            enemy_size: 30.0,
            projectile_size: 10.0,
            crystal_size: 10.0,
            player_speed: 200.0,
            max_lives: 3,
            invincibility_ms: 1000,
            spawn_margin: 50.0,
            pursuit_jitter: 0.1,
            fire_cooldown_ms: 1000,
            min_fire_cooldown_ms: 200,
            bullet_speed: 400.0,
            projectile_count: 1,
            spread_degrees: 15.0,
            projectile_lifetime_ms: 2000,
            experience_to_next: 5,
            experience_growth: 3,
            enemy_speed: 100.0,
            enemy_speed_growth: 10.0,
            spawn_interval_ms: 1500,
            spawn_interval_step_ms: 100,
            min_spawn_interval_ms: 500,
            rapid_fire_step_ms: 150,
            fast_bullets_step: 200.0,
            multi_shot_step: 1,
            upgrade_choices: 3,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("projectile_size", self.projectile_size),
            ("crystal_size", self.crystal_size),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, "must be greater than zero"));
            }
        }
        if self.max_lives == 0 {
            return Err(ConfigError::invalid("max_lives", "must be at least 1"));
        }
        if self.invincibility_ms == 0 {
            return Err(ConfigError::invalid("invincibility_ms", "must be non-zero"));
        }
        if self.projectile_lifetime_ms == 0 {
            return Err(ConfigError::invalid("projectile_lifetime_ms", "must be non-zero"));
        }
        if self.experience_to_next == 0 {
            return Err(ConfigError::invalid("experience_to_next", "must be at least 1"));
        }
        if self.min_fire_cooldown_ms > self.fire_cooldown_ms {
            return Err(ConfigError::invalid(
                "min_fire_cooldown_ms",
                "must not exceed fire_cooldown_ms",
            ));
        }
        if self.min_spawn_interval_ms > self.spawn_interval_ms {
            return Err(ConfigError::invalid(
                "min_spawn_interval_ms",
                "must not exceed spawn_interval_ms",
            ));
        }
        if self.pursuit_jitter < 0.0 {
            return Err(ConfigError::invalid("pursuit_jitter", "must not be negative"));
        }
        Ok(())
    }
}
