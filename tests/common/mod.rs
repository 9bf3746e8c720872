//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use swarm_survivor::compute::init_state;
use swarm_survivor::config::SimConfig;
use swarm_survivor::entities::GameState;
use swarm_survivor::random::{RandomSource, RngSource};

/// Random source with fixed answers: every jitter sample is `jitter`,
/// integers come from `ints` in order (falling back to the range minimum),
/// and shuffles leave the slice as it is.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    pub jitter: f32,
    pub ints: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn with_ints(ints: &[i32]) -> Self {
        Self {
            jitter: 0.0,
            ints: ints.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn float_between(&mut self, min: f32, max: f32) -> f32 {
        self.jitter.max(min).min(max)
    }

    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        self.ints.pop_front().unwrap_or(min).max(min).min(max)
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

pub fn seeded_rng() -> RngSource<StdRng> {
    RngSource(StdRng::seed_from_u64(42))
}

pub fn make_state() -> GameState {
    init_state(SimConfig::default())
}

/// Default game with the spawn and fire intervals pushed out of reach and
/// enemies standing still, so a test controls every entity itself.
pub fn quiet_state() -> GameState {
    let mut s = make_state();
    s.progression.spawn_interval_ms = 1_000_000;
    s.combat.fire_cooldown_ms = 1_000_000;
    s.progression.enemy_speed = 0.0;
    s
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}
