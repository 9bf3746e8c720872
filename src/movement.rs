//! Player steering, enemy pursuit, and position integration.

use glam::Vec2;

use crate::clock::Millis;
use crate::entities::GameState;
use crate::input::InputState;
use crate::random::RandomSource;

/// Velocity for the held directions.  Each axis is independent, so a
/// diagonal moves at `speed * sqrt(2)`.
pub fn player_velocity(input: &InputState, speed: f32) -> Vec2 {
    input.direction() * speed
}

/// Head from `from` toward `target`, rotated by `offset` radians.
pub fn pursuit_velocity(from: Vec2, target: Vec2, speed: f32, offset: f32) -> Vec2 {
    let to_target = target - from;
    let angle = to_target.y.atan2(to_target.x) + offset;
    Vec2::new(angle.cos(), angle.sin()) * speed
}

pub fn steer_player(state: &mut GameState, input: &InputState) {
    state.player.velocity = player_velocity(input, state.config.player_speed);
}

/// Re-aim every enemy at the player with a fresh jitter sample each.
pub fn steer_enemies(state: &mut GameState, rng: &mut impl RandomSource) {
    let target = state.player.position;
    let speed = state.progression.enemy_speed;
    let jitter = state.config.pursuit_jitter;
    for (_, enemy) in state.enemies.iter_mut() {
        let offset = rng.float_between(-jitter, jitter);
        enemy.velocity = pursuit_velocity(enemy.position, target, speed, offset);
    }
}

/// Move everything by `velocity * delta`.  Only the player is held inside
/// the world.
pub fn integrate(state: &mut GameState, delta: Millis) {
    let dt = delta as f32 / 1000.0;

    let half = state.config.player_size / 2.0;
    let min = Vec2::splat(half);
    let max = Vec2::new(
        (state.config.world_width - half).max(half),
        (state.config.world_height - half).max(half),
    );
    let player = &mut state.player;
    player.position = (player.position + player.velocity * dt).clamp(min, max);

    for (_, enemy) in state.enemies.iter_mut() {
        enemy.position += enemy.velocity * dt;
    }
    for (_, projectile) in state.projectiles.iter_mut() {
        projectile.position += projectile.velocity * dt;
    }
}

/// Zero the steered velocities when the game pauses for an upgrade choice.
/// Projectiles keep theirs.
pub fn freeze_all(state: &mut GameState) {
    state.player.velocity = Vec2::ZERO;
    for (_, enemy) in state.enemies.iter_mut() {
        enemy.velocity = Vec2::ZERO;
    }
}
