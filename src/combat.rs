//! Enemy waves, the player's auto-fire, and projectile hits.

use glam::Vec2;
use tracing::{debug, trace};

use crate::arena::Handle;
use crate::clock::Action;
use crate::entities::{Crystal, Enemy, GameState, Projectile};
use crate::events::SimEvent;
use crate::random::RandomSource;

/// Heading of each projectile in a volley of `count`, fanned around `aim`
/// by `spread` radians.  With an even count the fan leans one step toward
/// the positive side, since the middle index is `count / 2`.
pub fn spread_angles(aim: f32, count: u32, spread: f32) -> Vec<f32> {
    let mid = (count / 2) as i64;
    (0..count as i64)
        .map(|i| aim + (i - mid) as f32 * spread)
        .collect()
}

/// Spawn one enemy just outside a random edge of the world.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl RandomSource) -> Handle {
    let margin = state.config.spawn_margin;
    let width = state.config.world_width;
    let height = state.config.world_height;

    let position = match rng.int_between(0, 3) {
        0 => Vec2::new(-margin, rng.int_between(0, height as i32) as f32),
        1 => Vec2::new(width + margin, rng.int_between(0, height as i32) as f32),
        2 => Vec2::new(rng.int_between(0, width as i32) as f32, -margin),
        _ => Vec2::new(rng.int_between(0, width as i32) as f32, height + margin),
    };

    let enemy = state.enemies.insert(Enemy {
        position,
        velocity: Vec2::ZERO,
    });
    trace!(?position, live = state.enemies.len(), "enemy spawned");
    state.emit(SimEvent::EnemySpawned { enemy, position });
    enemy
}

/// Fire one volley from the player toward `pointer`.  Each projectile
/// schedules its own expiry.
pub fn fire(state: &mut GameState, pointer: Vec2) -> Vec<Handle> {
    let origin = state.player.position;
    let to_pointer = pointer - origin;
    let aim = to_pointer.y.atan2(to_pointer.x);
    let spread = state.config.spread_degrees.to_radians();
    let speed = state.combat.bullet_speed;
    let lifetime = state.config.projectile_lifetime_ms;

    let mut fired = Vec::with_capacity(state.combat.projectile_count as usize);
    for angle in spread_angles(aim, state.combat.projectile_count, spread) {
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
        let created_at = state.clock.now();
        let clock = &mut state.clock;
        let projectile = state.projectiles.insert_with(|handle| Projectile {
            position: origin,
            velocity,
            created_at,
            expiry: clock.schedule(lifetime, Action::ExpireProjectile(handle)),
        });
        state.emit(SimEvent::ProjectileFired {
            projectile,
            position: origin,
            velocity,
        });
        fired.push(projectile);
    }
    trace!(count = fired.len(), aim, "volley fired");
    fired
}

/// Lifetime ran out.  A projectile already destroyed by a hit is left alone.
pub fn expire_projectile(state: &mut GameState, projectile: Handle) -> bool {
    if state.projectiles.remove(projectile).is_none() {
        return false;
    }
    state.emit(SimEvent::ProjectileExpired { projectile });
    true
}

/// Projectile struck an enemy: both die, the score goes up, and a crystal
/// drops where the enemy was.  Returns false if either was already gone.
pub fn projectile_hits_enemy(state: &mut GameState, projectile: Handle, enemy: Handle) -> bool {
    if !state.projectiles.contains(projectile) || !state.enemies.contains(enemy) {
        return false;
    }
    if let Some(p) = state.projectiles.remove(projectile) {
        state.clock.cancel(p.expiry);
    }
    let Some(dead) = state.enemies.remove(enemy) else {
        return false;
    };
    let position = dead.position;

    state.score += 1;
    debug!(score = state.score, ?position, "enemy killed");
    state.emit(SimEvent::EnemyKilled {
        enemy,
        projectile,
        position,
    });
    state.emit(SimEvent::ScoreChanged { score: state.score });

    let crystal = state.crystals.insert(Crystal { position });
    state.emit(SimEvent::CrystalSpawned { crystal, position });
    true
}
