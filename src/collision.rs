//! Overlap tests between entity groups and dispatch to the hit handlers.

use glam::Vec2;

use crate::combat;
use crate::entities::GameState;
use crate::health;
use crate::progression;
use crate::random::RandomSource;

/// Axis-aligned box given by centre and half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    /// Square box of edge `size` centred on `center`.
    pub fn square(center: Vec2, size: f32) -> Self {
        Self {
            center,
            half: Vec2::splat(size / 2.0),
        }
    }

    /// Boxes that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half + other.half;
        gap.x < reach.x && gap.y < reach.y
    }
}

/// Run every pair test for this tick: player × enemies, projectiles ×
/// enemies, player × crystals.  Handles are snapshotted up front and
/// re-checked before each test, so anything a handler destroys is skipped
/// for the rest of the tick.  Once the game leaves `Running` the remaining
/// tests are dropped.
pub fn resolve(state: &mut GameState, rng: &mut impl RandomSource) {
    player_vs_enemies(state);
    projectiles_vs_enemies(state);
    player_vs_crystals(state, rng);
}

fn player_box(state: &GameState) -> Aabb {
    Aabb::square(state.player.position, state.config.player_size)
}

fn player_vs_enemies(state: &mut GameState) {
    for enemy in state.enemies.handles() {
        if !state.phase.is_running() {
            return;
        }
        let Some(e) = state.enemies.get(enemy) else {
            continue;
        };
        if player_box(state).overlaps(&Aabb::square(e.position, state.config.enemy_size)) {
            health::take_damage(state);
        }
    }
}

fn projectiles_vs_enemies(state: &mut GameState) {
    let enemies = state.enemies.handles();
    for projectile in state.projectiles.handles() {
        for &enemy in &enemies {
            if !state.phase.is_running() {
                return;
            }
            let Some(p) = state.projectiles.get(projectile) else {
                break;
            };
            let Some(e) = state.enemies.get(enemy) else {
                continue;
            };
            let hit = Aabb::square(p.position, state.config.projectile_size)
                .overlaps(&Aabb::square(e.position, state.config.enemy_size));
            if hit {
                combat::projectile_hits_enemy(state, projectile, enemy);
            }
        }
    }
}

fn player_vs_crystals(state: &mut GameState, rng: &mut impl RandomSource) {
    for crystal in state.crystals.handles() {
        if !state.phase.is_running() {
            return;
        }
        let Some(c) = state.crystals.get(crystal) else {
            continue;
        };
        if player_box(state).overlaps(&Aabb::square(c.position, state.config.crystal_size)) {
            progression::collect_crystal(state, crystal, rng);
        }
    }
}
