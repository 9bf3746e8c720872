mod common;

use glam::Vec2;

use swarm_survivor::compute::tick;
use swarm_survivor::entities::*;
use swarm_survivor::events::SimEvent;
use swarm_survivor::health::{clear_invincibility, take_damage};
use swarm_survivor::input::InputState;

use common::{quiet_state, ScriptedRandom};

fn idle() -> InputState {
    InputState::aiming_at(Vec2::new(800.0, 300.0))
}

/// Quiet game with one motionless enemy sitting on the player.
fn state_with_enemy_on_player() -> GameState {
    let mut s = quiet_state();
    let position = s.player.position;
    s.enemies.insert(Enemy {
        position,
        velocity: Vec2::ZERO,
    });
    s
}

#[test]
fn contact_costs_one_life_and_starts_invincibility() {
    let mut s = state_with_enemy_on_player();
    tick(&mut s, &idle(), 10, &mut ScriptedRandom::default());
    assert_eq!(s.player.lives, 2);
    assert!(s.player.invincible);
    assert_eq!(s.player.appearance, Appearance::Flashing);
    assert!(s
        .drain_events()
        .contains(&SimEvent::PlayerDamaged { lives: 2, indicator: 2 }));
}

#[test]
fn contact_does_not_destroy_the_enemy() {
    let mut s = state_with_enemy_on_player();
    tick(&mut s, &idle(), 10, &mut ScriptedRandom::default());
    assert_eq!(s.enemies.len(), 1);
}

#[test]
fn no_second_hit_until_exactly_one_second_later() {
    let mut s = state_with_enemy_on_player();
    let mut rng = ScriptedRandom::default();
    tick(&mut s, &idle(), 10, &mut rng); // hit at t=10
    assert_eq!(s.player.lives, 2);

    for _ in 0..9 {
        tick(&mut s, &idle(), 111, &mut rng); // t = 1009
    }
    assert_eq!(s.clock.now(), 1009);
    assert_eq!(s.player.lives, 2);
    assert!(s.player.invincible);

    tick(&mut s, &idle(), 1, &mut rng); // t = 1010
    assert_eq!(s.player.lives, 1);
    assert!(s.player.invincible);
}

#[test]
fn invincibility_clears_without_contact() {
    let mut s = state_with_enemy_on_player();
    let mut rng = ScriptedRandom::default();
    tick(&mut s, &idle(), 10, &mut rng);
    s.enemies = Default::default();
    s.drain_events();

    tick(&mut s, &idle(), 1000, &mut rng);
    assert!(!s.player.invincible);
    assert_eq!(s.player.appearance, Appearance::Normal);
    assert!(s.drain_events().contains(&SimEvent::InvincibilityEnded));
}

#[test]
fn several_enemies_in_contact_cost_one_life() {
    let mut s = state_with_enemy_on_player();
    let position = s.player.position + Vec2::new(5.0, 5.0);
    s.enemies.insert(Enemy {
        position,
        velocity: Vec2::ZERO,
    });
    tick(&mut s, &idle(), 10, &mut ScriptedRandom::default());
    assert_eq!(s.player.lives, 2);
}

#[test]
fn three_hits_end_the_game_and_a_fourth_is_ignored() {
    let mut s = state_with_enemy_on_player();
    let mut rng = ScriptedRandom::default();
    tick(&mut s, &idle(), 10, &mut rng);
    tick(&mut s, &idle(), 1000, &mut rng);
    tick(&mut s, &idle(), 1000, &mut rng);

    assert_eq!(s.player.lives, 0);
    assert_eq!(s.phase, Phase::GameOver);
    assert!(s
        .drain_events()
        .iter()
        .any(|e| matches!(e, SimEvent::GameOver { .. })));

    assert!(!take_damage(&mut s));
    tick(&mut s, &idle(), 1000, &mut rng);
    assert_eq!(s.player.lives, 0);
    assert_eq!(s.phase, Phase::GameOver);
}

#[test]
fn game_over_freezes_the_simulation() {
    let mut s = state_with_enemy_on_player();
    s.player.lives = 1;
    let mut rng = ScriptedRandom::default();
    tick(&mut s, &InputState { left: true, ..idle() }, 10, &mut rng);
    assert_eq!(s.phase, Phase::GameOver);

    let now = s.clock.now();
    let pos = s.player.position;
    for _ in 0..20 {
        tick(&mut s, &InputState { left: true, ..idle() }, 1000, &mut rng);
    }
    assert_eq!(s.clock.now(), now);
    assert_eq!(s.player.position, pos);
    assert!(s.projectiles.is_empty());
    assert_eq!(s.enemies.len(), 1);
}

#[test]
fn lives_never_leave_range() {
    let mut s = quiet_state();
    for _ in 0..10 {
        take_damage(&mut s);
        clear_invincibility(&mut s);
        assert!(s.player.lives <= 3);
    }
    assert_eq!(s.player.lives, 0);
}

#[test]
fn life_indicators_consumed_from_the_top() {
    let mut s = quiet_state();
    let mut indicators = Vec::new();
    for _ in 0..3 {
        take_damage(&mut s);
        clear_invincibility(&mut s);
    }
    for e in s.drain_events() {
        if let SimEvent::PlayerDamaged { indicator, .. } = e {
            indicators.push(indicator);
        }
    }
    assert_eq!(indicators, vec![2, 1, 0]);
}

#[test]
fn clear_invincibility_is_harmless_when_not_invincible() {
    let mut s = quiet_state();
    clear_invincibility(&mut s);
    assert!(!s.player.invincible);
    assert!(s.drain_events().is_empty());
}
