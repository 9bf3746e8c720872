mod common;

use glam::Vec2;

use swarm_survivor::compute::{choose_upgrade_at, tick};
use swarm_survivor::entities::Crystal;
use swarm_survivor::hud::{DisplaySink, Hud};
use swarm_survivor::input::InputState;

use common::{make_state, quiet_state, ScriptedRandom};

fn idle() -> InputState {
    InputState::aiming_at(Vec2::new(800.0, 300.0))
}

#[test]
fn fresh_hud_texts() {
    let hud = Hud::new(&make_state());
    assert_eq!(hud.score_text, "Score: 0");
    assert_eq!(hud.experience_text, "XP: 0 / 5");
    assert_eq!(hud.life_indicators, vec![true, true, true]);
    assert_eq!(hud.banner, None);
    assert!(hud.prompt.is_empty());
}

#[test]
fn hud_tracks_a_kill_and_a_pickup() {
    let mut s = quiet_state();
    let mut hud = Hud::new(&s);
    let mut rng = ScriptedRandom::default();

    s.enemies.insert(swarm_survivor::entities::Enemy {
        position: Vec2::new(450.0, 300.0),
        velocity: Vec2::ZERO,
    });
    swarm_survivor::combat::fire(&mut s, Vec2::new(800.0, 300.0));
    tick(&mut s, &idle(), 100, &mut rng);
    hud.handle_all(&s.drain_events());
    assert_eq!(hud.score_text, "Score: 1");

    let position = s.player.position;
    s.crystals.insert(Crystal { position });
    tick(&mut s, &idle(), 10, &mut rng);
    hud.handle_all(&s.drain_events());
    assert_eq!(hud.experience_text, "XP: 1 / 5");
}

#[test]
fn hud_hides_life_markers_top_down_and_shows_game_over() {
    let mut s = quiet_state();
    let mut hud = Hud::new(&s);
    let position = s.player.position;
    s.enemies.insert(swarm_survivor::entities::Enemy {
        position,
        velocity: Vec2::ZERO,
    });
    let mut rng = ScriptedRandom::default();

    tick(&mut s, &idle(), 10, &mut rng);
    hud.handle_all(&s.drain_events());
    assert_eq!(hud.life_indicators, vec![true, true, false]);

    tick(&mut s, &idle(), 1000, &mut rng);
    tick(&mut s, &idle(), 1000, &mut rng);
    hud.handle_all(&s.drain_events());
    assert_eq!(hud.life_indicators, vec![false, false, false]);
    assert_eq!(hud.banner.as_deref(), Some("GAME OVER"));
}

#[test]
fn hud_prompt_appears_and_clears() {
    let mut s = quiet_state();
    let mut hud = Hud::new(&s);
    let mut rng = ScriptedRandom::default();
    s.progression.experience = 4;
    let position = s.player.position;
    s.crystals.insert(Crystal { position });

    tick(&mut s, &idle(), 10, &mut rng);
    hud.handle_all(&s.drain_events());
    assert_eq!(hud.prompt.len(), 3);
    assert_eq!(hud.experience_text, "XP: 0 / 8");

    choose_upgrade_at(&mut s, 2).unwrap();
    hud.handle_all(&s.drain_events());
    assert!(hud.prompt.is_empty());
}

#[derive(Default)]
struct Counter(usize);

impl DisplaySink for Counter {
    fn handle(&mut self, _event: &swarm_survivor::events::SimEvent) {
        self.0 += 1;
    }
}

#[test]
fn custom_sink_sees_every_event() {
    let mut s = quiet_state();
    swarm_survivor::combat::fire(&mut s, Vec2::ZERO);
    swarm_survivor::combat::fire(&mut s, Vec2::ZERO);
    let mut sink = Counter::default();
    sink.handle_all(&s.drain_events());
    assert_eq!(sink.0, 2);
}
