use swarm_survivor::arena::Arena;
use swarm_survivor::clock::{Action, Clock, IntervalTimer};

fn step(t: &mut IntervalTimer, delta: u64, interval: u64) -> bool {
    t.accumulate(delta);
    t.take_due(interval)
}

#[test]
fn interval_fires_only_when_strictly_exceeded() {
    let mut t = IntervalTimer::new();
    assert!(!step(&mut t, 1000, 1000));
    assert_eq!(t.elapsed(), 1000);
    assert!(step(&mut t, 1, 1000));
    assert_eq!(t.elapsed(), 0);
}

#[test]
fn interval_restarts_from_zero_after_large_delta() {
    let mut t = IntervalTimer::new();
    assert!(step(&mut t, 5000, 1000));
    // One firing per tick, no carry-over.
    assert_eq!(t.elapsed(), 0);
    assert!(!step(&mut t, 1000, 1000));
}

#[test]
fn interval_reads_current_interval_each_tick() {
    let mut t = IntervalTimer::new();
    assert!(!step(&mut t, 900, 1000));
    assert!(step(&mut t, 1, 850));
}

#[test]
fn accumulated_time_waits_until_checked() {
    let mut t = IntervalTimer::new();
    t.accumulate(1200);
    assert_eq!(t.elapsed(), 1200);
    assert!(t.take_due(1000));
    assert!(!t.take_due(1000));
}

#[test]
fn one_shot_fires_once_at_its_deadline() {
    let mut clock = Clock::new();
    clock.schedule(100, Action::ClearInvincibility);

    clock.advance(99);
    assert!(clock.take_due().is_empty());

    clock.advance(1);
    assert_eq!(clock.take_due(), vec![Action::ClearInvincibility]);

    clock.advance(1000);
    assert!(clock.take_due().is_empty());
    assert!(clock.pending().is_empty());
}

#[test]
fn due_actions_come_back_in_deadline_order() {
    let mut arena = Arena::new();
    let a = arena.insert(());
    let b = arena.insert(());

    let mut clock = Clock::new();
    clock.schedule(300, Action::ExpireProjectile(a));
    clock.schedule(100, Action::ExpireProjectile(b));
    clock.schedule(200, Action::ClearInvincibility);
    clock.advance(500);

    assert_eq!(
        clock.take_due(),
        vec![
            Action::ExpireProjectile(b),
            Action::ClearInvincibility,
            Action::ExpireProjectile(a),
        ]
    );
}

#[test]
fn deadlines_are_relative_to_now() {
    let mut clock = Clock::new();
    clock.advance(1000);
    clock.schedule(50, Action::ClearInvincibility);
    assert_eq!(clock.pending()[0].deadline, 1050);
}

#[test]
fn cancelled_action_never_fires() {
    let mut clock = Clock::new();
    let id = clock.schedule(10, Action::ClearInvincibility);
    assert!(clock.cancel(id));
    assert!(!clock.cancel(id));
    clock.advance(100);
    assert!(clock.take_due().is_empty());
}
