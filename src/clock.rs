//! Simulation clock: the spawn/fire interval accumulators and the queue of
//! one-shot scheduled actions.
//!
//! Nothing here knows about entities.  A scheduled action only carries a
//! [`Handle`]; whoever consumes the due actions checks that the handle is
//! still live before acting on it.

use crate::arena::Handle;

/// Milliseconds of simulation time.
pub type Millis = u64;

/// Repeating trigger that fires once its accumulator strictly exceeds the
/// interval, then restarts from zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalTimer {
    elapsed: Millis,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Add running time.  Called on every tick that starts out running, even
    /// if the tick ends in a pause.
    pub fn accumulate(&mut self, delta: Millis) {
        self.elapsed += delta;
    }

    /// Report whether the accumulated time exceeds `interval`, restarting
    /// from zero if so.  The interval is passed in on every call because it
    /// changes as the game progresses.
    pub fn take_due(&mut self, interval: Millis) -> bool {
        if self.elapsed > interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> Millis {
        self.elapsed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What a one-shot timer does when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Projectile lifetime ran out.
    ExpireProjectile(Handle),
    /// Post-damage invincibility window is over.
    ClearInvincibility,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scheduled {
    pub id: TimerId,
    pub deadline: Millis,
    pub action: Action,
}

#[derive(Clone, Debug, Default)]
pub struct Clock {
    now: Millis,
    pub spawn: IntervalTimer,
    pub fire: IntervalTimer,
    scheduled: Vec<Scheduled>,
    next_id: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulation time advanced so far.
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn advance(&mut self, delta: Millis) {
        self.now += delta;
    }

    /// Queue `action` to come due `offset` ms from now.
    pub fn schedule(&mut self, offset: Millis, action: Action) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.scheduled.push(Scheduled {
            id,
            deadline: self.now + offset,
            action,
        });
        id
    }

    /// Drop a pending action.  Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.scheduled.len();
        self.scheduled.retain(|s| s.id != id);
        self.scheduled.len() != before
    }

    /// Remove and return every action whose deadline has been reached, in
    /// deadline order.  Each action is returned exactly once.
    pub fn take_due(&mut self) -> Vec<Action> {
        let now = self.now;
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.scheduled.drain(..).partition(|s| s.deadline <= now);
        self.scheduled = pending;
        due.sort_by_key(|s| (s.deadline, s.id.0));
        due.into_iter().map(|s| s.action).collect()
    }

    pub fn pending(&self) -> &[Scheduled] {
        &self.scheduled
    }
}
