//! Per-tick input sample.

use glam::Vec2;

/// Held directions plus the pointer the player aims with.  Sampled once per
/// tick by the front end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// World coordinates.
    pub pointer: Vec2,
}

impl InputState {
    pub fn aiming_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// -1, 0 or +1 on each axis (y grows downward).  When opposite keys are
    /// both held, right and down win.  Not normalised: diagonals are longer.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| {
            if pos {
                1.0
            } else if neg {
                -1.0
            } else {
                0.0
            }
        };
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
