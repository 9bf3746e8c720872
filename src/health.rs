//! Lives, the post-hit invincibility window, and the game-over transition.

use tracing::info;

use crate::clock::Action;
use crate::entities::{Appearance, GameState, Phase};
use crate::events::SimEvent;

/// An enemy touched the player.  Ignored while invincible or once the game
/// is no longer running; returns whether a life was actually lost.
pub fn take_damage(state: &mut GameState) -> bool {
    if state.player.invincible || !state.phase.is_running() || state.player.lives == 0 {
        return false;
    }

    let player = &mut state.player;
    player.lives -= 1;
    player.invincible = true;
    player.appearance = Appearance::Flashing;
    let lives = player.lives;

    // Markers are consumed from the highest index down.
    state.emit(SimEvent::PlayerDamaged {
        lives,
        indicator: lives as usize,
    });

    if lives == 0 {
        state.phase = Phase::GameOver;
        info!(score = state.score, level = state.progression.level, "game over");
        state.emit(SimEvent::GameOver { score: state.score });
        return true;
    }

    state
        .clock
        .schedule(state.config.invincibility_ms, Action::ClearInvincibility);
    true
}

pub fn clear_invincibility(state: &mut GameState) {
    if !state.player.invincible {
        return;
    }
    state.player.invincible = false;
    state.player.appearance = Appearance::Normal;
    state.emit(SimEvent::InvincibilityEnded);
}
