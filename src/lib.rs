//! Simulation core for a top-down survival shooter.
//!
//! The library is pure game logic: callers feed it an [`input::InputState`],
//! an elapsed time and a [`random::RandomSource`], and read back the new
//! [`entities::GameState`] plus the [`events::SimEvent`]s the tick produced.
//! The terminal front end in `main.rs` is one such caller.

pub mod arena;
pub mod clock;
pub mod collision;
pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod health;
pub mod hud;
pub mod input;
pub mod movement;
pub mod progression;
pub mod random;
pub mod upgrades;
