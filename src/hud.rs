//! Display values derived from the event stream.
//!
//! The core never draws.  A front end implements [`DisplaySink`] (or uses
//! [`Hud`] as-is) and feeds it the events drained after each tick.

use crate::entities::GameState;
use crate::events::{SimEvent, UpgradeChoice};

pub trait DisplaySink {
    fn handle(&mut self, event: &SimEvent);

    fn handle_all(&mut self, events: &[SimEvent]) {
        for event in events {
            self.handle(event);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score_text: String,
    pub experience_text: String,
    /// One entry per life marker; `false` once that life is gone.
    pub life_indicators: Vec<bool>,
    pub banner: Option<String>,
    /// Non-empty while an upgrade choice is pending.
    pub prompt: Vec<UpgradeChoice>,
}

impl Hud {
    pub fn new(state: &GameState) -> Self {
        Self {
            score_text: score_text(state.score),
            experience_text: experience_text(
                state.progression.experience,
                state.progression.experience_to_next,
            ),
            life_indicators: (0..state.config.max_lives as u32)
                .map(|i| i < state.player.lives as u32)
                .collect(),
            banner: None,
            prompt: Vec::new(),
        }
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

fn experience_text(experience: u32, to_next: u32) -> String {
    format!("XP: {experience} / {to_next}")
}

impl DisplaySink for Hud {
    fn handle(&mut self, event: &SimEvent) {
        match event {
            SimEvent::ScoreChanged { score } => self.score_text = score_text(*score),
            SimEvent::ExperienceChanged {
                experience,
                experience_to_next,
            } => self.experience_text = experience_text(*experience, *experience_to_next),
            SimEvent::PlayerDamaged { indicator, .. } => {
                if let Some(shown) = self.life_indicators.get_mut(*indicator) {
                    *shown = false;
                }
            }
            SimEvent::GameOver { .. } => self.banner = Some("GAME OVER".to_string()),
            SimEvent::LevelUp { choices, .. } => self.prompt = choices.clone(),
            SimEvent::UpgradeApplied { .. } => self.prompt.clear(),
            _ => {}
        }
    }
}
