//! One frame of the game: drain inputs, simulate, dispatch side effects.
//!
//! `GameLoop` owns the session state together with its collaborators (sound
//! and high-score store) so the terminal front end and the tests drive the
//! exact same frame logic.

use super::game_state::{GameEvent, GameState};
use crate::audio::{Audio, AudioCue};
use crate::config::GameConfig;
use crate::high_score::HighScoreStore;
use crate::input::GameInput;
use rand::Rng;

/// Whether the loop should keep running after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct GameLoop<A: Audio, S: HighScoreStore, R: Rng> {
    state: GameState,
    audio: A,
    store: S,
    rng: R,
}

impl<A: Audio, S: HighScoreStore, R: Rng> GameLoop<A, S, R> {
    /// Read the stored high score and set up a fresh session.
    pub fn new(config: &GameConfig, audio: A, mut store: S, rng: R) -> Self {
        let high_score = store.load();
        Self {
            state: GameState::new(config, high_score),
            audio,
            store,
            rng,
        }
    }

    /// Run one frame: apply every pending input in arrival order, then
    /// advance the simulation by `dt`. A quit request ends the frame before
    /// the simulation runs.
    pub fn frame<I>(&mut self, inputs: I, dt: f64) -> FrameOutcome
    where
        I: IntoIterator<Item = GameInput>,
    {
        for input in inputs {
            let events = self.state.handle_input(input);
            if self.dispatch(events) == FrameOutcome::Quit {
                return FrameOutcome::Quit;
            }
        }

        let events = self.state.update(dt, &mut self.rng);
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;

        for event in events {
            match event {
                GameEvent::Started => log::debug!("Run started"),
                GameEvent::Flapped => self.audio.play(AudioCue::Flap),
                GameEvent::Scored { score } => {
                    log::debug!("Score {}", score);
                    self.audio.play(AudioCue::Score);
                }
                GameEvent::NightToggled { is_night } => {
                    log::debug!("Night mode {}", if is_night { "on" } else { "off" });
                }
                GameEvent::Paused => log::debug!("Paused"),
                GameEvent::Resumed => log::debug!("Resumed"),
                GameEvent::GameOver {
                    cause,
                    score,
                    new_high_score,
                } => {
                    log::info!("Game over ({:?}) with score {}", cause, score);
                    self.audio.play(AudioCue::Death);
                    if new_high_score {
                        if let Err(e) = self.store.save(self.state.high_score) {
                            log::warn!("Failed to save high score: {}", e);
                        }
                    }
                }
                GameEvent::Restarted => log::info!("Restarted"),
                GameEvent::QuitRequested => {
                    log::info!("Quit requested");
                    outcome = FrameOutcome::Quit;
                }
            }
        }

        outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
