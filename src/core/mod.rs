//! Core game state, frame loop and frame pacing.

pub mod clock;
pub mod game_loop;
pub mod game_state;

pub use clock::FrameClock;
pub use game_loop::{FrameOutcome, GameLoop};
pub use game_state::{GameEvent, GameState, Phase};
