//! Flappy - terminal Flappy Bird.
//!
//! The library holds the simulation (bird, pipes, collision, session state),
//! its collaborators (audio, high-score store, config) and the ratatui front
//! end, so integration tests can drive the same frame logic as the binary.

pub mod audio;
pub mod build_info;
pub mod collision;
pub mod config;
pub mod constants;
pub mod core;
pub mod entities;
pub mod high_score;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::game_state::{GameEvent, GameState, Phase};
pub use crate::core::{FrameClock, FrameOutcome, GameLoop};
pub use config::GameConfig;
pub use input::GameInput;
