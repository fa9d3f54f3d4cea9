//! Terminal UI: renders the game state with ratatui.

pub mod game_common;
pub mod game_scene;
pub mod viewport;

use crate::core::game_state::GameState;
use ratatui::Frame;
use viewport::Viewport;

/// Draw one frame of the game. Returns the play-area viewport for mapping
/// mouse clicks on the next frame.
pub fn draw_game(frame: &mut Frame, state: &GameState) -> Viewport {
    let area = frame.size();
    game_scene::render_game_scene(frame, area, state)
}
