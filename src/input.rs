//! Discrete player inputs and their terminal key/mouse bindings.

use crate::ui::viewport::Viewport;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    /// Space or Up: start if needed and flap.
    Flap,
    /// Enter: start the run without flapping.
    Confirm,
    /// P
    TogglePause,
    /// N
    ToggleNight,
    /// R on the game-over screen.
    Restart,
    /// Pointer press, already mapped into world coordinates.
    Click { x: f64, y: f64 },
    /// Esc, Q or Ctrl-C.
    Quit,
}

/// Translate a terminal event. Mouse events need the viewport of the last
/// drawn frame to resolve world coordinates.
pub fn map_event(event: &Event, viewport: Option<&Viewport>) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, viewport?),
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<GameInput> {
    // Some platforms also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(GameInput::Flap),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameInput::TogglePause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameInput::ToggleNight),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, viewport: &Viewport) -> Option<GameInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => viewport
            .cell_to_world(mouse.column, mouse.row)
            .map(|(x, y)| GameInput::Click { x, y }),
        _ => None,
    }
}
