//! Terminal rendering of the game world, HUD and overlays.
//!
//! The play area is drawn with a cell buffer approach: each terminal cell
//! samples the world at its center point and picks sky, pipe, ground or
//! bird styling from what it hits.

use super::game_common::{hint, render_centered_line, render_screen_frame, render_status_bar};
use super::viewport::Viewport;
use crate::constants::SCREEN_HEIGHT;
use crate::core::game_state::{GameState, Phase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width in world pixels of one ground texture stripe.
const GROUND_STRIPE_PX: f64 = 24.0;

/// Background/ground color set for day or night.
struct Palette {
    border: Color,
    sky: Color,
    pipe: Color,
    grass: Color,
    ground: Color,
    ground_alt: Color,
}

const DAY: Palette = Palette {
    border: Color::Cyan,
    sky: Color::Rgb(112, 197, 206),
    pipe: Color::Rgb(94, 160, 58),
    grass: Color::Rgb(115, 191, 46),
    ground: Color::Rgb(222, 216, 149),
    ground_alt: Color::Rgb(205, 190, 120),
};

const NIGHT: Palette = Palette {
    border: Color::Blue,
    sky: Color::Rgb(14, 30, 62),
    pipe: Color::Rgb(40, 96, 40),
    grass: Color::Rgb(46, 90, 30),
    ground: Color::Rgb(96, 84, 60),
    ground_alt: Color::Rgb(80, 70, 50),
};

fn palette(is_night: bool) -> &'static Palette {
    if is_night {
        &NIGHT
    } else {
        &DAY
    }
}

/// Render the whole game screen and return the viewport used for the play
/// area, so pointer input can be mapped back into the world.
pub fn render_game_scene(frame: &mut Frame, area: Rect, state: &GameState) -> Viewport {
    let layout = render_screen_frame(frame, area, palette(state.is_night).border);
    let viewport = Viewport::new(layout.play);

    render_world(frame, &viewport, state);
    render_hud(frame, layout.play, state);
    match state.phase() {
        Phase::Paused => render_paused_overlay(frame, &viewport),
        Phase::GameOver => render_game_over_overlay(frame, &viewport, state),
        Phase::Ready | Phase::Playing => {}
    }
    render_status_bar_content(frame, layout.status, state);
    render_info_panel(frame, layout.side_panel, state);

    viewport
}

/// Bird glyph for the current tilt.
fn bird_glyph(rotation: f64) -> &'static str {
    if rotation > 10.0 {
        "▲" // climbing
    } else if rotation < -45.0 {
        "▼" // diving
    } else {
        "►"
    }
}

fn render_world(frame: &mut Frame, viewport: &Viewport, state: &GameState) {
    let area = viewport.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let colors = palette(state.is_night);
    let bird_rect = state.bird.rect();
    let bird_cell = viewport.world_to_cell(state.bird.x, state.bird.y);
    let row_height = SCREEN_HEIGHT / area.height as f64;

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);

        for col in 0..area.width {
            let (x, y) = viewport.cell_center(col, row);

            if bird_cell == Some((col, row)) {
                spans.push(Span::styled(
                    bird_glyph(state.bird.rotation()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let style = if y >= state.ground.y {
                if y - state.ground.y < row_height {
                    Style::default().bg(colors.grass)
                } else {
                    Style::default().bg(ground_color(state, colors, x))
                }
            } else if bird_rect.contains(x, y) {
                Style::default().bg(Color::Yellow)
            } else if state
                .pipes
                .iter()
                .any(|pipe| pipe.rects().iter().any(|r| r.contains(x, y)))
            {
                Style::default().bg(colors.pipe)
            } else {
                Style::default().bg(colors.sky)
            };
            spans.push(Span::styled(" ", style));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Alternating stripes anchored to whichever ground tile covers `x`, so
/// the texture visibly scrolls with the tiles.
fn ground_color(state: &GameState, colors: &Palette, x: f64) -> Color {
    let ground = &state.ground;
    let tile_left = ground
        .tile_x
        .iter()
        .copied()
        .find(|&left| x >= left && x < left + ground.tile_width)
        .unwrap_or(0.0);
    let stripe = ((x - tile_left) / GROUND_STRIPE_PX).floor() as i64;
    if stripe % 2 == 0 {
        colors.ground
    } else {
        colors.ground_alt
    }
}

fn render_hud(frame: &mut Frame, area: Rect, state: &GameState) {
    if area.height < 2 || area.width < 12 {
        return;
    }
    let style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(format!(" Score : {}", state.score), style)),
        Line::from(Span::styled(format!(" High : {}", state.high_score), style)),
    ];
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: 2,
            ..area
        },
    );
}

fn overlay_row(viewport: &Viewport, world_y: f64) -> u16 {
    viewport
        .world_to_cell(0.0, world_y)
        .map(|(_, row)| row)
        .unwrap_or(0)
}

fn render_paused_overlay(frame: &mut Frame, viewport: &Viewport) {
    let row = overlay_row(viewport, 300.0);
    render_centered_line(
        frame,
        viewport.area(),
        row,
        Line::from(Span::styled(
            " PAUSED ",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )),
    );
}

fn render_game_over_overlay(frame: &mut Frame, viewport: &Viewport, state: &GameState) {
    let row = overlay_row(viewport, 320.0);
    render_centered_line(
        frame,
        viewport.area(),
        row,
        Line::from(Span::styled(
            " GAME OVER ",
            Style::default()
                .fg(Color::Red)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )),
    );

    if let Some(button) = viewport.world_rect_to_area(&state.restart_button) {
        let style = Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(""); button.height as usize];
        if let Some(middle) = lines.get_mut(button.height as usize / 2) {
            *middle = Line::from("Restart");
        }
        frame.render_widget(
            Paragraph::new(lines)
                .style(style)
                .alignment(Alignment::Center),
            button,
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, state: &GameState) {
    match state.phase() {
        Phase::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[
                hint("[Space]", "Flap"),
                hint("[Enter]", "Start"),
                hint("[N]", "Night"),
                hint("[Esc]", "Quit"),
            ],
        ),
        Phase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", state.score),
            Color::Green,
            &[
                hint("[Space]", "Flap"),
                hint("[P]", "Pause"),
                hint("[N]", "Night"),
                hint("[Esc]", "Quit"),
            ],
        ),
        Phase::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Cyan,
            &[hint("[P]", "Resume"), hint("[N]", "Night"), hint("[Esc]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            &format!("You crashed after {} pipes.", state.score),
            Color::Red,
            &[hint("[Click]/[R]", "Restart"), hint("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, inner: Rect, state: &GameState) {
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let (phase_name, phase_color) = match state.phase() {
        Phase::Ready => ("Ready", Color::Yellow),
        Phase::Playing => ("Flying", Color::Green),
        Phase::Paused => ("Paused", Color::Cyan),
        Phase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                state.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Sky: ", label),
            Span::raw(if state.is_night { "Night" } else { "Day" }),
        ]),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(phase_name, Style::default().fg(phase_color)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &GameState) -> (String, Viewport) {
        let mut terminal = Terminal::new(TestBackend::new(90, 44)).unwrap();
        let mut viewport = None;
        terminal
            .draw(|f| {
                let area = f.size();
                viewport = Some(render_game_scene(f, area, state));
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (text, viewport.unwrap())
    }

    #[test]
    fn test_bird_glyphs() {
        assert_eq!(bird_glyph(25.0), "▲");
        assert_eq!(bird_glyph(0.0), "►");
        assert_eq!(bird_glyph(-90.0), "▼");
    }

    #[test]
    fn test_ready_screen_shows_hud() {
        let state = GameState::new(&GameConfig::default(), 12);
        let (text, _) = render(&state);
        assert!(text.contains("Score : 0"));
        assert!(text.contains("High : 12"));
        assert!(text.contains("Press Space to start!"));
        assert!(text.contains("►"));
    }

    #[test]
    fn test_game_over_shows_restart_button() {
        let mut state = GameState::new(&GameConfig::default(), 0);
        state.game_over = true;
        let (text, viewport) = render(&state);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Restart"));

        let button = viewport.world_rect_to_area(&state.restart_button).unwrap();
        let (x, y) = viewport.cell_to_world(button.x + 1, button.y + 1).unwrap();
        assert!(state.restart_button.contains(x, y));
    }

    #[test]
    fn test_paused_overlay() {
        let mut state = GameState::new(&GameConfig::default(), 0);
        state.paused = true;
        let (text, _) = render(&state);
        assert!(text.contains("PAUSED"));
    }
}
