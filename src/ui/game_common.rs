//! Screen frame shared by every phase: bordered play area, two-line status
//! bar underneath and a side panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Minimum rows kept for the play area before the status bar gets any.
const PLAY_AREA_MIN_ROWS: u16 = 10;
const SIDE_PANEL_WIDTH: u16 = 22;

/// Areas carved out by `render_screen_frame`.
///
/// ```text
/// ┌─ Flappy Bird ───────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   play                          │  side_panel │
/// │                                 │             │
/// │ status (2 rows)                 │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub struct ScreenLayout {
    pub play: Rect,
    pub status: Rect,
    /// Inside of the bordered side panel.
    pub side_panel: Rect,
}

/// Clear `area`, draw the outer and side-panel borders and return the
/// regions to fill.
pub fn render_screen_frame(frame: &mut Frame, area: Rect, border_color: Color) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(PLAY_AREA_MIN_ROWS), Constraint::Length(2)])
        .split(columns[0]);

    let panel = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let side_panel = panel.inner(columns[1]);
    frame.render_widget(panel, columns[1]);

    ScreenLayout {
        play: rows[0],
        status: rows[1],
        side_panel,
    }
}

/// One key binding shown in the status bar, e.g. `[P] Pause`.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

pub const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

/// Message on the first row, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }
    render_centered_line(
        frame,
        area,
        0,
        Line::from(Span::styled(message.to_string(), Style::default().fg(color))),
    );

    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            let sep = if i == 0 { "" } else { "  " };
            [
                Span::raw(sep),
                Span::styled(h.key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", h.action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    render_centered_line(frame, area, 1, Line::from(spans));
}

/// Render one centered line of text on row `row` of `area`. Rows past the
/// bottom are dropped.
pub fn render_centered_line(frame: &mut Frame, area: Rect, row: u16, text: Line) {
    if row >= area.height {
        return;
    }
    let line_area = Rect {
        y: area.y + row,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), line_area);
}
