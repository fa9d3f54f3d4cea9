//! Mapping between world pixels and terminal cells of the play area.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect as WorldRect;
use ratatui::layout::Rect;

/// The terminal region the world was last drawn into. The whole
/// `SCREEN_WIDTH` × `SCREEN_HEIGHT` world is stretched over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn px_per_col(&self) -> f64 {
        SCREEN_WIDTH / self.area.width.max(1) as f64
    }

    fn px_per_row(&self) -> f64 {
        SCREEN_HEIGHT / self.area.height.max(1) as f64
    }

    /// World coordinates of the center of the cell at `(col, row)`, relative
    /// to the top-left of the area.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.px_per_col(),
            (row as f64 + 0.5) * self.px_per_row(),
        )
    }

    /// Map an absolute terminal position (e.g. a mouse click) into world
    /// coordinates. `None` when it falls outside the play area.
    pub fn cell_to_world(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let inside = column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height;
        inside.then(|| self.cell_center(column - self.area.x, row - self.area.y))
    }

    /// Cell (relative to the area) containing a world point.
    pub fn world_to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = (x / self.px_per_col()).floor();
        let row = (y / self.px_per_row()).floor();
        let in_range = col >= 0.0
            && row >= 0.0
            && col < self.area.width as f64
            && row < self.area.height as f64;
        in_range.then(|| (col as u16, row as u16))
    }

    /// Absolute terminal rectangle of the cells whose centers lie inside a
    /// world rectangle, clipped to the area. These are exactly the cells a
    /// click on would map into `rect`. `None` when no cell qualifies.
    pub fn world_rect_to_area(&self, rect: &WorldRect) -> Option<Rect> {
        // Cell i has its center at (i + 0.5) * size; keep left <= center < right
        let first = |edge: f64, size: f64| (edge / size - 0.5).ceil();
        let clamp = |v: f64, max: u16| v.clamp(0.0, max as f64) as u16;

        let col0 = clamp(first(rect.left(), self.px_per_col()), self.area.width);
        let col1 = clamp(first(rect.right(), self.px_per_col()), self.area.width);
        let row0 = clamp(first(rect.top(), self.px_per_row()), self.area.height);
        let row1 = clamp(first(rect.bottom(), self.px_per_row()), self.area.height);

        if col1 <= col0 || row1 <= row0 {
            return None;
        }
        Some(Rect::new(
            self.area.x + col0,
            self.area.y + row0,
            col1 - col0,
            row1 - row0,
        ))
    }
}
