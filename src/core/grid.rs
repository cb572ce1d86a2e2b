//! Screen Buffer
//!
//! A 2D grid of single-character cells. The buffer is deliberately dumb:
//! [`ScreenBuffer::set`] performs no bounds policy of its own. Deciding
//! whether a coordinate may be written is the dispatcher's job.

use serde::{Deserialize, Serialize};

/// The blank cell value
pub const BLANK: char = ' ';

/// Border glyphs drawn by [`ScreenBuffer::draw_border`]
pub const BORDER_HORIZONTAL: char = '-';
pub const BORDER_VERTICAL: char = '|';
pub const BORDER_CORNER: char = '+';

/// A row of cells in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<char>,
}

impl Row {
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![BLANK; cols],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Render the row as a single line of text
    pub fn to_text(&self) -> String {
        self.cells.iter().collect()
    }
}

/// The screen buffer: `height` rows of `width` cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBuffer {
    rows: Vec<Row>,
    width: usize,
    height: usize,
    color_mode: u8,
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenBuffer {
    /// An unset buffer with zero dimensions
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: 0,
            height: 0,
            color_mode: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Informational only; never checked against cell values
    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    /// Whether a setup has given the buffer non-zero dimensions
    pub fn is_setup(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether `(x, y)` addresses a cell in the current grid
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Reallocate the grid to `width` x `height` and clear it.
    ///
    /// Nothing from the previous grid survives, even when the dimensions
    /// are unchanged.
    pub fn resize(&mut self, width: usize, height: usize, color_mode: u8) {
        self.width = width;
        self.height = height;
        self.color_mode = color_mode;
        self.rows = (0..height).map(|_| Row::new(width)).collect();
    }

    /// Reset every cell to blank without touching the dimensions
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Write a cell. The caller must have checked bounds first.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        self.rows[y].cells[x] = ch;
    }

    /// Read a cell, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|r| r.cells.get(x)).copied()
    }

    /// Every row as a line of text
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(Row::to_text).collect()
    }

    /// Draw the one-cell frame around the grid: `-` along the top and
    /// bottom, `|` along the sides, `+` in the corners.
    pub fn draw_border(&mut self) {
        if !self.is_setup() {
            return;
        }
        let (right, bottom) = (self.width - 1, self.height - 1);

        for x in 0..self.width {
            self.set(x, 0, BORDER_HORIZONTAL);
            self.set(x, bottom, BORDER_HORIZONTAL);
        }
        for y in 0..self.height {
            self.set(0, y, BORDER_VERTICAL);
            self.set(right, y, BORDER_VERTICAL);
        }
        for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
            self.set(x, y, BORDER_CORNER);
        }
    }
}
