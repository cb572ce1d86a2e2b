//! Deterministic snapshot generation
//!
//! Snapshots capture the complete display state in a serializable format
//! for testing and debugging. Given the same command stream, the
//! interpreter must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::grid::ScreenBuffer;

/// A complete snapshot of the display state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions
    pub width: usize,
    pub height: usize,
    pub color_mode: u8,
    /// Cursor position at the time of the snapshot
    pub cursor: CursorSnapshot,
    /// Grid content, one string per row
    pub rows: Vec<String>,
}

/// Snapshot of cursor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub x: i64,
    pub y: i64,
}

impl From<&Cursor> for CursorSnapshot {
    fn from(cursor: &Cursor) -> Self {
        CursorSnapshot {
            x: cursor.x,
            y: cursor.y,
        }
    }
}

impl Snapshot {
    /// Create a snapshot from the current buffer and cursor
    pub fn capture(buffer: &ScreenBuffer, cursor: &Cursor) -> Self {
        Snapshot {
            width: buffer.width(),
            height: buffer.height(),
            color_mode: buffer.color_mode(),
            cursor: CursorSnapshot::from(cursor),
            rows: buffer.lines(),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The grid as text, one line per row. Rows keep their full width.
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(self.height * (self.width + 1));
        for row in &self.rows {
            result.push_str(row);
            result.push('\n');
        }
        result
    }

    /// Compare grid content and dimensions, ignoring cursor and color mode
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.width == other.width && self.height == other.height && self.rows == other.rows
    }

    /// Character at `(x, y)`, if any
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.chars().nth(x))
    }
}
