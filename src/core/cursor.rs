//! Cursor state
//!
//! The cursor is owned by the interpreter, not the buffer. Its position is
//! never validated when set; cursor-relative drawing checks it at the point
//! of use.

use serde::{Deserialize, Serialize};

/// Tracked cursor position (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: i64,
    pub y: i64,
}

impl Cursor {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move the cursor unconditionally
    pub fn move_to(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }
}
