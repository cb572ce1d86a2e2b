//! Grid Core Module
//!
//! Platform-independent display state. This module contains:
//! - The screen buffer (a dumb grid of characters)
//! - The cursor used by cursor-relative commands
//! - Deterministic snapshot generation
//!
//! Given the same command stream, the core always ends up in the same state.

mod cursor;
mod grid;
mod snapshot;

pub use cursor::Cursor;
pub use grid::{Row, ScreenBuffer, BLANK, BORDER_CORNER, BORDER_HORIZONTAL, BORDER_VERTICAL};
pub use snapshot::{CursorSnapshot, Snapshot};
