//! Bounds policy
//!
//! Decides where, if anywhere, an off-grid coordinate lands.

use serde::{Deserialize, Serialize};

use crate::core::ScreenBuffer;

/// What to do with a coordinate outside the current grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Silently drop the write. Partial lines and text keep their
    /// in-bounds cells.
    #[default]
    Drop,
    /// Pull the coordinate onto the nearest edge cell
    Clamp,
}

impl BoundsPolicy {
    /// Resolve `(x, y)` to a cell of `screen`, or `None` if the write
    /// must be dropped. An unset buffer has no cells, so every write is
    /// dropped under either policy.
    pub fn resolve(self, screen: &ScreenBuffer, x: i64, y: i64) -> Option<(usize, usize)> {
        if screen.contains(x, y) {
            return Some((x as usize, y as usize));
        }
        match self {
            BoundsPolicy::Drop => None,
            BoundsPolicy::Clamp if screen.is_setup() => {
                let max_x = screen.width() as i64 - 1;
                let max_y = screen.height() as i64 - 1;
                Some((x.clamp(0, max_x) as usize, y.clamp(0, max_y) as usize))
            },
            BoundsPolicy::Clamp => None,
        }
    }
}
