//! Run diagnostics
//!
//! Counters for everything the interpreter recovers from locally, plus
//! frame and render totals.

use serde::{Deserialize, Serialize};

/// Counters collected over one interpreter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Frames decoded, including skipped ones
    pub frames: u64,
    /// Commands applied to the grid or cursor
    pub commands_applied: u64,
    /// Frames with an opcode outside the table
    pub unknown_opcodes: u64,
    /// Frames whose payload length did not match the opcode
    pub invalid_payloads: u64,
    /// Cell writes dropped by the bounds policy
    pub out_of_bounds: u64,
    /// Lines ignored because they were neither horizontal nor vertical
    pub diagonal_lines: u64,
    /// Render calls made
    pub renders: u64,
    /// Render calls whose sink failed
    pub render_failures: u64,
}

impl Diagnostics {
    /// Frames that were skipped instead of applied
    pub fn skipped_frames(&self) -> u64 {
        self.unknown_opcodes + self.invalid_payloads
    }

    /// Whether the run saw any recovered condition at all
    pub fn is_clean(&self) -> bool {
        self.skipped_frames() == 0
            && self.out_of_bounds == 0
            && self.diagonal_lines == 0
            && self.render_failures == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let diagnostics = Diagnostics::default();
        assert!(diagnostics.is_clean());
        assert_eq!(diagnostics.skipped_frames(), 0);
    }

    #[test]
    fn test_skipped_frames() {
        let diagnostics = Diagnostics {
            unknown_opcodes: 2,
            invalid_payloads: 1,
            ..Default::default()
        };
        assert_eq!(diagnostics.skipped_frames(), 3);
        assert!(!diagnostics.is_clean());
    }
}
