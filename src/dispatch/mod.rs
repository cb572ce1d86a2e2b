//! Command Dispatcher
//!
//! Applies decoded commands to the screen buffer and cursor. The dispatcher
//! owns the bounds policy: every coordinate is checked here before the
//! buffer's unchecked [`ScreenBuffer::set`] is called. Conditions that do not
//! stop a run (unknown opcodes, bad payloads, off-grid writes) are logged and
//! counted in [`Diagnostics`].

mod bounds;
mod diagnostics;

pub use bounds::BoundsPolicy;
pub use diagnostics::Diagnostics;

use tracing::{debug, trace, warn};

use crate::core::{Cursor, ScreenBuffer};
use crate::error::CommandError;
use crate::parser::{glyph, Command};

/// Applies commands under a bounds policy and keeps diagnostics
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    policy: BoundsPolicy,
    diagnostics: Diagnostics,
}

impl Dispatcher {
    pub fn new(policy: BoundsPolicy) -> Self {
        Self {
            policy,
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Mutable access for the interpreter's frame and render counters
    pub(crate) fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Record a frame that could not become a command. The frame is skipped.
    pub fn reject(&mut self, offset: usize, error: &CommandError) {
        match error {
            CommandError::UnknownOpcode(_) => self.diagnostics.unknown_opcodes += 1,
            CommandError::InvalidPayload { .. } => self.diagnostics.invalid_payloads += 1,
        }
        warn!(offset, "skipping frame: {}", error);
    }

    /// Apply one command to the buffer and cursor
    pub fn apply(&mut self, command: &Command, screen: &mut ScreenBuffer, cursor: &mut Cursor) {
        debug!(command = command.name(), "apply");

        match command {
            Command::Setup {
                width,
                height,
                color_mode,
            } => {
                screen.resize(usize::from(*width), usize::from(*height), *color_mode);
                screen.draw_border();
            },
            Command::DrawChar { x, y, ch } => {
                self.write(screen, i64::from(*x), i64::from(*y), glyph(*ch));
            },
            Command::DrawLine {
                x1, y1, x2, y2, ch, ..
            } => self.draw_line(screen, (*x1, *y1), (*x2, *y2), glyph(*ch)),
            Command::RenderText { x, y, text, .. } => {
                let (x, y) = (i64::from(*x), i64::from(*y));
                // Off-grid characters are skipped; the rest still land.
                for (i, byte) in (0_i64..).zip(text.iter()) {
                    self.write(screen, x + i, y, glyph(*byte));
                }
            },
            Command::MoveCursor { x, y } => cursor.move_to(i64::from(*x), i64::from(*y)),
            Command::DrawAtCursor { ch, .. } => {
                self.write(screen, cursor.x, cursor.y, glyph(*ch));
            },
            Command::ClearScreen => screen.clear(),
            Command::End => {},
        }

        self.diagnostics.commands_applied += 1;
    }

    fn draw_line(&mut self, screen: &mut ScreenBuffer, from: (u8, u8), to: (u8, u8), ch: char) {
        let (x1, y1) = (i64::from(from.0), i64::from(from.1));
        let (x2, y2) = (i64::from(to.0), i64::from(to.1));

        if x1 == x2 {
            for y in y1.min(y2)..=y1.max(y2) {
                self.write(screen, x1, y, ch);
            }
        } else if y1 == y2 {
            for x in x1.min(x2)..=x1.max(x2) {
                self.write(screen, x, y1, ch);
            }
        } else {
            self.diagnostics.diagonal_lines += 1;
            debug!(x1, y1, x2, y2, "diagonal line ignored");
        }
    }

    /// Bounds-checked write
    fn write(&mut self, screen: &mut ScreenBuffer, x: i64, y: i64, ch: char) {
        match self.policy.resolve(screen, x, y) {
            Some((col, row)) => screen.set(col, row, ch),
            None => {
                self.diagnostics.out_of_bounds += 1;
                trace!(x, y, width = screen.width(), height = screen.height(), "write dropped");
            },
        }
    }
}
