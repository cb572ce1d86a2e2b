//! Commands carried by frames
//!
//! Each opcode maps to one [`Command`] variant. Fixed-arity commands must
//! carry exactly their payload length; anything else is an invalid payload.

use serde::{Deserialize, Serialize};

use super::frame::{Frame, HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::error::{CommandError, EncodeError};

/// Opcode values on the wire
pub mod opcode {
    pub const SETUP: u8 = 0x01;
    pub const DRAW_CHAR: u8 = 0x02;
    pub const DRAW_LINE: u8 = 0x03;
    pub const RENDER_TEXT: u8 = 0x04;
    pub const MOVE_CURSOR: u8 = 0x05;
    pub const DRAW_AT_CURSOR: u8 = 0x06;
    pub const CLEAR_SCREEN: u8 = 0x07;
    pub const END: u8 = 0xFF;
}

/// A decoded command
///
/// Character bytes are kept raw; [`glyph`] turns them into displayable
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// (Re)allocate the grid, clear it and draw the border
    Setup { width: u8, height: u8, color_mode: u8 },
    /// Write one character at `(x, y)`
    DrawChar { x: u8, y: u8, ch: u8 },
    /// Draw a horizontal or vertical run of `ch`
    DrawLine {
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        color: u8,
        ch: u8,
    },
    /// Lay out `text` left to right starting at `(x, y)`
    RenderText { x: u8, y: u8, color: u8, text: Vec<u8> },
    /// Set the cursor position
    MoveCursor { x: u8, y: u8 },
    /// Write one character at the cursor
    DrawAtCursor { ch: u8, color: u8 },
    /// Reset every cell to blank
    ClearScreen,
    /// Terminate the stream after a final render
    End,
}

/// Map a payload byte to the character it displays
pub fn glyph(byte: u8) -> char {
    char::from(byte)
}

fn exact<'a>(
    frame: &Frame<'a>,
    len: usize,
    expected: &'static str,
) -> Result<&'a [u8], CommandError> {
    if frame.payload.len() == len {
        Ok(frame.payload)
    } else {
        Err(CommandError::InvalidPayload {
            opcode: frame.opcode,
            expected,
            actual: frame.payload.len(),
        })
    }
}

impl Command {
    /// Interpret a frame.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownOpcode`] for opcodes outside the table and
    /// [`CommandError::InvalidPayload`] when the payload length does not fit
    /// the opcode's arity. Payloads of `ClearScreen` and `End` are ignored.
    pub fn from_frame(frame: &Frame<'_>) -> Result<Self, CommandError> {
        let command = match frame.opcode {
            opcode::SETUP => {
                let p = exact(frame, 3, "3")?;
                Command::Setup {
                    width: p[0],
                    height: p[1],
                    color_mode: p[2],
                }
            },
            opcode::DRAW_CHAR => {
                let p = exact(frame, 3, "3")?;
                Command::DrawChar {
                    x: p[0],
                    y: p[1],
                    ch: p[2],
                }
            },
            opcode::DRAW_LINE => {
                let p = exact(frame, 6, "6")?;
                Command::DrawLine {
                    x1: p[0],
                    y1: p[1],
                    x2: p[2],
                    y2: p[3],
                    color: p[4],
                    ch: p[5],
                }
            },
            opcode::RENDER_TEXT => match frame.payload {
                [x, y, color, text @ ..] => Command::RenderText {
                    x: *x,
                    y: *y,
                    color: *color,
                    text: text.to_vec(),
                },
                short => {
                    return Err(CommandError::InvalidPayload {
                        opcode: frame.opcode,
                        expected: "at least 3",
                        actual: short.len(),
                    })
                },
            },
            opcode::MOVE_CURSOR => {
                let p = exact(frame, 2, "2")?;
                Command::MoveCursor { x: p[0], y: p[1] }
            },
            opcode::DRAW_AT_CURSOR => {
                let p = exact(frame, 2, "2")?;
                Command::DrawAtCursor {
                    ch: p[0],
                    color: p[1],
                }
            },
            opcode::CLEAR_SCREEN => Command::ClearScreen,
            opcode::END => Command::End,
            other => return Err(CommandError::UnknownOpcode(other)),
        };
        Ok(command)
    }

    /// The opcode this command is sent with
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Setup { .. } => opcode::SETUP,
            Command::DrawChar { .. } => opcode::DRAW_CHAR,
            Command::DrawLine { .. } => opcode::DRAW_LINE,
            Command::RenderText { .. } => opcode::RENDER_TEXT,
            Command::MoveCursor { .. } => opcode::MOVE_CURSOR,
            Command::DrawAtCursor { .. } => opcode::DRAW_AT_CURSOR,
            Command::ClearScreen => opcode::CLEAR_SCREEN,
            Command::End => opcode::END,
        }
    }

    /// Whether this command terminates the stream
    pub fn is_end(&self) -> bool {
        matches!(self, Command::End)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Setup { .. } => "setup",
            Command::DrawChar { .. } => "draw_char",
            Command::DrawLine { .. } => "draw_line",
            Command::RenderText { .. } => "render_text",
            Command::MoveCursor { .. } => "move_cursor",
            Command::DrawAtCursor { .. } => "draw_at_cursor",
            Command::ClearScreen => "clear_screen",
            Command::End => "end",
        }
    }

    fn payload(&self) -> Vec<u8> {
        match self {
            Command::Setup {
                width,
                height,
                color_mode,
            } => vec![*width, *height, *color_mode],
            Command::DrawChar { x, y, ch } => vec![*x, *y, *ch],
            Command::DrawLine {
                x1,
                y1,
                x2,
                y2,
                color,
                ch,
            } => vec![*x1, *y1, *x2, *y2, *color, *ch],
            Command::RenderText { x, y, color, text } => {
                let mut payload = Vec::with_capacity(3 + text.len());
                payload.extend_from_slice(&[*x, *y, *color]);
                payload.extend_from_slice(text);
                payload
            },
            Command::MoveCursor { x, y } => vec![*x, *y],
            Command::DrawAtCursor { ch, color } => vec![*ch, *color],
            Command::ClearScreen | Command::End => Vec::new(),
        }
    }

    /// Encode the command as a wire frame.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::PayloadTooLong`] when the payload does not fit
    /// a one-byte length, which only `RenderText` can hit.
    pub fn try_encode(&self) -> Result<Vec<u8>, EncodeError> {
        let payload = self.payload();
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(EncodeError::PayloadTooLong(payload.len()));
        }

        let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
        frame.push(self.opcode());
        frame.push(payload.len() as u8);
        frame.extend_from_slice(&payload);
        Ok(frame)
    }
}

/// Encode a sequence of commands into one stream
///
/// # Errors
///
/// Fails on the first command whose payload does not fit a frame.
pub fn encode_stream<'a, I>(commands: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut stream = Vec::new();
    for command in commands {
        stream.extend_from_slice(&command.try_encode()?);
    }
    Ok(stream)
}
