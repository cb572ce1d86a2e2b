//! Built-in demo stream
//!
//! A short drawing that exercises every opcode, for `gridwire --demo`.

use crate::error::EncodeError;
use crate::parser::{encode_stream, Command};

/// The demo drawing as a list of commands
pub fn demo_commands() -> Vec<Command> {
    vec![
        Command::Setup {
            width: 40,
            height: 15,
            color_mode: 1,
        },
        Command::DrawChar { x: 5, y: 5, ch: b'A' },
        Command::RenderText {
            x: 2,
            y: 2,
            color: 7,
            text: b"Interns are great".to_vec(),
        },
        Command::DrawLine {
            x1: 10,
            y1: 5,
            x2: 15,
            y2: 5,
            color: 3,
            ch: b'=',
        },
        Command::DrawLine {
            x1: 20,
            y1: 2,
            x2: 20,
            y2: 10,
            color: 4,
            ch: b'|',
        },
        Command::MoveCursor { x: 30, y: 12 },
        Command::DrawAtCursor { ch: b'@', color: 2 },
        Command::End,
    ]
}

/// The demo drawing as a wire stream
pub fn demo_stream() -> Result<Vec<u8>, EncodeError> {
    encode_stream(&demo_commands())
}
