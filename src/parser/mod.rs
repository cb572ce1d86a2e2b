//! Command-stream parser
//!
//! Two layers: the frame decoder splits the byte stream into
//! `(opcode, payload)` frames, and [`Command::from_frame`] gives each frame
//! its meaning.

mod command;
mod frame;

pub use command::{encode_stream, glyph, opcode, Command};
pub use frame::{decode_frame, Frame, FrameDecoder, HEADER_LEN, MAX_PAYLOAD_LEN};
