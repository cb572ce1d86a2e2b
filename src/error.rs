//! Error types
//!
//! Only [`FrameError`] is fatal to a run. Everything else is recovered
//! locally by the dispatcher and shows up as a diagnostic.

use thiserror::Error;

/// Stream-level decoding failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The stream ended in the middle of a frame header or payload
    #[error("frame truncated at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Offset of the frame's opcode byte
        offset: usize,
        /// Bytes the frame needs from `offset`
        needed: usize,
        /// Bytes remaining from `offset`
        available: usize,
    },
}

/// A frame that decoded but could not become a [`Command`](crate::parser::Command)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown opcode 0x{0:02X}")]
    UnknownOpcode(u8),
    #[error("invalid payload for opcode 0x{opcode:02X}: expected {expected} bytes, got {actual}")]
    InvalidPayload {
        opcode: u8,
        /// Human readable arity, e.g. `3` or `at least 3`
        expected: &'static str,
        actual: usize,
    },
}

/// Failure to put a command on the wire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("payload of {0} bytes does not fit a one-byte length prefix")]
    PayloadTooLong(usize),
}

/// Error surfaced to the caller of the interpreter loop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    #[error(transparent)]
    Frame(#[from] FrameError),
}
