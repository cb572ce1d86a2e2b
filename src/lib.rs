//! Gridwire Library
//!
//! An interpreter for a small framed binary command protocol that draws on
//! a fixed-size character grid. This crate provides:
//!
//! - `core`: Screen buffer, cursor, deterministic snapshots
//! - `parser`: Frame decoder and typed commands
//! - `dispatch`: Command dispatcher, bounds policy, diagnostics
//! - `renderer`: Output sinks and the renderer
//! - `interpreter`: The decode, dispatch, render loop
//! - `app`: Configuration, pacing and the demo stream
//!
//! ```
//! use gridwire::interpreter::{Interpreter, RunState};
//! use gridwire::renderer::MemorySink;
//!
//! let stream = [0x01, 3, 40, 15, 1, 0x02, 3, 5, 5, b'A', 0xFF, 0];
//! let mut interpreter = Interpreter::new();
//! let summary = interpreter.run(&stream, &mut MemorySink::new()).unwrap();
//!
//! assert_eq!(summary.state, RunState::Terminated);
//! assert_eq!(interpreter.screen().get(5, 5), Some('A'));
//! ```

pub mod app;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod renderer;

pub use error::{CommandError, EncodeError, FrameError, InterpreterError};
pub use interpreter::{Interpreter, RunState, RunSummary, Step};
