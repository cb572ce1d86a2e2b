//! Renderer Module
//!
//! Serializes the screen buffer to an output sink. A sink only has to
//! accept a full frame of rows at a time; how it shows them (terminal,
//! memory, file) is its own business.

mod sink;

pub use sink::{MemorySink, NullSink, Sink, TerminalSink};

use tracing::warn;

use crate::core::ScreenBuffer;

/// Turns buffer state into frames for a [`Sink`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Flush the whole buffer to `sink`.
    ///
    /// Returns `false` if the sink failed. The failure is logged and never
    /// touches the buffer.
    pub fn render(&self, screen: &ScreenBuffer, sink: &mut dyn Sink) -> bool {
        let rows = screen.lines();
        match sink.flush(&rows) {
            Ok(()) => true,
            Err(e) => {
                warn!("render failed: {}", e);
                false
            },
        }
    }
}
