//! Output sinks

use std::io::{self, Write};

/// Clear the display and home the cursor
const CLEAR_AND_HOME: &[u8] = b"\x1b[2J\x1b[H";

/// Something that can display a full frame of rows
pub trait Sink {
    /// Replace the previously shown frame with `rows`
    fn flush(&mut self, rows: &[String]) -> io::Result<()>;
}

/// Writes frames to a terminal-like writer with clear-then-draw semantics
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    writer: W,
    clear: bool,
}

impl TerminalSink<io::Stdout> {
    /// Sink on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink that clears the display before every frame
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clear: true,
        }
    }

    /// Sink that appends frames without clearing
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            clear: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn flush(&mut self, rows: &[String]) -> io::Result<()> {
        if self.clear {
            self.writer.write_all(CLEAR_AND_HOME)?;
        }
        for row in rows {
            self.writer.write_all(row.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }
}

/// Keeps every frame in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Vec<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames in the order they were flushed
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    /// The most recent frame
    pub fn last(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Sink for MemorySink {
    fn flush(&mut self, rows: &[String]) -> io::Result<()> {
        self.frames.push(rows.to_vec());
        Ok(())
    }
}

/// Discards every frame. For headless runs that only read the final state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn flush(&mut self, _rows: &[String]) -> io::Result<()> {
        Ok(())
    }
}
