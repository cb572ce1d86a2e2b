//! Interpreter Loop
//!
//! Drives frame decoding, dispatch and rendering in strict stream order.
//! One interpreter owns one screen buffer and one cursor for the length of
//! a run; there is no state shared between instances.
//!
//! The loop has two states. It starts `Running` with an unset buffer and
//! moves to `Terminated` only after an End frame has been applied and
//! rendered. A stream that simply runs out of bytes leaves it `Running`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Cursor, ScreenBuffer, Snapshot};
use crate::dispatch::{BoundsPolicy, Diagnostics, Dispatcher};
use crate::error::InterpreterError;
use crate::parser::{decode_frame, Command};
use crate::renderer::{Renderer, Sink};

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Terminated,
}

/// Outcome of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One frame was processed and rendered; continue at `next`
    Advanced { next: usize },
    /// The End frame was processed; nothing more will be read
    Terminated { next: usize },
    /// No bytes remain at the requested position
    Exhausted,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub state: RunState,
    pub bytes_consumed: usize,
    pub diagnostics: Diagnostics,
}

impl RunSummary {
    pub fn frames(&self) -> u64 {
        self.diagnostics.frames
    }

    pub fn renders(&self) -> u64 {
        self.diagnostics.renders
    }
}

/// A single run's worth of display state
#[derive(Debug, Clone)]
pub struct Interpreter {
    screen: ScreenBuffer,
    cursor: Cursor,
    dispatcher: Dispatcher,
    renderer: Renderer,
    state: RunState,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter with the default drop-out-of-bounds policy
    pub fn new() -> Self {
        Self::with_policy(BoundsPolicy::default())
    }

    pub fn with_policy(policy: BoundsPolicy) -> Self {
        Self {
            screen: ScreenBuffer::new(),
            cursor: Cursor::default(),
            dispatcher: Dispatcher::new(policy),
            renderer: Renderer::new(),
            state: RunState::Running,
        }
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.dispatcher.diagnostics()
    }

    /// Snapshot of the current display state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.screen, &self.cursor)
    }

    /// Process the frame at `pos`: decode, dispatch, then render once.
    ///
    /// Frames that decode but cannot be applied (unknown opcode, bad
    /// payload) are skipped and still rendered, so every frame produces
    /// exactly one render.
    ///
    /// # Errors
    ///
    /// Returns [`InterpreterError::Frame`] if the frame is truncated. State
    /// is untouched in that case and the run cannot continue.
    pub fn step(
        &mut self,
        stream: &[u8],
        pos: usize,
        sink: &mut dyn Sink,
    ) -> Result<Step, InterpreterError> {
        if self.state == RunState::Terminated {
            return Ok(Step::Terminated { next: pos });
        }
        if pos >= stream.len() {
            return Ok(Step::Exhausted);
        }

        let (frame, consumed) = decode_frame(stream, pos)?;
        self.dispatcher.diagnostics_mut().frames += 1;

        let mut end = false;
        match Command::from_frame(&frame) {
            Ok(command) => {
                end = command.is_end();
                self.dispatcher.apply(&command, &mut self.screen, &mut self.cursor);
            },
            Err(e) => self.dispatcher.reject(frame.offset, &e),
        }

        let rendered = self.renderer.render(&self.screen, sink);
        let diagnostics = self.dispatcher.diagnostics_mut();
        diagnostics.renders += 1;
        if !rendered {
            diagnostics.render_failures += 1;
        }

        let next = pos + consumed;
        if end {
            self.state = RunState::Terminated;
            debug!(offset = frame.offset, "end of stream frame");
            Ok(Step::Terminated { next })
        } else {
            Ok(Step::Advanced { next })
        }
    }

    /// Run the whole stream through the loop
    ///
    /// # Errors
    ///
    /// Stops at the first truncated frame and returns it.
    pub fn run(
        &mut self,
        stream: &[u8],
        sink: &mut dyn Sink,
    ) -> Result<RunSummary, InterpreterError> {
        self.run_with(stream, sink, |_| {})
    }

    /// Like [`run`](Self::run), calling `after_render` after every render.
    ///
    /// The hook is where callers put presentation concerns such as pacing.
    /// It only sees the interpreter read-only.
    ///
    /// # Errors
    ///
    /// Stops at the first truncated frame and returns it.
    pub fn run_with<F>(
        &mut self,
        stream: &[u8],
        sink: &mut dyn Sink,
        mut after_render: F,
    ) -> Result<RunSummary, InterpreterError>
    where
        F: FnMut(&Interpreter),
    {
        let mut pos = 0;
        loop {
            match self.step(stream, pos, sink)? {
                Step::Advanced { next } => {
                    pos = next;
                    after_render(self);
                },
                Step::Terminated { next } => {
                    pos = next;
                    after_render(self);
                    break;
                },
                Step::Exhausted => break,
            }
        }

        let summary = RunSummary {
            state: self.state,
            bytes_consumed: pos,
            diagnostics: *self.diagnostics(),
        };
        info!(
            state = ?summary.state,
            frames = summary.frames(),
            skipped = summary.diagnostics.skipped_frames(),
            "run finished"
        );
        Ok(summary)
    }
}
