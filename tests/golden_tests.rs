//! Golden tests for the interpreter
//!
//! Each test feeds a complete command stream through a fresh interpreter
//! and compares the final grid against the expected rows.

use gridwire::core::Snapshot;
use gridwire::error::{FrameError, InterpreterError};
use gridwire::parser::{encode_stream, Command};
use gridwire::renderer::MemorySink;
use gridwire::{Interpreter, RunState};

/// Run a stream and return the interpreter and every rendered frame
fn play(stream: &[u8]) -> (Interpreter, MemorySink) {
    let mut interpreter = Interpreter::new();
    let mut sink = MemorySink::new();
    interpreter
        .run(stream, &mut sink)
        .expect("stream should decode");
    (interpreter, sink)
}

fn setup(width: u8, height: u8) -> Command {
    Command::Setup {
        width,
        height,
        color_mode: 0,
    }
}

#[test]
fn test_setup_draw_end_scenario() {
    let stream = [0x1, 3, 40, 15, 1, 0x2, 3, 5, 5, 65, 0xFF, 0];
    let (interpreter, sink) = play(&stream);

    assert_eq!(interpreter.state(), RunState::Terminated);
    let snapshot = interpreter.snapshot();
    assert_eq!(snapshot.height, 15);
    assert_eq!(snapshot.width, 40);
    assert_eq!(snapshot.rows.len(), 15);
    assert_eq!(snapshot.char_at(5, 5), Some('A'));
    assert_eq!(snapshot.rows[0], format!("+{}+", "-".repeat(38)));
    assert_eq!(snapshot.rows[14], format!("+{}+", "-".repeat(38)));
    assert_eq!(snapshot.rows[5], format!("|    A{}|", " ".repeat(33)));

    // One render per frame; the last one follows the End frame
    assert_eq!(sink.frames().len(), 3);
    assert_eq!(sink.last().unwrap(), snapshot.rows.as_slice());
}

#[test]
fn test_small_drawing() {
    let stream = encode_stream(&[
        setup(12, 6),
        Command::RenderText {
            x: 2,
            y: 1,
            color: 0,
            text: b"hello".to_vec(),
        },
        Command::DrawLine {
            x1: 1,
            y1: 3,
            x2: 10,
            y2: 3,
            color: 0,
            ch: b'~',
        },
        Command::DrawLine {
            x1: 8,
            y1: 1,
            x2: 8,
            y2: 4,
            color: 0,
            ch: b'#',
        },
        Command::MoveCursor { x: 3, y: 4 },
        Command::DrawAtCursor { ch: b'@', color: 0 },
        Command::End,
    ])
    .unwrap();

    let (interpreter, _) = play(&stream);
    assert_eq!(
        interpreter.screen().lines(),
        vec![
            "+----------+",
            "| hello #  |",
            "|       #  |",
            "|~~~~~~~#~~|",
            "|  @    #  |",
            "+----------+",
        ]
    );
}

#[test]
fn test_text_runs_off_grid() {
    let stream = encode_stream(&[
        setup(8, 3),
        Command::RenderText {
            x: 4,
            y: 1,
            color: 0,
            text: b"overflow".to_vec(),
        },
    ])
    .unwrap();

    let (interpreter, _) = play(&stream);
    assert_eq!(interpreter.screen().lines()[1], "|   over");
    assert_eq!(interpreter.diagnostics().out_of_bounds, 4);
}

#[test]
fn test_resetup_clears_previous_drawing() {
    let stream = encode_stream(&[
        setup(6, 4),
        Command::DrawChar { x: 2, y: 2, ch: b'X' },
        setup(4, 3),
    ])
    .unwrap();

    let (interpreter, _) = play(&stream);
    assert_eq!(interpreter.screen().lines(), vec!["+--+", "|  |", "+--+"]);
}

#[test]
fn test_clear_then_draw() {
    let stream = encode_stream(&[
        setup(5, 3),
        Command::ClearScreen,
        Command::DrawChar { x: 0, y: 0, ch: b'Q' },
    ])
    .unwrap();

    let (interpreter, _) = play(&stream);
    assert_eq!(interpreter.screen().lines(), vec!["Q    ", "     ", "     "]);
}

#[test]
fn test_unknown_and_invalid_frames_are_skipped() {
    let mut stream = encode_stream(&[setup(6, 3)]).unwrap();
    stream.extend_from_slice(&[0x42, 2, 1, 2]); // unknown opcode
    stream.extend_from_slice(&[0x02, 2, 1, 1]); // DrawChar missing its char
    stream.extend_from_slice(&[0x02, 3, 1, 1, b'k']);
    stream.extend_from_slice(&[0xFF, 0]);

    let (interpreter, sink) = play(&stream);
    assert_eq!(interpreter.state(), RunState::Terminated);
    assert_eq!(interpreter.screen().get(1, 1), Some('k'));

    let diagnostics = interpreter.diagnostics();
    assert_eq!(diagnostics.frames, 5);
    assert_eq!(diagnostics.unknown_opcodes, 1);
    assert_eq!(diagnostics.invalid_payloads, 1);
    assert_eq!(sink.frames().len(), 5);
}

#[test]
fn test_end_frame_payload_is_consumed() {
    let stream = [0x01, 3, 4, 3, 0, 0xFF, 3, 9, 9, 9, 0x02, 3, 1, 1, b'Z'];
    let mut interpreter = Interpreter::new();
    let summary = interpreter.run(&stream, &mut MemorySink::new()).unwrap();

    assert_eq!(summary.state, RunState::Terminated);
    assert_eq!(summary.bytes_consumed, 10);
    assert_eq!(interpreter.screen().get(1, 1), Some(' '));
}

#[test]
fn test_truncated_stream_halts_before_mutation() {
    let mut stream = encode_stream(&[setup(6, 3)]).unwrap();
    stream.extend_from_slice(&[0x02, 3, 1, 1]);

    let mut interpreter = Interpreter::new();
    let mut sink = MemorySink::new();
    let err = interpreter.run(&stream, &mut sink).unwrap_err();

    assert_eq!(
        err,
        InterpreterError::Frame(FrameError::Truncated {
            offset: 5,
            needed: 5,
            available: 4,
        })
    );
    assert_eq!(interpreter.screen().lines(), vec!["+----+", "|    |", "+----+"]);
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn test_snapshot_is_deterministic() {
    let stream = gridwire::app::demo_stream().unwrap();
    let (a, _) = play(&stream);
    let (b, _) = play(&stream);

    let json = a.snapshot().to_json().unwrap();
    let restored = Snapshot::from_json(&json).unwrap();
    assert_eq!(restored, b.snapshot());
}
