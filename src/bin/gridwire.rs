//! Gridwire Player
//!
//! Plays a command stream onto the terminal, or runs it headless and
//! prints the final snapshot.

use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use gridwire::app::{demo_stream, Config, Pacer};
use gridwire::dispatch::BoundsPolicy;
use gridwire::renderer::{NullSink, Sink, TerminalSink};
use gridwire::{Interpreter, RunState};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Redraw the grid on the terminal after every frame
    Live,
    Text,
    Json,
}

/// Command-line arguments
struct Args {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    demo: bool,
    delay_ms: Option<u64>,
    wait: bool,
    clamp: bool,
    format: OutputFormat,
    help: bool,
}

fn parse_args() -> Args {
    parse_argv(std::env::args().skip(1).collect())
}

fn parse_argv(argv: Vec<String>) -> Args {
    let mut args = Args {
        input: None,
        config: None,
        demo: false,
        delay_ms: None,
        wait: false,
        clamp: false,
        format: OutputFormat::Live,
        help: false,
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => args.help = true,
            "-f" | "--file" => {
                i += 1;
                if i < argv.len() {
                    args.input = Some(PathBuf::from(&argv[i]));
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < argv.len() {
                    args.config = Some(PathBuf::from(&argv[i]));
                }
            },
            "-d" | "--delay" => {
                i += 1;
                if i < argv.len() {
                    args.delay_ms = argv[i].parse().ok();
                }
            },
            "--demo" => args.demo = true,
            "-w" | "--wait" => args.wait = true,
            "--clamp" => args.clamp = true,
            "-j" | "--json" => args.format = OutputFormat::Json,
            "-t" | "--text" => args.format = OutputFormat::Text,
            other => {
                // Treat as input file if no flag
                if args.input.is_none() && !other.starts_with('-') {
                    args.input = Some(PathBuf::from(other));
                }
            },
        }
        i += 1;
    }

    args
}

fn print_help() {
    println!("Gridwire Player");
    println!();
    println!("Usage: gridwire [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>    Read the command stream from a file");
    println!("      --demo           Play the built-in demo stream");
    println!("  -d, --delay <MS>     Delay between frames (default: 500)");
    println!("  -w, --wait           Wait for Enter after the End frame (not with stdin input)");
    println!("  -t, --text           Run headless and print the final grid");
    println!("  -j, --json           Run headless and print the final snapshot as JSON");
    println!("      --clamp          Clamp off-grid writes instead of dropping them");
    println!("  -c, --config <PATH>  Load configuration from a JSON file");
    println!("  -h, --help           Show this help message");
    println!();
    println!("If no input is specified, reads the stream from stdin.");
    println!("Set RUST_LOG=debug to trace every command.");
}

/// Whether the stream comes from stdin, leaving nothing to read for `--wait`
fn reads_stdin(args: &Args) -> bool {
    !args.demo && args.input.is_none()
}

fn read_input(args: &Args) -> io::Result<Vec<u8>> {
    if args.demo {
        return demo_stream().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e));
    }
    match &args.input {
        Some(path) => std::fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        },
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = parse_args();
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.playback.delay_ms = delay_ms;
    }
    if args.wait {
        config.playback.wait_on_end = true;
    }
    if config.playback.wait_on_end && reads_stdin(&args) {
        tracing::warn!("--wait ignored: the stream was read from stdin");
        config.playback.wait_on_end = false;
    }
    if args.clamp {
        config.bounds = BoundsPolicy::Clamp;
    }

    let stream = match read_input(&args) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut interpreter = Interpreter::with_policy(config.bounds);
    let live = args.format == OutputFormat::Live;
    let mut sink: Box<dyn Sink> = if !live {
        Box::new(NullSink)
    } else if config.render.clear_screen {
        Box::new(TerminalSink::stdout())
    } else {
        Box::new(TerminalSink::plain(io::stdout()))
    };
    let pacer = if live {
        Pacer::from_millis(config.playback.delay_ms)
    } else {
        Pacer::immediate()
    };

    let result = interpreter.run_with(&stream, sink.as_mut(), |_| pacer.pause());

    match args.format {
        OutputFormat::Live => {},
        OutputFormat::Text => print!("{}", interpreter.snapshot().to_text()),
        OutputFormat::Json => match interpreter.snapshot().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    match result {
        Ok(summary) => {
            if live && config.playback.wait_on_end && summary.state == RunState::Terminated {
                println!("Press Enter to exit...");
                let mut line = String::new();
                // EOF on stdin just ends the wait
                let _ = io::stdin().lock().read_line(&mut line);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!("stream aborted: {}", e);
            ExitCode::FAILURE
        },
    }
}
