//! Application glue module
//!
//! Configuration, playback pacing and the demo stream. Nothing here
//! affects command semantics.

mod config;
mod demo;
mod pacing;

pub use config::{Config, ConfigError, PlaybackConfig, RenderConfig};
pub use demo::{demo_commands, demo_stream};
pub use pacing::Pacer;
