//! volcaup - batch sample loading for the Korg Volca Sample
//!
//! volcaup converts a directory of slot-numbered WAV files into the syro
//! audio stream the Volca Sample accepts through its sync input, written
//! out as a single playable stereo WAV file.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE container parsing and output synthesis
//! - `codec`: PCM downmix conversion
//! - `engine`: the external syro encoding engine's call contract
//! - `batch`: directory scan and pipeline orchestration
//! - `util`: little-endian field primitives

pub mod batch;
pub mod codec;
pub mod engine;
pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};

/// volcaup version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the volcaup library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize logging with the given configuration
pub fn init(config: Config) {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }
}
