//! Error types for volcaup

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for volcaup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for volcaup
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File smaller than the canonical WAV header
    #[error("wav file too small: {size} bytes")]
    FileTooSmall { size: usize },

    /// Bad RIFF/WAVE/fmt signature
    #[error("malformed container: {0}")]
    MalformedContainer(&'static str),

    /// Non-PCM encoding tag in the fmt chunk
    #[error("unsupported encoding tag {0}, must be 1 (linear PCM)")]
    UnsupportedEncoding(u16),

    /// Channel count other than mono or stereo
    #[error("unsupported channel count {0}, must be 1 or 2")]
    UnsupportedChannelLayout(u16),

    /// Bit depth other than 16 or 24
    #[error("unsupported bit depth {0}, must be 16 or 24")]
    UnsupportedBitDepth(u16),

    /// Chunk scan ran past the buffer without seeing 'data'
    #[error("'data' chunk not found")]
    DataChunkNotFound,

    /// Declared 'data' size extends past the end of the file
    #[error("'data' chunk size exceeds file size")]
    TruncatedDataChunk,

    /// Buffer allocation failed
    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),

    /// Output file write failed
    #[error("write failure for {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No convertible file in the whole batch
    #[error("no convertible input files found")]
    NoInputData,

    /// Encoding engine rejected the descriptor list
    #[error("engine start failure, status {0}")]
    EngineStart(i32),
}
