//! External sample-encoding engine contract
//!
//! The syro stream generator is an external collaborator with a narrow
//! lifecycle: it is started over a list of converted sample descriptors,
//! produces one stereo 16-bit frame per pull until its announced frame
//! count is exhausted, and is finalized when the stream handle drops.

use crate::error::Result;

#[cfg(feature = "syro")]
pub mod ffi;

/// Byte order declared for a descriptor's sample buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEndian {
    Little,
    Big,
}

/// Category tag for a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Uncompressed linear sample data
    LinearSample,
}

/// One converted input, ready for the encoding engine.
///
/// Created by the parse/convert pipeline, consumed read-only by the
/// engine, and dropped by the orchestrator once the engine is done.
#[derive(Debug, Clone)]
pub struct SampleDescriptor {
    /// Mono 16-bit little-endian PCM; always an even number of bytes
    pub data: Vec<u8>,
    /// Source sample rate in Hz
    pub sample_rate: u32,
    /// Declared byte order of `data`
    pub endian: SampleEndian,
    /// Descriptor category
    pub kind: SampleKind,
    /// Destination slot on the device, in 0..100
    pub slot: u8,
}

impl SampleDescriptor {
    /// Number of mono frames in the buffer
    pub fn frame_count(&self) -> usize {
        self.data.len() / 2
    }
}

/// Handle over an engine's in-progress stream.
///
/// Callers pull exactly [`frame_count`](SyroStream::frame_count) frames;
/// finalization happens when the handle drops, on every exit path.
pub trait SyroStream {
    /// Total number of stereo frames the stream will produce
    fn frame_count(&self) -> u32;

    /// Pull the next stereo frame as a (left, right) pair
    fn next_frame(&mut self) -> (i16, i16);
}

/// The encoding engine's narrow call contract
pub trait SyroEngine {
    type Stream: SyroStream;

    /// Initialize a stream over `samples`. `options` is an engine flag
    /// word passed through unchanged.
    fn start(&self, samples: &[SampleDescriptor], options: u32) -> Result<Self::Stream>;
}
