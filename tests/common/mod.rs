//! Shared test fixtures: byte-level WAV builders and engine doubles

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use volcaup_lib::engine::{SampleDescriptor, SyroEngine, SyroStream};
use volcaup_lib::error::{Error, Result};

/// Build a canonical WAV file image around `payload`.
pub fn wav_bytes(channels: u16, bits: u16, sample_rate: u32, payload: &[u8]) -> Vec<u8> {
    let block_align = channels * (bits / 8);
    let mut buf = Vec::new();

    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits.to_le_bytes());

    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(payload);

    buf
}

/// Interleave `samples` as 16-bit little-endian PCM bytes.
pub fn pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Interleave `samples` as 24-bit little-endian PCM bytes.
pub fn pcm24(samples: &[i32]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| s.to_le_bytes()[..3].to_vec())
        .collect()
}

/// What the scripted engine saw for one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenDescriptor {
    pub slot: u8,
    pub frames: usize,
    pub sample_rate: u32,
}

/// Engine double that records the descriptors it is started with and
/// plays back a fixed frame script.
pub struct ScriptedEngine {
    frames: Vec<(i16, i16)>,
    pub seen: RefCell<Vec<SeenDescriptor>>,
}

impl ScriptedEngine {
    pub fn new(frames: Vec<(i16, i16)>) -> Self {
        ScriptedEngine {
            frames,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl SyroEngine for ScriptedEngine {
    type Stream = ScriptedStream;

    fn start(&self, samples: &[SampleDescriptor], _options: u32) -> Result<ScriptedStream> {
        self.seen
            .borrow_mut()
            .extend(samples.iter().map(|s| SeenDescriptor {
                slot: s.slot,
                frames: s.frame_count(),
                sample_rate: s.sample_rate,
            }));

        Ok(ScriptedStream {
            frames: self.frames.iter().copied().collect(),
        })
    }
}

/// Frame stream driven by a fixed script; over-pulling panics so tests
/// catch a caller that ignores the announced frame count.
pub struct ScriptedStream {
    frames: VecDeque<(i16, i16)>,
}

impl SyroStream for ScriptedStream {
    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }

    fn next_frame(&mut self) -> (i16, i16) {
        self.frames
            .pop_front()
            .expect("pulled past the announced frame count")
    }
}

/// Engine double that always refuses to start with the given status.
pub struct FailingEngine(pub i32);

impl SyroEngine for FailingEngine {
    type Stream = ScriptedStream;

    fn start(&self, _samples: &[SampleDescriptor], _options: u32) -> Result<ScriptedStream> {
        Err(Error::EngineStart(self.0))
    }
}
