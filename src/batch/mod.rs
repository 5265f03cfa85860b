//! Batch conversion pipeline
//!
//! Scans a working directory for slot-numbered WAV files, converts each
//! into a mono 16-bit sample descriptor, and drives the encoding engine's
//! frame stream into a single output file. Per-file failures skip that
//! file and the batch continues; an empty batch, an engine start failure,
//! and any output allocation or write failure are fatal.

use crate::codec::pcm::downmix_to_mono16;
use crate::engine::{SampleDescriptor, SampleEndian, SampleKind, SyroEngine, SyroStream};
use crate::error::{Error, Result};
use crate::format::wav::{parse_container, write_output};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Number of sample slots on the device
pub const SLOT_COUNT: u32 = 100;

/// Default output stream filename
pub const OUTPUT_FILENAME: &str = "out.wav";

/// Summary of one batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Files converted and handed to the engine
    pub converted: usize,
    /// Files skipped over a per-file error
    pub skipped: usize,
    /// Stereo frames the engine produced
    pub frames: u32,
}

/// Parse the leading decimal slot index from a filename.
///
/// Returns `None` when the name has no digit prefix or the value falls
/// outside `0..SLOT_COUNT`; trailing characters are ignored.
pub fn parse_slot(name: &str) -> Option<u8> {
    let end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    let value: u32 = name[..end].parse().ok()?;
    if value < SLOT_COUNT {
        Some(value as u8)
    } else {
        None
    }
}

/// Load one input file into a descriptor bound to `slot`.
pub fn load_descriptor(path: &Path, slot: u8) -> Result<SampleDescriptor> {
    let src = match std::fs::read(path) {
        Ok(buf) => buf,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let container = parse_container(&src)?;
    let data = downmix_to_mono16(
        container.payload(&src),
        container.channels,
        container.bytes_per_sample(),
    )?;

    Ok(SampleDescriptor {
        data,
        sample_rate: container.sample_rate,
        endian: SampleEndian::Little,
        kind: SampleKind::LinearSample,
        slot,
    })
}

/// Enumerate slot-numbered entries in `dir`, sorted by filename so a
/// batch converts in a stable order.
fn scan_dir(dir: &Path) -> Result<Vec<(u8, PathBuf)>> {
    let mut entries = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if let Some(slot) = parse_slot(name) {
                entries.push((slot, entry.path()));
            }
        }
    }

    entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(entries)
}

/// Run the whole pipeline: scan `dir`, convert every eligible file, feed
/// the descriptors to `engine`, and write its frame stream to `output`.
pub fn run<E: SyroEngine>(dir: &Path, engine: &E, output: &Path) -> Result<BatchReport> {
    let mut descriptors: Vec<SampleDescriptor> = Vec::new();
    let mut skipped = 0usize;

    for (slot, path) in scan_dir(dir)? {
        if descriptors.iter().any(|d| d.slot == slot) {
            warn!("{}: slot {} already taken, skipping", path.display(), slot);
            skipped += 1;
            continue;
        }

        match load_descriptor(&path, slot) {
            Ok(descriptor) => {
                info!(
                    "{}: slot {}, {} Hz, {} frames",
                    path.display(),
                    slot,
                    descriptor.sample_rate,
                    descriptor.frame_count()
                );
                descriptors.push(descriptor);
            }
            Err(e) => {
                warn!("{}: {}, skipping", path.display(), e);
                skipped += 1;
            }
        }
    }

    if descriptors.is_empty() {
        return Err(Error::NoInputData);
    }

    let mut stream = engine.start(&descriptors, 0)?;
    let frames = stream.frame_count();
    info!(
        "encoding {} samples into {} stereo frames",
        descriptors.len(),
        frames
    );

    write_output(output, frames, || stream.next_frame())?;

    Ok(BatchReport {
        converted: descriptors.len(),
        skipped,
        frames,
    })
}
