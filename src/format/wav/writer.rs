//! Output WAV synthesis around the engine's frame stream

use super::HEADER_SIZE;
use crate::error::{Error, Result};
use crate::util::bytes::write_u32_le;
use std::fs;
use std::path::Path;

/// Canonical stereo 16-bit 44.1kHz header; only the two size fields are
/// patched per run.
const HEADER_TEMPLATE: [u8; HEADER_SIZE] = [
    b'R', b'I', b'F', b'F', // 'RIFF'
    0x00, 0x00, 0x00, 0x00, // size (data size + 0x24)
    b'W', b'A', b'V', b'E', // 'WAVE'
    b'f', b'm', b't', b' ', // 'fmt '
    0x10, 0x00, 0x00, 0x00, // fmt chunk size
    0x01, 0x00, // encode (linear PCM)
    0x02, 0x00, // channel = 2
    0x44, 0xAC, 0x00, 0x00, // Fs (44.1kHz)
    0x10, 0xB1, 0x02, 0x00, // bytes per sec (Fs * 4)
    0x04, 0x00, // block align (2ch, 16bit -> 4)
    0x10, 0x00, // 16bit
    b'd', b'a', b't', b'a', // 'data'
    0x00, 0x00, 0x00, 0x00, // data size (bytes)
];

const RIFF_SIZE_POS: usize = 0x04;
const DATA_SIZE_POS: usize = 0x28;

/// Bytes per interleaved stereo 16-bit frame
const FRAME_BYTES: usize = 4;

/// Build the complete output file image: the canonical header with its
/// size fields patched, followed by `frame_count` frames pulled from
/// `pull` as interleaved left/right 16-bit little-endian pairs.
pub fn synthesize<F>(frame_count: u32, mut pull: F) -> Result<Vec<u8>>
where
    F: FnMut() -> (i16, i16),
{
    let payload = frame_count as usize * FRAME_BYTES;

    let mut buf = Vec::new();
    buf.try_reserve_exact(HEADER_SIZE + payload)?;
    buf.extend_from_slice(&HEADER_TEMPLATE);
    write_u32_le(&mut buf, RIFF_SIZE_POS, payload as u32 + 0x24);
    write_u32_le(&mut buf, DATA_SIZE_POS, payload as u32);

    for _ in 0..frame_count {
        let (left, right) = pull();
        buf.extend_from_slice(&left.to_le_bytes());
        buf.extend_from_slice(&right.to_le_bytes());
    }

    Ok(buf)
}

/// Synthesize the stream and write the finished buffer to `path`.
///
/// A failed write is reported as [`Error::Write`], distinct from the
/// allocation failure `synthesize` can return.
pub fn write_output<F>(path: &Path, frame_count: u32, pull: F) -> Result<()>
where
    F: FnMut() -> (i16, i16),
{
    let buf = synthesize(frame_count, pull)?;
    fs::write(path, &buf).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
