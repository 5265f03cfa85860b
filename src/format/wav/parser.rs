//! WAV container validation and payload location

use super::{Chunks, DATA_CHUNK, FMT_CHUNK_POS, HEADER_SIZE, RIFF_MAGIC, WAVE_FMT_MAGIC};
use crate::error::{Error, Result};
use crate::util::bytes::{read_u16_le, read_u32_le};
use std::ops::Range;

// fmt-chunk field offsets within a canonical header
const ENCODING_POS: usize = 20;
const CHANNELS_POS: usize = 22;
const SAMPLE_RATE_POS: usize = 24;
const BIT_DEPTH_POS: usize = 34;

/// Linear PCM encoding tag
const ENCODING_PCM: u16 = 1;

/// Validated view of an input WAV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavContainer {
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Bits per sample (16 or 24)
    pub bits_per_sample: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Byte range of the PCM payload within the source buffer
    pub data: Range<usize>,
}

impl WavContainer {
    /// Bytes per single-channel sample
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// The PCM payload slice of `buf`, the buffer this container was
    /// parsed from.
    pub fn payload<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.data.clone()]
    }
}

/// Parse and validate a whole WAV file image.
///
/// Accepts uncompressed linear PCM only, mono or stereo, 16 or 24-bit,
/// at any sample rate. The `data` chunk is located by scanning forward
/// from the 'fmt ' chunk, skipping unknown chunks, and its declared size
/// is checked against the file size before the range is handed out.
pub fn parse_container(buf: &[u8]) -> Result<WavContainer> {
    if buf.len() <= HEADER_SIZE {
        return Err(Error::FileTooSmall { size: buf.len() });
    }

    if &buf[0..4] != RIFF_MAGIC {
        return Err(Error::MalformedContainer("'RIFF' signature not found"));
    }

    if &buf[8..16] != WAVE_FMT_MAGIC {
        return Err(Error::MalformedContainer(
            "'WAVE' or 'fmt ' signature not found",
        ));
    }

    let encoding = read_u16_le(buf, ENCODING_POS);
    if encoding != ENCODING_PCM {
        return Err(Error::UnsupportedEncoding(encoding));
    }

    let channels = read_u16_le(buf, CHANNELS_POS);
    if channels != 1 && channels != 2 {
        return Err(Error::UnsupportedChannelLayout(channels));
    }

    let bits_per_sample = read_u16_le(buf, BIT_DEPTH_POS);
    if bits_per_sample != 16 && bits_per_sample != 24 {
        return Err(Error::UnsupportedBitDepth(bits_per_sample));
    }

    let sample_rate = read_u32_le(buf, SAMPLE_RATE_POS);

    let data = Chunks::new(buf, FMT_CHUNK_POS)
        .find(|chunk| &chunk.id == DATA_CHUNK)
        .ok_or(Error::DataChunkNotFound)?;

    let start = data.payload_offset;
    let end = start
        .checked_add(data.size as usize)
        .ok_or(Error::TruncatedDataChunk)?;
    if end > buf.len() {
        return Err(Error::TruncatedDataChunk);
    }

    Ok(WavContainer {
        channels,
        bits_per_sample,
        sample_rate,
        data: start..end,
    })
}
