//! Bindings to the vendor SYRO volcasample encoder
//!
//! Mirrors the call contract of `korg_syro_volcasample.h`. The library is
//! linked as `korg_syro` and must be available at build time when the
//! `syro` feature is enabled.

use super::{SampleDescriptor, SampleEndian, SampleKind, SyroEngine, SyroStream};
use crate::error::{Error, Result};
use std::os::raw::{c_int, c_void};

const STATUS_SUCCESS: c_int = 0;
const DATA_TYPE_SAMPLE_LINER: u32 = 0;
const ENDIAN_LITTLE: u32 = 0;
const ENDIAN_BIG: u32 = 1;

#[repr(C)]
#[allow(non_snake_case)]
struct SyroData {
    DataType: u32,
    pData: *mut u8,
    Number: u32,
    Size: u32,
    Quality: u32,
    SampleEndian: u32,
    Fs: u32,
}

type SyroHandle = *mut c_void;

#[link(name = "korg_syro")]
extern "C" {
    fn SyroVolcaSample_Start(
        handle: *mut SyroHandle,
        data: *mut SyroData,
        num_of_data: c_int,
        flags: u32,
        num_of_frame: *mut u32,
    ) -> c_int;
    fn SyroVolcaSample_GetSample(handle: SyroHandle, left: *mut i16, right: *mut i16) -> c_int;
    fn SyroVolcaSample_End(handle: SyroHandle) -> c_int;
}

/// Engine backed by the vendor SYRO library
pub struct KorgSyroEngine;

/// In-progress vendor stream; `SyroVolcaSample_End` runs on drop.
pub struct KorgSyroStream {
    handle: SyroHandle,
    frames: u32,
    // The engine reads these for its whole lifetime; they must outlive
    // the handle.
    _records: Vec<SyroData>,
    _buffers: Vec<Vec<u8>>,
}

impl SyroEngine for KorgSyroEngine {
    type Stream = KorgSyroStream;

    fn start(&self, samples: &[SampleDescriptor], options: u32) -> Result<KorgSyroStream> {
        let mut buffers: Vec<Vec<u8>> = samples.iter().map(|s| s.data.clone()).collect();

        let mut records: Vec<SyroData> = samples
            .iter()
            .zip(buffers.iter_mut())
            .map(|(sample, buffer)| SyroData {
                DataType: match sample.kind {
                    SampleKind::LinearSample => DATA_TYPE_SAMPLE_LINER,
                },
                pData: buffer.as_mut_ptr(),
                Number: sample.slot as u32,
                Size: buffer.len() as u32,
                Quality: 0,
                SampleEndian: match sample.endian {
                    SampleEndian::Little => ENDIAN_LITTLE,
                    SampleEndian::Big => ENDIAN_BIG,
                },
                Fs: sample.sample_rate,
            })
            .collect();

        let mut handle: SyroHandle = std::ptr::null_mut();
        let mut frames = 0u32;

        let status = unsafe {
            SyroVolcaSample_Start(
                &mut handle,
                records.as_mut_ptr(),
                records.len() as c_int,
                options,
                &mut frames,
            )
        };
        if status != STATUS_SUCCESS {
            return Err(Error::EngineStart(status));
        }

        Ok(KorgSyroStream {
            handle,
            frames,
            _records: records,
            _buffers: buffers,
        })
    }
}

impl SyroStream for KorgSyroStream {
    fn frame_count(&self) -> u32 {
        self.frames
    }

    fn next_frame(&mut self) -> (i16, i16) {
        let mut left = 0i16;
        let mut right = 0i16;
        unsafe {
            SyroVolcaSample_GetSample(self.handle, &mut left, &mut right);
        }
        (left, right)
    }
}

impl Drop for KorgSyroStream {
    fn drop(&mut self) {
        unsafe {
            SyroVolcaSample_End(self.handle);
        }
    }
}
