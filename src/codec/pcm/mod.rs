//! PCM sample conversion

pub mod downmix;

pub use downmix::downmix_to_mono16;
