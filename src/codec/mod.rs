//! Audio codec implementations

pub mod pcm;
