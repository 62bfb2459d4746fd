//! Raster bridge between the `image` crate and the flooding engines.
//!
//! This crate turns decoded 2-D raster images into the dense buffers the
//! engines work on and back:
//!
//! - scalar, multi-channel and marker conversions (`convert`)
//! - gradient precomputation for the conventional watershed (`gradient`)
//! - file reading/writing helpers (`io`)
//!
//! The flooding core itself is dimension-agnostic; only this bridge is
//! limited to two dimensions, because that is what the supported codecs
//! deliver.

pub mod convert;
pub mod gradient;
pub mod io;

pub use convert::*;
pub use gradient::*;
pub use io::*;
