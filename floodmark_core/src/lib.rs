//! Core flooding engines for marker-controlled watershed segmentation.
//!
//! Given an n-dimensional input image and a marker image whose non-zero
//! connected components act as seeds, the engines in this crate flood the
//! image from the markers outwards under a pluggable pixel-pair dissimilarity
//! cost. Every non-marker pixel ends up either with the label of the marker
//! whose flood reached it along the cheapest path, or with the reserved label
//! `0` on watershed lines where two floods meet.
//!
//! Two engines share the same skeleton:
//!
//! - [`flood::meyer`]: hierarchical-queue flooding; each pixel is labelled at
//!   most once and collisions become watershed lines.
//! - [`flood::ift`]: image foresting transform; every pixel carries a mutable
//!   bottleneck path cost and cheaper paths overwrite earlier labellings.
//!
//! The usual entry point is [`flood::watershed`], which validates the inputs,
//! picks an engine from [`WatershedOptions`] and optionally fills in the
//! watershed lines afterwards.

pub mod cost;
pub mod flood;
pub mod lattice;
pub mod progress;
pub mod queue;
pub mod types;

pub use cost::*;
pub use flood::watershed;
pub use lattice::Lattice;
pub use types::*;
