//! This module defines the [`WatershedOptions`] record that configures a
//! watershed run, and the [`Algorithm`] enum selecting the flooding engine.

use crate::types::Connectivity;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::fmt::Display;

/// Which flooding engine to run.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
	/// Hierarchical-queue flooding; collisions become watershed lines.
	#[default]
	Meyer,
	/// Image foresting transform; bottleneck path-cost relaxation.
	Ift,
}

impl Display for Algorithm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Algorithm::Meyer => "meyer",
			Algorithm::Ift => "ift",
		})
	}
}

/// Configuration for a single watershed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatershedOptions {
	pub algorithm: Algorithm,
	pub connectivity: Connectivity,
	/// When `false`, watershed-line pixels are filled in afterwards with the
	/// label of their most similar labelled neighbour.
	pub mark_lines: bool,
}

impl Default for WatershedOptions {
	fn default() -> Self {
		WatershedOptions {
			algorithm: Algorithm::Meyer,
			connectivity: Connectivity::Face,
			mark_lines: true,
		}
	}
}
