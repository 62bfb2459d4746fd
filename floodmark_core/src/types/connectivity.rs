//! This module defines the [`Connectivity`] enum selecting the neighbourhood
//! used when enumerating adjacent pixels on the lattice.

#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::fmt::Display;

/// Which pixels count as neighbours of a given pixel.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
	/// Face-adjacent neighbours only: 2n offsets of Hamming weight one.
	#[default]
	Face,
	/// All offsets in `{-1,0,+1}ⁿ` except the centre: `3ⁿ − 1` neighbours.
	Full,
}

impl Display for Connectivity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Connectivity::Face => "face",
			Connectivity::Full => "full",
		})
	}
}
