//! The flooding engines and their shared driver.
//!
//! [`meyer`] and [`ift`] implement the two propagation rules over the same
//! skeleton (lattice + queue + cost function); [`fill_lines`] is the optional
//! post-pass replacing watershed-line pixels; [`watershed`] binds everything
//! together and is the entry point for callers.

pub mod fill_lines;
pub mod ift;
pub mod meyer;

mod watershed;
pub use watershed::*;
