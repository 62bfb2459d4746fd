//! The [`Label`] bound for marker and output pixel types.
//!
//! A label is an unsigned integer identifier. The value `0` is reserved: it
//! means "unmarked" in a marker image and "watershed line" in an output
//! image. Any unsigned primitive integer qualifies.

use num_traits::{PrimInt, Unsigned};

pub trait Label: PrimInt + Unsigned {
	/// The reserved background / watershed-line value.
	fn background() -> Self {
		Self::zero()
	}
}

impl<T: PrimInt + Unsigned> Label for T {}
