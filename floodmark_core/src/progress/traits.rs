//! This module provides the `ProgressTrait` trait implemented by all
//! progress indicators.

/// A trait defining the interface for progress indicators.
pub trait ProgressTrait: Send + Sync {
	/// Creates a new instance of the progress indicator.
	fn new() -> Self
	where
		Self: Sized;

	/// Initializes the progress indicator with a message and a maximum value.
	fn init(&mut self, message: &str, max_value: u64);

	/// Sets the absolute position of the progress.
	fn set_position(&mut self, value: u64);

	/// Increases the position of the progress by `value`.
	fn inc(&mut self, value: u64);

	/// Finishes the progress.
	fn finish(&mut self);

	/// Removes the progress indicator.
	fn remove(&mut self);
}
