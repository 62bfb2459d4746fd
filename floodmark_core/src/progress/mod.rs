//! Progress reporting for long flooding runs.
//!
//! The flooding engines tick a progress indicator once per finalized pixel.
//! Which implementation backs the indicator depends on the build: with the
//! `cli` feature a terminal bar is drawn on stderr, otherwise (and always
//! under the `test` feature) a no-op drain is used.

#[cfg(all(not(feature = "test"), feature = "cli"))]
mod progress_bar;

#[cfg(any(feature = "test", not(feature = "cli")))]
mod progress_dummy;

mod traits;
pub use traits::ProgressTrait;

/// Factory function to create a progress bar or a no-op drain based on the
/// build configuration.
pub fn get_progress_bar(message: &str, max_value: u64) -> Box<dyn ProgressTrait> {
	#[cfg(all(not(feature = "test"), feature = "cli"))]
	let mut progress = progress_bar::ProgressBar::new();
	#[cfg(any(feature = "test", not(feature = "cli")))]
	let mut progress = progress_dummy::ProgressDummy::new();
	progress.init(message, max_value);
	Box::new(progress)
}
