//! Lightweight terminal progress bar without external dependencies.
//!
//! Renders message, bar, pos/len, percentage and rate to stderr. Redraws are
//! throttled so per-pixel `inc` calls from the engines stay cheap.

use super::ProgressTrait;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const REDRAW_INTERVAL: Duration = Duration::from_millis(100);
const BAR_WIDTH: usize = 36;

pub struct ProgressBar {
	message: String,
	len: u64,
	pos: u64,
	start: Instant,
	last_draw: Option<Instant>,
	finished: bool,
}

impl ProgressBar {
	fn redraw(&mut self, force: bool) {
		if self.finished {
			return;
		}
		if !force
			&& let Some(last) = self.last_draw
			&& last.elapsed() < REDRAW_INTERVAL
		{
			return;
		}
		self.last_draw = Some(Instant::now());

		let len = self.len.max(1);
		let pos = self.pos.min(len);
		let filled = (pos as usize * BAR_WIDTH) / len as usize;
		let percent = pos * 100 / len;

		let elapsed = self.start.elapsed().as_secs_f64();
		let rate = if elapsed > 0.0 { pos as f64 / elapsed } else { 0.0 };

		let mut line = String::new();
		let _ = write!(
			&mut line,
			"{}▕{}{}▏{}/{} ({:>3}%) {}",
			self.message,
			"█".repeat(filled),
			" ".repeat(BAR_WIDTH - filled),
			pos,
			len,
			percent,
			format_rate(rate)
		);

		let mut stderr = io::stderr();
		let _ = write!(stderr, "\r\x1b[2K{line}");
		let _ = stderr.flush();
	}
}

impl ProgressTrait for ProgressBar {
	fn new() -> Self {
		ProgressBar {
			message: String::new(),
			len: 0,
			pos: 0,
			start: Instant::now(),
			last_draw: None,
			finished: false,
		}
	}

	fn init(&mut self, message: &str, max_value: u64) {
		self.message = message.to_string();
		self.len = max_value;
		self.pos = 0;
		self.start = Instant::now();
		self.redraw(true);
	}

	fn set_position(&mut self, value: u64) {
		self.pos = value.min(self.len);
		self.redraw(false);
	}

	fn inc(&mut self, value: u64) {
		self.pos = self.pos.saturating_add(value).min(self.len);
		self.redraw(false);
	}

	fn finish(&mut self) {
		self.pos = self.len;
		self.redraw(true);
		self.finished = true;
		let mut stderr = io::stderr();
		let _ = stderr.write_all(b"\n");
		let _ = stderr.flush();
	}

	fn remove(&mut self) {
		self.finished = true;
		let mut stderr = io::stderr();
		let _ = stderr.write_all(b"\r\x1b[2K");
		let _ = stderr.flush();
	}
}

fn format_rate(per_sec: f64) -> String {
	let abs = per_sec.abs();
	if abs >= 1_000_000.0 {
		format!("{:.1}M/s", per_sec / 1_000_000.0)
	} else if abs >= 1_000.0 {
		format!("{:.1}k/s", per_sec / 1_000.0)
	} else {
		format!("{per_sec:.0}/s")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn position_is_clamped_to_len() {
		let mut progress = ProgressBar::new();
		progress.init("test", 100);
		progress.set_position(250);
		assert_eq!(progress.pos, 100);
	}

	#[test]
	fn inc_accumulates() {
		let mut progress = ProgressBar::new();
		progress.init("test", 100);
		progress.inc(30);
		progress.inc(30);
		assert_eq!(progress.pos, 60);
	}

	#[test]
	fn finish_fills_the_bar() {
		let mut progress = ProgressBar::new();
		progress.init("test", 80);
		progress.inc(10);
		progress.finish();
		assert_eq!(progress.pos, 80);
		assert!(progress.finished);
	}

	#[test]
	fn rate_formatting() {
		assert_eq!(format_rate(12.0), "12/s");
		assert_eq!(format_rate(1_500.0), "1.5k/s");
		assert_eq!(format_rate(2_500_000.0), "2.5M/s");
	}
}
