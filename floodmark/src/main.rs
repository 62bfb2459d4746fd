mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(version, about, propagate_version = true, disable_help_subcommand = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Segment a grayscale image from markers
	Segment(tools::segment::Subcommand),

	/// Segment a multi-channel image from markers
	SegmentMulti(tools::segment_multi::Subcommand),
}

impl Commands {
	fn run(&self) -> Result<()> {
		match self {
			Commands::Segment(arguments) => tools::segment::run(arguments),
			Commands::SegmentMulti(arguments) => tools::segment_multi::run(arguments),
		}
	}
}

/// Wires the verbosity flag into the logger. Safe to call more than once;
/// the in-process test harness runs several commands per process.
fn init_logging(filter: log::LevelFilter) {
	env_logger::Builder::new()
		.filter_level(filter)
		.format_timestamp(None)
		.format_target(false)
		.try_init()
		.ok();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose.log_level_filter());
	cli.command.run()
}
