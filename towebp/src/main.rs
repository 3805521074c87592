use anyhow::Result;
use clap::{ArgAction::Count, Parser};
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};
use towebp::{
	ConvertOptions,
	convert::convert_directory,
	image::AlphaPolicy,
	options::{DEFAULT_QUALITY, parse_directory},
	report::Reporter,
};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Convert JPG and PNG files to WebP format in a directory",
	long_about = None,
	arg_required_else_help = true,
)]
struct Cli {
	/// Directory path containing JPG/PNG files to convert
	#[arg(value_parser = parse_directory)]
	path: PathBuf,

	/// WebP quality (1-100, higher is better)
	#[arg(long, short, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
	quality: u8,

	/// Composite transparent images onto a white background instead of keeping their alpha channel
	#[arg(long)]
	flatten: bool,

	/// Increase logging verbosity (-v info, -vv debug, -vvv trace)
	#[arg(long, short, action = Count)]
	verbose: u8,
}

impl Cli {
	fn log_level_filter(&self) -> LevelFilter {
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}

	fn options(&self) -> Result<ConvertOptions> {
		let alpha_policy = if self.flatten {
			AlphaPolicy::Flatten
		} else {
			AlphaPolicy::Preserve
		};
		ConvertOptions::new(self.quality, alpha_policy)
	}
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<ExitCode> {
	let summary = convert_directory(&cli.path, &cli.options()?, &mut Reporter::stdio())?;
	Ok(ExitCode::from(summary.exit_status()))
}
