//! Human readable progress and summary output.
//!
//! Progress and totals go to `out`, per-file errors and the error total go to `err`.

use crate::job::{ConversionJob, JobOutcome};
use std::{
	io::{self, Stderr, Stdout, Write},
	path::Path,
};

/// Counters of a finished (or running) directory conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
	pub found: usize,
	pub converted: usize,
	pub failed: usize,
}

impl ConversionSummary {
	pub fn new(found: usize) -> ConversionSummary {
		ConversionSummary {
			found,
			..Default::default()
		}
	}

	pub fn record(&mut self, outcome: &JobOutcome) {
		match outcome {
			JobOutcome::Converted => self.converted += 1,
			JobOutcome::Failed(_) => self.failed += 1,
		}
	}

	/// Process exit status: `1` if any file failed, `0` otherwise.
	pub fn exit_status(&self) -> u8 {
		u8::from(self.failed > 0)
	}
}

pub struct Reporter<O: Write, E: Write> {
	out: O,
	err: E,
}

impl Reporter<Stdout, Stderr> {
	pub fn stdio() -> Self {
		Reporter::new(io::stdout(), io::stderr())
	}
}

impl<O: Write, E: Write> Reporter<O, E> {
	pub fn new(out: O, err: E) -> Self {
		Reporter { out, err }
	}

	pub fn no_files(&mut self, dir: &Path) -> io::Result<()> {
		writeln!(self.err, "No JPG/PNG files found in {}", dir.display())
	}

	pub fn found(&mut self, count: usize, dir: &Path) -> io::Result<()> {
		writeln!(self.out, "Found {count} image file(s) in {}", dir.display())
	}

	pub fn outcome(&mut self, job: &ConversionJob, outcome: &JobOutcome) -> io::Result<()> {
		match outcome {
			JobOutcome::Converted => writeln!(self.out, "✓ Converted: {} → {}", job.input_name(), job.output_name()),
			JobOutcome::Failed(message) => writeln!(self.err, "✗ Error converting {}: {message}", job.input_name()),
		}
	}

	pub fn summary(&mut self, summary: &ConversionSummary) -> io::Result<()> {
		writeln!(self.out, "\nConversion complete!")?;
		writeln!(self.out, "Successfully converted: {} files", summary.converted)?;
		if summary.failed > 0 {
			writeln!(self.err, "Errors: {} files", summary.failed)?;
		}
		self.out.flush()?;
		self.err.flush()
	}

	pub fn into_inner(self) -> (O, E) {
		(self.out, self.err)
	}
}
