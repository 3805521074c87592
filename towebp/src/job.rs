use crate::ConvertOptions;
use anyhow::{Context, Result};
use std::{
	fs,
	path::{Path, PathBuf},
};
use towebp_image::{SourceFormat, convert_to_webp};

/// Converting one file: `<dir>/<stem>.<ext>` becomes `<dir>/<stem>.webp`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionJob {
	pub input: PathBuf,
	pub output: PathBuf,
	pub options: ConvertOptions,
}

/// Result of a single job. Failures carry the full error chain as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
	Converted,
	Failed(String),
}

impl ConversionJob {
	pub fn new(input: PathBuf, options: ConvertOptions) -> ConversionJob {
		let output = input.with_extension("webp");
		ConversionJob { input, output, options }
	}

	pub fn input_name(&self) -> String {
		file_name(&self.input)
	}

	pub fn output_name(&self) -> String {
		file_name(&self.output)
	}

	/// Runs the conversion once. Never fails: errors become [`JobOutcome::Failed`].
	pub fn run(&self) -> JobOutcome {
		match self.convert() {
			Ok(()) => JobOutcome::Converted,
			Err(err) => {
				log::debug!("converting {:?} failed: {err:?}", self.input);
				JobOutcome::Failed(format!("{err:#}"))
			}
		}
	}

	fn convert(&self) -> Result<()> {
		let bytes = fs::read(&self.input).with_context(|| format!("reading {:?}", self.input))?;

		// encode completely before touching the output, so a failure leaves no partial file behind
		let webp = convert_to_webp(
			&bytes,
			SourceFormat::from_path(&self.input),
			self.options.quality,
			self.options.alpha_policy,
		)
		.with_context(|| format!("converting {}", self.input_name()))?;

		fs::write(&self.output, &webp).with_context(|| format!("writing {:?}", self.output))?;
		log::debug!("wrote {} bytes to {:?}", webp.len(), self.output);
		Ok(())
	}
}

fn file_name(path: &Path) -> String {
	path.file_name()
		.map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
		.to_string()
}
