use anyhow::{Result, ensure};
use std::{fs, path::PathBuf};
use towebp_image::AlphaPolicy;

pub const DEFAULT_QUALITY: u8 = 80;

/// Settings shared by every conversion job of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
	/// WebP quality, `1..=100`.
	pub quality: u8,
	pub alpha_policy: AlphaPolicy,
}

impl ConvertOptions {
	pub fn new(quality: u8, alpha_policy: AlphaPolicy) -> Result<ConvertOptions> {
		ensure!(
			(1..=100).contains(&quality),
			"quality must be between 1 and 100, got {quality}"
		);
		Ok(ConvertOptions { quality, alpha_policy })
	}
}

impl Default for ConvertOptions {
	fn default() -> Self {
		ConvertOptions {
			quality: DEFAULT_QUALITY,
			alpha_policy: AlphaPolicy::default(),
		}
	}
}

/// Command line value parser for the input directory: it must exist, be a directory and be
/// listable.
pub fn parse_directory(value: &str) -> Result<PathBuf, String> {
	let path = PathBuf::from(value);
	if !path.exists() {
		return Err(format!("Directory '{value}' does not exist."));
	}
	if !path.is_dir() {
		return Err(format!("Directory '{value}' is a file."));
	}
	fs::read_dir(&path).map_err(|e| format!("Directory '{value}' is not readable: {e}"))?;
	Ok(path)
}
