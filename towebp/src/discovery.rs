//! Finding the files to convert.
//!
//! Only the direct entries of a directory are considered. A file qualifies when its name
//! matches one of [`IMAGE_PATTERNS`]; matching is case-sensitive, so `photo.Jpg` is skipped.
//! Hidden files are matched like any other name.

use anyhow::{Context, Result};
use std::{
	fs,
	path::{Path, PathBuf},
	sync::LazyLock,
};
use wildmatch::WildMatch;

pub const IMAGE_PATTERNS: [&str; 6] = ["*.jpg", "*.jpeg", "*.JPG", "*.JPEG", "*.png", "*.PNG"];

static MATCHERS: LazyLock<Vec<WildMatch>> = LazyLock::new(|| IMAGE_PATTERNS.iter().map(|p| WildMatch::new(p)).collect());

/// Returns `true` if a file called `name` should be converted.
pub fn is_image_name(name: &str) -> bool {
	MATCHERS.iter().any(|m| m.matches(name))
}

/// Lists the convertible files in `dir`, sorted by path.
///
/// Directories are skipped even when their name matches; symlinks count if they point to a file.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>> {
	let entries = fs::read_dir(dir).with_context(|| format!("reading directory {dir:?}"))?;

	let mut files = Vec::new();
	for entry in entries {
		let entry = entry.with_context(|| format!("listing directory {dir:?}"))?;
		let path = entry.path();

		// patterns are ASCII, so a lossy name matches the same way the raw bytes would
		let name = entry.file_name().to_string_lossy().into_owned();
		if !is_image_name(&name) {
			log::trace!("skipping {name:?}: not a JPG/PNG name");
			continue;
		}
		if !path.is_file() {
			log::debug!("skipping {name:?}: not a regular file");
			continue;
		}
		files.push(path);
	}

	files.sort();
	files.dedup();
	log::debug!("found {} candidate file(s) in {dir:?}", files.len());
	Ok(files)
}
