//! Codec bridges: JPEG and PNG decoding, WebP encoding.
//!
//! Decoding produces a [`DecodedImage`], which carries the source [`ColorMode`] next to the
//! pixels, because the decoders already expand palettes and transparency chunks.

#[cfg(any(test, feature = "test"))]
pub mod fixtures;
pub mod jpeg;
pub mod png;
pub mod webp;

use crate::ColorMode;
use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, ImageFormat};
use std::{fmt, path::Path};

/// Formats that can be converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
	Jpeg,
	Png,
}

impl SourceFormat {
	/// Guesses the format from a file extension, ignoring case.
	pub fn from_path(path: &Path) -> Option<SourceFormat> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();
		match extension.as_str() {
			"jpg" | "jpeg" => Some(SourceFormat::Jpeg),
			"png" => Some(SourceFormat::Png),
			_ => None,
		}
	}

	/// Detects the format from the magic bytes.
	///
	/// Returns `Ok(None)` when the content is not recognized at all and an error when it is
	/// recognized as something that cannot be converted.
	pub fn sniff(bytes: &[u8]) -> Result<Option<SourceFormat>> {
		match image::guess_format(bytes) {
			Ok(ImageFormat::Jpeg) => Ok(Some(SourceFormat::Jpeg)),
			Ok(ImageFormat::Png) => Ok(Some(SourceFormat::Png)),
			Ok(other) => bail!("unsupported image format {other:?}"),
			Err(_) => Ok(None),
		}
	}
}

impl fmt::Display for SourceFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SourceFormat::Jpeg => "JPEG",
			SourceFormat::Png => "PNG",
		})
	}
}

/// A decoded source image.
#[derive(Clone, Debug)]
pub struct DecodedImage {
	pub image: DynamicImage,
	pub mode: ColorMode,
	pub format: SourceFormat,
}

/// Decodes JPEG or PNG bytes. The content decides the format; `hint` is used only when the
/// content is not recognized, so a PNG named `.jpg` still decodes.
pub fn decode(bytes: &[u8], hint: Option<SourceFormat>) -> Result<DecodedImage> {
	let sniffed = SourceFormat::sniff(bytes).map_err(|err| match hint {
		Some(expected) => anyhow!("{err}, although the file extension says {expected}"),
		None => err,
	})?;
	let format = sniffed
		.or(hint)
		.ok_or_else(|| anyhow!("cannot identify image format of {} bytes", bytes.len()))?;

	match format {
		SourceFormat::Jpeg => jpeg::decode(bytes),
		SourceFormat::Png => png::decode(bytes),
	}
}
