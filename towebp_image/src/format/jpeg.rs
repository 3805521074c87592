use super::{DecodedImage, SourceFormat};
use crate::ColorMode;
use anyhow::{Result, anyhow};
use image::{ImageFormat, load_from_memory_with_format};

/// Decodes a JPEG. JPEG has no palettes and no transparency, so the mode follows the decoded
/// buffer (greyscale or RGB; CMYK arrives already converted to RGB).
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
	let image = load_from_memory_with_format(bytes, ImageFormat::Jpeg)
		.map_err(|e| anyhow!("Failed to decode JPEG image: {e}"))?;

	Ok(DecodedImage {
		mode: ColorMode::from_color_type(image.color()),
		image,
		format: SourceFormat::Jpeg,
	})
}
