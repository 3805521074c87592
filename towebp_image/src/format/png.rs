use super::{DecodedImage, SourceFormat};
use crate::ColorMode;
use anyhow::{Context, Result, anyhow};
use image::{ImageFormat, load_from_memory_with_format};
use std::io::Cursor;

/// Reads the declared color mode from the PNG header chunks without decoding pixel data.
pub fn color_mode(bytes: &[u8]) -> Result<ColorMode> {
	let reader = ::png::Decoder::new(Cursor::new(bytes))
		.read_info()
		.context("reading PNG header")?;
	let info = reader.info();
	Ok(ColorMode::from_png(info.color_type, info.trns.is_some()))
}

/// Decodes a PNG. Palettes are expanded by the decoder, the header keeps track of what the
/// source was.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
	let mode = color_mode(bytes)?;
	let image =
		load_from_memory_with_format(bytes, ImageFormat::Png).map_err(|e| anyhow!("Failed to decode PNG image: {e}"))?;

	Ok(DecodedImage {
		image,
		mode,
		format: SourceFormat::Png,
	})
}
