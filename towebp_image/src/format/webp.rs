//! WebP encoding (and decoding, used to verify results).
//!
//! Encoding is lossy at the requested quality with the slowest, best-compressing method, so the
//! output is as small as libwebp can make it for that quality. RGBA input keeps its alpha plane,
//! which libwebp compresses losslessly.

use crate::traits::DynamicImageTraitInfo;
use anyhow::{Result, anyhow, bail, ensure};
use image::DynamicImage;
use ::webp::{Decoder, Encoder, WebPConfig};

/// libwebp's `method`: 0 is fastest, 6 gives the smallest files.
const SMALLEST_OUTPUT_METHOD: i32 = 6;

/// Encodes an 8-bit RGB or RGBA image. `quality` must be within `1..=100`.
pub fn encode(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
	ensure!((1..=100).contains(&quality), "WebP quality must be between 1 and 100, got {quality}");
	if image.bits_per_value() != 8 {
		bail!("WebP only supports 8-bit images");
	}

	let encoder = match image {
		DynamicImage::ImageRgb8(img) => Encoder::from_rgb(img.as_raw(), img.width(), img.height()),
		DynamicImage::ImageRgba8(img) => Encoder::from_rgba(img.as_raw(), img.width(), img.height()),
		_ => bail!("WebP only supports RGB or RGBA images"),
	};

	let mut config = WebPConfig::new().map_err(|_| anyhow!("failed to initialize the WebP encoder"))?;
	config.quality = f32::from(quality);
	config.method = SMALLEST_OUTPUT_METHOD;

	let memory = encoder.encode_advanced(&config).map_err(|e| {
		anyhow!(
			"encoding {}x{} {:?} image as WebP (q={quality}) failed: {e:?}",
			image.width(),
			image.height(),
			image.color()
		)
	})?;

	log::trace!("encoded {}x{} image into {} bytes of WebP", image.width(), image.height(), memory.len());
	Ok(memory.to_vec())
}

pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
	match Decoder::new(bytes).decode() {
		Some(image) => Ok(image.to_image()),
		None => bail!("cant read webp"),
	}
}
