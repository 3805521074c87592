//! Image handling for towebp.
//!
//! The crate treats codecs as an external capability and keeps the interesting part, choosing
//! how a decoded image has to be normalized before WebP encoding, as a pure function:
//!
//! - [`format`] decodes JPEG/PNG bytes into a [`DecodedImage`] (pixels plus the source
//!   [`ColorMode`]) and encodes normalized images as WebP.
//! - [`normalization_target`] maps a source color mode and an [`AlphaPolicy`] to a [`Target`].
//! - [`normalize`] applies a [`Target`] to the decoded pixels.
//! - [`traits`] extends [`image::DynamicImage`] with the small helpers used along the way.
//!
//! ```no_run
//! use towebp_image::{AlphaPolicy, SourceFormat, convert_to_webp};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let webp = convert_to_webp(&bytes, Some(SourceFormat::Png), 80, AlphaPolicy::Preserve).unwrap();
//! std::fs::write("photo.webp", webp).unwrap();
//! ```

mod color_mode;
pub mod format;
mod normalize;
pub mod traits;

pub use color_mode::ColorMode;
pub use format::{DecodedImage, SourceFormat};
pub use normalize::{AlphaPolicy, Target, normalization_target, normalize};

use anyhow::{Context, Result};

/// Decodes `bytes`, normalizes the pixels for `policy` and encodes them as WebP at `quality`.
///
/// `hint` is only consulted when the content itself does not reveal the format.
pub fn convert_to_webp(bytes: &[u8], hint: Option<SourceFormat>, quality: u8, policy: AlphaPolicy) -> Result<Vec<u8>> {
	let decoded = format::decode(bytes, hint)?;
	let target = normalization_target(&decoded.mode, policy);
	log::debug!(
		"{} {}x{} in mode {} is normalized to {target:?}",
		decoded.format,
		decoded.image.width(),
		decoded.image.height(),
		decoded.mode
	);

	let image = normalize(decoded.image, target).with_context(|| format!("normalizing image to {target:?}"))?;
	format::webp::encode(&image, quality)
}
