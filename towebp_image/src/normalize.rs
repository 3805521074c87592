//! The color-mode normalization table.
//!
//! WebP stores 8-bit RGB or RGBA. Before encoding, every decoded image is brought into one of
//! those layouts. Which one depends only on the source [`ColorMode`] and on the [`AlphaPolicy`],
//! so the decision is a pure function ([`normalization_target`]) and its application
//! ([`normalize`]) is a plain pixel conversion.

use crate::{ColorMode, traits::DynamicImageTraitOperation};
use anyhow::Result;
use image::{DynamicImage, Rgb};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// What happens to transparency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaPolicy {
	/// Alpha-bearing sources stay alpha-bearing.
	#[default]
	Preserve,
	/// Alpha-bearing sources are composited onto a white background.
	Flatten,
}

/// Layout an image is converted into before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
	Rgb,
	Rgba,
	FlattenOnWhite,
}

/// Chooses the normalization for a source image.
///
/// | source                               | `Preserve` | `Flatten`        |
/// |--------------------------------------|------------|------------------|
/// | RGBA, LA, palette with transparency  | `Rgba`     | `FlattenOnWhite` |
/// | everything else                      | `Rgb`      | `Rgb`            |
pub fn normalization_target(mode: &ColorMode, policy: AlphaPolicy) -> Target {
	if !mode.has_alpha() {
		return Target::Rgb;
	}
	match policy {
		AlphaPolicy::Preserve => Target::Rgba,
		AlphaPolicy::Flatten => Target::FlattenOnWhite,
	}
}

/// Converts `image` into the layout selected by `target`. The result is always 8-bit.
///
/// `Target::Rgb` drops an alpha channel the decoder may have synthesized, e.g. from the
/// transparent color of a greyscale PNG.
pub fn normalize(image: DynamicImage, target: Target) -> Result<DynamicImage> {
	Ok(match target {
		Target::Rgb => DynamicImage::ImageRgb8(image.into_rgb8()),
		Target::Rgba => DynamicImage::ImageRgba8(image.into_rgba8()),
		Target::FlattenOnWhite => DynamicImage::ImageRgba8(image.into_rgba8()).into_flattened(WHITE)?,
	})
}
