use image::ColorType;
use std::fmt;

/// Pixel layout of a source image as its container declares it.
///
/// This is deliberately the *source* layout and not the layout of the decoded buffer: decoders
/// expand palettes and transparency chunks, so a palette PNG arrives as RGB or RGBA pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
	/// Greyscale without alpha.
	Luma,
	/// Greyscale with an alpha channel.
	LumaAlpha,
	Rgb,
	Rgba,
	/// Indexed colors; `transparent` is set when the palette declares transparent entries.
	Palette { transparent: bool },
	/// Anything else, e.g. floating point layouts. Holds a short description for diagnostics.
	Other(String),
}

impl ColorMode {
	/// Maps a PNG header color type (plus the presence of a `tRNS` chunk) to a [`ColorMode`].
	///
	/// A `tRNS` chunk on a greyscale or truecolor image only names a single transparent color.
	/// It does not turn the image into an alpha image, so it is only relevant for palettes.
	pub fn from_png(color_type: png::ColorType, has_trns: bool) -> ColorMode {
		use png::ColorType::*;
		match color_type {
			Grayscale => ColorMode::Luma,
			GrayscaleAlpha => ColorMode::LumaAlpha,
			Rgb => ColorMode::Rgb,
			Rgba => ColorMode::Rgba,
			Indexed => ColorMode::Palette { transparent: has_trns },
		}
	}

	/// Derives the mode from an already decoded buffer.
	pub fn from_color_type(color_type: ColorType) -> ColorMode {
		match color_type {
			ColorType::L8 | ColorType::L16 => ColorMode::Luma,
			ColorType::La8 | ColorType::La16 => ColorMode::LumaAlpha,
			ColorType::Rgb8 | ColorType::Rgb16 => ColorMode::Rgb,
			ColorType::Rgba8 | ColorType::Rgba16 => ColorMode::Rgba,
			other => ColorMode::Other(format!("{other:?}")),
		}
	}

	pub fn has_alpha(&self) -> bool {
		matches!(
			self,
			ColorMode::LumaAlpha | ColorMode::Rgba | ColorMode::Palette { transparent: true }
		)
	}
}

impl fmt::Display for ColorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ColorMode::Luma => f.write_str("L"),
			ColorMode::LumaAlpha => f.write_str("LA"),
			ColorMode::Rgb => f.write_str("RGB"),
			ColorMode::Rgba => f.write_str("RGBA"),
			ColorMode::Palette { transparent: false } => f.write_str("P"),
			ColorMode::Palette { transparent: true } => f.write_str("P (transparent)"),
			ColorMode::Other(name) => write!(f, "other ({name})"),
		}
	}
}
