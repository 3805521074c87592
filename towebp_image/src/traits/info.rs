//! Layout and transparency introspection for `DynamicImage`.
use super::convert::DynamicImageTraitConvert;
use image::{DynamicImage, ExtendedColorType};

pub trait DynamicImageTraitInfo: DynamicImageTraitConvert {
	/// Bits of a single channel value, e.g. `8` for `Rgb8` and `16` for `La16`.
	fn bits_per_value(&self) -> u8;

	fn channel_count(&self) -> u8;

	fn extended_color_type(&self) -> ExtendedColorType;

	/// `true` when every alpha value is `255`. Images without alpha are always opaque.
	///
	/// Layouts that cannot be inspected byte-wise (16-bit, float) are converted to RGBA8 first.
	fn is_opaque(&self) -> bool;
}

impl DynamicImageTraitInfo for DynamicImage
where
	DynamicImage: DynamicImageTraitConvert,
{
	fn bits_per_value(&self) -> u8 {
		(self.color().bits_per_pixel() / u16::from(self.color().channel_count())) as u8
	}

	fn channel_count(&self) -> u8 {
		self.color().channel_count()
	}

	fn extended_color_type(&self) -> ExtendedColorType {
		self.color().into()
	}

	fn is_opaque(&self) -> bool {
		if !self.color().has_alpha() {
			return true;
		}
		let alpha_channel = (self.channel_count() - 1) as usize;
		match self.iter_pixels() {
			Ok(mut pixels) => pixels.all(|p| p[alpha_channel] == 255),
			Err(_) => self.to_rgba8().pixels().all(|p| p[3] == 255),
		}
	}
}
