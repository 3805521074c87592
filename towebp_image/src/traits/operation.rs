use super::info::DynamicImageTraitInfo;
use anyhow::{Result, bail};
use image::{DynamicImage, Rgb};
use imageproc::map::map_pixels;

pub trait DynamicImageTraitOperation: DynamicImageTraitInfo {
	/// Composites an RGBA image onto a solid background `color` and returns it as `Rgb8`.
	///
	/// Each channel becomes `(src * a + color * (255 - a) + 127) / 255`. Images without an alpha
	/// channel are returned unchanged; other alpha layouts must be converted to `Rgba8` first.
	fn into_flattened(self, color: Rgb<u8>) -> Result<DynamicImage>;
}

impl DynamicImageTraitOperation for DynamicImage
where
	DynamicImage: DynamicImageTraitInfo,
{
	fn into_flattened(self, color: Rgb<u8>) -> Result<DynamicImage> {
		if !self.has_alpha() {
			return Ok(self);
		}
		match self {
			DynamicImage::ImageRgba8(img) => {
				let background = color.0.map(u16::from);
				Ok(DynamicImage::from(map_pixels(&img, |p| {
					let alpha = u16::from(p[3]);
					let blend = |i: usize| ((u16::from(p[i]) * alpha + background[i] * (255 - alpha) + 127) / 255) as u8;
					Rgb([blend(0), blend(1), blend(2)])
				})))
			}
			_ => bail!("Unsupported image type {:?} for flattening", self.color()),
		}
	}
}
