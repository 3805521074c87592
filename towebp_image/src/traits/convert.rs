use anyhow::{Result, bail};
use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

pub trait DynamicImageTraitConvert {
	fn from_fn_l8(width: u32, height: u32, f: fn(u32, u32) -> u8) -> DynamicImage;
	fn from_fn_la8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 2]) -> DynamicImage;
	fn from_fn_rgb8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 3]) -> DynamicImage;
	fn from_fn_rgba8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 4]) -> DynamicImage;

	/// Iterates over the pixels of an 8-bit image as byte slices of `channel_count` length.
	fn iter_pixels(&self) -> Result<std::slice::ChunksExact<'_, u8>>;
}

impl DynamicImageTraitConvert for DynamicImage {
	fn from_fn_l8(width: u32, height: u32, f: fn(u32, u32) -> u8) -> DynamicImage {
		DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| Luma([f(x, y)])))
	}
	fn from_fn_la8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 2]) -> DynamicImage {
		DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |x, y| LumaA(f(x, y))))
	}
	fn from_fn_rgb8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 3]) -> DynamicImage {
		DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y))))
	}
	fn from_fn_rgba8(width: u32, height: u32, f: fn(u32, u32) -> [u8; 4]) -> DynamicImage {
		DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| Rgba(f(x, y))))
	}

	fn iter_pixels(&self) -> Result<std::slice::ChunksExact<'_, u8>> {
		Ok(match self {
			DynamicImage::ImageLuma8(img) => img.as_raw().chunks_exact(1),
			DynamicImage::ImageLumaA8(img) => img.as_raw().chunks_exact(2),
			DynamicImage::ImageRgb8(img) => img.as_raw().chunks_exact(3),
			DynamicImage::ImageRgba8(img) => img.as_raw().chunks_exact(4),
			_ => bail!("Unsupported image type for pixel iteration: {:?}", self.color()),
		})
	}
}
