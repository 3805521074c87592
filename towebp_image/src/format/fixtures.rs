//! Encoded test inputs. Only compiled for tests or with the `test` feature.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
	let mut buffer = Vec::new();
	image
		.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
		.expect("encoding test PNG");
	buffer
}

pub fn encode_jpeg(image: &DynamicImage) -> Vec<u8> {
	let mut buffer = Vec::new();
	image
		.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
		.expect("encoding test JPEG");
	buffer
}

/// A 16x16 checkerboard of red and blue palette entries.
///
/// With `transparent` the palette gets a `tRNS` chunk that makes the red entry fully transparent.
pub fn encode_palette_png(transparent: bool) -> Vec<u8> {
	const SIZE: u32 = 16;
	let mut buffer = Vec::new();
	{
		let mut encoder = ::png::Encoder::new(&mut buffer, SIZE, SIZE);
		encoder.set_color(::png::ColorType::Indexed);
		encoder.set_depth(::png::BitDepth::Eight);
		encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
		if transparent {
			encoder.set_trns(vec![0]);
		}
		let mut writer = encoder.write_header().expect("writing test PNG header");
		let indices: Vec<u8> = (0..SIZE * SIZE).map(|i| ((i % SIZE + i / SIZE) % 2) as u8).collect();
		writer.write_image_data(&indices).expect("writing test PNG data");
	}
	buffer
}
