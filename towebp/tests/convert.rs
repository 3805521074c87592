use image::{DynamicImage, GenericImageView};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use test_utilities::*;
use towebp_image::{format::webp, traits::*};

#[test]
fn converts_every_matching_file() {
	let dir = get_temp_dir();
	write_jpeg(dir.path(), "one.jpg", &DynamicImage::new_test_rgb());
	write_jpeg(dir.path(), "two.JPEG", &DynamicImage::new_test_grey());
	write_png(dir.path(), "three.png", &DynamicImage::new_test_rgb());
	write_png(dir.path(), "four.PNG", &DynamicImage::new_test_greya());

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success, "stderr: {}", o.stderr);
	assert_eq!(o.code, 0);
	assert_contains!(o.stdout, &format!("Found 4 image file(s) in {}", dir.path().display()));
	assert_contains!(o.stdout, "✓ Converted: one.jpg → one.webp");
	assert_contains!(o.stdout, "✓ Converted: two.JPEG → two.webp");
	assert_contains!(o.stdout, "✓ Converted: three.png → three.webp");
	assert_contains!(o.stdout, "✓ Converted: four.PNG → four.webp");
	assert!(o.stdout.ends_with("\nConversion complete!\nSuccessfully converted: 4 files\n"));
	assert_eq!(o.stderr, "");

	assert_eq!(
		list_dir(dir.path()),
		vec![
			"four.PNG",
			"four.webp",
			"one.jpg",
			"one.webp",
			"three.png",
			"three.webp",
			"two.JPEG",
			"two.webp"
		]
	);
	for name in ["one.webp", "two.webp", "three.webp", "four.webp"] {
		assert_eq!(read_webp(&dir.path().join(name)).dimensions(), (256, 256));
	}
}

#[test]
fn empty_directory_exits_cleanly() {
	let dir = get_temp_dir();
	fs::write(dir.path().join("notes.txt"), "no images here").unwrap();
	fs::write(dir.path().join("photo.gif"), "GIF89a").unwrap();

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success);
	assert_eq!(o.code, 0);
	assert_eq!(o.stdout, "");
	assert_eq!(o.stderr, format!("No JPG/PNG files found in {}\n", dir.path().display()));
	assert_eq!(list_dir(dir.path()), vec!["notes.txt", "photo.gif"]);
}

#[test]
fn corrupt_file_does_not_stop_the_others() {
	let dir = get_temp_dir();
	write_png(dir.path(), "a.png", &DynamicImage::new_test_rgb());
	let valid = fs::read(write_jpeg(dir.path(), "b.jpg", &DynamicImage::new_test_rgb())).unwrap();
	fs::write(dir.path().join("b.jpg"), &valid[..valid.len().min(100)]).unwrap();
	write_png(dir.path(), "c.png", &DynamicImage::new_test_rgba());

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(!o.success);
	assert_eq!(o.code, 1);
	assert_contains!(o.stdout, "✓ Converted: a.png → a.webp");
	assert_contains!(o.stdout, "✓ Converted: c.png → c.webp");
	assert_contains!(o.stdout, "Successfully converted: 2 files");
	assert_contains!(o.stderr, "✗ Error converting b.jpg: ");
	assert!(o.stderr.ends_with("Errors: 1 files\n"), "stderr: {}", o.stderr);

	assert!(dir.path().join("a.webp").is_file());
	assert!(!dir.path().join("b.webp").exists());
	assert!(dir.path().join("c.webp").is_file());
}

#[test]
fn misnamed_webp_reports_the_extension() {
	let dir = get_temp_dir();
	let bytes = webp::encode(&DynamicImage::new_test_rgb(), 80).unwrap();
	fs::write(dir.path().join("fake.png"), bytes).unwrap();

	let o = towebp_output(&[path_str(dir.path())]);
	assert_eq!(o.code, 1);
	assert_contains!(
		o.stderr,
		"unsupported image format WebP, although the file extension says PNG"
	);
	assert!(!dir.path().join("fake.webp").exists());
}

#[test]
fn existing_output_is_overwritten() {
	let dir = get_temp_dir();
	write_png(dir.path(), "a.png", &DynamicImage::new_test_rgb());
	fs::write(dir.path().join("a.webp"), "old content").unwrap();

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success, "stderr: {}", o.stderr);
	assert_eq!(read_webp(&dir.path().join("a.webp")).dimensions(), (256, 256));
}

#[test]
fn hidden_files_are_converted() {
	let dir = get_temp_dir();
	write_jpeg(dir.path(), ".photo.jpg", &DynamicImage::new_test_rgb());
	write_png(dir.path(), "visible.png", &DynamicImage::new_test_rgb());

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success, "stderr: {}", o.stderr);
	assert_contains!(o.stdout, "Found 2 image file(s)");
	assert_contains!(o.stdout, "✓ Converted: .photo.jpg → .photo.webp");
	assert_eq!(
		list_dir(dir.path()),
		vec![".photo.jpg", ".photo.webp", "visible.png", "visible.webp"]
	);
}

#[test]
fn subdirectories_are_not_searched() {
	let dir = get_temp_dir();
	fs::create_dir(dir.path().join("nested")).unwrap();
	write_png(&dir.path().join("nested"), "deep.png", &DynamicImage::new_test_rgb());

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success);
	assert_contains!(o.stderr, "No JPG/PNG files found");
	assert!(!dir.path().join("nested").join("deep.webp").exists());
}

#[rstest]
#[case::preserve(&[], false)]
#[case::flatten(&["--flatten"], true)]
fn alpha_channel(#[case] flags: &[&str], #[case] opaque: bool) {
	let dir = get_temp_dir();
	write_png(dir.path(), "alpha.png", &DynamicImage::new_test_rgba());

	let mut args = flags.to_vec();
	args.push(path_str(dir.path()));
	let o = towebp_output(&args);
	assert!(o.success, "stderr: {}", o.stderr);

	let webp = read_webp(&dir.path().join("alpha.webp"));
	assert_eq!(webp.is_opaque(), opaque);
	if opaque {
		// rgba pattern: the last row is fully transparent and becomes white
		let p = webp.get_pixel(128, 255).0;
		assert!(p[0] > 240 && p[1] > 240 && p[2] > 240, "expected white, got {p:?}");
	} else {
		assert!(webp.has_alpha());
	}
}

#[rstest]
#[case::palette_with_transparency(true)]
#[case::palette_without_transparency(false)]
fn palette_images(#[case] transparent: bool) {
	let dir = get_temp_dir();
	write_palette_png(dir.path(), "palette.png", transparent);

	let o = towebp_output(&[path_str(dir.path())]);
	assert!(o.success, "stderr: {}", o.stderr);

	let webp = read_webp(&dir.path().join("palette.webp"));
	assert_eq!(webp.has_alpha(), transparent);
	assert_eq!(webp.is_opaque(), !transparent);
}

#[rstest]
#[case("1")]
#[case("80")]
#[case("100")]
fn quality_bounds_are_accepted(#[case] quality: &str) {
	let dir = get_temp_dir();
	write_jpeg(dir.path(), "a.jpg", &DynamicImage::new_test_rgb());

	let o = towebp_output(&["-q", quality, path_str(dir.path())]);
	assert!(o.success, "stderr: {}", o.stderr);
	assert!(dir.path().join("a.webp").is_file());
}

#[test]
fn lower_quality_writes_smaller_files() {
	let low = get_temp_dir();
	let high = get_temp_dir();
	write_png(low.path(), "a.png", &DynamicImage::new_test_rgb());
	write_png(high.path(), "a.png", &DynamicImage::new_test_rgb());

	assert!(towebp_output(&["-q", "5", path_str(low.path())]).success);
	assert!(towebp_output(&["-q", "100", path_str(high.path())]).success);

	let low_size = fs::metadata(low.path().join("a.webp")).unwrap().len();
	let high_size = fs::metadata(high.path().join("a.webp")).unwrap().len();
	assert!(low_size < high_size, "{low_size} >= {high_size}");
}
