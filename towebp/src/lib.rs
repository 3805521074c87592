//! # towebp
//!
//! Converts every JPEG and PNG file in a directory to WebP.
//!
//! - [`discovery`] finds the candidate files.
//! - [`job`] converts a single file and turns any failure into a [`job::JobOutcome`].
//! - [`report`] prints progress lines and the final summary.
//! - [`convert`] ties it together for a whole directory.
//!
//! ```no_run
//! use towebp::{ConvertOptions, convert::convert_directory, report::Reporter};
//! use towebp::image::AlphaPolicy;
//!
//! let options = ConvertOptions::new(80, AlphaPolicy::Preserve).unwrap();
//! let summary = convert_directory("photos".as_ref(), &options, &mut Reporter::stdio()).unwrap();
//! std::process::exit(i32::from(summary.exit_status()));
//! ```

pub mod convert;
pub mod discovery;
pub mod job;
pub mod options;
pub mod report;

pub use options::ConvertOptions;
pub use towebp_image as image;
