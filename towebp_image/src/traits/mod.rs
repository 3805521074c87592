//! Extension traits for [`image::DynamicImage`].
//!
//! - [`DynamicImageTraitConvert`] — building images from pixel functions or raw buffers.
//! - [`DynamicImageTraitInfo`] — layout introspection and transparency checks.
//! - [`DynamicImageTraitOperation`] — alpha flattening.

mod convert;
mod info;
mod operation;

pub use convert::*;
pub use info::*;
pub use operation::*;
#[cfg(any(test, feature = "test"))]
pub use test::*;
