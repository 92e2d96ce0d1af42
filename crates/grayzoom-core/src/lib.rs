//! grayzoom-core - Image containers and grayscale conversion
//!
//! This crate provides the data model shared by the grayzoom pipeline:
//!
//! - [`RgbImage`] / [`GrayImage`]: owned row-major flat-buffer images
//! - [`Canvas`] / [`CanvasGeometry`]: the enlarged output arena and its
//!   2D-to-linear addressing
//! - [`Weights`]: channel weights with default luma substitution
//! - [`gray_into`] / [`to_gray`]: the RGB-to-grayscale converter
//!
//! The interpolation engine itself lives in `grayzoom-transform`.

mod canvas;
mod convert;
mod error;
mod gray;
mod weights;

pub use canvas::{Canvas, CanvasGeometry};
pub use convert::{gray_into, to_gray};
pub use error::{Error, Result};
pub use gray::{GrayImage, RgbImage};
pub use weights::{LUMA_BLUE, LUMA_GREEN, LUMA_RED, Weights};
