//! grayzoom - Integer-factor grayscale image upsampling
//!
//! Converts a color image to grayscale and upscales it by an integer
//! factor, synthesizing the pixels between the original samples with a
//! discrete bilinear blend. Two interchangeable interpolation strategies
//! (scalar and 4-wide vectorized) produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use grayzoom::{RgbImage, Weights};
//! use grayzoom::transform::{ScalarFiller, upscale};
//!
//! let img = RgbImage::from_raw(2, 2, vec![128; 12]).unwrap();
//! let canvas = upscale(&img, Weights::unset(), 4, &ScalarFiller).unwrap();
//! assert_eq!(canvas.width(), 8);
//! assert_eq!(canvas.height(), 8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use grayzoom_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use grayzoom_io as io;
pub use grayzoom_transform as transform;
