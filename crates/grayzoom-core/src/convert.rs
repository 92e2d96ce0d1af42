//! RGB-to-grayscale conversion
//!
//! Each output sample is the weighted average of the three input
//! channels, computed in `f32` and truncated toward zero:
//!
//! ```text
//! gray = trunc((R*a + G*b + B*c) / (a + b + c))
//! ```
//!
//! The operation order matters for exactness guarantees downstream, so
//! the loop body performs exactly the multiplies, adds, and single
//! division shown above.

use crate::gray::{GrayImage, RgbImage};
use crate::weights::Weights;

/// Convert an interleaved RGB buffer to grayscale, writing into `dst`.
///
/// `src` holds `3 * width * height` bytes, `dst` holds `width * height`.
/// An all-zero weight triple is resolved to the default luma weights;
/// weight validity (finite, non-negative, not summing to zero unless all
/// zero) is the caller's contract, enforced by [`Weights::new`].
pub fn gray_into(src: &[u8], dst: &mut [u8], width: usize, height: usize, weights: Weights) {
    debug_assert_eq!(src.len(), 3 * width * height);
    debug_assert_eq!(dst.len(), width * height);

    let w = weights.resolve();
    let divisor = w.sum();
    for (i, out) in dst.iter_mut().enumerate().take(width * height) {
        let r = src[i * 3] as f32;
        let g = src[i * 3 + 1] as f32;
        let b = src[i * 3 + 2] as f32;
        *out = ((r * w.red + g * w.green + b * w.blue) / divisor) as u8;
    }
}

/// Convert an [`RgbImage`] to a new [`GrayImage`].
pub fn to_gray(img: &RgbImage, weights: Weights) -> GrayImage {
    let mut out = vec![0u8; img.width() * img.height()];
    gray_into(img.as_slice(), &mut out, img.width(), img.height(), weights);
    // Dimensions come from a validated image, so this cannot fail.
    GrayImage::from_raw(img.width(), img.height(), out).unwrap()
}
