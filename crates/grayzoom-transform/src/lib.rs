//! grayzoom-transform - Gap-filling interpolation engine
//!
//! Upscales a grayscale image by an integer factor by scattering the
//! original samples onto an enlarged canvas ("anchors") and synthesizing
//! every position in between with a discrete bilinear blend.
//!
//! The engine is built from small pieces:
//!
//! - [`scatter`]: places anchors at multiples of the scale factor
//! - [`AnchorWalker`]: yields every 2x2 anchor quad in raster order
//! - [`GapFiller`]: the fill strategy seam, with two interchangeable
//!   implementations that produce byte-identical canvases:
//!   [`ScalarFiller`] (one sample per step) and [`BatchFiller`] (4-wide
//!   vector lanes)
//! - [`interpolate`] / [`interpolate_batch`] / [`upscale`]: pipeline
//!   entry points that also run the grayscale conversion
//!
//! Quads must be processed in raster order; see [`GapFiller`] for why.

mod batch;
mod error;
mod filler;
pub mod formula;
mod geometry;
mod placer;
mod quad;
mod scalar;

pub use batch::BatchFiller;
pub use error::{TransformError, TransformResult};
pub use filler::GapFiller;
pub use geometry::UpscaleGeometry;
pub use placer::scatter;
pub use quad::{AnchorQuad, AnchorWalker, QuadKind};
pub use scalar::ScalarFiller;

use grayzoom_core::{Canvas, RgbImage, Weights, gray_into, to_gray};

/// Largest supported scale factor.
///
/// Keeps the blend numerator 255 * s^2 within `i32`, so the vector lanes
/// and the scalar formula share one value range.
pub const MAX_SCALE: usize = 2896;

fn check_scale(scale: usize) -> TransformResult<()> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(TransformError::InvalidScaleFactor(scale));
    }
    Ok(())
}

/// Run the placer and one gap filler over an already-grayscale buffer.
fn fill_gaps(gray: &[u8], canvas: &mut [u8], geom: &UpscaleGeometry, filler: &dyn GapFiller) {
    scatter(gray, canvas, geom);
    for quad in AnchorWalker::new(gray, geom.src_width(), geom.src_height()) {
        filler.fill_quad(canvas, geom, &quad);
    }
}

/// Grayscale-convert and upscale into caller-provided buffers, with a
/// caller-chosen fill strategy.
///
/// `src` holds `3 * width * height` interleaved RGB bytes, `scratch`
/// holds `width * height` bytes and receives the grayscale conversion,
/// `canvas` holds `(width * scale) * (height * scale)` bytes and receives
/// the result. Buffer sizes are the caller's contract and only checked in
/// debug builds.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if `scale` is 0 or
/// exceeds [`MAX_SCALE`].
#[allow(clippy::too_many_arguments)]
pub fn interpolate_with(
    src: &[u8],
    width: usize,
    height: usize,
    weights: Weights,
    scale: usize,
    scratch: &mut [u8],
    canvas: &mut [u8],
    filler: &dyn GapFiller,
) -> TransformResult<()> {
    check_scale(scale)?;
    debug_assert_eq!(src.len(), 3 * width * height);
    debug_assert_eq!(scratch.len(), width * height);
    debug_assert_eq!(canvas.len(), width * scale * height * scale);

    gray_into(src, scratch, width, height, weights);
    let geom = UpscaleGeometry::new(width, height, scale);
    fill_gaps(scratch, canvas, &geom, filler);
    Ok(())
}

/// [`interpolate_with`] using the scalar fill strategy.
#[allow(clippy::too_many_arguments)]
pub fn interpolate(
    src: &[u8],
    width: usize,
    height: usize,
    weights: Weights,
    scale: usize,
    scratch: &mut [u8],
    canvas: &mut [u8],
) -> TransformResult<()> {
    interpolate_with(
        src,
        width,
        height,
        weights,
        scale,
        scratch,
        canvas,
        &ScalarFiller,
    )
}

/// [`interpolate_with`] using the 4-wide batch fill strategy.
#[allow(clippy::too_many_arguments)]
pub fn interpolate_batch(
    src: &[u8],
    width: usize,
    height: usize,
    weights: Weights,
    scale: usize,
    scratch: &mut [u8],
    canvas: &mut [u8],
) -> TransformResult<()> {
    interpolate_with(
        src,
        width,
        height,
        weights,
        scale,
        scratch,
        canvas,
        &BatchFiller::new(),
    )
}

/// Grayscale-convert and upscale an owned image, allocating the canvas.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] for a scale of 0 or
/// above [`MAX_SCALE`], and propagates canvas allocation failures
/// (dimension overflow) from the core.
pub fn upscale(
    img: &RgbImage,
    weights: Weights,
    scale: usize,
    filler: &dyn GapFiller,
) -> TransformResult<Canvas> {
    check_scale(scale)?;
    let mut canvas = Canvas::for_scale(img.width(), img.height(), scale)?;
    let gray = to_gray(img, weights);
    let geom = UpscaleGeometry::new(img.width(), img.height(), scale);
    fill_gaps(gray.as_slice(), canvas.as_mut_slice(), &geom, filler);
    Ok(canvas)
}
