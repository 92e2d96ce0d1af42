//! The enlarged output canvas and its addressing
//!
//! A [`Canvas`] is a single flat arena of `width * height` bytes, allocated
//! once per conversion and mutated in place by the interpolation pass.
//! All 2D positions are translated to linear indices through
//! [`CanvasGeometry`], so the index arithmetic lives in one place instead
//! of being spread across every write site.

use crate::error::{Error, Result};
use crate::gray::GrayImage;

/// 2D-to-linear index mapping for a row-major byte canvas.
///
/// Bound to the canvas width; rows and columns are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    width: usize,
    height: usize,
}

impl CanvasGeometry {
    /// Geometry for a canvas of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Linear index of (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }
}

/// The enlarged single-channel output canvas.
///
/// Length is `(src_width * scale) * (src_height * scale)`. The placer
/// writes anchor samples at multiples of the scale factor; every other
/// position is a gap to be synthesized by the interpolation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    geometry: CanvasGeometry,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zero-filled canvas for upscaling a `width` x `height`
    /// source by `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty sources and
    /// [`Error::DimensionOverflow`] if the canvas byte count does not fit
    /// in `usize`.
    pub fn for_scale(width: usize, height: usize, scale: usize) -> Result<Self> {
        if width == 0 || height == 0 || scale == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let overflow = || Error::DimensionOverflow {
            width,
            height,
            scale,
        };
        let cw = width.checked_mul(scale).ok_or_else(overflow)?;
        let ch = height.checked_mul(scale).ok_or_else(overflow)?;
        let len = cw.checked_mul(ch).ok_or_else(overflow)?;
        Ok(Self {
            geometry: CanvasGeometry::new(cw, ch),
            data: vec![0; len],
        })
    }

    /// The canvas geometry (width, height, index mapping).
    #[inline]
    pub fn geometry(&self) -> CanvasGeometry {
        self.geometry
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    /// The sample buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the sample buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The sample at (row, col).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.data[self.geometry.at(row, col)])
    }

    /// Convert the finished canvas into a [`GrayImage`].
    pub fn into_gray(self) -> GrayImage {
        let (w, h) = (self.width(), self.height());
        // Dimensions are already validated, so this cannot fail.
        GrayImage::from_raw(w, h, self.data).unwrap()
    }
}
