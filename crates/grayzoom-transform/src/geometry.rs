//! Geometry shared by the placer and the gap fillers
//!
//! Binds the source grid dimensions and the scale factor to the canvas
//! addressing, so every component derives canvas positions the same way.

use grayzoom_core::CanvasGeometry;

/// Dimensions of one upscale run: the anchor grid, the scale factor, and
/// the derived canvas geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpscaleGeometry {
    src_width: usize,
    src_height: usize,
    scale: usize,
    canvas: CanvasGeometry,
}

impl UpscaleGeometry {
    /// Geometry for upscaling a `src_width` x `src_height` grid by `scale`.
    pub fn new(src_width: usize, src_height: usize, scale: usize) -> Self {
        Self {
            src_width,
            src_height,
            scale,
            canvas: CanvasGeometry::new(src_width * scale, src_height * scale),
        }
    }

    /// Source grid width (number of anchor columns).
    #[inline]
    pub fn src_width(&self) -> usize {
        self.src_width
    }

    /// Source grid height (number of anchor rows).
    #[inline]
    pub fn src_height(&self) -> usize {
        self.src_height
    }

    /// The integer scale factor.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Canvas addressing (width, height, 2D-to-linear mapping).
    #[inline]
    pub fn canvas(&self) -> CanvasGeometry {
        self.canvas
    }

    /// Canvas (row, col) of the anchor at grid position (row, col).
    #[inline]
    pub fn anchor_origin(&self, row: usize, col: usize) -> (usize, usize) {
        (row * self.scale, col * self.scale)
    }
}
