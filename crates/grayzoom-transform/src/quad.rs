//! Anchor quads and the raster-order walk over them
//!
//! An anchor quad is one unit cell of the source grid: the four grayscale
//! samples at grid positions (row, col), (row, col+1), (row+1, col), and
//! (row+1, col+1). The [`AnchorWalker`] yields every quad in raster order
//! (left to right, top to bottom), which is the order the fillers require:
//! each quad averages its top and left strips against values written by
//! the quads directly above and to its left.

use crate::geometry::UpscaleGeometry;

/// Which border passes a quad needs, resolved once per quad instead of
/// re-checking grid bounds inside the fill loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadKind {
    /// No border handling; the four strips and the interior suffice.
    Interior,
    /// The quad's right anchors are the grid's last column; the strip of
    /// canvas columns beyond them is filled with a degenerate cell.
    RightEdge,
    /// The quad's bottom anchors are the grid's last row; the strip of
    /// canvas rows beyond them is filled with a degenerate cell.
    BottomEdge,
    /// Both of the above, plus the single block beyond the bottom-right
    /// anchor that neither edge pass reaches.
    BottomRightCorner,
}

impl QuadKind {
    /// Resolve the kind of the quad at grid (row, col) in a
    /// `grid_width` x `grid_height` anchor grid.
    pub fn resolve(row: usize, col: usize, grid_width: usize, grid_height: usize) -> Self {
        let last_col = col + 2 == grid_width;
        let last_row = row + 2 == grid_height;
        match (last_col, last_row) {
            (false, false) => QuadKind::Interior,
            (true, false) => QuadKind::RightEdge,
            (false, true) => QuadKind::BottomEdge,
            (true, true) => QuadKind::BottomRightCorner,
        }
    }
}

/// One anchor quad: four corner samples and the grid position of the
/// top-left corner. Transient, produced per iteration by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorQuad {
    /// Top-left anchor
    pub q00: u8,
    /// Top-right anchor
    pub qs0: u8,
    /// Bottom-left anchor
    pub q0s: u8,
    /// Bottom-right anchor
    pub qss: u8,
    /// Grid row of the top-left anchor
    pub row: usize,
    /// Grid column of the top-left anchor
    pub col: usize,
}

impl AnchorQuad {
    /// The border handling this quad needs under the given geometry.
    pub fn kind(&self, geom: &UpscaleGeometry) -> QuadKind {
        QuadKind::resolve(self.row, self.col, geom.src_width(), geom.src_height())
    }
}

/// Raster-order iterator over the anchor quads of a grayscale grid.
///
/// Grids narrower or shorter than 2 contain no quads and yield nothing.
pub struct AnchorWalker<'a> {
    gray: &'a [u8],
    width: usize,
    height: usize,
    row: usize,
    col: usize,
}

impl<'a> AnchorWalker<'a> {
    /// Walk the quads of a `width` x `height` grayscale grid.
    pub fn new(gray: &'a [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(gray.len(), width * height);
        Self {
            gray,
            width,
            height,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for AnchorWalker<'_> {
    type Item = AnchorQuad;

    fn next(&mut self) -> Option<AnchorQuad> {
        if self.width < 2 || self.height < 2 || self.row + 1 >= self.height {
            return None;
        }
        let (row, col) = (self.row, self.col);
        let top = row * self.width + col;
        let bottom = top + self.width;
        let quad = AnchorQuad {
            q00: self.gray[top],
            qs0: self.gray[top + 1],
            q0s: self.gray[bottom],
            qss: self.gray[bottom + 1],
            row,
            col,
        };
        self.col += 1;
        if self.col + 1 >= self.width {
            self.col = 0;
            self.row += 1;
        }
        Some(quad)
    }
}
