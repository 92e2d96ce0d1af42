//! Scalar gap interpolator
//!
//! Fills one anchor cell at a time with the bilinear blend: the interior
//! block, the four edge strips, and (on the grid's last column and row)
//! the degenerate border cells beyond the final anchors.
//!
//! Strip handling is asymmetric on purpose. Bottom and right strips are
//! written directly; top and left strips average the freshly computed
//! value with what the neighboring quad already stored there. Together
//! with the raster-order walk this makes each shared strip the truncated
//! mean of the two adjacent cells' blends.

use crate::filler::GapFiller;
use crate::formula::{blend, mean};
use crate::geometry::UpscaleGeometry;
use crate::quad::{AnchorQuad, QuadKind};

/// The scalar gap-filling strategy: one output sample per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarFiller;

impl GapFiller for ScalarFiller {
    fn fill_quad(&self, canvas: &mut [u8], geom: &UpscaleGeometry, quad: &AnchorQuad) {
        let s = geom.scale();
        if s == 1 {
            // Anchors already cover every canvas position.
            return;
        }
        let (r0, c0) = geom.anchor_origin(quad.row, quad.col);
        let q = [quad.q00, quad.qs0, quad.q0s, quad.qss];

        fill_interior(canvas, geom, r0, c0, q);
        fill_row_strip(canvas, geom, r0, c0, 0, q, quad.row > 0);
        fill_row_strip(canvas, geom, r0 + s, c0, s, q, false);
        fill_col_strip(canvas, geom, r0, c0 + s, s, q, false);
        fill_col_strip(canvas, geom, r0, c0, 0, q, quad.col > 0);

        match quad.kind(geom) {
            QuadKind::Interior => {}
            QuadKind::RightEdge => right_edge_pass(canvas, geom, r0, c0, quad),
            QuadKind::BottomEdge => bottom_edge_pass(canvas, geom, r0, c0, quad),
            QuadKind::BottomRightCorner => {
                right_edge_pass(canvas, geom, r0, c0, quad);
                bottom_edge_pass(canvas, geom, r0, c0, quad);
                corner_pass(canvas, geom, r0, c0, quad);
            }
        }
    }
}

/// Fill the strip of gap columns beyond the grid's last anchor column,
/// using a degenerate cell that extends the quad's right anchors.
fn right_edge_pass(
    canvas: &mut [u8],
    geom: &UpscaleGeometry,
    r0: usize,
    c0: usize,
    quad: &AnchorQuad,
) {
    let s = geom.scale();
    let q = [quad.qs0, quad.qs0, quad.qss, quad.qss];
    fill_interior(canvas, geom, r0, c0 + s, q);
    fill_row_strip(canvas, geom, r0, c0 + s, 0, q, quad.row > 0);
    fill_row_strip(canvas, geom, r0 + s, c0 + s, s, q, false);
    // The degenerate cell is constant in x, so its left edge carries the
    // same values as the real quad's right strip; the x = s
    // parameterization reproduces them in place.
    fill_col_strip(canvas, geom, r0, c0 + s, s, q, false);
}

/// Fill the strip of gap rows beyond the grid's last anchor row, using a
/// degenerate cell that extends the quad's bottom anchors.
fn bottom_edge_pass(
    canvas: &mut [u8],
    geom: &UpscaleGeometry,
    r0: usize,
    c0: usize,
    quad: &AnchorQuad,
) {
    let s = geom.scale();
    let q = [quad.q0s, quad.q0s, quad.qss, quad.qss];
    fill_interior(canvas, geom, r0 + s, c0, q);
    // Top row of the degenerate cell, y = s parameterization: settles the
    // shared row at qss.
    fill_row_strip(canvas, geom, r0 + s, c0, s, q, false);
    fill_col_strip(canvas, geom, r0 + s, c0, 0, q, quad.col > 0);
    fill_col_strip(canvas, geom, r0 + s, c0 + s, s, q, false);
}

/// Fill the single block beyond the bottom-right anchor.
fn corner_pass(
    canvas: &mut [u8],
    geom: &UpscaleGeometry,
    r0: usize,
    c0: usize,
    quad: &AnchorQuad,
) {
    let s = geom.scale();
    fill_interior(canvas, geom, r0 + s, c0 + s, [quad.qss; 4]);
}

/// Interior block: offsets x, y in [1, s-1] from the cell origin.
fn fill_interior(canvas: &mut [u8], geom: &UpscaleGeometry, r0: usize, c0: usize, q: [u8; 4]) {
    let s = geom.scale();
    let cv = geom.canvas();
    for y in 1..s {
        for x in 1..s {
            canvas[cv.at(r0 + y, c0 + x)] = blend(s, x, y, q[0], q[1], q[2], q[3]);
        }
    }
}

/// Horizontal strip on `row`: offsets x in [1, s-1] from `col0`, blended
/// at the fixed vertical parameter `y`. With `average` set, each position
/// becomes the truncated mean of the stored and the computed value.
fn fill_row_strip(
    canvas: &mut [u8],
    geom: &UpscaleGeometry,
    row: usize,
    col0: usize,
    y: usize,
    q: [u8; 4],
    average: bool,
) {
    let s = geom.scale();
    let cv = geom.canvas();
    for x in 1..s {
        let i = cv.at(row, col0 + x);
        let v = blend(s, x, y, q[0], q[1], q[2], q[3]);
        canvas[i] = if average { mean(canvas[i], v) } else { v };
    }
}

/// Vertical strip on `col`: offsets y in [1, s-1] from `row0`, blended at
/// the fixed horizontal parameter `x`.
fn fill_col_strip(
    canvas: &mut [u8],
    geom: &UpscaleGeometry,
    row0: usize,
    col: usize,
    x: usize,
    q: [u8; 4],
    average: bool,
) {
    let s = geom.scale();
    let cv = geom.canvas();
    for y in 1..s {
        let i = cv.at(row0 + y, col);
        let v = blend(s, x, y, q[0], q[1], q[2], q[3]);
        canvas[i] = if average { mean(canvas[i], v) } else { v };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placer::scatter;
    use crate::quad::AnchorWalker;

    fn run(gray: &[u8], width: usize, height: usize, scale: usize) -> Vec<u8> {
        let geom = UpscaleGeometry::new(width, height, scale);
        let mut canvas = vec![0u8; width * scale * height * scale];
        scatter(gray, &mut canvas, &geom);
        let filler = ScalarFiller;
        for quad in AnchorWalker::new(gray, width, height) {
            filler.fill_quad(&mut canvas, &geom, &quad);
        }
        canvas
    }

    #[test]
    fn test_single_cell_full_canvas() {
        // One quad (10, 200, 10, 200) at scale 4; both border passes and
        // the corner pass apply. Derived by hand from the blend formula.
        let canvas = run(&[10, 200, 10, 200], 2, 2, 4);
        let ramp = [10u8, 57, 105, 152, 200, 200, 200, 200];
        let mut expected = Vec::new();
        for _ in 0..4 {
            expected.extend_from_slice(&ramp);
        }
        expected.extend_from_slice(&[10, 200, 200, 200, 200, 200, 200, 200]);
        expected.extend_from_slice(&[57, 57, 57, 57, 57, 200, 200, 200]);
        expected.extend_from_slice(&[105, 105, 105, 105, 105, 200, 200, 200]);
        expected.extend_from_slice(&[152, 152, 152, 152, 152, 200, 200, 200]);
        assert_eq!(canvas, expected);
    }

    #[test]
    fn test_scale_one_identity() {
        let gray = [3u8, 14, 15, 92, 65, 35];
        let canvas = run(&gray, 3, 2, 1);
        assert_eq!(canvas, gray);
    }

    #[test]
    fn test_shared_strip_is_mean_of_neighbors() {
        // Two quads side by side; the strip between them is the truncated
        // mean of the left quad's right blend and the right quad's left
        // blend, which coincide, so it equals the blend itself.
        let gray = [0u8, 100, 200, 0, 100, 200];
        let canvas = run(&gray, 3, 2, 2);
        let geom = UpscaleGeometry::new(3, 2, 2);
        let cv = geom.canvas();
        // Shared column between the quads at anchor column 1 (canvas col 2):
        // right strip of quad 0 wrote blend(2,2,1,...) = 100, then quad 1's
        // left strip averaged with its own blend(2,0,1,...) = 100.
        assert_eq!(canvas[cv.at(1, 2)], 100);
    }

    #[test]
    fn test_corner_fidelity_on_canvas() {
        let gray = [12u8, 34, 56, 78, 90, 11, 22, 33, 44];
        let canvas = run(&gray, 3, 3, 3);
        let geom = UpscaleGeometry::new(3, 3, 3);
        let cv = geom.canvas();
        // Every anchor survives in place.
        for row in 0..3 {
            for col in 0..3 {
                let (r, c) = geom.anchor_origin(row, col);
                assert_eq!(canvas[cv.at(r, c)], gray[row * 3 + col]);
            }
        }
    }
}
