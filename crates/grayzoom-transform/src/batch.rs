//! Vectorized gap interpolator
//!
//! Same contract and same output bytes as [`crate::ScalarFiller`], but the
//! blend is evaluated for 4 adjacent offsets per step. Runs shorter than
//! 4 positions fall back to the scalar formula, so every canvas byte is
//! identical to the scalar strategy's for every input.
//!
//! Backend selection follows the platform: on `x86_64` with SSE4.1 the
//! lanes run as real vector arithmetic (the `sse` module), everywhere
//! else a portable fallback evaluates the same 4 lanes with the scalar
//! formula.
//
// TODO: add a NEON backend for aarch64 alongside the SSE4.1 one.

#[cfg(target_arch = "x86_64")]
mod sse;

use crate::filler::GapFiller;
use crate::formula::{blend, mean};
use crate::geometry::UpscaleGeometry;
use crate::quad::{AnchorQuad, QuadKind};

/// Lane width of the batch strategy.
const LANES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    #[cfg(target_arch = "x86_64")]
    Sse41,
    ScalarLanes,
}

/// The 4-wide gap-filling strategy.
///
/// Construction probes the CPU once; the chosen backend is fixed for the
/// lifetime of the filler.
#[derive(Debug, Clone, Copy)]
pub struct BatchFiller {
    backend: Backend,
}

impl BatchFiller {
    /// Build a batch filler with the best backend the CPU supports.
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        if is_x86_feature_detected!("sse4.1") {
            return Self {
                backend: Backend::Sse41,
            };
        }
        Self {
            backend: Backend::ScalarLanes,
        }
    }

    /// Whether the filler runs on a vector backend rather than the
    /// portable lane fallback.
    pub fn is_vectorized(&self) -> bool {
        #[cfg(target_arch = "x86_64")]
        {
            self.backend == Backend::Sse41
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    }

    /// Evaluate the blend for 4 offset pairs at once.
    #[inline]
    fn blend4(&self, s: usize, xs: [usize; LANES], ys: [usize; LANES], q: [u8; 4]) -> [u8; LANES] {
        match self.backend {
            #[cfg(target_arch = "x86_64")]
            Backend::Sse41 => {
                let xs = xs.map(|v| v as i32);
                let ys = ys.map(|v| v as i32);
                // Safety: the Sse41 backend is only selected after the
                // feature probe in `new` succeeded.
                let out = unsafe { sse::blend4(s as i32, xs, ys, q.map(i32::from)) };
                out.map(|v| v as u8)
            }
            Backend::ScalarLanes => {
                let mut out = [0u8; LANES];
                for i in 0..LANES {
                    out[i] = blend(s, xs[i], ys[i], q[0], q[1], q[2], q[3]);
                }
                out
            }
        }
    }

    /// Interior block, rows vectorized along x.
    fn fill_interior(
        &self,
        canvas: &mut [u8],
        geom: &UpscaleGeometry,
        r0: usize,
        c0: usize,
        q: [u8; 4],
    ) {
        let s = geom.scale();
        let cv = geom.canvas();
        for y in 1..s {
            let mut x = 1;
            while x < s {
                if s - x >= LANES {
                    let vs = self.blend4(s, [x, x + 1, x + 2, x + 3], [y; LANES], q);
                    let i = cv.at(r0 + y, c0 + x);
                    canvas[i..i + LANES].copy_from_slice(&vs);
                    x += LANES;
                } else {
                    canvas[cv.at(r0 + y, c0 + x)] = blend(s, x, y, q[0], q[1], q[2], q[3]);
                    x += 1;
                }
            }
        }
    }

    /// Horizontal strip, vectorized along x at the fixed parameter `y`.
    fn fill_row_strip(
        &self,
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
        let mut x = 1;
        while x < s {
            if s - x >= LANES {
                let vs = self.blend4(s, [x, x + 1, x + 2, x + 3], [y; LANES], q);
                let i = cv.at(row, col0 + x);
                if average {
                    for (k, &v) in vs.iter().enumerate() {
                        canvas[i + k] = mean(canvas[i + k], v);
                    }
                } else {
                    canvas[i..i + LANES].copy_from_slice(&vs);
                }
                x += LANES;
            } else {
                let i = cv.at(row, col0 + x);
                let v = blend(s, x, y, q[0], q[1], q[2], q[3]);
                canvas[i] = if average { mean(canvas[i], v) } else { v };
                x += 1;
            }
        }
    }

    /// Vertical strip, vectorized along y at the fixed parameter `x`. The
    /// 4 lanes land one canvas row apart.
    fn fill_col_strip(
        &self,
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
        let mut y = 1;
        while y < s {
            if s - y >= LANES {
                let vs = self.blend4(s, [x; LANES], [y, y + 1, y + 2, y + 3], q);
                for (k, &v) in vs.iter().enumerate() {
                    let i = cv.at(row0 + y + k, col);
                    canvas[i] = if average { mean(canvas[i], v) } else { v };
                }
                y += LANES;
            } else {
                let i = cv.at(row0 + y, col);
                let v = blend(s, x, y, q[0], q[1], q[2], q[3]);
                canvas[i] = if average { mean(canvas[i], v) } else { v };
                y += 1;
            }
        }
    }

    fn right_edge_pass(
        &self,
        canvas: &mut [u8],
        geom: &UpscaleGeometry,
        r0: usize,
        c0: usize,
        quad: &AnchorQuad,
    ) {
        let s = geom.scale();
        let q = [quad.qs0, quad.qs0, quad.qss, quad.qss];
        self.fill_interior(canvas, geom, r0, c0 + s, q);
        self.fill_row_strip(canvas, geom, r0, c0 + s, 0, q, quad.row > 0);
        self.fill_row_strip(canvas, geom, r0 + s, c0 + s, s, q, false);
        self.fill_col_strip(canvas, geom, r0, c0 + s, s, q, false);
    }

    fn bottom_edge_pass(
        &self,
        canvas: &mut [u8],
        geom: &UpscaleGeometry,
        r0: usize,
        c0: usize,
        quad: &AnchorQuad,
    ) {
        let s = geom.scale();
        let q = [quad.q0s, quad.q0s, quad.qss, quad.qss];
        self.fill_interior(canvas, geom, r0 + s, c0, q);
        self.fill_row_strip(canvas, geom, r0 + s, c0, s, q, false);
        self.fill_col_strip(canvas, geom, r0 + s, c0, 0, q, quad.col > 0);
        self.fill_col_strip(canvas, geom, r0 + s, c0 + s, s, q, false);
    }
}

impl Default for BatchFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl GapFiller for BatchFiller {
    fn fill_quad(&self, canvas: &mut [u8], geom: &UpscaleGeometry, quad: &AnchorQuad) {
        let s = geom.scale();
        if s == 1 {
            return;
        }
        let (r0, c0) = geom.anchor_origin(quad.row, quad.col);
        let q = [quad.q00, quad.qs0, quad.q0s, quad.qss];

        self.fill_interior(canvas, geom, r0, c0, q);
        self.fill_row_strip(canvas, geom, r0, c0, 0, q, quad.row > 0);
        self.fill_row_strip(canvas, geom, r0 + s, c0, s, q, false);
        self.fill_col_strip(canvas, geom, r0, c0 + s, s, q, false);
        self.fill_col_strip(canvas, geom, r0, c0, 0, q, quad.col > 0);

        match quad.kind(geom) {
            QuadKind::Interior => {}
            QuadKind::RightEdge => self.right_edge_pass(canvas, geom, r0, c0, quad),
            QuadKind::BottomEdge => self.bottom_edge_pass(canvas, geom, r0, c0, quad),
            QuadKind::BottomRightCorner => {
                self.right_edge_pass(canvas, geom, r0, c0, quad);
                self.bottom_edge_pass(canvas, geom, r0, c0, quad);
                self.fill_interior(canvas, geom, r0 + s, c0 + s, [quad.qss; 4]);
            }
        }
    }
}
