//! Anchor placement
//!
//! Scatters the grayscale samples onto the enlarged canvas at multiples
//! of the scale factor. Everything between the anchors is left untouched;
//! the gap fillers write each remaining position afterwards.

use crate::geometry::UpscaleGeometry;

/// Copy each grayscale sample to its anchor position on the canvas:
/// `canvas[(row*s, col*s)] = gray[(row, col)]`.
pub fn scatter(gray: &[u8], canvas: &mut [u8], geom: &UpscaleGeometry) {
    debug_assert_eq!(gray.len(), geom.src_width() * geom.src_height());
    debug_assert_eq!(
        canvas.len(),
        geom.canvas().width() * geom.canvas().height()
    );

    let cv = geom.canvas();
    for row in 0..geom.src_height() {
        for col in 0..geom.src_width() {
            let (r, c) = geom.anchor_origin(row, col);
            canvas[cv.at(r, c)] = gray[row * geom.src_width() + col];
        }
    }
}
