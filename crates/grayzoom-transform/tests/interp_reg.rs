//! Interpolation regression test
//!
//! Exercises the full pipeline against hand-derived fixtures: the
//! reference 2x2 cell, the identity at scale 1, the border fill rules,
//! and the raster-order contract on shared strips.

use grayzoom_core::Weights;
use grayzoom_test::{RegParams, gradient_rgb, uniform_rgb};
use grayzoom_transform::formula::blend;
use grayzoom_transform::{
    AnchorWalker, GapFiller, ScalarFiller, UpscaleGeometry, interpolate, scatter, upscale,
};

#[test]
fn interp_reg() {
    let mut rp = RegParams::new("interp");

    // --- Test 1: 2x2 source (10, 200 / 10, 200), scale 4 ---
    // One anchor quad, all border passes apply. Expected canvas derived
    // by hand from the blend formula.
    let src = [
        10u8, 10, 10, 200, 200, 200, //
        10, 10, 10, 200, 200, 200,
    ];
    let mut gray = vec![0u8; 4];
    let mut canvas = vec![0u8; 64];
    interpolate(&src, 2, 2, Weights::unset(), 4, &mut gray, &mut canvas).unwrap();

    rp.compare_bytes(&[10, 200, 10, 200], &gray);

    // Anchor corners survive exactly.
    rp.compare_values(10.0, canvas[0] as f64, 0.0); // (0,0)
    rp.compare_values(200.0, canvas[4] as f64, 0.0); // (0,4)
    rp.compare_values(10.0, canvas[4 * 8] as f64, 0.0); // (4,0)
    rp.compare_values(200.0, canvas[4 * 8 + 4] as f64, 0.0); // (4,4)
    // Cell center: exact midpoint of 10 and 200.
    rp.compare_values(105.0, canvas[2 * 8 + 2] as f64, 0.0);

    let ramp = [10u8, 57, 105, 152, 200, 200, 200, 200];
    let mut expected = Vec::new();
    for _ in 0..4 {
        expected.extend_from_slice(&ramp);
    }
    expected.extend_from_slice(&[10, 200, 200, 200, 200, 200, 200, 200]);
    expected.extend_from_slice(&[57, 57, 57, 57, 57, 200, 200, 200]);
    expected.extend_from_slice(&[105, 105, 105, 105, 105, 200, 200, 200]);
    expected.extend_from_slice(&[152, 152, 152, 152, 152, 200, 200, 200]);
    rp.compare_bytes(&expected, &canvas);
    rp.save_and_check_pgm(&canvas, 8, 8).expect("save canvas");

    // --- Test 2: scale 1 is the grayscale conversion ---
    let img = gradient_rgb(7, 5);
    let canvas = upscale(&img, Weights::unset(), 1, &ScalarFiller).unwrap();
    let gray = grayzoom_core::to_gray(&img, Weights::unset());
    rp.compare_bytes(gray.as_slice(), canvas.as_slice());

    // --- Test 3: right-edge fill uses the {qs0, qs0, qss, qss} cell ---
    // 3x2 source with red-only weights, so the grayscale plane equals the
    // red channel: rows (10, 60, 110) and (0, 100, 200).
    let mut rgb = Vec::new();
    for v in [10u8, 60, 110, 0, 100, 200] {
        rgb.extend_from_slice(&[v, 0, 0]);
    }
    let img = grayzoom_core::RgbImage::from_raw(3, 2, rgb).unwrap();
    let s = 4;
    let canvas = upscale(&img, Weights::new(1.0, 0.0, 0.0).unwrap(), s, &ScalarFiller).unwrap();
    let cw = canvas.width();
    // The rightmost quad is (qs0, qss) = (110, 200); the gap columns past
    // the last anchor column interpolate the degenerate cell
    // (110, 110, 200, 200).
    let (qs0, qss) = (110u8, 200u8);
    let mut ok = true;
    for y in 1..s {
        for x in 1..s {
            let got = canvas.as_slice()[y * cw + (2 * s + x)];
            ok &= got == blend(s, x, y, qs0, qs0, qss, qss);
        }
    }
    rp.check(ok, "right-edge degenerate interior");
    // Top row of the degenerate cell repeats qs0 (row 0, no averaging).
    let mut ok = true;
    for x in 1..s {
        ok &= canvas.as_slice()[2 * s + x] == blend(s, x, 0, qs0, qs0, qss, qss);
    }
    rp.check(ok, "right-edge degenerate top strip");
    // Bottom-right corner block repeats qss.
    let mut ok = true;
    for y in 1..s {
        for x in 1..s {
            ok &= canvas.as_slice()[(s + y) * cw + (2 * s + x)] == qss;
        }
    }
    rp.check(ok, "bottom-right corner block");

    // --- Test 4: uniform input stays uniform ---
    let img = uniform_rgb(4, 4, 200);
    let canvas = upscale(&img, Weights::unset(), 3, &ScalarFiller).unwrap();
    rp.check(
        canvas.as_slice().iter().all(|&v| v == 200),
        "uniform image upscales to uniform canvas",
    );

    assert!(rp.cleanup(), "interp regression test failed");
}

/// Processing quads out of raster order must change shared-edge values:
/// the averaged strips would otherwise blend against data that has not
/// been written yet.
#[test]
fn raster_order_reg() {
    let mut rp = RegParams::new("raster_order");

    let gray = [10u8, 60, 110, 0, 100, 200];
    let (w, h, s) = (3usize, 2usize, 4usize);
    let geom = UpscaleGeometry::new(w, h, s);
    let filler = ScalarFiller;

    let mut canonical = vec![0u8; w * s * h * s];
    scatter(&gray, &mut canonical, &geom);
    for quad in AnchorWalker::new(&gray, w, h) {
        filler.fill_quad(&mut canonical, &geom, &quad);
    }

    // Deliberately reversed reference: same quads, opposite order.
    let mut reversed = vec![0u8; w * s * h * s];
    scatter(&gray, &mut reversed, &geom);
    let quads: Vec<_> = AnchorWalker::new(&gray, w, h).collect();
    for quad in quads.iter().rev() {
        filler.fill_quad(&mut reversed, &geom, quad);
    }

    rp.check(canonical != reversed, "ordering is load-bearing");

    // The divergence shows up on the shared strip below the last anchor
    // row: in canonical order the second quad averages its column against
    // the first quad's already-written strip; reversed, the average reads
    // zeros and is then overwritten by the first quad's direct pass.
    let cv = geom.canvas();
    let shared = cv.at(s + 1, s);
    rp.compare_values(75.0, canonical[shared] as f64, 0.0);
    rp.compare_values(25.0, reversed[shared] as f64, 0.0);

    assert!(rp.cleanup(), "raster order regression test failed");
}
