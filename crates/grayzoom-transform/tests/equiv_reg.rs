//! Scalar/batch equivalence regression test
//!
//! The two fill strategies must produce byte-identical canvases for every
//! input. Sweeps a grid of sizes and scale factors over seeded random
//! images, including shapes with no anchor quads at all and scales that
//! leave vector remainders of every length.

use grayzoom_core::Weights;
use grayzoom_test::RegParams;
use grayzoom_transform::{interpolate, interpolate_batch};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn random_rgb(rng: &mut StdRng, width: usize, height: usize) -> Vec<u8> {
    (0..3 * width * height).map(|_| rng.random::<u8>()).collect()
}

#[test]
fn equiv_reg() {
    let mut rp = RegParams::new("equiv");
    let mut rng = StdRng::seed_from_u64(0x67_72_61_79);

    let sizes = [
        (1usize, 1usize),
        (1, 5),
        (5, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (5, 4),
        (8, 3),
        (7, 7),
    ];
    // Scales straddling the 4-lane width exercise every remainder path.
    let scales = [1usize, 2, 3, 4, 5, 6, 7, 8, 11];

    for &(w, h) in &sizes {
        for &s in &scales {
            let src = random_rgb(&mut rng, w, h);
            let mut gray_a = vec![0u8; w * h];
            let mut gray_b = vec![0u8; w * h];
            let mut canvas_a = vec![0u8; w * s * h * s];
            let mut canvas_b = vec![0u8; w * s * h * s];

            interpolate(&src, w, h, Weights::unset(), s, &mut gray_a, &mut canvas_a)
                .unwrap_or_else(|e| panic!("scalar {w}x{h} s={s}: {e}"));
            interpolate_batch(&src, w, h, Weights::unset(), s, &mut gray_b, &mut canvas_b)
                .unwrap_or_else(|e| panic!("batch {w}x{h} s={s}: {e}"));

            rp.compare_bytes(&gray_a, &gray_b);
            if !rp.compare_bytes(&canvas_a, &canvas_b) {
                eprintln!("  canvases diverge at {w}x{h} s={s}");
            }
        }
    }

    assert!(rp.cleanup(), "scalar/batch equivalence failed");
}

#[test]
fn default_weights_reg() {
    let mut rp = RegParams::new("default_weights");
    let mut rng = StdRng::seed_from_u64(42);

    // grayscale(img, 0, 0, 0) must equal grayscale(img, luma) exactly.
    let (w, h) = (9usize, 6usize);
    let src = random_rgb(&mut rng, w, h);
    let mut with_sentinel = vec![0u8; w * h];
    let mut with_luma = vec![0u8; w * h];
    grayzoom_core::gray_into(&src, &mut with_sentinel, w, h, Weights::unset());
    grayzoom_core::gray_into(
        &src,
        &mut with_luma,
        w,
        h,
        Weights::new(0.299, 0.587, 0.114).unwrap(),
    );
    rp.compare_bytes(&with_luma, &with_sentinel);

    assert!(rp.cleanup(), "default weight substitution failed");
}
