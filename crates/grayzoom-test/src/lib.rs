//! grayzoom-test - Regression test support for grayzoom
//!
//! A small framework for the workspace's `*_reg.rs` integration tests,
//! supporting three modes:
//!
//! - **Generate**: create golden files for later comparison
//! - **Compare**: compare results with golden files (default)
//! - **Display**: run tests without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use grayzoom_test::RegParams;
//!
//! let mut rp = RegParams::new("interp");
//! rp.compare_values(105.0, center as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use grayzoom_core::RgbImage;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // grayzoom-test is at crates/grayzoom-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Deterministic synthetic RGB fixture: smooth per-channel gradients.
///
/// The same (width, height) always produces the same image, so tests can
/// assert exact output without shipping image files.
pub fn gradient_rgb(width: usize, height: usize) -> RgbImage {
    let mut data = Vec::with_capacity(3 * width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 255) / width.max(1)) as u8);
            data.push(((y * 255) / height.max(1)) as u8);
            data.push((((x + y) * 127) % 256) as u8);
        }
    }
    RgbImage::from_raw(width, height, data).expect("fixture dimensions are valid")
}

/// Deterministic synthetic RGB fixture: uniform gray pixels of value `v`.
pub fn uniform_rgb(width: usize, height: usize, v: u8) -> RgbImage {
    RgbImage::from_raw(width, height, vec![v; 3 * width * height])
        .expect("fixture dimensions are valid")
}
