//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use grayzoom_io::PgmEncoding;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without golden comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: the test name, the running
/// comparison index, the mode, and the success status collected from all
/// comparisons.
pub struct RegParams {
    /// Name of the test (e.g., "interp")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two values within an allowed delta.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two byte slices for exact equality.
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;
        if expected.len() != actual.len() {
            self.record_failure(format!(
                "Failure in {}_reg: byte comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            ));
            return false;
        }
        if let Some(pos) = (0..expected.len()).find(|&i| expected[i] != actual[i]) {
            self.record_failure(format!(
                "Failure in {}_reg: byte comparison for index {} - first mismatch at {} ({} vs {})",
                self.test_name, self.index, pos, expected[pos], actual[pos]
            ));
            return false;
        }
        true
    }

    /// Record a named boolean check.
    pub fn check(&mut self, ok: bool, label: &str) -> bool {
        self.index += 1;
        if !ok {
            self.record_failure(format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, label, self.index
            ));
        }
        ok
    }

    /// Write grayscale samples to the regout directory as binary PGM and
    /// check them against the golden counterpart.
    ///
    /// In generate mode the file is copied to the golden directory; in
    /// compare mode it is byte-compared against an existing golden (a
    /// missing golden only warns, so fresh checkouts run green); display
    /// mode just writes the file.
    pub fn save_and_check_pgm(
        &mut self,
        samples: &[u8],
        width: usize,
        height: usize,
    ) -> TestResult<()> {
        self.index += 1;
        let local_path = format!("{}/{}.{:02}.pgm", regout_dir(), self.test_name, self.index);
        grayzoom_io::write_pgm_file(samples, width, height, PgmEncoding::Binary, &local_path)
            .map_err(|e| TestError::OutputWrite {
                path: local_path.clone(),
                message: e.to_string(),
            })?;

        let golden_path = format!(
            "{}/{}_golden.{:02}.pgm",
            golden_dir(),
            self.test_name,
            self.index
        );
        match self.mode {
            RegTestMode::Generate => {
                fs::copy(&local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    eprintln!(
                        "Warning in {}_reg: golden file not found: {} (run with \
                         REGTEST_MODE=generate to create it)",
                        self.test_name, golden_path
                    );
                    return Ok(());
                }
                let local_data = fs::read(&local_path)?;
                let golden_data = fs::read(&golden_path)?;
                if local_data != golden_data {
                    self.record_failure(format!(
                        "Failure in {}_reg, index {}: {} differs from {}",
                        self.test_name, self.index, local_path, golden_path
                    ));
                }
            }
            RegTestMode::Display => {}
        }
        Ok(())
    }

    /// Finish the test: print a summary and return the overall status.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
