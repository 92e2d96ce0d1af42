//! grayzoom-io - PNM image I/O
//!
//! The pipeline's wire formats: PPM (P6/P3) in, PGM (P5/P2) out. Header
//! validation lives here, at the boundary, so the core never sees
//! malformed dimensions or out-of-range sample maxima.

mod error;
mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{PgmEncoding, read_ppm, read_ppm_file, write_gray, write_pgm, write_pgm_file};
