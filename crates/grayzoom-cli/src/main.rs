//! grayzoom command-line tool
//!
//! Reads a PPM image, converts it to grayscale, upscales it by an integer
//! factor with bilinear gap filling, and writes the result as PGM.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use grayzoom_core::Weights;
use grayzoom_io::{PgmEncoding, read_ppm_file, write_pgm_file};
use grayzoom_transform::{BatchFiller, GapFiller, ScalarFiller, upscale};

#[derive(Parser, Debug)]
#[command(
    name = "grayzoom",
    version,
    about = "Upscale a PPM image into a smoothly interpolated grayscale PGM"
)]
struct Args {
    /// Input PPM file (P6 binary or P3 ASCII)
    input: PathBuf,

    /// Output PGM file
    output: PathBuf,

    /// Integer scale factor
    #[arg(short, long, default_value_t = 10)]
    scale: usize,

    /// Channel weights for the grayscale conversion; all zeros select the
    /// standard luma weights (0.299 0.587 0.114)
    #[arg(long, num_args = 3, value_names = ["RED", "GREEN", "BLUE"],
          default_values_t = [0.0, 0.0, 0.0])]
    weights: Vec<f32>,

    /// Use the 4-wide vectorized interpolator
    #[arg(long)]
    batch: bool,

    /// Write ASCII (P2) output instead of binary (P5)
    #[arg(long)]
    ascii: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let weights = Weights::new(args.weights[0], args.weights[1], args.weights[2])?;

    let img = read_ppm_file(&args.input)?;
    info!(
        "read {}x{} image from {}",
        img.width(),
        img.height(),
        args.input.display()
    );

    let filler: Box<dyn GapFiller> = if args.batch {
        let f = BatchFiller::new();
        debug!("batch filler, vectorized: {}", f.is_vectorized());
        Box::new(f)
    } else {
        Box::new(ScalarFiller)
    };
    let canvas = upscale(&img, weights, args.scale, filler.as_ref())?;
    debug!("canvas is {}x{}", canvas.width(), canvas.height());

    let encoding = if args.ascii {
        PgmEncoding::Ascii
    } else {
        PgmEncoding::Binary
    };
    write_pgm_file(
        canvas.as_slice(),
        canvas.width(),
        canvas.height(),
        encoding,
        &args.output,
    )?;
    info!(
        "wrote {}x{} PGM to {}",
        canvas.width(),
        canvas.height(),
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("grayzoom: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["grayzoom", "in.ppm", "out.pgm"]).unwrap();
        assert_eq!(args.scale, 10);
        assert_eq!(args.weights, vec![0.0, 0.0, 0.0]);
        assert!(!args.batch);
        assert!(!args.ascii);
    }

    #[test]
    fn test_args_full() {
        let args = Args::try_parse_from([
            "grayzoom", "in.ppm", "out.pgm", "--scale", "4", "--weights", "1", "0", "0",
            "--batch", "--ascii",
        ])
        .unwrap();
        assert_eq!(args.scale, 4);
        assert_eq!(args.weights, vec![1.0, 0.0, 0.0]);
        assert!(args.batch);
        assert!(args.ascii);
    }

    #[test]
    fn test_args_require_paths() {
        assert!(Args::try_parse_from(["grayzoom", "in.ppm"]).is_err());
    }
}
