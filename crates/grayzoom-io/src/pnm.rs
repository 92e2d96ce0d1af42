//! PNM (Portable Any Map) format support
//!
//! Reads PPM input (P6 binary and P3 ASCII) and writes PGM output
//! (P5 binary and P2 ASCII). Headers are parsed token-wise with `#`
//! comments allowed anywhere whitespace is.
//!
//! The declared maximum sample value must be in 1..=255; samples are
//! passed through without rescaling for smaller maxima.

use crate::{IoError, IoResult};
use grayzoom_core::{Error as CoreError, GrayImage, RgbImage};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Output encoding for PGM writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgmEncoding {
    /// `P2`: ASCII decimal samples, one image row per line
    Ascii,
    /// `P5`: raw binary samples
    Binary,
}

/// Read one byte, `None` at end of stream.
fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read the next whitespace-delimited header token, skipping `#` comments.
///
/// Consumes the single whitespace byte that terminates the token, which
/// for binary formats leaves the stream positioned at the pixel data.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let Some(b) = read_byte(reader)? else {
            if token.is_empty() {
                return Err(IoError::InvalidHeader(
                    "unexpected end of header".to_string(),
                ));
            }
            return Ok(token);
        };
        match b {
            b'#' if token.is_empty() => {
                // Comment runs to end of line.
                while let Some(c) = read_byte(reader)? {
                    if c == b'\n' {
                        break;
                    }
                }
            }
            b' ' | b'\t' | b'\r' | b'\n' => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            _ => token.push(b as char),
        }
    }
}

fn parse_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidHeader(format!("bad {what}: {token:?}")))
}

/// Read a PPM image (P6 or P3) from a reader.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for a non-PPM magic,
/// [`IoError::InvalidHeader`] for malformed dimensions,
/// [`IoError::UnsupportedMaxVal`] for a maximum outside 1..=255, and
/// [`IoError::Truncated`] if the pixel data runs short.
pub fn read_ppm<R: BufRead>(mut reader: R) -> IoResult<RgbImage> {
    let magic = next_token(&mut reader)?;
    if magic != "P6" && magic != "P3" {
        return Err(IoError::UnsupportedFormat(magic));
    }

    let width = parse_number(&mut reader, "width")? as usize;
    let height = parse_number(&mut reader, "height")? as usize;
    let maxval = parse_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedMaxVal(maxval));
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            IoError::InvalidHeader(format!("image dimensions overflow: {width}x{height}"))
        })?;

    let data = if magic == "P6" {
        let mut data = vec![0u8; expected];
        let mut filled = 0;
        while filled < expected {
            match reader.read(&mut data[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        if filled < expected {
            return Err(IoError::Truncated {
                expected,
                actual: filled,
            });
        }
        data
    } else {
        let mut data = Vec::with_capacity(expected);
        for _ in 0..expected {
            match next_token(&mut reader) {
                Ok(token) => {
                    let v = token.parse::<u32>().map_err(|_| {
                        IoError::InvalidHeader(format!("bad sample: {token:?}"))
                    })?;
                    if v > 255 {
                        return Err(IoError::InvalidHeader(format!("sample out of range: {v}")));
                    }
                    data.push(v as u8);
                }
                Err(IoError::InvalidHeader(_)) => {
                    return Err(IoError::Truncated {
                        expected,
                        actual: data.len(),
                    });
                }
                Err(e) => return Err(e),
            }
        }
        data
    };

    Ok(RgbImage::from_raw(width, height, data)?)
}

/// Write grayscale samples as PGM.
///
/// # Errors
///
/// Returns a wrapped [`CoreError::BufferSize`] if `samples.len()` does
/// not match the dimensions, otherwise only I/O errors.
pub fn write_pgm<W: Write>(
    samples: &[u8],
    width: usize,
    height: usize,
    encoding: PgmEncoding,
    mut writer: W,
) -> IoResult<()> {
    if samples.len() != width * height {
        return Err(CoreError::BufferSize {
            expected: width * height,
            actual: samples.len(),
        }
        .into());
    }
    match encoding {
        PgmEncoding::Binary => {
            write!(writer, "P5\n{width} {height}\n255\n")?;
            writer.write_all(samples)?;
        }
        PgmEncoding::Ascii => {
            write!(writer, "P2\n{width} {height}\n255\n")?;
            for row in samples.chunks(width) {
                let mut line = String::with_capacity(row.len() * 4);
                for (i, v) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push_str(&v.to_string());
                }
                line.push('\n');
                writer.write_all(line.as_bytes())?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a [`GrayImage`] as PGM.
pub fn write_gray<W: Write>(img: &GrayImage, encoding: PgmEncoding, writer: W) -> IoResult<()> {
    write_pgm(img.as_slice(), img.width(), img.height(), encoding, writer)
}

/// Read a PPM image from a file path.
pub fn read_ppm_file<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    read_ppm(BufReader::new(File::open(path)?))
}

/// Write grayscale samples as PGM to a file path.
pub fn write_pgm_file<P: AsRef<Path>>(
    samples: &[u8],
    width: usize,
    height: usize,
    encoding: PgmEncoding,
    path: P,
) -> IoResult<()> {
    write_pgm(
        samples,
        width,
        height,
        encoding,
        BufWriter::new(File::create(path)?),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_p6() {
        let bytes = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
        let img = read_ppm(Cursor::new(&bytes[..])).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_p6_with_comments() {
        let bytes = b"P6\n# made by hand\n2 # width\n1\n# maxval next\n255\n\x01\x02\x03\x04\x05\x06";
        let img = read_ppm(Cursor::new(&bytes[..])).unwrap();
        assert_eq!(img.rgb(1, 0), Some((4, 5, 6)));
    }

    #[test]
    fn test_read_p3() {
        let text = b"P3\n2 2\n255\n0 1 2 3 4 5\n6 7 8 9 10 11\n";
        let img = read_ppm(Cursor::new(&text[..])).unwrap();
        assert_eq!(img.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_read_rejects_bad_magic() {
        let bytes = b"P5\n2 1\n255\n\x01\x02";
        assert!(matches!(
            read_ppm(Cursor::new(&bytes[..])),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_rejects_bad_maxval() {
        let bytes = b"P6\n2 1\n65535\n";
        assert!(matches!(
            read_ppm(Cursor::new(&bytes[..])),
            Err(IoError::UnsupportedMaxVal(65535))
        ));
        let bytes = b"P6\n2 1\n0\n";
        assert!(matches!(
            read_ppm(Cursor::new(&bytes[..])),
            Err(IoError::UnsupportedMaxVal(0))
        ));
    }

    #[test]
    fn test_read_detects_truncation() {
        let bytes = b"P6\n2 2\n255\n\x01\x02\x03";
        assert!(matches!(
            read_ppm(Cursor::new(&bytes[..])),
            Err(IoError::Truncated {
                expected: 12,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_write_p5() {
        let mut out = Vec::new();
        write_pgm(&[9, 8, 7, 6], 2, 2, PgmEncoding::Binary, &mut out).unwrap();
        assert_eq!(out, b"P5\n2 2\n255\n\x09\x08\x07\x06");
    }

    #[test]
    fn test_write_p2() {
        let mut out = Vec::new();
        write_pgm(&[0, 128, 255, 64], 2, 2, PgmEncoding::Ascii, &mut out).unwrap();
        assert_eq!(out, b"P2\n2 2\n255\n0 128\n255 64\n");
    }

    #[test]
    fn test_write_rejects_bad_length() {
        let mut out = Vec::new();
        assert!(write_pgm(&[1, 2, 3], 2, 2, PgmEncoding::Binary, &mut out).is_err());
    }
}
