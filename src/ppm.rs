// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Binary PPM output.  A PPM file is a tiny text header, `P6`, the
//! width and height, and the largest channel value, each on its own
//! line, followed by the raw RGB bytes of the image, row by row.

use errors::{MandelbrotError, Result};
use render::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const EXTENSION: &str = ".ppm";

/// Write a `width` by `height` image to `out`.  The dimensions come
/// from the caller and the buffer has to agree with them: exactly
/// three bytes for each pixel, or nothing is written.
pub fn write_ppm<W: Write>(out: &mut W, width: usize, height: usize, pixels: &[u8]) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MandelbrotError::InvalidResolution { width, height });
    }
    let expected = match width.checked_mul(height).and_then(|n| n.checked_mul(3)) {
        Some(expected) => expected,
        None => return Err(MandelbrotError::InvalidResolution { width, height }),
    };
    if pixels.len() != expected {
        return Err(MandelbrotError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    write!(out, "P6\n{} {}\n255\n", width, height)?;
    out.write_all(pixels)?;
    out.flush()?;
    Ok(())
}

/// The name of the file a render with the given base name goes to.
/// The suffix is always appended, so `fractal.v2` becomes
/// `fractal.v2.ppm`.
pub fn ppm_path<P: AsRef<Path>>(base: P) -> PathBuf {
    let mut name = base.as_ref().as_os_str().to_os_string();
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Save a rendered image next to `base`, with the PPM suffix added.
/// Returns the path actually written.
pub fn save_ppm<P: AsRef<Path>>(base: P, pixels: &PixelBuffer) -> Result<PathBuf> {
    let path = ppm_path(base);
    let (width, height) = pixels.dimensions();
    let mut output = BufWriter::new(File::create(&path)?);
    write_ppm(&mut output, width as usize, height as usize, pixels)?;
    info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{self, Rgb, RgbImage};

    #[test]
    fn header_then_pixels() {
        let pixels: Vec<u8> = (0..2 * 3 * 3).map(|b| b as u8).collect();
        let mut out = Vec::new();
        write_ppm(&mut out, 2, 3, &pixels).unwrap();
        let header = b"P6\n2 3\n255\n";
        assert_eq!(&out[..header.len()], &header[..]);
        assert_eq!(&out[header.len()..], &pixels[..]);
    }

    #[test]
    fn short_buffer_is_refused() {
        let mut out = Vec::new();
        match write_ppm(&mut out, 4, 4, &[0u8; 47]).err() {
            Some(MandelbrotError::PixelCountMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (48, 47));
            }
            other => panic!("expected PixelCountMismatch, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn empty_image_is_refused() {
        let mut out = Vec::new();
        assert!(write_ppm(&mut out, 0, 4, &[]).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn oversized_dimensions_are_refused() {
        let mut out = Vec::new();
        match write_ppm(&mut out, usize::max_value() / 2 + 1, 2, &[]).err() {
            Some(MandelbrotError::InvalidResolution { height: 2, .. }) => (),
            other => panic!("expected InvalidResolution, got {:?}", other),
        }
        assert!(write_ppm(&mut out, usize::max_value() / 2, 2, &[]).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn suffix_is_appended() {
        assert_eq!(ppm_path("testFile"), PathBuf::from("testFile.ppm"));
        assert_eq!(ppm_path("out/fractal.v2"), PathBuf::from("out/fractal.v2.ppm"));
    }

    #[test]
    fn image_crate_reads_our_output() {
        let mut pixels = RgbImage::new(3, 2);
        for (x, y, pixel) in pixels.enumerate_pixels_mut() {
            let level = (x * 40 + y * 100) as u8;
            *pixel = Rgb([level, level, level]);
        }
        let mut out = Vec::new();
        write_ppm(&mut out, 3, 2, &pixels).unwrap();

        let decoded = image::load_from_memory(&out).unwrap().to_rgb();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), pixels.into_raw());
    }
}
