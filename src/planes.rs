// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport, which describes a rectangle on the complex
//! plane, and the Grid, which is that rectangle sampled into evenly
//! spaced points, one for each pixel of the output image.

use complex::ComplexPoint;
use errors::{MandelbrotError, Result};
use itertools::iproduct;
use num::Complex;
use std::slice;

/// The x, y of a pixel: column first, then row.  Row 0 is the top of
/// the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// A rectangle on the complex plane, treating the real part as the
/// x-component and the imaginary part as the y-component.  The bounds
/// are checked on construction, so a Viewport in hand is always a
/// proper rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Viewport {
    /// Takes the lower and upper bound of the real axis, then of the
    /// imaginary axis.  Fails unless every bound is finite and each
    /// lower bound is strictly below its upper bound.
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Viewport> {
        let finite = re_min.is_finite()
            && re_max.is_finite()
            && im_min.is_finite()
            && im_max.is_finite();
        if !finite || re_min >= re_max || im_min >= im_max {
            return Err(MandelbrotError::InvalidViewport {
                re_min,
                re_max,
                im_min,
                im_max,
            });
        }
        Ok(Viewport {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Builds a viewport from its left-lower and right-upper corners.
    pub fn from_corners(leftlower: ComplexPoint, rightupper: ComplexPoint) -> Result<Viewport> {
        Viewport::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)
    }

    /// The left-lower corner.
    pub fn leftlower(&self) -> ComplexPoint {
        Complex::new(self.re_min, self.im_min)
    }

    /// The right-upper corner.
    pub fn rightupper(&self) -> ComplexPoint {
        Complex::new(self.re_max, self.im_max)
    }

    /// Width of the rectangle along the real axis.
    pub fn re_span(&self) -> f64 {
        (self.re_max - self.re_min).abs()
    }

    /// Height of the rectangle along the imaginary axis.
    pub fn im_span(&self) -> f64 {
        (self.im_max - self.im_min).abs()
    }
}

/// The viewport sampled at `width` points along the real axis and
/// `height` points along the imaginary axis.  Both edges of the
/// viewport are included.  Stored row by row.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    points: Vec<ComplexPoint>,
}

impl Grid {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of points in the grid.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a sampled grid.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point sampled for a given pixel, if that pixel is on the grid.
    pub fn get(&self, pixel: Pixel) -> Option<ComplexPoint> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        Some(self.points[pixel.1 * self.width + pixel.0])
    }

    /// All of the points, row by row, left to right.
    pub fn iter<'a>(&'a self) -> slice::Iter<'a, ComplexPoint> {
        self.points.iter()
    }

    /// All of the points paired with the pixel they were sampled for.
    pub fn pixels<'a>(&'a self) -> impl Iterator<Item = (Pixel, ComplexPoint)> + 'a {
        iproduct!(0..self.height, 0..self.width)
            .map(move |(row, column)| (Pixel(column, row), self.points[row * self.width + column]))
    }
}

/// Lay a `width` by `height` grid over the viewport.  Neighbouring
/// samples are `span / (n - 1)` apart, so the first sample lands on the
/// lower bound and the last lands on the upper bound.  Anything smaller
/// than 2x2 has no spacing to speak of and is refused.
pub fn sample(viewport: &Viewport, width: usize, height: usize) -> Result<Grid> {
    if width < 2 || height < 2 {
        return Err(MandelbrotError::InvalidResolution { width, height });
    }

    let dx = viewport.re_span() / ((width - 1) as f64);
    let dy = viewport.im_span() / ((height - 1) as f64);

    let points = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            Complex::new(
                (x as f64) * dx + viewport.re_min,
                (y as f64) * dy + viewport.im_min,
            )
        })
        .collect();

    Ok(Grid {
        width,
        height,
        points,
    })
}
