// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong.  All but the last are caller input
//! errors, caught before any computation starts.

use std::io;
use std::result;

/// Errors raised while validating a render or persisting its output.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// The viewport's lower bound is not below its upper bound on one
    /// of the axes, or one of the bounds is not a finite number.
    #[fail(
        display = "Invalid viewport: real [{}, {}], imaginary [{}, {}]",
        re_min, re_max, im_min, im_max
    )]
    InvalidViewport {
        /// Lower bound of the real axis.
        re_min: f64,
        /// Upper bound of the real axis.
        re_max: f64,
        /// Lower bound of the imaginary axis.
        im_min: f64,
        /// Upper bound of the imaginary axis.
        im_max: f64,
    },

    /// The grid needs at least two samples along each axis.
    #[fail(
        display = "Invalid resolution {}x{}: both dimensions must be at least 2",
        width, height
    )]
    InvalidResolution {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Zero iterations can't tell anything about a point.
    #[fail(display = "Invalid iteration budget {}: must be at least 1", _0)]
    InvalidIterationBudget(usize),

    /// A pixel buffer that doesn't hold width * height * 3 bytes.
    #[fail(
        display = "Pixel buffer holds {} bytes, expected {}",
        actual, expected
    )]
    PixelCountMismatch {
        /// Bytes the dimensions call for.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },

    /// The image could not be written.
    #[fail(display = "Could not write image: {}", _0)]
    Persist(#[cause] io::Error),
}

impl From<io::Error> for MandelbrotError {
    fn from(err: io::Error) -> Self {
        MandelbrotError::Persist(err)
    }
}

/// Result type used throughout the crate.
pub type Result<T> = result::Result<T, MandelbrotError>;
