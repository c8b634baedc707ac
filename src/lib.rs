#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the recurrence `z ← z² + c`, started at zero, never runs
//! off to infinity.  We can't iterate forever, so for each point we
//! count how many steps it takes before `z` leaves the circle of
//! radius two around the origin (once outside, it never comes back).
//! That count is the point's "escape time."  Points that are still
//! inside after the iteration budget is spent are treated as members
//! of the set.
//!
//! The renderer samples a rectangle of the complex plane into a grid,
//! one point per pixel, runs the escape-time iteration on each point,
//! and shades the pixel by how quickly it escaped: slow escapes are
//! bright, the interior of the set is black.  The result is written as
//! a binary PPM image.

#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod complex;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod ppm;
pub mod render;

pub use complex::ComplexPoint;
pub use errors::{MandelbrotError, Result};
pub use escape::{evaluate, EscapeResult, DIVERGENCE_RADIUS};
pub use planes::{sample, Grid, Viewport};
pub use ppm::{ppm_path, save_ppm, write_ppm};
pub use render::{render, shade, MandelbrotRenderer, PixelBuffer, RenderConfig};
