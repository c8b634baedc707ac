// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The three bits of complex arithmetic the escape-time iteration
//! needs.  `num::Complex` already implements all of this through its
//! operators; these are spelled out so that the recurrence reads the
//! same way it's written on paper.

use escape::DIVERGENCE_RADIUS;
use num::Complex;

/// A single point on the complex plane, real part as the x-component
/// and imaginary part as the y-component.
pub type ComplexPoint = Complex<f64>;

/// The distance of a point from the origin.
#[inline]
pub fn magnitude(p: ComplexPoint) -> f64 {
    (p.re * p.re + p.im * p.im).sqrt()
}

/// `p²`, by way of `(a + bi)² = a² - b² + 2abi`.
#[inline]
pub fn square(p: ComplexPoint) -> ComplexPoint {
    Complex::new(p.re * p.re - p.im * p.im, 2.0 * p.re * p.im)
}

/// Component-wise sum of two points.
#[inline]
pub fn add(a: ComplexPoint, b: ComplexPoint) -> ComplexPoint {
    Complex::new(a.re + b.re, a.im + b.im)
}

/// True once a point has left the divergence circle.  A point sitting
/// exactly on the circle has not.
#[inline]
pub fn diverged(z: ComplexPoint) -> bool {
    magnitude(z) > DIVERGENCE_RADIUS
}
