// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.  This is the inner loop of the whole program:
//! it runs once per pixel, up to the iteration budget each time.

use complex::{add, diverged, square, ComplexPoint};
use num::Complex;

/// Once a point's orbit is farther than this from the origin, it is
/// guaranteed to run off to infinity.
pub const DIVERGENCE_RADIUS: f64 = 2.0;

/// What became of a point's orbit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EscapeResult {
    /// The orbit left the divergence circle at this step.  Always less
    /// than the iteration budget it was evaluated with.
    Escaped(usize),
    /// The orbit was still inside the circle when the budget ran out.
    /// As far as we can tell, the point is in the set.
    Bounded,
}

/// Iterate `z ← z² + c` from zero, at most `limit` times, and report
/// the first step at which `z` was found outside the divergence circle.
/// The check comes before the update, so a step's index is the number
/// of updates already applied.
pub fn evaluate(c: ComplexPoint, limit: usize) -> EscapeResult {
    let mut z: ComplexPoint = Complex::new(0.0, 0.0);
    for i in 0..limit {
        if diverged(z) {
            return EscapeResult::Escaped(i);
        }
        z = add(square(z), c);
    }
    EscapeResult::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for limit in &[1, 2, 10, 1000] {
            assert_eq!(evaluate(Complex::new(0.0, 0.0), *limit), EscapeResult::Bounded);
        }
    }

    #[test]
    fn period_two_cycle_is_bounded() {
        for limit in &[2, 3, 50, 5000] {
            assert_eq!(evaluate(Complex::new(-1.0, 0.0), *limit), EscapeResult::Bounded);
        }
    }

    #[test]
    fn far_point_escapes_after_one_step() {
        // z0 = 0 is inside, z1 = 3 is not.
        assert_eq!(evaluate(Complex::new(3.0, 0.0), 10), EscapeResult::Escaped(1));
        assert_eq!(evaluate(Complex::new(0.0, -3.0), 10), EscapeResult::Escaped(1));
    }

    #[test]
    fn point_on_the_radius_escapes_a_step_later() {
        // z1 = 2 sits exactly on the circle; z2 = 6 is out.
        assert_eq!(evaluate(Complex::new(2.0, 0.0), 10), EscapeResult::Escaped(2));
    }

    #[test]
    fn orbit_pinned_to_the_radius_is_bounded() {
        // 0, -2, 2, 2, 2, ...
        assert_eq!(evaluate(Complex::new(-2.0, 0.0), 100), EscapeResult::Bounded);
    }

    #[test]
    fn budget_too_small_to_see_the_escape() {
        assert_eq!(evaluate(Complex::new(3.0, 0.0), 1), EscapeResult::Bounded);
        assert_eq!(evaluate(Complex::new(2.0, 0.0), 2), EscapeResult::Bounded);
    }

    #[test]
    fn escape_index_stays_below_the_budget() {
        let points = [
            Complex::new(0.3, 0.5),
            Complex::new(-0.75, 0.1),
            Complex::new(0.26, 0.0),
            Complex::new(-1.8, 0.02),
        ];
        for c in &points {
            for limit in 1..64 {
                if let EscapeResult::Escaped(i) = evaluate(*c, limit) {
                    assert!(i < limit);
                }
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let c = Complex::new(-0.7435, 0.1314);
        assert_eq!(evaluate(c, 500), evaluate(c, 500));
    }
}
