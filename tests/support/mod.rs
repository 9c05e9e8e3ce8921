//! Test support library
//! Provides helper predicates shared by the integration tests.

use nalgebra::Point2;
use trochogen::float_types::Real;

/// Returns true when `a` and `b` differ by less than `eps`.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Returns true when both coordinates of `a` and `b` differ by less than `eps`.
#[allow(dead_code)]
pub fn point_approx_eq(a: Point2<Real>, b: Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}
