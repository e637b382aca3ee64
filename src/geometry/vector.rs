use std::f64::consts::TAU;

use crate::math::{Point2, Rotation2, Tolerance, Vector2};

use super::point::round_to;
use super::transform::Axis;

/// Vector of `length` pointing `radians` counter-clockwise from +x.
#[must_use]
pub fn vector_from_polar(length: f64, radians: f64) -> Vector2 {
    let (sin, cos) = radians.sin_cos();
    Vector2::new(length * cos, length * sin)
}

/// Vector from `start` to `end`.
#[must_use]
pub fn vector_between(start: &Point2, end: &Point2) -> Vector2 {
    end - start
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Tolerance-aware queries and transforms on [`Vector2`].
pub trait VectorExt {
    /// Equality within the default tolerance.
    fn approx_eq(&self, other: &Vector2) -> bool;

    /// Equality within `tol`, per component.
    fn approx_eq_with(&self, other: &Vector2, tol: Tolerance) -> bool;

    /// Angle from +x, in `[0, 2π)`.
    fn polar_angle(&self) -> f64;

    /// Angle from `self` to `other`.
    ///
    /// With `allow_clockwise` the smallest unsigned angle in `[0, π]` is
    /// returned; otherwise the counter-clockwise sweep in `[0, 2π)`.
    fn angle_to(&self, other: &Vector2, allow_clockwise: bool) -> f64;

    /// Rotates counter-clockwise by `radians`.
    fn rotated(&self, radians: f64) -> Vector2;

    /// Scales each component independently.
    fn scaled(&self, x_rate: f64, y_rate: f64) -> Vector2;

    /// Mirrors across `axis`, keeping the tail at the origin.
    fn reflected(&self, axis: &Axis) -> Vector2;

    /// Rescales to `length`, or `None` for a zero vector.
    fn stretched(&self, length: f64) -> Option<Vector2>;

    /// Rounds both components to `precision` decimals, ties to even.
    fn rounded(&self, precision: i32) -> Vector2;
}

impl VectorExt for Vector2 {
    fn approx_eq(&self, other: &Vector2) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    fn approx_eq_with(&self, other: &Vector2, tol: Tolerance) -> bool {
        tol.equal(self.x, other.x) && tol.equal(self.y, other.y)
    }

    fn polar_angle(&self) -> f64 {
        normalize_angle(self.y.atan2(self.x))
    }

    fn angle_to(&self, other: &Vector2, allow_clockwise: bool) -> f64 {
        let signed = cross(self, other).atan2(self.dot(other));
        if allow_clockwise {
            signed.abs()
        } else {
            normalize_angle(signed)
        }
    }

    fn rotated(&self, radians: f64) -> Vector2 {
        Rotation2::new(radians) * self
    }

    fn scaled(&self, x_rate: f64, y_rate: f64) -> Vector2 {
        Vector2::new(self.x * x_rate, self.y * y_rate)
    }

    fn reflected(&self, axis: &Axis) -> Vector2 {
        let tail = axis.reflect_point(&Point2::origin());
        let head = axis.reflect_point(&Point2::from(*self));
        head - tail
    }

    fn stretched(&self, length: f64) -> Option<Vector2> {
        let norm = self.norm();
        if Tolerance::default().is_zero(norm) {
            return None;
        }
        Some(self * (length / norm))
    }

    fn rounded(&self, precision: i32) -> Vector2 {
        Vector2::new(round_to(self.x, precision), round_to(self.y, precision))
    }
}

/// Maps an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn polar_construction() {
        let v = vector_from_polar(2.0, FRAC_PI_2);
        assert_abs_diff_eq!(v, Vector2::new(0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn polar_angle_is_full_turn() {
        assert_abs_diff_eq!(Vector2::new(1.0, 0.0).polar_angle(), 0.0);
        let down = Vector2::new(0.0, -1.0);
        assert_abs_diff_eq!(down.polar_angle(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(Vector2::new(-1.0, 0.0).polar_angle(), PI, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_vectors() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, -1.0);
        assert_abs_diff_eq!(a.angle_to(&b, true), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to(&b, false), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(b.angle_to(&a, false), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn reflect_keeps_tail_at_origin() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.reflected(&Axis::X), Vector2::new(1.0, -2.0));
        assert_eq!(v.reflected(&Axis::Diagonal), Vector2::new(2.0, 1.0));
    }

    #[test]
    fn stretch_to_length() {
        let v = Vector2::new(3.0, 4.0).stretched(10.0);
        assert_abs_diff_eq!(v.unwrap_or_default(), Vector2::new(6.0, 8.0), epsilon = 1e-12);
        assert!(Vector2::zeros().stretched(1.0).is_none());
    }

    #[test]
    fn rotate_and_scale() {
        let v = Vector2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_abs_diff_eq!(v, Vector2::new(0.0, 1.0), epsilon = 1e-12);
        assert_eq!(Vector2::new(1.0, 2.0).scaled(3.0, -1.0), Vector2::new(3.0, -2.0));
    }
}
