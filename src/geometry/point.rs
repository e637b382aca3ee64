use std::cmp::Ordering;

use crate::math::{Point2, Tolerance, Vector2};

use super::aabb::Aabb;

/// Location of a point relative to the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Origin,
    First,
    Second,
    Third,
    Fourth,
    PositiveX,
    PositiveY,
    NegativeX,
    NegativeY,
}

/// Tolerance-aware queries on [`Point2`].
pub trait PointExt {
    /// Coincidence within the default tolerance.
    fn approx_eq(&self, other: &Point2) -> bool;

    /// Coincidence within `tol`, per coordinate.
    fn approx_eq_with(&self, other: &Point2, tol: Tolerance) -> bool;

    /// Whether the distance to `other` is at most `dist`.
    fn close_to(&self, other: &Point2, dist: f64) -> bool;

    /// Euclidean distance.
    fn distance_to(&self, other: &Point2) -> f64;

    /// Vector from `self` to `other`.
    fn vector_to(&self, other: &Point2) -> Vector2;

    /// Quadrant or half-axis containing the point.
    fn quadrant(&self) -> Quadrant;

    /// Lexicographic comparison by x, then y.
    fn cmp_xy(&self, other: &Point2) -> Ordering;

    /// Lexicographic comparison by y, then x.
    fn cmp_yx(&self, other: &Point2) -> Ordering;

    /// Rounds both coordinates to `precision` decimals, ties to even.
    fn rounded(&self, precision: i32) -> Point2;

    /// Degenerate box at this point.
    fn aabb(&self) -> Aabb;
}

impl PointExt for Point2 {
    fn approx_eq(&self, other: &Point2) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    fn approx_eq_with(&self, other: &Point2, tol: Tolerance) -> bool {
        tol.equal(self.x, other.x) && tol.equal(self.y, other.y)
    }

    fn close_to(&self, other: &Point2, dist: f64) -> bool {
        Tolerance::default().less_or_equal(self.distance_to(other), dist)
    }

    fn distance_to(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn vector_to(&self, other: &Point2) -> Vector2 {
        other - self
    }

    fn quadrant(&self) -> Quadrant {
        let tol = Tolerance::default();
        match (tol.compare(self.x, 0.0), tol.compare(self.y, 0.0)) {
            (Ordering::Greater, Ordering::Greater) => Quadrant::First,
            (Ordering::Less, Ordering::Greater) => Quadrant::Second,
            (Ordering::Less, Ordering::Less) => Quadrant::Third,
            (Ordering::Greater, Ordering::Less) => Quadrant::Fourth,
            (Ordering::Greater, Ordering::Equal) => Quadrant::PositiveX,
            (Ordering::Less, Ordering::Equal) => Quadrant::NegativeX,
            (Ordering::Equal, Ordering::Greater) => Quadrant::PositiveY,
            (Ordering::Equal, Ordering::Less) => Quadrant::NegativeY,
            (Ordering::Equal, Ordering::Equal) => Quadrant::Origin,
        }
    }

    fn cmp_xy(&self, other: &Point2) -> Ordering {
        raw_cmp(self.x, other.x).then_with(|| raw_cmp(self.y, other.y))
    }

    fn cmp_yx(&self, other: &Point2) -> Ordering {
        raw_cmp(self.y, other.y).then_with(|| raw_cmp(self.x, other.x))
    }

    fn rounded(&self, precision: i32) -> Point2 {
        Point2::new(round_to(self.x, precision), round_to(self.y, precision))
    }

    fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.x, self.y, self.y)
    }
}

fn raw_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Rounds `value` to `precision` decimals with banker's rounding.
#[must_use]
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round_ties_even() / factor
}
