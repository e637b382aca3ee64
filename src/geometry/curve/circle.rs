use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::text::parse_numbers;
use crate::math::{Point2, Tolerance, Vector2};

use crate::geometry::aabb::Aabb;
use crate::geometry::codec::{encode_point, TextCodec};
use crate::geometry::point::PointExt;
use crate::geometry::relation::Relation;
use crate::geometry::transform::{Axis, Transform};

/// A circle given by its center and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if Tolerance::default().less(radius, 0.0) {
            return Err(GeometryError::invalid(format!(
                "circle radius must be non-negative, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius: radius.max(0.0),
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.center.x - self.radius,
            self.center.x + self.radius,
            self.center.y - self.radius,
            self.center.y + self.radius,
        )
    }

    /// `In`, `On` or `Out`.
    #[must_use]
    pub fn relation_with_pt(&self, p: &Point2) -> Relation {
        match Tolerance::default().compare(self.center.distance_to(p), self.radius) {
            Ordering::Less => Relation::In,
            Ordering::Equal => Relation::On,
            Ordering::Greater => Relation::Out,
        }
    }

    /// Classifies `other` relative to `self`.
    ///
    /// `Contain` means `other` encloses `self`; `Contained` means `self`
    /// encloses `other`. Coincident circles `Overlap`.
    #[must_use]
    pub fn relation_with_circle(&self, other: &Self) -> Relation {
        let tol = Tolerance::default();
        let dist = self.center.distance_to(&other.center);
        if tol.is_zero(dist) && tol.equal(self.radius, other.radius) {
            return Relation::Overlap;
        }
        match tol.compare(dist, self.radius + other.radius) {
            Ordering::Greater => return Relation::Disjoint,
            Ordering::Equal => return Relation::ExternallyTangent,
            Ordering::Less => {}
        }
        match tol.compare(dist, (self.radius - other.radius).abs()) {
            Ordering::Less if self.radius < other.radius => Relation::Contain,
            Ordering::Less => Relation::Contained,
            Ordering::Equal => Relation::InternallyTangent,
            Ordering::Greater => Relation::Intersect,
        }
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }

    #[must_use]
    pub fn rotate(&self, radians: f64, center: &Point2) -> Self {
        Self {
            center: self.center.rotate(radians, center),
            radius: self.radius,
        }
    }

    #[must_use]
    pub fn reflect(&self, axis: &Axis) -> Self {
        Self {
            center: self.center.reflect(axis),
            radius: self.radius,
        }
    }

    /// Scales about `center`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the rates differ in magnitude, since
    /// the image would be an ellipse.
    pub fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Result<Self> {
        if Tolerance::default().not_equal(x_rate.abs(), y_rate.abs()) {
            return Err(GeometryError::invalid(format!(
                "non-uniform scale ({x_rate}, {y_rate}) does not map a circle to a circle"
            )));
        }
        Ok(Self {
            center: self.center.scale(x_rate, y_rate, center),
            radius: self.radius * x_rate.abs(),
        })
    }
}

impl TextCodec for Circle {
    fn encode(&self) -> String {
        format!("({}, {})", encode_point(&self.center), self.radius)
    }

    fn decode(text: &str) -> Result<Self> {
        let [x, y, radius] = parse_numbers(text)?;
        Self::new(Point2::new(x, y), radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point2::new(x, y), r).unwrap()
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
    }

    #[test]
    fn measures() {
        let c = circle(1.0, 2.0, 2.0);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_relative_eq!(c.perimeter(), 4.0 * PI);
        assert_eq!(c.aabb(), Aabb::new(-1.0, 3.0, 0.0, 4.0));
    }

    #[test]
    fn point_relation() {
        let c = circle(0.0, 0.0, 1.0);
        assert_eq!(c.relation_with_pt(&Point2::new(0.5, 0.0)), Relation::In);
        assert_eq!(c.relation_with_pt(&Point2::new(0.0, 1.0)), Relation::On);
        assert_eq!(c.relation_with_pt(&Point2::new(1.0, 1.0)), Relation::Out);
    }

    #[test]
    fn circle_relations() {
        let c = circle(0.0, 0.0, 2.0);
        assert_eq!(c.relation_with_circle(&c), Relation::Overlap);
        assert_eq!(c.relation_with_circle(&circle(5.0, 0.0, 1.0)), Relation::Disjoint);
        assert_eq!(c.relation_with_circle(&circle(3.0, 0.0, 1.0)), Relation::ExternallyTangent);
        assert_eq!(c.relation_with_circle(&circle(2.0, 0.0, 1.0)), Relation::Intersect);
        assert_eq!(c.relation_with_circle(&circle(1.0, 0.0, 1.0)), Relation::InternallyTangent);
        assert_eq!(c.relation_with_circle(&circle(0.5, 0.0, 1.0)), Relation::Contained);
        assert_eq!(c.relation_with_circle(&circle(0.5, 0.0, 5.0)), Relation::Contain);
    }

    #[test]
    fn contain_and_contained_mirror() {
        let small = circle(0.0, 0.0, 1.0);
        let big = circle(0.2, 0.0, 3.0);
        assert_eq!(small.relation_with_circle(&big), Relation::Contain);
        assert_eq!(big.relation_with_circle(&small), Relation::Contained);
    }

    #[test]
    fn scale_must_be_uniform() {
        let c = circle(1.0, 0.0, 1.0);
        let scaled = c.scale(-2.0, 2.0, &Point2::origin()).unwrap();
        assert_eq!(*scaled.center(), Point2::new(-2.0, 0.0));
        assert_relative_eq!(scaled.radius(), 2.0);
        assert!(c.scale(2.0, 1.0, &Point2::origin()).is_err());
    }

    #[test]
    fn text_form() {
        let c = circle(1.5, -2.0, 3.0);
        assert_eq!(c.encode(), "((1.5, -2), 3)");
        assert_eq!(Circle::decode(&c.encode()).unwrap(), c);
    }
}
