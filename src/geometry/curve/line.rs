use crate::error::{GeometryError, Result};
use crate::math::text::parse_numbers;
use crate::math::{Point2, Tolerance, Vector2};

use crate::geometry::codec::TextCodec;
use crate::geometry::relation::Relation;
use crate::geometry::transform::{Axis, Transform};

use super::Segment;

/// An infinite line `a*x + b*y + c = 0`.
///
/// `(a, b)` is never the zero vector. The line's direction is `(-b, a)`,
/// which for a line built from a segment points from its start to its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates a line from its implicit coefficients.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `a` and `b` are both zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let tol = Tolerance::default();
        if tol.is_zero(a) && tol.is_zero(b) {
            return Err(GeometryError::invalid(format!(
                "line coefficients ({a}, {b}) do not define a direction"
            )));
        }
        Ok(Self { a, b, c })
    }

    /// The line supporting `segment`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a degenerate segment.
    pub fn from_segment(segment: &Segment) -> Result<Self> {
        if segment.is_degenerate() {
            return Err(GeometryError::invalid(
                "cannot build a line from a degenerate segment",
            ));
        }
        Ok(Self::through(&segment.start, &segment.end))
    }

    /// The line through two distinct points.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the points coincide.
    pub fn from_points(p1: &Point2, p2: &Point2) -> Result<Self> {
        Self::from_segment(&Segment::new(*p1, *p2))
    }

    // Callers guarantee p1 != p2.
    fn through(p1: &Point2, p2: &Point2) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// `(a, b, c)`
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// Direction vector `(-b, a)`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(-self.b, self.a)
    }

    /// Signed residual `a*x + b*y + c`.
    fn eval(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Foot of the perpendicular from `p`.
    #[must_use]
    pub fn projection(&self, p: &Point2) -> Point2 {
        let n = self.normal();
        p - n * (self.eval(p) / n.norm_squared())
    }

    /// The point on the line closest to the origin.
    #[must_use]
    pub fn point_on(&self) -> Point2 {
        self.projection(&Point2::origin())
    }

    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        self.eval(p).abs() / self.normal().norm()
    }

    /// `On`, or `Left`/`Right` relative to [`Line::direction`].
    #[must_use]
    pub fn relation_with_pt(&self, p: &Point2) -> Relation {
        if Tolerance::default().is_zero(self.distance_to(p)) {
            Relation::On
        } else if self.eval(p) < 0.0 {
            Relation::Left
        } else {
            Relation::Right
        }
    }

    /// A unit-parameter segment on the line, starting at [`Line::point_on`]
    /// and running along [`Line::direction`].
    #[must_use]
    pub fn to_segment(&self) -> Segment {
        let start = self.point_on();
        Segment::new(start, start + self.direction())
    }

    fn map_rigid(&self, f: impl Fn(&Point2) -> Point2) -> Self {
        let s = self.to_segment();
        Self::through(&f(&s.start), &f(&s.end))
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: self.c - self.a * offset.x - self.b * offset.y,
        }
    }

    #[must_use]
    pub fn rotate(&self, radians: f64, center: &Point2) -> Self {
        self.map_rigid(|p| p.rotate(radians, center))
    }

    #[must_use]
    pub fn reflect(&self, axis: &Axis) -> Self {
        self.map_rigid(|p| p.reflect(axis))
    }

    /// Scales about `center`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when a zero rate collapses the line to a
    /// point.
    pub fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Result<Self> {
        let s = self.to_segment().scale(x_rate, y_rate, center);
        Self::from_segment(&s)
    }
}

impl TextCodec for Line {
    fn encode(&self) -> String {
        format!("({}, {}, {})", self.a, self.b, self.c)
    }

    fn decode(text: &str) -> Result<Self> {
        let [a, b, c] = parse_numbers(text)?;
        Self::new(a, b, c)
    }
}
