use std::f64::consts::FRAC_PI_2;

use crate::math::{Point2, Tolerance};

use super::curve::{Segment, StretchAnchor};
use super::transform::Transform;

/// An angle formed by two rays from `vertex`, through `first` and `second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub first: Point2,
    pub vertex: Point2,
    pub second: Point2,
}

impl Angle {
    #[must_use]
    pub fn new(first: Point2, vertex: Point2, second: Point2) -> Self {
        Self {
            first,
            vertex,
            second,
        }
    }

    /// Bisector from the vertex to the midpoint of the two sides cut to
    /// unit length.
    ///
    /// For a straight angle that midpoint is the vertex itself, so the
    /// first unit side turned a quarter counter-clockwise is returned.
    #[must_use]
    pub fn bisector(&self) -> Segment {
        let side1 = Segment::new(self.vertex, self.first).stretch(1.0, StretchAnchor::Start);
        let side2 = Segment::new(self.vertex, self.second).stretch(1.0, StretchAnchor::Start);
        let bisector = Segment::new(self.vertex, nalgebra::center(&side1.end, &side2.end));
        if Tolerance::default().is_zero(bisector.length()) {
            tracing::trace!(angle = ?self, "straight angle bisector");
            return side1.rotate(FRAC_PI_2, &self.vertex);
        }
        bisector
    }
}
