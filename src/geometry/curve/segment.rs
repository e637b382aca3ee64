use crate::error::Result;
use crate::math::distance_2d::{point_to_line_dist, point_to_segment_dist, project_to_line};
use crate::math::intersect_2d::{segment_segment, Extent, Intersection};
use crate::math::polygon_2d::area2;
use crate::math::text::number_tokens;
use crate::math::{Point2, Tolerance, Vector2};

use crate::geometry::aabb::Aabb;
use crate::geometry::codec::{encode_point, point_from_tokens, TextCodec};
use crate::geometry::point::PointExt;
use crate::geometry::relation::Relation;
use crate::geometry::transform::{Axis, Transform};
use crate::geometry::vector::{vector_from_polar, VectorExt};

/// Which point of a segment stays fixed in [`Segment::stretch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StretchAnchor {
    #[default]
    Start,
    End,
    Mid,
}

/// A directed line segment from `start` to `end`.
///
/// The segment may be degenerate (both endpoints coincide); queries that
/// would divide by its length fall back to point behaviour instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Segment of `length` leaving `start` at `radians` from +x.
    #[must_use]
    pub fn from_polar(start: Point2, length: f64, radians: f64) -> Self {
        Self::new(start, start + vector_from_polar(length, radians))
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points([&self.start, &self.end])
    }

    /// Slope `dy / dx`, or `None` for a vertical segment.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        let v = self.vector();
        if Tolerance::default().is_zero(v.x) {
            None
        } else {
            Some(v.y / v.x)
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start.approx_eq(&self.end)
    }

    /// Parameter of the projection of `p` onto the supporting line, with
    /// `start` at 0 and `end` at 1. `None` for a degenerate segment.
    #[must_use]
    pub fn param_by_point(&self, p: &Point2) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let v = self.vector();
        Some((p - self.start).dot(&v) / v.norm_squared())
    }

    /// Point at `param` along the supporting line.
    #[must_use]
    pub fn point_at(&self, param: f64) -> Point2 {
        self.start + self.vector() * param
    }

    /// `y` on the supporting line at `x`, or `None` for a vertical segment.
    #[must_use]
    pub fn y_at_x(&self, x: f64) -> Option<f64> {
        let v = self.vector();
        if Tolerance::default().is_zero(v.x) {
            return None;
        }
        Some(self.start.y + v.y * (x - self.start.x) / v.x)
    }

    /// `x` on the supporting line at `y`, or `None` for a horizontal segment.
    #[must_use]
    pub fn x_at_y(&self, y: f64) -> Option<f64> {
        let v = self.vector();
        if Tolerance::default().is_zero(v.y) {
            return None;
        }
        Some(self.start.x + v.x * (y - self.start.y) / v.y)
    }

    /// Foot of the perpendicular from `p` onto the supporting line.
    #[must_use]
    pub fn projection(&self, p: &Point2) -> Point2 {
        project_to_line(p, &self.start, &self.end)
    }

    /// Shortest distance from `p` to the segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        point_to_segment_dist(p, &self.start, &self.end)
    }

    /// Distance from `p` to the supporting line.
    #[must_use]
    pub fn line_distance_to(&self, p: &Point2) -> f64 {
        point_to_line_dist(p, &self.start, &self.end)
    }

    /// Classifies `p` as `On`, `Left`, `Right` or `Out`.
    ///
    /// `Left` and `Right` are relative to the direction `start -> end` in a
    /// y-up frame: `Left` is the counter-clockwise side. In a y-down screen
    /// frame the two read mirrored.
    /// `Out` is only returned for a bounded segment when `p` is on the
    /// supporting line but beyond an endpoint, or when the segment is
    /// degenerate and `p` is elsewhere.
    #[must_use]
    pub fn relation_with_pt(&self, p: &Point2, extent: Extent) -> Relation {
        let tol = Tolerance::default();
        if tol.is_zero(self.line_distance_to(p)) {
            let on = match extent {
                Extent::Bounded => tol.is_zero(self.distance_to(p)),
                Extent::Unbounded => true,
            };
            return if on { Relation::On } else { Relation::Out };
        }
        if self.is_degenerate() {
            return Relation::Out;
        }
        if area2(&self.start, &self.end, p) > 0.0 {
            Relation::Left
        } else {
            Relation::Right
        }
    }

    /// Resizes to `length` along the current direction, keeping `anchor`
    /// fixed. A degenerate segment has no direction and is returned as-is.
    #[must_use]
    pub fn stretch(&self, length: f64, anchor: StretchAnchor) -> Self {
        let Some(v) = self.vector().stretched(length) else {
            return *self;
        };
        match anchor {
            StretchAnchor::Start => Self::new(self.start, self.start + v),
            StretchAnchor::End => Self::new(self.end - v, self.end),
            StretchAnchor::Mid => {
                let mid = self.midpoint();
                let half = v * 0.5;
                Self::new(mid - half, mid + half)
            }
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[must_use]
    pub fn rounded(&self, precision: i32) -> Self {
        Self::new(self.start.rounded(precision), self.end.rounded(precision))
    }

    /// Intersection of two bounded segments with the default tolerance.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Intersection {
        self.intersect_with(other, Extent::Bounded, Extent::Bounded, Tolerance::default())
    }

    /// Intersection where either operand may stand for its supporting line.
    #[must_use]
    pub fn intersect_with(
        &self,
        other: &Self,
        extent: Extent,
        other_extent: Extent,
        tol: Tolerance,
    ) -> Intersection {
        segment_segment(
            &[self.start, self.end],
            extent,
            &[other.start, other.end],
            other_extent,
            tol,
        )
    }

    pub(crate) fn from_tokens(tokens: &[&str]) -> Result<Self> {
        let start = point_from_tokens(tokens)?;
        let end = point_from_tokens(tokens.get(2..).unwrap_or_default())?;
        Ok(Self::new(start, end))
    }
}

impl Transform for Segment {
    fn translate(&self, offset: &Vector2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    fn rotate(&self, radians: f64, center: &Point2) -> Self {
        Self::new(
            self.start.rotate(radians, center),
            self.end.rotate(radians, center),
        )
    }

    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        Self::new(
            self.start.scale(x_rate, y_rate, center),
            self.end.scale(x_rate, y_rate, center),
        )
    }

    fn reflect(&self, axis: &Axis) -> Self {
        Self::new(self.start.reflect(axis), self.end.reflect(axis))
    }
}

impl TextCodec for Segment {
    fn encode(&self) -> String {
        format!("({}, {})", encode_point(&self.start), encode_point(&self.end))
    }

    fn decode(text: &str) -> Result<Self> {
        Self::from_tokens(&number_tokens(text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn polar_construction() {
        let s = Segment::from_polar(Point2::new(1.0, 1.0), 2.0, FRAC_PI_2);
        assert_abs_diff_eq!(s.end, Point2::new(1.0, 3.0), epsilon = 1e-12);
        assert_abs_diff_eq!(s.length(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn slope_and_axis_lookups() {
        let s = seg(0.0, 0.0, 2.0, 4.0);
        assert_eq!(s.slope(), Some(2.0));
        assert_eq!(s.y_at_x(1.0), Some(2.0));
        assert_eq!(s.x_at_y(1.0), Some(0.5));

        let vertical = seg(1.0, 0.0, 1.0, 3.0);
        assert!(vertical.slope().is_none());
        assert!(vertical.y_at_x(1.0).is_none());
        assert!(seg(0.0, 2.0, 5.0, 2.0).x_at_y(2.0).is_none());
    }

    #[test]
    fn param_and_point_are_inverse() {
        let s = seg(1.0, 1.0, 3.0, 5.0);
        let p = s.point_at(0.25);
        assert_abs_diff_eq!(p, Point2::new(1.5, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(s.param_by_point(&p).unwrap(), 0.25, epsilon = 1e-12);
        assert!(seg(1.0, 1.0, 1.0, 1.0).param_by_point(&p).is_none());
    }

    #[test]
    fn distances() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_abs_diff_eq!(s.distance_to(&Point2::new(6.0, 0.0)), 2.0);
        assert_abs_diff_eq!(s.line_distance_to(&Point2::new(6.0, 3.0)), 3.0);
        assert_abs_diff_eq!(s.projection(&Point2::new(6.0, 3.0)), Point2::new(6.0, 0.0));
    }

    #[test]
    fn point_relations() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.relation_with_pt(&Point2::new(2.0, 1.0), Extent::Bounded), Relation::Left);
        assert_eq!(s.relation_with_pt(&Point2::new(2.0, -1.0), Extent::Bounded), Relation::Right);
        assert_eq!(s.relation_with_pt(&Point2::new(2.0, 0.0), Extent::Bounded), Relation::On);
        assert_eq!(s.relation_with_pt(&Point2::new(7.0, 0.0), Extent::Bounded), Relation::Out);
        let up = seg(0.0, 0.0, 0.0, 4.0);
        let west = Point2::new(-1.0, 2.0);
        assert_eq!(up.relation_with_pt(&west, Extent::Bounded), Relation::Left);
        assert_eq!(up.reversed().relation_with_pt(&west, Extent::Bounded), Relation::Right);
        assert_eq!(s.relation_with_pt(&Point2::new(7.0, 0.0), Extent::Unbounded), Relation::On);
    }

    #[test]
    fn stretch_anchors() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.stretch(4.0, StretchAnchor::Start), seg(0.0, 0.0, 4.0, 0.0));
        assert_eq!(s.stretch(4.0, StretchAnchor::End), seg(-2.0, 0.0, 2.0, 0.0));
        assert_eq!(s.stretch(4.0, StretchAnchor::Mid), seg(-1.0, 0.0, 3.0, 0.0));
        let point = seg(1.0, 1.0, 1.0, 1.0);
        assert_eq!(point.stretch(4.0, StretchAnchor::Mid), point);
    }

    #[test]
    fn degenerate_self_intersection_is_the_point() {
        let s = seg(2.0, 3.0, 2.0, 3.0);
        assert_eq!(s.intersect(&s).points(), &[Point2::new(2.0, 3.0)]);
    }

    #[test]
    fn crossing_segments() {
        let hit = seg(0.0, 0.0, 2.0, 2.0).intersect(&seg(0.0, 2.0, 2.0, 0.0));
        assert_abs_diff_eq!(hit.points()[0], Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn transforms_move_both_endpoints() {
        let s = seg(1.0, 0.0, 2.0, 0.0);
        let r = s.rotate_about_origin(FRAC_PI_2);
        assert_abs_diff_eq!(r.start, Point2::new(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(r.end, Point2::new(0.0, 2.0), epsilon = 1e-12);
        assert_eq!(s.reflect(&Axis::Y), seg(-1.0, 0.0, -2.0, 0.0));
        assert_eq!(s.scale(2.0, 1.0, &Point2::new(1.0, 0.0)), seg(1.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn text_form() {
        let s = seg(1.0, -2.5, 3.0, 4.0);
        assert_eq!(s.encode(), "((1, -2.5), (3, 4))");
        assert_eq!(Segment::decode(&s.encode()).unwrap(), s);
        assert!(Segment::decode("((1, 2), (3))").is_err());
    }
}
