use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{Extent, Intersection};
use crate::math::polygon_2d::area2;
use crate::math::roots::{solve_cubic, solve_quadratic};
use crate::math::text::number_tokens;
use crate::math::{Point2, Tolerance, Vector2};

use crate::geometry::aabb::Aabb;
use crate::geometry::codec::{encode_point, point_from_tokens, TextCodec};
use crate::geometry::point::PointExt;
use crate::geometry::polyline::Polyline;
use crate::geometry::transform::{Axis, Transform};
use crate::geometry::vector::VectorExt;

use super::Segment;

/// A cubic Bezier curve over `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier {
    /// Control points `p0..p3`; the curve runs from `p0` to `p3`.
    pub points: [Point2; 4],
}

/// Power-basis coefficients `(a, b, c, d)` of one coordinate, so that the
/// coordinate at `t` is `a*t^3 + b*t^2 + c*t + d`.
fn cubic_coefficients(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64, f64, f64) {
    (
        p3 - 3.0 * (p2 - p1) - p0,
        3.0 * (p2 - 2.0 * p1 + p0),
        3.0 * (p1 - p0),
        p0,
    )
}

impl Bezier {
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// A straight cubic tracing `segment`, with the inner control points at
    /// its thirds.
    #[must_use]
    pub fn from_segment(segment: &Segment) -> Self {
        let third = segment.vector() / 3.0;
        Self::new(
            segment.start,
            segment.start + third,
            segment.end - third,
            segment.end,
        )
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[3]
    }

    /// Whether all four control points are collinear.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let tol = Tolerance::default();
        let [p0, p1, p2, p3] = &self.points;
        tol.is_zero(area2(p0, p1, p2)) && tol.is_zero(area2(p1, p2, p3))
    }

    /// Bernstein evaluation. `t = 0` and `t = 1` return the end control
    /// points exactly.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let s = 1.0 - t;
        let [p0, p1, p2, p3] = &self.points;
        let w0 = s * s * s;
        let w1 = 3.0 * t * s * s;
        let w2 = 3.0 * t * t * s;
        let w3 = t * t * t;
        Point2::new(
            p0.x * w0 + p1.x * w1 + p2.x * w2 + p3.x * w3,
            p0.y * w0 + p1.y * w1 + p2.y * w2 + p3.y * w3,
        )
    }

    /// First derivative at `t`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let s = 1.0 - t;
        let [p0, p1, p2, p3] = &self.points;
        ((p1 - p0) * (s * s) + (p2 - p1) * (2.0 * s * t) + (p3 - p2) * (t * t)) * 3.0
    }

    /// Parameter of `p`, if it lies on the curve.
    ///
    /// Solves the x-coordinate cubic and checks y at each root; a curve with
    /// constant x is resolved through the y-coordinate cubic instead.
    #[must_use]
    pub fn param_of(&self, p: &Point2) -> Option<f64> {
        let tol = Tolerance::default();
        let [p0, p1, p2, p3] = &self.points;
        let by_x = cubic_coefficients(p0.x, p1.x, p2.x, p3.x);
        let by_y = cubic_coefficients(p0.y, p1.y, p2.y, p3.y);
        [(by_x, p.x), (by_y, p.y)]
            .into_iter()
            .flat_map(|((a, b, c, d), target)| solve_cubic(a, b, c, d - target))
            .filter(|&t| tol.between(0.0, 1.0, t))
            .map(|t| t.clamp(0.0, 1.0))
            .find(|&t| self.point_at(t).approx_eq(p))
    }

    /// Samples with a parameter step in `(0, 1]`. The last interval may be
    /// shorter; both endpoints are always included.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `step` is outside `(0, 1]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_by_step(&self, step: f64) -> Result<Polyline> {
        if !(step > 0.0 && step <= 1.0) {
            return Err(GeometryError::invalid(format!(
                "sample step must be in (0, 1], got {step}"
            )));
        }
        let intervals = (1.0 / step).ceil() as usize;
        Ok(self.sample_intervals(intervals.max(1)))
    }

    /// Samples `count` points at evenly spaced parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count < 2`.
    pub fn sample_by_count(&self, count: usize) -> Result<Polyline> {
        if count < 2 {
            return Err(GeometryError::invalid(format!(
                "sample count must be at least 2, got {count}"
            )));
        }
        Ok(self.sample_intervals(count - 1))
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample_intervals(&self, intervals: usize) -> Polyline {
        let mut points = Vec::with_capacity(intervals + 1);
        points.push(self.start());
        for i in 1..intervals {
            points.push(self.point_at(i as f64 / intervals as f64));
        }
        points.push(self.end());
        Polyline::new(points)
    }

    /// Length of the polyline sampled at `step`.
    ///
    /// # Errors
    ///
    /// Same as [`Bezier::sample_by_step`].
    pub fn length(&self, step: f64) -> Result<f64> {
        Ok(self.sample_by_step(step)?.length())
    }

    /// Tight bounding box from the end points and the per-axis extrema.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let tol = Tolerance::default();
        let [p0, p1, p2, p3] = &self.points;
        let derivative = |q0: f64, q1: f64, q2: f64, q3: f64| {
            solve_quadratic(
                -q0 + 3.0 * q1 - 3.0 * q2 + q3,
                2.0 * (q0 - 2.0 * q1 + q2),
                q1 - q0,
            )
        };
        let extrema = derivative(p0.x, p1.x, p2.x, p3.x)
            .into_iter()
            .chain(derivative(p0.y, p1.y, p2.y, p3.y))
            .filter(|&t| tol.between(0.0, 1.0, t))
            .map(|t| self.point_at(t.clamp(0.0, 1.0)));
        let mut candidates = vec![*p0, *p3];
        candidates.extend(extrema);
        Aabb::from_points(&candidates)
    }

    /// The chord a straight curve actually covers: its bounding box
    /// diagonal, picked by the sign of the overall direction.
    fn straight_extent(&self) -> Segment {
        let bounds = self.aabb();
        let start = self.start();
        let far = self
            .points
            .iter()
            .max_by(|a, b| start.distance_to(a).total_cmp(&start.distance_to(b)))
            .copied()
            .unwrap_or(start);
        let dir = far - start;
        if dir.x * dir.y >= 0.0 {
            Segment::new(
                Point2::new(bounds.left, bounds.bottom),
                Point2::new(bounds.right, bounds.top),
            )
        } else {
            Segment::new(
                Point2::new(bounds.left, bounds.top),
                Point2::new(bounds.right, bounds.bottom),
            )
        }
    }

    /// Intersects with a segment, or with its supporting line for
    /// `Extent::Unbounded`.
    ///
    /// The segment is rotated and translated onto the x-axis, turning the
    /// problem into a cubic in `t`. A straight curve is treated as the
    /// segment it covers; a degenerate segment as a point.
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment, extent: Extent) -> Intersection {
        let tol = Tolerance::default();
        if segment.is_degenerate() {
            tracing::trace!(?segment, "degenerate segment against bezier");
            return match self.param_of(&segment.start) {
                Some(_) => Intersection::Points(vec![segment.start]),
                None => Intersection::Empty,
            };
        }
        if self.is_straight() {
            let chord = self.straight_extent();
            tracing::debug!(?chord, "straight bezier intersected as a segment");
            return chord.intersect_with(segment, Extent::Bounded, extent, tol);
        }

        let angle = segment.vector().polar_angle();
        let local = self.rotate_about_origin(-angle);
        let base = segment.start.rotate_about_origin(-angle).y;
        let [q0, q1, q2, q3] = local.points.map(|p| p.y - base);
        let (a, b, c, d) = cubic_coefficients(q0, q1, q2, q3);

        let mut hits: Vec<Point2> = Vec::new();
        for t in solve_cubic(a, b, c, d) {
            if !tol.between(0.0, 1.0, t) {
                continue;
            }
            let hit = self.point_at(t.clamp(0.0, 1.0));
            let covered = match extent {
                Extent::Unbounded => true,
                Extent::Bounded => segment
                    .param_by_point(&hit)
                    .is_some_and(|s| tol.between(0.0, 1.0, s)),
            };
            if covered && !hits.iter().any(|h| h.approx_eq(&hit)) {
                hits.push(hit);
            }
        }
        if hits.is_empty() {
            Intersection::Empty
        } else {
            Intersection::Points(hits)
        }
    }

    /// The same curve traversed from `p3` to `p0`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }

    pub(crate) fn from_tokens(tokens: &[&str]) -> Result<Self> {
        let mut points = [Point2::origin(); 4];
        for (i, point) in points.iter_mut().enumerate() {
            *point = point_from_tokens(tokens.get(i * 2..).unwrap_or_default())?;
        }
        Ok(Self { points })
    }
}

impl Transform for Bezier {
    fn translate(&self, offset: &Vector2) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }

    fn rotate(&self, radians: f64, center: &Point2) -> Self {
        Self {
            points: self.points.map(|p| p.rotate(radians, center)),
        }
    }

    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        Self {
            points: self.points.map(|p| p.scale(x_rate, y_rate, center)),
        }
    }

    fn reflect(&self, axis: &Axis) -> Self {
        Self {
            points: self.points.map(|p| p.reflect(axis)),
        }
    }
}

impl TextCodec for Bezier {
    fn encode(&self) -> String {
        let [p0, p1, p2, p3] = &self.points;
        format!(
            "({}, {}, {}, {})",
            encode_point(p0),
            encode_point(p1),
            encode_point(p2),
            encode_point(p3)
        )
    }

    fn decode(text: &str) -> Result<Self> {
        Self::from_tokens(&number_tokens(text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    /// Symmetric arch from (0, 0) to (4, 0) peaking at y = 3.
    fn arch() -> Bezier {
        Bezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let b = Bezier::new(
            Point2::new(0.1, 0.7),
            Point2::new(3.3, -1.9),
            Point2::new(-2.2, 5.5),
            Point2::new(9.9, 0.3),
        );
        assert_eq!(b.point_at(0.0), b.points[0]);
        assert_eq!(b.point_at(1.0), b.points[3]);
    }

    #[test]
    fn midpoint_and_tangent() {
        let b = arch();
        assert_abs_diff_eq!(b.point_at(0.5), Point2::new(2.0, 3.0), epsilon = 1e-12);
        assert_abs_diff_eq!(b.tangent_at(0.5), Vector2::new(6.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(b.tangent_at(0.0), Vector2::new(0.0, 12.0), epsilon = 1e-12);
    }

    #[test]
    fn straightness() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0));
        let b = Bezier::from_segment(&s);
        assert!(b.is_straight());
        assert_abs_diff_eq!(b.points[1], Point2::new(1.0, 1.0), epsilon = 1e-12);
        assert!(!arch().is_straight());
    }

    #[test]
    fn bounding_box_uses_extrema() {
        assert!(arch().aabb().approx_eq(&Aabb::new(0.0, 4.0, 0.0, 3.0)));
    }

    #[test]
    fn param_lookup() {
        let b = arch();
        let p = b.point_at(0.3);
        assert_relative_eq!(b.param_of(&p).unwrap(), 0.3, epsilon = 1e-9);
        assert!(b.param_of(&Point2::new(2.0, 10.0)).is_none());

        let vertical = Bezier::from_segment(&Segment::new(
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 3.0),
        ));
        assert_relative_eq!(
            vertical.param_of(&Point2::new(1.0, 1.5)).unwrap(),
            0.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn sampling() {
        let b = arch();
        let by_step = b.sample_by_step(0.3).unwrap();
        assert_eq!(by_step.points.len(), 5);
        assert_eq!(by_step.points[4], b.end());
        let by_count = b.sample_by_count(3).unwrap();
        assert_abs_diff_eq!(by_count.points[1], Point2::new(2.0, 3.0), epsilon = 1e-12);
        assert!(b.sample_by_step(0.0).is_err());
        assert!(b.sample_by_count(1).is_err());
    }

    #[test]
    fn sampled_length_of_straight_curve() {
        let b = Bezier::from_segment(&Segment::new(Point2::origin(), Point2::new(3.0, 4.0)));
        assert_relative_eq!(b.length(0.1).unwrap(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn crossing_a_horizontal_segment() {
        let seg = Segment::new(Point2::new(-1.0, 1.5), Point2::new(5.0, 1.5));
        let hits = arch().intersect_segment(&seg, Extent::Bounded);
        assert_eq!(hits.points().len(), 2);
        for hit in hits.points() {
            assert_abs_diff_eq!(hit.y, 1.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn bounded_segment_filters_hits() {
        let seg = Segment::new(Point2::new(-1.0, 1.5), Point2::new(2.0, 1.5));
        let hits = arch().intersect_segment(&seg, Extent::Bounded);
        assert_eq!(hits.points().len(), 1);
        let line_hits = arch().intersect_segment(&seg, Extent::Unbounded);
        assert_eq!(line_hits.points().len(), 2);
    }

    #[test]
    fn tangent_line_touches_once() {
        let seg = Segment::new(Point2::new(0.0, 3.0), Point2::new(4.0, 3.0));
        let hits = arch().intersect_segment(&seg, Extent::Bounded);
        assert_eq!(hits.points().len(), 1);
        assert_abs_diff_eq!(hits.points()[0], Point2::new(2.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn straight_curve_falls_back_to_segment_test() {
        let b = Bezier::from_segment(&Segment::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0)));
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
        let hits = b.intersect_segment(&seg, Extent::Bounded);
        assert_abs_diff_eq!(hits.points()[0], Point2::new(2.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn degenerate_segment_acts_as_a_point() {
        let on = Segment::new(Point2::new(2.0, 3.0), Point2::new(2.0, 3.0));
        assert_eq!(arch().intersect_segment(&on, Extent::Bounded).points().len(), 1);
        let off = Segment::new(Point2::new(9.0, 9.0), Point2::new(9.0, 9.0));
        assert!(arch().intersect_segment(&off, Extent::Bounded).is_empty());
    }

    #[test]
    fn crossing_a_vertical_segment_either_way() {
        let up = Segment::new(Point2::new(2.0, -1.0), Point2::new(2.0, 5.0));
        for seg in [up, up.reversed()] {
            let hits = arch().intersect_segment(&seg, Extent::Bounded);
            assert_eq!(hits.points().len(), 1);
            assert_abs_diff_eq!(hits.points()[0], Point2::new(2.0, 3.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn reversal_and_text() {
        let b = arch();
        assert_eq!(b.reversed().start(), b.end());
        assert_eq!(b.encode(), "((0, 0), (0, 4), (4, 4), (4, 0))");
        assert_eq!(Bezier::decode(&b.encode()).unwrap(), b);
        assert!(Bezier::decode("((0, 0), (0, 4), (4, 4))").is_err());
    }
}
