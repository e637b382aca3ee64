use std::cmp::Ordering;

use super::distance_2d::{point_to_line_dist, point_to_segment_dist};
use super::polygon_2d::area2;
use super::{Point2, Tolerance};

/// Whether a segment is treated as the finite span between its endpoints or
/// as the infinite line through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extent {
    #[default]
    Bounded,
    Unbounded,
}

/// Result of a curve/curve intersection query.
///
/// "No intersection" is a first-class value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// No common point.
    Empty,
    /// Isolated crossing points.
    Points(Vec<Point2>),
    /// A shared collinear stretch, given by its endpoints.
    Overlap(Point2, Point2),
}

impl Intersection {
    fn point(p: Point2) -> Self {
        Self::Points(vec![p])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Points(points) => points.is_empty(),
            Self::Overlap(..) => false,
        }
    }

    /// Crossing points; empty for `Empty` and `Overlap`.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Points(points) => points,
            Self::Empty | Self::Overlap(..) => &[],
        }
    }

    /// Endpoints of the shared stretch, if any.
    #[must_use]
    pub fn overlap(&self) -> Option<(Point2, Point2)> {
        match self {
            Self::Overlap(start, end) => Some((*start, *end)),
            Self::Empty | Self::Points(_) => None,
        }
    }
}

fn contains(span: &[Point2; 2], extent: Extent, p: &Point2, tol: Tolerance) -> bool {
    let dist = match extent {
        Extent::Bounded => point_to_segment_dist(p, &span[0], &span[1]),
        Extent::Unbounded => point_to_line_dist(p, &span[0], &span[1]),
    };
    tol.is_zero(dist)
}

/// Intersects two segments, either of which may be extended to a line.
///
/// Handles point/point, point/line and line/line configurations. The
/// signed-area tests for each segment's endpoints are compared against a
/// tolerance scaled by the opposite segment's length, so the predicate
/// behaves the same for segments of very different sizes. Two bounded
/// segments are first rejected by their bounding boxes.
///
/// Coincident unbounded lines overlap along `a`; a bounded segment lying on
/// an unbounded line overlaps along that segment.
#[must_use]
pub fn segment_segment(
    a: &[Point2; 2],
    a_extent: Extent,
    b: &[Point2; 2],
    b_extent: Extent,
    tol: Tolerance,
) -> Intersection {
    let len_a = (a[1] - a[0]).norm();
    let len_b = (b[1] - b[0]).norm();

    if tol.less_or_equal(len_a, 0.0) {
        tracing::trace!(?a, "first segment is degenerate");
        let hit = if tol.less_or_equal(len_b, 0.0) {
            tol.is_zero((a[0] - b[0]).norm())
        } else {
            contains(b, b_extent, &a[0], tol)
        };
        return if hit {
            Intersection::point(a[0])
        } else {
            Intersection::Empty
        };
    }
    if tol.less_or_equal(len_b, 0.0) {
        tracing::trace!(?b, "second segment is degenerate");
        return if contains(a, a_extent, &b[0], tol) {
            Intersection::point(b[0])
        } else {
            Intersection::Empty
        };
    }

    // Doubled signed areas of each endpoint against the other segment.
    let area_a = area2(&b[0], &b[1], &a[0]);
    let area_b = area2(&b[0], &b[1], &a[1]);
    let area_c = area2(&a[0], &a[1], &b[0]);
    let area_d = area2(&a[0], &a[1], &b[1]);
    let tol_ab = tol.scaled(len_b);
    let tol_cd = tol.scaled(len_a);
    let crossing = || {
        let ratio = area_a / (area_a - area_b);
        Intersection::point(a[0] + (a[1] - a[0]) * ratio)
    };

    match (a_extent, b_extent) {
        (Extent::Unbounded, Extent::Unbounded) => {
            if !tol_ab.equal(area_a, area_b) {
                crossing()
            } else if tol_ab.is_zero(area_a) {
                Intersection::Overlap(a[0], a[1])
            } else {
                Intersection::Empty
            }
        }
        (Extent::Unbounded, Extent::Bounded) => {
            line_through_span(area_c, area_d, tol_cd, b).unwrap_or_else(crossing)
        }
        (Extent::Bounded, Extent::Unbounded) => {
            line_through_span(area_a, area_b, tol_ab, a).unwrap_or_else(crossing)
        }
        (Extent::Bounded, Extent::Bounded) => {
            if boxes_disjoint(a, b, tol) {
                return Intersection::Empty;
            }
            let sign_a = tol_ab.compare(area_a, 0.0);
            let sign_b = tol_ab.compare(area_b, 0.0);
            let sign_c = tol_cd.compare(area_c, 0.0);
            let sign_d = tol_cd.compare(area_d, 0.0);
            if same_side(sign_a, sign_b) || same_side(sign_c, sign_d) {
                return Intersection::Empty;
            }
            if sign_a.is_eq() && sign_b.is_eq() {
                return collinear_overlap(a, b, tol);
            }
            crossing()
        }
    }
}

/// Resolves an unbounded line against a bounded span from the span's
/// endpoint areas. `None` means the line crosses the span's interior.
fn line_through_span(
    start_area: f64,
    end_area: f64,
    tol: Tolerance,
    span: &[Point2; 2],
) -> Option<Intersection> {
    let start_on = tol.is_zero(start_area);
    let end_on = tol.is_zero(end_area);
    match (start_on, end_on) {
        (true, true) => Some(Intersection::Overlap(span[0], span[1])),
        (true, false) => Some(Intersection::point(span[0])),
        (false, true) => Some(Intersection::point(span[1])),
        (false, false) if (start_area < 0.0) == (end_area < 0.0) => Some(Intersection::Empty),
        (false, false) => None,
    }
}

fn same_side(s1: Ordering, s2: Ordering) -> bool {
    s1 == s2 && s1.is_ne()
}

fn boxes_disjoint(a: &[Point2; 2], b: &[Point2; 2], tol: Tolerance) -> bool {
    let (a_min_x, a_max_x) = (a[0].x.min(a[1].x), a[0].x.max(a[1].x));
    let (a_min_y, a_max_y) = (a[0].y.min(a[1].y), a[0].y.max(a[1].y));
    let (b_min_x, b_max_x) = (b[0].x.min(b[1].x), b[0].x.max(b[1].x));
    let (b_min_y, b_max_y) = (b[0].y.min(b[1].y), b[0].y.max(b[1].y));
    tol.greater(a_min_x, b_max_x)
        || tol.less(a_max_x, b_min_x)
        || tol.greater(a_min_y, b_max_y)
        || tol.less(a_max_y, b_min_y)
}

/// Shared stretch of two collinear bounded segments, compared along y for a
/// vertical `a` and along x otherwise.
fn collinear_overlap(a: &[Point2; 2], b: &[Point2; 2], tol: Tolerance) -> Intersection {
    let key: fn(&Point2) -> f64 = if tol.equal(a[0].x, a[1].x) {
        |p: &Point2| p.y
    } else {
        |p: &Point2| p.x
    };
    let ordered = |s: &[Point2; 2]| {
        if key(&s[0]) > key(&s[1]) {
            (s[1], s[0])
        } else {
            (s[0], s[1])
        }
    };
    let (a_lo, a_hi) = ordered(a);
    let (b_lo, b_hi) = ordered(b);
    let lo = if key(&a_lo) >= key(&b_lo) { a_lo } else { b_lo };
    let hi = if key(&a_hi) <= key(&b_hi) { a_hi } else { b_hi };
    match tol.compare(key(&lo), key(&hi)) {
        Ordering::Greater => Intersection::Empty,
        Ordering::Equal => {
            tracing::trace!(?lo, "collinear segments touch at one point");
            Intersection::point(lo)
        }
        Ordering::Less => Intersection::Overlap(lo, hi),
    }
}
