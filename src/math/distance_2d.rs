use super::{Point2, Tolerance};

/// Foot of the perpendicular from `p` onto the infinite line through `a`
/// and `b`. A degenerate line (`a == b`) projects everything onto `a`.
#[must_use]
pub fn project_to_line(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if Tolerance::default().is_zero(len_sq.sqrt()) {
        return *a;
    }
    let t = (p - a).dot(&d) / len_sq;
    a + d * t
}

/// Distance from `p` to the infinite line through `a` and `b`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - project_to_line(p, a, b)).norm()
}

/// Distance from `p` to the closed segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if Tolerance::default().is_zero(len_sq.sqrt()) {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}
