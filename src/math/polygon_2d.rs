//! Polygon algorithms over point slices.
//!
//! A polygon is an ordered vertex list with an implicit closing edge from the
//! last vertex back to the first. Signed areas are positive for
//! counter-clockwise winding.

use std::cmp::Ordering;

use super::distance_2d::point_to_segment_dist;
use super::{Point2, Tolerance};
use crate::geometry::relation::Relation;

/// Twice the signed area of triangle `p1 p2 p3`; positive when `p3` lies
/// left of the directed line `p1 -> p2`.
#[must_use]
pub fn area2(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let u = p2 - p1;
    let v = p3 - p1;
    u.x * v.y - u.y * v.x
}

/// Shoelace signed area. Fewer than three vertices have zero area.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

fn coincident(a: &Point2, b: &Point2, tol: Tolerance) -> bool {
    tol.equal(a.x, b.x) && tol.equal(a.y, b.y)
}

/// Classifies `p` against a simple polygon as `On`, `In` or `Out`.
///
/// Crossing-number test along a horizontal ray to the left of `p`. An edge
/// whose lower endpoint sits on the ray's line is not counted, so a vertex
/// on the line is crossed at most once. The result does not depend on the
/// winding direction.
#[must_use]
pub fn relation_with_pt(points: &[Point2], p: &Point2) -> Relation {
    let tol = Tolerance::default();
    let Some(first) = points.first() else {
        return Relation::Out;
    };
    if points.iter().any(|v| coincident(v, p, tol)) {
        return Relation::On;
    }

    let side = |y: f64| tol.compare(y, p.y);
    let mut left_crossings = 0usize;
    let mut last = first;
    let mut last_side = side(last.y);
    for cur in points.iter().skip(1).chain(std::iter::once(first)) {
        let cur_side = side(cur.y);
        if cur_side == last_side {
            if cur_side.is_eq() {
                // Horizontal edge on the ray's line.
                let (lo, hi) = (cur.x.min(last.x), cur.x.max(last.x));
                if tol.between(lo, hi, p.x) {
                    return Relation::On;
                }
            }
        } else {
            let lower_on_line =
                (last_side.is_eq() && last.y < cur.y) || (cur_side.is_eq() && cur.y < last.y);
            if !lower_on_line {
                let x = last.x + (cur.x - last.x) * (p.y - last.y) / (cur.y - last.y);
                match tol.compare(x, p.x) {
                    Ordering::Less => left_crossings += 1,
                    Ordering::Equal => return Relation::On,
                    Ordering::Greater => {}
                }
            }
        }
        last = cur;
        last_side = cur_side;
    }

    if left_crossings % 2 == 1 {
        Relation::In
    } else {
        Relation::Out
    }
}

/// Graham-scan convex hull.
///
/// The hull starts at the lowest (then leftmost) input point, runs
/// counter-clockwise and repeats the start point at the end. Consecutive
/// duplicates are dropped except at that closure. Zero or one input points
/// are returned as-is; a collinear input folds back on itself.
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    if points.len() <= 1 {
        return points.to_vec();
    }
    let tol = Tolerance::default();

    let mut pivot_index = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let pivot = &points[pivot_index];
        if (p.y, p.x) < (pivot.y, pivot.x) {
            pivot_index = i;
        }
    }
    let pivot = points[pivot_index];
    tracing::trace!(?pivot, count = points.len(), "convex hull pivot");

    let mut by_angle: Vec<(Point2, f64, f64)> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_index)
        .map(|(_, p)| {
            let offset = p - pivot;
            let angle = if coincident(p, &pivot, tol) {
                0.0
            } else {
                offset.y.atan2(offset.x).rem_euclid(std::f64::consts::TAU)
            };
            (*p, angle, offset.norm())
        })
        .collect();
    by_angle.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)));
    by_angle.push((pivot, 0.0, 0.0));

    let mut hull = vec![pivot, by_angle[0].0];
    let mut i = 1;
    while i < by_angle.len() {
        let candidate = by_angle[i].0;
        let n = hull.len();
        let turn = area2(&hull[n - 2], &hull[n - 1], &candidate) * 0.5;
        if tol.greater_or_equal(turn, 0.0) || n <= 2 {
            if !coincident(&candidate, &hull[n - 1], tol) {
                hull.push(candidate);
            }
            i += 1;
        } else {
            hull.pop();
        }
    }
    hull
}

/// Douglas–Peucker simplification with an explicit range stack.
///
/// A range whose farthest interior point is closer than `tol` to the chord
/// collapses to the chord; otherwise it splits at that point. The first and
/// last points always survive.
#[must_use]
pub fn simplify_dp(points: &[Point2], tol: f64) -> Vec<Point2> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut result = vec![*first];
    if points.len() < 2 {
        return result;
    }

    // Half-open index ranges still to be simplified.
    let mut ranges = vec![(0, points.len())];
    while let Some((start, end)) = ranges.pop() {
        let chord_start = &points[start];
        let chord_end = &points[end - 1];
        let mut max_dist = -1.0;
        let mut split = start;
        for (i, p) in points.iter().enumerate().take(end - 1).skip(start + 1) {
            let dist = point_to_segment_dist(p, chord_start, chord_end);
            if dist > max_dist {
                max_dist = dist;
                split = i;
            }
        }
        if split != start && max_dist >= tol {
            tracing::trace!(start, end, split, max_dist, "split simplification range");
            ranges.push((split, end));
            ranges.push((start, split + 1));
        } else {
            result.push(*chord_end);
        }
    }
    result
}

/// Drops every point within `tol` of the previously kept one. The first
/// point is always kept.
#[must_use]
pub fn remove_adjacent(points: &[Point2], tol: f64) -> Vec<Point2> {
    let tolerance = Tolerance::default();
    let mut result: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        match result.last() {
            Some(last) if tolerance.less_or_equal((p - last).norm(), tol) => {}
            _ => result.push(*p),
        }
    }
    result
}

/// Whether two closed polygons (last vertex repeating the first) have the
/// same vertices in the same cyclic order. Reversed order is not the same.
#[must_use]
pub fn is_same(a: &[Point2], b: &[Point2]) -> bool {
    let tol = Tolerance::default();
    if a.len() != b.len() {
        return false;
    }
    match a.len() {
        0 => return true,
        1 => return coincident(&a[0], &b[0], tol),
        _ => {}
    }

    // The closing vertex repeats the first, so compare the open cycle.
    let cycle = a.len() - 1;
    (0..cycle).any(|offset| {
        (0..cycle).all(|k| coincident(&a[(offset + k) % cycle], &b[k], tol))
    })
}
