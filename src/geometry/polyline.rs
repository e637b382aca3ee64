use crate::error::{GeometryError, ParseError, Result};
use crate::math::polygon_2d::{
    convex_hull, is_same, relation_with_pt, remove_adjacent, signed_area, simplify_dp,
};
use crate::math::text::number_tokens;
use crate::math::{Point2, Tolerance, Vector2};

use super::aabb::Aabb;
use super::codec::{encode_point, point_from_tokens, TextCodec};
use super::curve::Segment;
use super::point::PointExt;
use super::relation::{Relation, Winding};
use super::transform::{Axis, Transform};

/// An ordered list of points.
///
/// Read as an open path by the length and distance queries, and as a
/// polygon with an implicit closing edge by the area, winding and
/// containment queries. Mutating methods work in place; the `Transform`
/// impl and the `*ed` methods return modified copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point2>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn from_segment(segment: &Segment) -> Self {
        Self::new(vec![segment.start, segment.end])
    }

    /// Closed outline of `aabb`, starting and ending at its top-right corner.
    /// The empty box yields an empty polyline.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb, winding: Winding) -> Self {
        if aabb.is_empty() {
            return Self::default();
        }
        let top_right = Point2::new(aabb.right, aabb.top);
        let top_left = Point2::new(aabb.left, aabb.top);
        let bottom_left = Point2::new(aabb.left, aabb.bottom);
        let bottom_right = Point2::new(aabb.right, aabb.bottom);
        let points = match winding {
            Winding::CounterClockwise => {
                vec![top_right, top_left, bottom_left, bottom_right, top_right]
            }
            Winding::Clockwise => vec![top_right, bottom_right, bottom_left, top_left, top_right],
        };
        Self::new(points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }

    /// Total length of the open path.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Shortest distance from `p` to the open path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty polyline.
    pub fn distance_to(&self, p: &Point2) -> Result<f64> {
        match self.points.as_slice() {
            [] => Err(GeometryError::invalid("distance to an empty polyline")),
            [only] => Ok(only.distance_to(p)),
            points => Ok(points
                .windows(2)
                .map(|pair| Segment::new(pair[0], pair[1]).distance_to(p))
                .fold(f64::INFINITY, f64::min)),
        }
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    pub fn translate_in_place(&mut self, offset: &Vector2) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    pub fn rotate_in_place(&mut self, radians: f64, center: &Point2) {
        for p in &mut self.points {
            *p = p.rotate(radians, center);
        }
    }

    pub fn scale_in_place(&mut self, x_rate: f64, y_rate: f64, center: &Point2) {
        for p in &mut self.points {
            *p = p.scale(x_rate, y_rate, center);
        }
    }

    pub fn reflect_in_place(&mut self, axis: &Axis) {
        for p in &mut self.points {
            *p = p.reflect(axis);
        }
    }

    pub fn round(&mut self, precision: i32) {
        for p in &mut self.points {
            *p = p.rounded(precision);
        }
    }

    #[must_use]
    pub fn rounded(&self, precision: i32) -> Self {
        let mut copy = self.clone();
        copy.round(precision);
        copy
    }

    /// Drops points within `tol` of the previously kept point.
    pub fn remove_adjacent(&mut self, tol: f64) {
        self.points = remove_adjacent(&self.points, tol);
    }

    /// Appends the first point when the polyline has at least two points and
    /// is not already closed.
    pub fn close_head_tail(&mut self) {
        let head = match self.points.as_slice() {
            [first, .., last] if !first.approx_eq(last) => Some(*first),
            _ => None,
        };
        if let Some(head) = head {
            self.points.push(head);
        }
    }

    #[must_use]
    pub fn closed(&self) -> Self {
        let mut copy = self.clone();
        copy.close_head_tail();
        copy
    }

    /// Douglas–Peucker simplification with distance tolerance `tol`.
    pub fn simplify(&mut self, tol: f64) {
        self.points = simplify_dp(&self.points, tol);
    }

    #[must_use]
    pub fn simplified(&self, tol: f64) -> Self {
        Self::new(simplify_dp(&self.points, tol))
    }

    /// Convex hull as a closed counter-clockwise polyline.
    #[must_use]
    pub fn convex_hull(&self) -> Self {
        Self::new(convex_hull(&self.points))
    }

    /// Signed polygon area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding of the polygon, or `None` when its area is zero.
    #[must_use]
    pub fn winding(&self) -> Option<Winding> {
        let area = self.signed_area();
        if Tolerance::default().is_zero(area) {
            None
        } else if area > 0.0 {
            Some(Winding::CounterClockwise)
        } else {
            Some(Winding::Clockwise)
        }
    }

    /// Reverses the point order if the polygon winds the other way. A
    /// zero-area polygon is left untouched.
    pub fn set_winding(&mut self, winding: Winding) {
        if self.winding() == Some(winding.reversed()) {
            self.reverse();
        }
    }

    #[must_use]
    pub fn with_winding(&self, winding: Winding) -> Self {
        let mut copy = self.clone();
        copy.set_winding(winding);
        copy
    }

    /// `On`, `In` or `Out` for `p` against the polygon.
    #[must_use]
    pub fn relation_with_pt(&self, p: &Point2) -> Relation {
        relation_with_pt(&self.points, p)
    }

    /// Same closed polygon up to the choice of starting vertex.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        is_same(&self.points, &other.points)
    }
}

impl From<Vec<Point2>> for Polyline {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl Transform for Polyline {
    fn translate(&self, offset: &Vector2) -> Self {
        let mut copy = self.clone();
        copy.translate_in_place(offset);
        copy
    }

    fn rotate(&self, radians: f64, center: &Point2) -> Self {
        let mut copy = self.clone();
        copy.rotate_in_place(radians, center);
        copy
    }

    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        let mut copy = self.clone();
        copy.scale_in_place(x_rate, y_rate, center);
        copy
    }

    fn reflect(&self, axis: &Axis) -> Self {
        let mut copy = self.clone();
        copy.reflect_in_place(axis);
        copy
    }
}

impl TextCodec for Polyline {
    fn encode(&self) -> String {
        let points: Vec<String> = self.points.iter().map(encode_point).collect();
        format!("({})", points.join(", "))
    }

    fn decode(text: &str) -> Result<Self> {
        let tokens = number_tokens(text);
        if tokens.len() % 2 != 0 {
            return Err(ParseError::MissingComponent {
                expected: tokens.len() + 1,
                found: tokens.len(),
            }
            .into());
        }
        let points = tokens
            .chunks_exact(2)
            .map(point_from_tokens)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(points))
    }
}
