use crate::error::Result;
use crate::math::text::parse_numbers;
use crate::math::{Point2, Tolerance, Vector2};

use super::codec::TextCodec;
use super::point::round_to;
use super::relation::Relation;

/// Axis-aligned bounding box.
///
/// A box is in standard form when `left <= right` and `bottom <= top`
/// (within tolerance). Anything else is represented by [`Aabb::EMPTY`];
/// every constructor and combinator normalizes to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// The canonical empty box.
    pub const EMPTY: Self = Self {
        left: f64::MAX,
        right: -f64::MAX,
        bottom: f64::MAX,
        top: -f64::MAX,
    };

    /// Creates a box, collapsing inverted bounds to [`Aabb::EMPTY`].
    #[must_use]
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
        .standardized()
    }

    /// Smallest box enclosing `points`; empty for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.expand_by_point(p))
    }

    fn standardized(self) -> Self {
        if self.is_empty() {
            Self::EMPTY
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let tol = Tolerance::default();
        tol.greater(self.left, self.right) || tol.greater(self.bottom, self.top)
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.right - self.left)
        }
    }

    #[must_use]
    pub fn height(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.top - self.bottom)
        }
    }

    #[must_use]
    pub fn area(&self) -> Option<f64> {
        Some(self.width()? * self.height()?)
    }

    #[must_use]
    pub fn perimeter(&self) -> Option<f64> {
        Some((self.width()? + self.height()?) * 2.0)
    }

    #[must_use]
    pub fn center(&self) -> Option<Point2> {
        if self.is_empty() {
            return None;
        }
        Some(Point2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        ))
    }

    /// All four bounds equal within the default tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    #[must_use]
    pub fn approx_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equal(self.left, other.left)
            && tol.equal(self.right, other.right)
            && tol.equal(self.bottom, other.bottom)
            && tol.equal(self.top, other.top)
    }

    /// Whether `p` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let tol = Tolerance::default();
        tol.between(self.left, self.right, p.x) && tol.between(self.bottom, self.top, p.y)
    }

    /// Classifies `other` relative to `self`.
    ///
    /// Returns `Contain` when `other` encloses `self`, `Contained` when
    /// `self` encloses `other`, `Overlap` for equal boxes, and `Intersect` or
    /// `Disjoint` otherwise. An empty operand is always `Disjoint`.
    #[must_use]
    pub fn relation_with_aabb(&self, other: &Self) -> Relation {
        if self.is_empty() || other.is_empty() {
            return Relation::Disjoint;
        }
        if self.approx_eq(other) {
            return Relation::Overlap;
        }
        if self.union(other).approx_eq(other) {
            return Relation::Contain;
        }
        let common = self.intersection(other);
        if common.approx_eq(other) {
            return Relation::Contained;
        }
        if common.is_empty() {
            return Relation::Disjoint;
        }
        Relation::Intersect
    }

    /// Common region, or [`Aabb::EMPTY`].
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(
            self.left.max(other.left),
            self.right.min(other.right),
            self.bottom.max(other.bottom),
            self.top.min(other.top),
        )
    }

    /// Smallest box enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.left.min(other.left),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
            self.top.max(other.top),
        )
    }

    #[must_use]
    pub fn expand_by_point(&self, p: &Point2) -> Self {
        Self::new(
            self.left.min(p.x),
            self.right.max(p.x),
            self.bottom.min(p.y),
            self.top.max(p.y),
        )
    }

    /// Cheap overlap test used to reject disjoint pairs early.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::new(
            self.left + offset.x,
            self.right + offset.x,
            self.bottom + offset.y,
            self.top + offset.y,
        )
    }

    /// Scales about `center`. Negative rates mirror the box, so the bounds
    /// are reordered afterwards.
    #[must_use]
    pub fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let x1 = (self.left - center.x) * x_rate + center.x;
        let x2 = (self.right - center.x) * x_rate + center.x;
        let y1 = (self.bottom - center.y) * y_rate + center.y;
        let y2 = (self.top - center.y) * y_rate + center.y;
        Self::new(x1.min(x2), x1.max(x2), y1.min(y2), y1.max(y2))
    }

    /// Grows the box by `dist` on every side; a negative `dist` shrinks it
    /// and may produce the empty box.
    #[must_use]
    pub fn offset(&self, dist: f64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::new(
            self.left - dist,
            self.right + dist,
            self.bottom - dist,
            self.top + dist,
        )
    }

    #[must_use]
    pub fn rounded(&self, precision: i32) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::new(
            round_to(self.left, precision),
            round_to(self.right, precision),
            round_to(self.bottom, precision),
            round_to(self.top, precision),
        )
    }
}

impl TextCodec for Aabb {
    fn encode(&self) -> String {
        format!(
            "({}, {}, {}, {})",
            self.left, self.right, self.bottom, self.top
        )
    }

    fn decode(text: &str) -> Result<Self> {
        let [left, right, bottom, top] = parse_numbers(text)?;
        Ok(Self::new(left, right, bottom, top))
    }
}
