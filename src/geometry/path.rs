use crate::error::{GeometryError, Result};
use crate::math::text::number_tokens;
use crate::math::{Point2, Vector2};

use super::aabb::Aabb;
use super::codec::TextCodec;
use super::curve::{Bezier, Ellipse, SegPath, Segment};
use super::point::PointExt;
use super::polyline::Polyline;
use super::relation::Winding;
use super::transform::{Axis, Transform};

/// Control-point ratio for approximating a quarter ellipse with one cubic.
const QUARTER_ARC_KAPPA: f64 = 0.551_915_024_494;

/// Piece type produced by the straight-line path factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentKind {
    #[default]
    Segment,
    Bezier,
}

impl SegmentKind {
    fn piece(self, start: Point2, end: Point2) -> SegPath {
        let segment = Segment::new(start, end);
        match self {
            Self::Segment => SegPath::Segment(segment),
            Self::Bezier => SegPath::Bezier(Bezier::from_segment(&segment)),
        }
    }
}

/// A chain of [`SegPath`] pieces where each piece starts where the previous
/// one ends.
///
/// A path parameter `t` addresses piece `floor(t)` at local parameter
/// `t - floor(t)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<SegPath>,
}

impl Path {
    /// Creates a path after checking that consecutive pieces chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a piece does not start at the previous
    /// end, or `Unimplemented` if an arc piece has to be checked.
    pub fn new(segments: Vec<SegPath>) -> Result<Self> {
        for (i, pair) in segments.windows(2).enumerate() {
            let end = pair[0].end()?;
            let start = pair[1].start()?;
            if !end.approx_eq(&start) {
                return Err(GeometryError::invalid(format!(
                    "path piece {} starts at ({}, {}) but piece {i} ends at ({}, {})",
                    i + 1,
                    start.x,
                    start.y,
                    end.x,
                    end.y
                )));
            }
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn from_segment(segment: &Segment, kind: SegmentKind) -> Self {
        Self {
            segments: vec![kind.piece(segment.start, segment.end)],
        }
    }

    /// One piece per polyline edge. A single point becomes one degenerate
    /// piece; no points give an empty path.
    #[must_use]
    pub fn from_polyline(polyline: &Polyline, kind: SegmentKind) -> Self {
        let segments = match polyline.points.as_slice() {
            [] => Vec::new(),
            [only] => vec![kind.piece(*only, *only)],
            points => points
                .windows(2)
                .map(|pair| kind.piece(pair[0], pair[1]))
                .collect(),
        };
        Self { segments }
    }

    /// Four pieces around `aabb`, starting at its top-right corner.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb, kind: SegmentKind, winding: Winding) -> Self {
        Self::from_polyline(&Polyline::from_aabb(aabb, winding), kind)
    }

    /// Four cubic pieces approximating `ellipse`, starting at the major-axis
    /// vertex beyond its second focus.
    #[must_use]
    pub fn from_ellipse(ellipse: &Ellipse, winding: Winding) -> Self {
        let (a, b, _) = ellipse.abc();
        let (ka, kb) = (a * QUARTER_ARC_KAPPA, b * QUARTER_ARC_KAPPA);
        let p = Point2::new;
        let quarters = match winding {
            Winding::CounterClockwise => [
                Bezier::new(p(a, 0.0), p(a, kb), p(ka, b), p(0.0, b)),
                Bezier::new(p(0.0, b), p(-ka, b), p(-a, kb), p(-a, 0.0)),
                Bezier::new(p(-a, 0.0), p(-a, -kb), p(-ka, -b), p(0.0, -b)),
                Bezier::new(p(0.0, -b), p(ka, -b), p(a, -kb), p(a, 0.0)),
            ],
            Winding::Clockwise => [
                Bezier::new(p(a, 0.0), p(a, -kb), p(ka, -b), p(0.0, -b)),
                Bezier::new(p(0.0, -b), p(-ka, -b), p(-a, -kb), p(-a, 0.0)),
                Bezier::new(p(-a, 0.0), p(-a, kb), p(-ka, b), p(0.0, b)),
                Bezier::new(p(0.0, b), p(ka, b), p(a, kb), p(a, 0.0)),
            ],
        };
        let rotation = ellipse.rotation();
        let offset = ellipse.center().coords;
        let segments = quarters
            .iter()
            .map(|q| SegPath::Bezier(q.rotate_about_origin(rotation).translate(&offset)))
            .collect();
        Self { segments }
    }

    /// The chained pieces, in order.
    #[must_use]
    pub fn segments(&self) -> &[SegPath] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<SegPath> {
        self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Union of the piece boxes; empty for an empty path.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn aabb(&self) -> Result<Aabb> {
        self.segments
            .iter()
            .try_fold(Aabb::EMPTY, |acc, piece| Ok(acc.union(&piece.aabb()?)))
    }

    /// Whether every piece is straight.
    #[must_use]
    pub fn is_polyline(&self) -> bool {
        self.segments.iter().all(SegPath::is_straight)
    }

    /// Point at path parameter `t` in `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `t` is outside that range, or
    /// `Unimplemented` when it lands on an arc.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn point_at(&self, t: f64) -> Result<Point2> {
        let count = self.segments.len();
        if count == 0 || !(t >= 0.0 && t <= count as f64) {
            return Err(GeometryError::invalid(format!(
                "path parameter {t} outside [0, {count}]"
            )));
        }
        let index = (t.floor() as usize).min(count - 1);
        let local = t - index as f64;
        self.segments[index].point_at(local)
    }

    /// Reverses the traversal direction in place. Left untouched on error.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn reverse(&mut self) -> Result<()> {
        *self = self.reversed()?;
        Ok(())
    }

    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn reversed(&self) -> Result<Self> {
        let segments = self
            .segments
            .iter()
            .rev()
            .map(SegPath::reversed)
            .collect::<Result<_>>()?;
        Ok(Self { segments })
    }

    fn map_pieces(&self, f: impl Fn(&SegPath) -> Result<SegPath>) -> Result<Self> {
        let segments = self.segments.iter().map(f).collect::<Result<_>>()?;
        Ok(Self { segments })
    }

    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn translate(&self, offset: &Vector2) -> Result<Self> {
        self.map_pieces(|piece| piece.translate(offset))
    }

    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn rotate(&self, radians: f64, center: &Point2) -> Result<Self> {
        self.map_pieces(|piece| piece.rotate(radians, center))
    }

    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Result<Self> {
        self.map_pieces(|piece| piece.scale(x_rate, y_rate, center))
    }

    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn reflect(&self, axis: &Axis) -> Result<Self> {
        self.map_pieces(|piece| piece.reflect(axis))
    }

    /// In-place [`Path::translate`]. Left untouched on error.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn translate_in_place(&mut self, offset: &Vector2) -> Result<()> {
        *self = self.translate(offset)?;
        Ok(())
    }

    /// In-place [`Path::rotate`]. Left untouched on error.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn rotate_in_place(&mut self, radians: f64, center: &Point2) -> Result<()> {
        *self = self.rotate(radians, center)?;
        Ok(())
    }

    /// In-place [`Path::scale`]. Left untouched on error.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn scale_in_place(&mut self, x_rate: f64, y_rate: f64, center: &Point2) -> Result<()> {
        *self = self.scale(x_rate, y_rate, center)?;
        Ok(())
    }

    /// In-place [`Path::reflect`]. Left untouched on error.
    ///
    /// # Errors
    ///
    /// `Unimplemented` if the path holds an arc.
    pub fn reflect_in_place(&mut self, axis: &Axis) -> Result<()> {
        *self = self.reflect(axis)?;
        Ok(())
    }
}

impl TextCodec for Path {
    fn encode(&self) -> String {
        let pieces: Vec<String> = self.segments.iter().map(TextCodec::encode).collect();
        format!("({})", pieces.join(", "))
    }

    /// Decodes the pieces in order without checking that they chain.
    fn decode(text: &str) -> Result<Self> {
        let tokens = number_tokens(text);
        let mut segments = Vec::new();
        let mut rest = tokens.as_slice();
        while !rest.is_empty() {
            let (piece, used) = SegPath::from_tokens(rest)?;
            segments.push(piece);
            rest = rest.get(used..).unwrap_or_default();
        }
        Ok(Self { segments })
    }
}
