mod arc;
mod bezier;
mod circle;
mod ellipse;
mod line;
mod segment;

pub use arc::Arc;
pub use bezier::Bezier;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use segment::{Segment, StretchAnchor};

use crate::error::{GeometryError, ParseError, PlangeoError, Result};
use crate::math::text::number_tokens;
use crate::math::{Point2, Vector2};

use super::aabb::Aabb;
use super::codec::TextCodec;
use super::transform::{Axis, Transform};

/// One piece of a [`Path`](super::path::Path).
///
/// The text form prefixes the piece with its [`SegPath::tag`]. Arc pieces
/// can be built and encoded, but every geometric operation on them returns
/// `GeometryError::Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegPath {
    Segment(Segment),
    Arc(Arc),
    Bezier(Bezier),
}

fn arc_unsupported(operation: &'static str) -> PlangeoError {
    GeometryError::Unimplemented(operation).into()
}

impl SegPath {
    /// Numeric tag used in the text form: 0 segment, 1 arc, 2 bezier.
    #[must_use]
    pub fn tag(&self) -> u8 {
        match self {
            Self::Segment(_) => 0,
            Self::Arc(_) => 1,
            Self::Bezier(_) => 2,
        }
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn aabb(&self) -> Result<Aabb> {
        match self {
            Self::Segment(s) => Ok(s.aabb()),
            Self::Arc(_) => Err(arc_unsupported("arc bounding box")),
            Self::Bezier(b) => Ok(b.aabb()),
        }
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn start(&self) -> Result<Point2> {
        match self {
            Self::Segment(s) => Ok(s.start),
            Self::Arc(_) => Err(arc_unsupported("arc start point")),
            Self::Bezier(b) => Ok(b.start()),
        }
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn end(&self) -> Result<Point2> {
        match self {
            Self::Segment(s) => Ok(s.end),
            Self::Arc(_) => Err(arc_unsupported("arc end point")),
            Self::Bezier(b) => Ok(b.end()),
        }
    }

    /// Whether the piece is a segment or a straight bezier.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        match self {
            Self::Segment(_) => true,
            Self::Arc(_) => false,
            Self::Bezier(b) => b.is_straight(),
        }
    }

    /// Point at `t`, with `t` in `[0, 1]` covering the piece.
    ///
    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn point_at(&self, t: f64) -> Result<Point2> {
        match self {
            Self::Segment(s) => Ok(s.point_at(t)),
            Self::Arc(_) => Err(arc_unsupported("arc point evaluation")),
            Self::Bezier(b) => Ok(b.point_at(t)),
        }
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn reversed(&self) -> Result<Self> {
        match self {
            Self::Segment(s) => Ok(Self::Segment(s.reversed())),
            Self::Arc(_) => Err(arc_unsupported("arc reversal")),
            Self::Bezier(b) => Ok(Self::Bezier(b.reversed())),
        }
    }

    fn map(
        &self,
        operation: &'static str,
        on_segment: impl FnOnce(&Segment) -> Segment,
        on_bezier: impl FnOnce(&Bezier) -> Bezier,
    ) -> Result<Self> {
        match self {
            Self::Segment(s) => Ok(Self::Segment(on_segment(s))),
            Self::Arc(_) => Err(arc_unsupported(operation)),
            Self::Bezier(b) => Ok(Self::Bezier(on_bezier(b))),
        }
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn translate(&self, offset: &Vector2) -> Result<Self> {
        self.map("arc translation", |s| s.translate(offset), |b| b.translate(offset))
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn rotate(&self, radians: f64, center: &Point2) -> Result<Self> {
        self.map(
            "arc rotation",
            |s| s.rotate(radians, center),
            |b| b.rotate(radians, center),
        )
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Result<Self> {
        self.map(
            "arc scaling",
            |s| s.scale(x_rate, y_rate, center),
            |b| b.scale(x_rate, y_rate, center),
        )
    }

    /// # Errors
    ///
    /// `Unimplemented` for arcs.
    pub fn reflect(&self, axis: &Axis) -> Result<Self> {
        self.map("arc reflection", |s| s.reflect(axis), |b| b.reflect(axis))
    }

    /// Decodes one tagged piece from the front of `tokens`, returning it with
    /// the number of tokens consumed.
    pub(crate) fn from_tokens(tokens: &[&str]) -> Result<(Self, usize)> {
        let Some((tag, payload)) = tokens.split_first() else {
            return Err(ParseError::MissingComponent {
                expected: 1,
                found: 0,
            }
            .into());
        };
        match *tag {
            "0" => Ok((Self::Segment(Segment::from_tokens(payload)?), 5)),
            "1" => Ok((Self::Arc(Arc::from_tokens(payload)?), 6)),
            "2" => Ok((Self::Bezier(Bezier::from_tokens(payload)?), 9)),
            other => Err(ParseError::UnknownSegmentTag(other.to_owned()).into()),
        }
    }
}

impl From<Segment> for SegPath {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Arc> for SegPath {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Bezier> for SegPath {
    fn from(bezier: Bezier) -> Self {
        Self::Bezier(bezier)
    }
}

impl TextCodec for SegPath {
    fn encode(&self) -> String {
        let payload = match self {
            Self::Segment(s) => s.encode(),
            Self::Arc(a) => a.encode(),
            Self::Bezier(b) => b.encode(),
        };
        format!("{} {payload}", self.tag())
    }

    fn decode(text: &str) -> Result<Self> {
        Self::from_tokens(&number_tokens(text)).map(|(piece, _)| piece)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::relation::Winding;

    fn segment() -> SegPath {
        Segment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)).into()
    }

    fn arc() -> SegPath {
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        Arc::from_circle(&circle, Winding::CounterClockwise).into()
    }

    #[test]
    fn tags() {
        assert_eq!(segment().tag(), 0);
        assert_eq!(arc().tag(), 1);
        let diagonal = Segment::new(Point2::origin(), Point2::new(1.0, 1.0));
        let bezier: SegPath = Bezier::from_segment(&diagonal).into();
        assert_eq!(bezier.tag(), 2);
        assert!(bezier.is_straight());
    }

    #[test]
    fn arc_operations_are_unimplemented() {
        let a = arc();
        assert!(!a.is_straight());
        for result in [a.aabb().map(|_| ()), a.start().map(|_| ()), a.point_at(0.5).map(|_| ())] {
            assert!(matches!(
                result,
                Err(PlangeoError::Geometry(GeometryError::Unimplemented(_)))
            ));
        }
        assert!(a.translate(&Vector2::new(1.0, 0.0)).is_err());
        assert!(a.reflect(&Axis::X).is_err());
    }

    #[test]
    fn segment_piece_queries() {
        let s = segment();
        assert_eq!(s.start().unwrap(), Point2::new(0.0, 0.0));
        assert_eq!(s.end().unwrap(), Point2::new(2.0, 0.0));
        assert_eq!(s.point_at(0.5).unwrap(), Point2::new(1.0, 0.0));
        assert_eq!(s.reversed().unwrap().start().unwrap(), Point2::new(2.0, 0.0));
        let turned = s.rotate(FRAC_PI_2, &Point2::origin()).unwrap();
        assert_abs_diff_eq!(turned.end().unwrap(), Point2::new(0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn tagged_text_form() {
        let s = segment();
        assert_eq!(s.encode(), "0 ((0, 0), (2, 0))");
        assert_eq!(SegPath::decode(&s.encode()).unwrap(), s);
        let a = arc();
        assert_eq!(SegPath::decode(&a.encode()).unwrap(), a);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = SegPath::decode("7 ((0, 0), (1, 1))").unwrap_err();
        assert!(matches!(
            err,
            PlangeoError::Parse(ParseError::UnknownSegmentTag(tag)) if tag == "7"
        ));
        assert!(SegPath::decode("").is_err());
    }
}
