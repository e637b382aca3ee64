use std::str::FromStr;

use crate::error::{GeometryError, PlangeoError};
use crate::math::{Point2, Rotation2, Vector2};

use super::curve::Line;

/// Mirror axis for [`Transform::reflect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    /// The x-axis (`y = 0`).
    X,
    /// The y-axis (`x = 0`).
    Y,
    /// The line `y = x`.
    Diagonal,
    /// The line `y = -x`.
    AntiDiagonal,
    /// An arbitrary infinite line.
    Line(Line),
}

impl Axis {
    /// Mirrors a point across this axis.
    #[must_use]
    pub fn reflect_point(&self, p: &Point2) -> Point2 {
        match self {
            Self::X => Point2::new(p.x, -p.y),
            Self::Y => Point2::new(-p.x, p.y),
            Self::Diagonal => Point2::new(p.y, p.x),
            Self::AntiDiagonal => Point2::new(-p.y, -p.x),
            Self::Line(line) => {
                let foot = line.projection(p);
                Point2::new(foot.x * 2.0 - p.x, foot.y * 2.0 - p.y)
            }
        }
    }
}

impl FromStr for Axis {
    type Err = PlangeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "x-axis" => Ok(Self::X),
            "y" | "y-axis" => Ok(Self::Y),
            "y=x" => Ok(Self::Diagonal),
            "y=-x" => Ok(Self::AntiDiagonal),
            other => Err(GeometryError::invalid(format!("unknown axis token {other:?}"))),
        }
    }
}

impl From<Line> for Axis {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

/// The uniform transform set shared by value shapes.
///
/// Every method returns a new value; the receiver is untouched.
pub trait Transform: Sized {
    /// Translates by `offset`.
    #[must_use]
    fn translate(&self, offset: &Vector2) -> Self;

    /// Rotates counter-clockwise by `radians` about `center`.
    #[must_use]
    fn rotate(&self, radians: f64, center: &Point2) -> Self;

    /// Scales by `(x_rate, y_rate)` about `center`.
    #[must_use]
    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self;

    /// Mirrors across `axis`.
    #[must_use]
    fn reflect(&self, axis: &Axis) -> Self;

    /// Rotates counter-clockwise by `radians` about the origin.
    #[must_use]
    fn rotate_about_origin(&self, radians: f64) -> Self {
        self.rotate(radians, &Point2::origin())
    }
}

impl Transform for Point2 {
    fn translate(&self, offset: &Vector2) -> Self {
        self + offset
    }

    fn rotate(&self, radians: f64, center: &Point2) -> Self {
        center + Rotation2::new(radians) * (self - center)
    }

    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        Point2::new(
            (self.x - center.x) * x_rate + center.x,
            (self.y - center.y) * y_rate + center.y,
        )
    }

    fn reflect(&self, axis: &Axis) -> Self {
        axis.reflect_point(self)
    }
}
