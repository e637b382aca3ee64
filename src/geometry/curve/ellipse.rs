use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::text::parse_numbers;
use crate::math::{Point2, Rotation2, Tolerance, Vector2};

use crate::geometry::aabb::Aabb;
use crate::geometry::codec::{encode_point, TextCodec};
use crate::geometry::point::PointExt;
use crate::geometry::polyline::Polyline;
use crate::geometry::relation::Winding;
use crate::geometry::transform::{Axis, Transform};
use crate::geometry::vector::VectorExt;

use super::Circle;

/// An ellipse given by its two foci and the length of its major axis.
///
/// With `a` half the major axis and `c` half the focal distance, `a >= c`
/// always holds. Coincident foci describe a circle of radius `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    focus1: Point2,
    focus2: Point2,
    major_axis: f64,
}

impl Ellipse {
    /// Creates an ellipse from its foci and major-axis length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the major axis is shorter than the
    /// distance between the foci.
    pub fn from_foci(focus1: Point2, focus2: Point2, major_axis: f64) -> Result<Self> {
        let focal = focus1.distance_to(&focus2);
        if Tolerance::default().less(major_axis, focal) {
            return Err(GeometryError::invalid(format!(
                "major axis {major_axis} is shorter than focal distance {focal}"
            )));
        }
        Ok(Self {
            focus1,
            focus2,
            major_axis,
        })
    }

    /// The ellipse inscribed in `aabb`. Its foci lie on the box's longer
    /// center line, ordered along the positive axis direction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the empty box.
    pub fn from_aabb(aabb: &Aabb) -> Result<Self> {
        let (Some(width), Some(height), Some(center)) = (aabb.width(), aabb.height(), aabb.center())
        else {
            return Err(GeometryError::invalid("cannot inscribe an ellipse in an empty box"));
        };
        let a = width.max(height) / 2.0;
        let b = width.min(height) / 2.0;
        let c = (a * a - b * b).max(0.0).sqrt();
        let offset = match Tolerance::default().compare(width, height) {
            Ordering::Equal => Vector2::zeros(),
            Ordering::Greater => Vector2::new(c, 0.0),
            Ordering::Less => Vector2::new(0.0, c),
        };
        Ok(Self {
            focus1: center - offset,
            focus2: center + offset,
            major_axis: a * 2.0,
        })
    }

    /// The circle as a degenerate ellipse with coincident foci.
    #[must_use]
    pub fn from_circle(circle: &Circle) -> Self {
        Self {
            focus1: *circle.center(),
            focus2: *circle.center(),
            major_axis: circle.radius() * 2.0,
        }
    }

    #[must_use]
    pub fn foci(&self) -> (Point2, Point2) {
        (self.focus1, self.focus2)
    }

    #[must_use]
    pub fn major_axis(&self) -> f64 {
        self.major_axis
    }

    /// Semi-major `a`, semi-minor `b` and half focal distance `c`.
    #[must_use]
    pub fn abc(&self) -> (f64, f64, f64) {
        let a = self.major_axis / 2.0;
        let c = self.focus1.distance_to(&self.focus2) / 2.0;
        let b = (a * a - c * c).max(0.0).sqrt();
        (a, b, c)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.focus1, &self.focus2)
    }

    #[must_use]
    pub fn is_circle(&self) -> bool {
        self.focus1.approx_eq(&self.focus2)
    }

    /// Angle of the major axis, taken from `focus1` to `focus2`; 0 for a
    /// circle.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        if self.is_circle() {
            0.0
        } else {
            self.focus1.vector_to(&self.focus2).polar_angle()
        }
    }

    /// The congruent ellipse centered at the origin with its foci on the
    /// x-axis, `focus1` on the negative side.
    #[must_use]
    pub fn to_standard(&self) -> Self {
        let (_, _, c) = self.abc();
        Self {
            focus1: Point2::new(-c, 0.0),
            focus2: Point2::new(c, 0.0),
            major_axis: self.major_axis,
        }
    }

    /// Point at normalized parameter `param`; one full turn is `[0, 1)`,
    /// starting at the major-axis vertex beyond `focus2`.
    #[must_use]
    pub fn point_at(&self, param: f64) -> Point2 {
        let (a, b, _) = self.abc();
        let (sin, cos) = (param * TAU).sin_cos();
        self.center() + Rotation2::new(self.rotation()) * Vector2::new(a * cos, b * sin)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        let (a, b, _) = self.abc();
        PI * a * b
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let (a, b, _) = self.abc();
        let (sin, cos) = self.rotation().sin_cos();
        let half_w = (a * a * cos * cos + b * b * sin * sin).sqrt();
        let half_h = (a * a * sin * sin + b * b * cos * cos).sqrt();
        let center = self.center();
        Aabb::new(
            center.x - half_w,
            center.x + half_w,
            center.y - half_h,
            center.y + half_h,
        )
    }

    /// Oriented bounding box as a closed counter-clockwise polyline.
    #[must_use]
    pub fn obb(&self) -> Polyline {
        let local = Polyline::from_aabb(&self.to_standard().aabb(), Winding::CounterClockwise);
        local
            .rotate_about_origin(self.rotation())
            .translate(&self.center().coords)
    }
}

impl Transform for Ellipse {
    fn translate(&self, offset: &Vector2) -> Self {
        Self {
            focus1: self.focus1 + offset,
            focus2: self.focus2 + offset,
            major_axis: self.major_axis,
        }
    }

    fn rotate(&self, radians: f64, center: &Point2) -> Self {
        Self {
            focus1: self.focus1.rotate(radians, center),
            focus2: self.focus2.rotate(radians, center),
            major_axis: self.major_axis,
        }
    }

    /// Moves the foci and rescales the major axis by the change in focal
    /// distance. A circle is rescaled by `sqrt(|x_rate * y_rate|)`. Exact
    /// only for uniform rates.
    fn scale(&self, x_rate: f64, y_rate: f64, center: &Point2) -> Self {
        let focus1 = self.focus1.scale(x_rate, y_rate, center);
        let focus2 = self.focus2.scale(x_rate, y_rate, center);
        let rate = if self.is_circle() {
            (x_rate * y_rate).abs().sqrt()
        } else {
            focus1.distance_to(&focus2) / self.focus1.distance_to(&self.focus2)
        };
        Self {
            focus1,
            focus2,
            major_axis: self.major_axis * rate,
        }
    }

    fn reflect(&self, axis: &Axis) -> Self {
        Self {
            focus1: self.focus1.reflect(axis),
            focus2: self.focus2.reflect(axis),
            major_axis: self.major_axis,
        }
    }
}

impl TextCodec for Ellipse {
    fn encode(&self) -> String {
        format!(
            "({}, {}, {})",
            encode_point(&self.focus1),
            encode_point(&self.focus2),
            self.major_axis
        )
    }

    fn decode(text: &str) -> Result<Self> {
        let [x1, y1, x2, y2, major_axis] = parse_numbers(text)?;
        Self::from_foci(Point2::new(x1, y1), Point2::new(x2, y2), major_axis)
    }
}
