use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::text::{number_tokens, take_numbers};
use crate::math::{Point2, Tolerance};

use crate::geometry::codec::{encode_point, TextCodec};
use crate::geometry::relation::Winding;
use crate::geometry::vector::normalize_angle;

use super::Circle;

/// A circular arc.
///
/// The arc starts at `start_angle` (radians in `[0, 2π)`, 0 pointing along
/// +x from the center) and sweeps `sweep` radians: positive is
/// counter-clockwise, negative clockwise. Only construction and the text
/// form are supported; geometric queries on arcs report `Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc. The start angle is normalized into `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the radius is negative.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if Tolerance::default().less(radius, 0.0) {
            return Err(GeometryError::invalid(format!(
                "arc radius must be non-negative, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius: radius.max(0.0),
            start_angle: normalize_angle(start_angle),
            sweep,
        })
    }

    /// The full turn around `circle`, starting on its +x side.
    #[must_use]
    pub fn from_circle(circle: &Circle, winding: Winding) -> Self {
        let sweep = match winding {
            Winding::CounterClockwise => TAU,
            Winding::Clockwise => -TAU,
        };
        Self {
            center: *circle.center(),
            radius: circle.radius(),
            start_angle: 0.0,
            sweep,
        }
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.sweep < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    pub(crate) fn from_tokens(tokens: &[&str]) -> Result<Self> {
        let [x, y, radius, start_angle, sweep] = take_numbers(tokens)?;
        Self::new(Point2::new(x, y), radius, start_angle, sweep)
    }
}

impl TextCodec for Arc {
    fn encode(&self) -> String {
        format!(
            "({}, {}, {}, {})",
            encode_point(&self.center),
            self.radius,
            self.start_angle,
            self.sweep
        )
    }

    fn decode(text: &str) -> Result<Self> {
        Self::from_tokens(&number_tokens(text))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_from_circle() {
        let circle = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        let ccw = Arc::from_circle(&circle, Winding::CounterClockwise);
        assert_eq!(ccw.sweep(), TAU);
        assert_eq!(ccw.start_angle(), 0.0);
        let cw = Arc::from_circle(&circle, Winding::Clockwise);
        assert_eq!(cw.sweep(), -TAU);
        assert_eq!(cw.winding(), Winding::Clockwise);
    }

    #[test]
    fn start_angle_is_normalized() {
        let arc = Arc::new(Point2::origin(), 1.0, -std::f64::consts::FRAC_PI_2, 1.0).unwrap();
        assert!((arc.start_angle() - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        assert!(Arc::new(Point2::origin(), -1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn text_form() {
        let arc = Arc::new(Point2::new(0.5, -1.0), 2.0, 1.25, -0.5).unwrap();
        assert_eq!(arc.encode(), "((0.5, -1), 2, 1.25, -0.5)");
        assert_eq!(Arc::decode(&arc.encode()).unwrap(), arc);
    }
}
