//! Tolerance-aware floating-point comparisons.
//!
//! Every geometric predicate in the crate goes through [`Tolerance`] rather
//! than comparing floats directly, so coincidence and collinearity checks
//! survive accumulated rounding error.

use std::cmp::Ordering;

use super::TOLERANCE;

/// Relative and absolute tolerance pair.
///
/// Two values are close when `|a - b| <= max(rel * max(|a|, |b|), abs)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance.
    pub rel: f64,
    /// Absolute tolerance.
    pub abs: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel: 0.0,
            abs: TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance from a relative and an absolute part.
    #[must_use]
    pub fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Creates a purely absolute tolerance.
    #[must_use]
    pub fn absolute(abs: f64) -> Self {
        Self { rel: 0.0, abs }
    }

    /// Returns a copy with the absolute part multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            rel: self.rel,
            abs: self.abs * factor,
        }
    }

    /// Returns whether `a` and `b` are within tolerance of each other.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_close(self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.rel * a.abs().max(b.abs())).max(self.abs)
    }

    /// Three-way comparison: `Equal` when close, otherwise the raw ordering.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        if self.is_close(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// `a == b`
    #[must_use]
    pub fn equal(self, a: f64, b: f64) -> bool {
        self.is_close(a, b)
    }

    /// `a != b`
    #[must_use]
    pub fn not_equal(self, a: f64, b: f64) -> bool {
        !self.is_close(a, b)
    }

    /// `a < b`
    #[must_use]
    pub fn less(self, a: f64, b: f64) -> bool {
        a < b && !self.is_close(a, b)
    }

    /// `a <= b`
    #[must_use]
    pub fn less_or_equal(self, a: f64, b: f64) -> bool {
        a < b || self.is_close(a, b)
    }

    /// `a > b`
    #[must_use]
    pub fn greater(self, a: f64, b: f64) -> bool {
        a > b && !self.is_close(a, b)
    }

    /// `a >= b`
    #[must_use]
    pub fn greater_or_equal(self, a: f64, b: f64) -> bool {
        a > b || self.is_close(a, b)
    }

    /// `left <= value <= right`
    #[must_use]
    pub fn between(self, left: f64, right: f64, value: f64) -> bool {
        self.less_or_equal(left, value) && self.less_or_equal(value, right)
    }

    /// Returns whether `value` is zero within tolerance.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        self.is_close(value, 0.0)
    }
}

/// Compares with the default tolerance.
#[must_use]
pub fn compare(a: f64, b: f64) -> Ordering {
    Tolerance::default().compare(a, b)
}

/// `a == b` with the default tolerance.
#[must_use]
pub fn equal(a: f64, b: f64) -> bool {
    Tolerance::default().equal(a, b)
}

/// `a != b` with the default tolerance.
#[must_use]
pub fn not_equal(a: f64, b: f64) -> bool {
    Tolerance::default().not_equal(a, b)
}

/// `a < b` with the default tolerance.
#[must_use]
pub fn less(a: f64, b: f64) -> bool {
    Tolerance::default().less(a, b)
}

/// `a <= b` with the default tolerance.
#[must_use]
pub fn less_or_equal(a: f64, b: f64) -> bool {
    Tolerance::default().less_or_equal(a, b)
}

/// `a > b` with the default tolerance.
#[must_use]
pub fn greater(a: f64, b: f64) -> bool {
    Tolerance::default().greater(a, b)
}

/// `a >= b` with the default tolerance.
#[must_use]
pub fn greater_or_equal(a: f64, b: f64) -> bool {
    Tolerance::default().greater_or_equal(a, b)
}

/// `left <= value <= right` with the default tolerance.
#[must_use]
pub fn between(left: f64, right: f64, value: f64) -> bool {
    Tolerance::default().between(left, right, value)
}
