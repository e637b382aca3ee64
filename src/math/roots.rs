//! Closed-form polynomial root solvers.
//!
//! Ill-posed input (no solution, or infinitely many) yields an empty vector,
//! never an error.

use nalgebra::Complex;

use super::Tolerance;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Real roots of `a*x^2 + b*x + c = 0`.
///
/// A tolerance-zero `a` degrades to the linear equation; a tolerance-zero
/// discriminant yields the single double root.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let tol = Tolerance::default();
    if tol.is_zero(a) {
        return solve_linear(b, c).into_iter().collect();
    }
    let disc = b * b - 4.0 * a * c;
    if tol.is_zero(disc) {
        return vec![-b / (2.0 * a)];
    }
    if disc < 0.0 {
        return Vec::new();
    }
    let sqrt_disc = disc.sqrt();
    vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
}

/// Roots of `a*x^2 + b*x + c = 0`, including the complex conjugate pair.
#[must_use]
pub fn solve_quadratic_complex(a: f64, b: f64, c: f64) -> Vec<Complex<f64>> {
    let tol = Tolerance::default();
    if tol.is_zero(a) {
        return solve_linear(b, c)
            .into_iter()
            .map(|x| Complex::new(x, 0.0))
            .collect();
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 && !tol.is_zero(disc) {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a);
        return vec![Complex::new(re, -im), Complex::new(re, im)];
    }
    solve_quadratic(a, b, c)
        .into_iter()
        .map(|x| Complex::new(x, 0.0))
        .collect()
}

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Uses the Shengjin discriminant form: one real root when the discriminant
/// is positive, two when it is zero, three (trigonometric form) when it is
/// negative. A tolerance-zero `a` falls back to [`solve_quadratic`].
#[must_use]
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    match cubic(a, b, c, d) {
        Some(CubicRoots::Triple(x)) => vec![x],
        Some(CubicRoots::OneReal { real, .. }) => vec![real],
        Some(CubicRoots::Two(x1, x2)) => vec![x1, x2],
        Some(CubicRoots::Three(x1, x2, x3)) => vec![x1, x2, x3],
        None => solve_quadratic(b, c, d),
    }
}

/// Roots of `a*x^3 + b*x^2 + c*x + d = 0`, including complex ones.
#[must_use]
pub fn solve_cubic_complex(a: f64, b: f64, c: f64, d: f64) -> Vec<Complex<f64>> {
    let real = |x: f64| Complex::new(x, 0.0);
    match cubic(a, b, c, d) {
        Some(CubicRoots::Triple(x)) => vec![real(x)],
        Some(CubicRoots::OneReal { real: x, re, im }) => {
            vec![real(x), Complex::new(re, im), Complex::new(re, -im)]
        }
        Some(CubicRoots::Two(x1, x2)) => vec![real(x1), real(x2)],
        Some(CubicRoots::Three(x1, x2, x3)) => vec![real(x1), real(x2), real(x3)],
        None => solve_quadratic_complex(b, c, d),
    }
}

fn solve_linear(b: f64, c: f64) -> Option<f64> {
    if Tolerance::default().is_zero(b) {
        None
    } else {
        Some(-c / b)
    }
}

enum CubicRoots {
    Triple(f64),
    OneReal { real: f64, re: f64, im: f64 },
    Two(f64, f64),
    Three(f64, f64, f64),
}

#[allow(clippy::many_single_char_names, clippy::similar_names)]
fn cubic(a: f64, b: f64, c: f64, d: f64) -> Option<CubicRoots> {
    let tol = Tolerance::default();
    if tol.is_zero(a) {
        tracing::trace!(a, "cubic leading coefficient vanishes, solving as quadratic");
        return None;
    }

    let big_a = b * b - 3.0 * a * c;
    let big_b = b * c - 9.0 * a * d;
    let big_c = c * c - 3.0 * b * d;
    let delta = big_b * big_b - 4.0 * big_a * big_c;

    if tol.is_zero(big_a) && tol.is_zero(big_b) {
        return Some(CubicRoots::Triple(-b / (3.0 * a)));
    }

    if tol.greater(delta, 0.0) {
        let sqrt_delta = delta.sqrt();
        let y1 = (big_a * b + 1.5 * a * (-big_b + sqrt_delta)).cbrt();
        let y2 = (big_a * b + 1.5 * a * (-big_b - sqrt_delta)).cbrt();
        return Some(CubicRoots::OneReal {
            real: (-b - y1 - y2) / (3.0 * a),
            re: (-b + 0.5 * (y1 + y2)) / (3.0 * a),
            im: HALF_SQRT_3 * (y1 - y2) / (3.0 * a),
        });
    }

    if tol.is_zero(delta) {
        let k = big_b / big_a;
        return Some(CubicRoots::Two(-b / a + k, -k / 2.0));
    }

    let sqrt_a = big_a.sqrt();
    let t = ((2.0 * big_a * b - 3.0 * a * big_b) / (2.0 * big_a * sqrt_a)).clamp(-1.0, 1.0);
    let theta = t.acos() / 3.0;
    let (sin, cos) = theta.sin_cos();
    let sqrt_3 = 2.0 * HALF_SQRT_3;
    Some(CubicRoots::Three(
        (-b - 2.0 * sqrt_a * cos) / (3.0 * a),
        (-b + sqrt_a * (cos + sqrt_3 * sin)) / (3.0 * a),
        (-b + sqrt_a * (cos - sqrt_3 * sin)) / (3.0 * a),
    ))
}
