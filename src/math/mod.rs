pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod roots;
pub mod text;
pub mod tolerance;

pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// The coordinate origin.
#[must_use]
pub fn origin() -> Point2 {
    Point2::origin()
}
