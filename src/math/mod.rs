pub mod bounds_2d;
pub mod distance_2d;
pub mod polygon_2d;
pub mod snap;

/// 2D point type, in plan meters.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Walls shorter than this (in meters) are degenerate and skipped by every
/// geometry pass.
pub const MIN_WALL_LENGTH: f64 = 0.01;
