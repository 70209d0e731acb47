//! # Trigonometric
//!
//! Distance metrics and compass-style angle helpers.
//!
//! ## Overview
//!
//! - **Distances**: Minkowski (Lp) distances in any number of dimensions,
//!   from Manhattan through Euclidean to Chebyshev
//! - **Angles**: radian `(-π, π]`, degree `(-180, 180]` and compass degree
//!   `[0, 360)`, all with 0 = north
//! - **Circles**: the point at a given bearing and radius
//!
//! Quasinorm exponents (`p < 1`) are reported through `tracing` at info
//! level. Install a subscriber to see them.
//!
//! ## Usage
//!
//! ```rust
//! use trigonometric::{
//!     circle_point_from_radian_radius, compass_degree_from_radian,
//!     dimension_distances_from_points, distance_from_dimension_distances,
//!     radian_from_xy, Norm,
//! };
//!
//! let d = dimension_distances_from_points(&[0.0, 0.0], &[3.0, 4.0])?;
//! assert!((distance_from_dimension_distances(&d, None)? - 5.0).abs() < 1e-12);
//! assert_eq!(distance_from_dimension_distances(&d, Some(Norm::CHEBYSHEV))?, 4.0);
//!
//! let bearing = compass_degree_from_radian(radian_from_xy(-1.0, 0.0));
//! assert!((bearing - 270.0).abs() < 1e-9);
//!
//! let [x, y] = circle_point_from_radian_radius(0.0, 10.0, Some([5.0, 5.0]));
//! assert!((x - 5.0).abs() < 1e-12 && (y - 15.0).abs() < 1e-12);
//! # Ok::<(), trigonometric::TrigError>(())
//! ```

pub mod core;
pub mod error;

// Re-exports for convenience
pub use self::core::{Norm, Point};
pub use self::core::distance::{
    dimension_distances_from_points, distance_between_points, distance_from_dimension_distances,
};
pub use self::core::angle::{
    compass_degree_from_degree, compass_degree_from_radian, degree_from_compass_degree,
    degree_from_radian, radian_from_compass_degree, radian_from_degree, radian_from_xy,
};
pub use self::core::circle::circle_point_from_radian_radius;
pub use self::core::metric::{Chebyshev, Euclidean, Manhattan, Metric, Minkowski};
pub use error::{TrigError, TrigResult};
