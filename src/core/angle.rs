//! # Angle
//!
//! Conversions between the three angle notations used in this crate.
//!
//! | Notation        | Range         |
//! |-----------------|---------------|
//! | radian          | `(-π, π]`     |
//! | degree          | `(-180, 180]` |
//! | compass degree  | `[0, 360)`    |
//!
//! All three share the compass convention: 0 is north and angles grow
//! clockwise, so the x axis is east and the y axis is north.

use std::f64::consts::PI;

/// Bearing of the offset `(x, y)` as seen from the origin
///
/// Note the argument order of `atan2`: `x` comes first, which puts 0 on
/// the positive y axis (north) and `π/2` on the positive x axis (east).
///
/// # Example
/// ```
/// use trigonometric::radian_from_xy;
/// assert_eq!(radian_from_xy(0.0, 1.0), 0.0);
/// assert!((radian_from_xy(1.0, 0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn radian_from_xy(x: f64, y: f64) -> f64 {
    x.atan2(y)
}

/// Degrees to radians
pub fn radian_from_degree(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Radians to degrees
pub fn degree_from_radian(radian: f64) -> f64 {
    radian * 180.0 / PI
}

/// Map a signed degree onto `[0, 360)`
///
/// Uses a truncating remainder, so inputs below -360 stay negative.
pub fn compass_degree_from_degree(degree: f64) -> f64 {
    (degree + 360.0) % 360.0
}

/// Map a compass degree onto `(-180, 180]`
pub fn degree_from_compass_degree(compass_degree: f64) -> f64 {
    if compass_degree > 180.0 {
        compass_degree - 360.0
    } else {
        compass_degree
    }
}

/// Radian `(-π, π]` to compass degree `[0, 360)`
pub fn compass_degree_from_radian(radian: f64) -> f64 {
    compass_degree_from_degree(degree_from_radian(radian))
}

/// Compass degree `[0, 360)` to radian `(-π, π]`
pub fn radian_from_compass_degree(compass_degree: f64) -> f64 {
    radian_from_degree(degree_from_compass_degree(compass_degree))
}
