//! # Circle
//!
//! Points on a circle, in compass convention: sine drives x, cosine drives
//! y, so radian 0 lies straight north of the center.

/// Point at bearing `radian` and distance `radius` from `offset`
///
/// `None` centers the circle on the origin. A negative radius mirrors the
/// point through the center.
///
/// # Example
/// ```
/// use trigonometric::circle_point_from_radian_radius;
/// let [x, y] = circle_point_from_radian_radius(0.0, 10.0, None);
/// assert!(x.abs() < 1e-12 && (y - 10.0).abs() < 1e-12);
/// ```
pub fn circle_point_from_radian_radius(radian: f64, radius: f64, offset: Option<[f64; 2]>) -> [f64; 2] {
    let [ox, oy] = offset.unwrap_or([0.0, 0.0]);
    let (sin, cos) = radian.sin_cos();

    [sin * radius + ox, cos * radius + oy]
}
