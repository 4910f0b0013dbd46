//! Simple 2D coordinate geometry used by path resolution.

use bevy_math::DVec2;

use crate::{Angle, Length, Position, Sign};


/// Returns the orientation of the ordered triple `(p1, p2, p3)`,
/// i.e. the sign of `(p2 - p1) × (p3 - p1)`.
///
/// `Positive` is counter-clockwise, `Zero` means the points are collinear.
#[must_use]
pub fn orientation(p1: Position<DVec2>, p2: Position<DVec2>, p3: Position<DVec2>) -> Sign {
    Sign::of((p2 - p1).perp_dot(p3 - p1))
}

/// Returns `k` such that `line_start.lerp(line_end, k)` is the closest point to `point`
/// on the extended line through `line_start` and `line_end`.
///
/// Returns `None` if the line has zero length.
#[must_use]
pub fn line_projection_ratio(
    point: Position<DVec2>,
    line_start: Position<DVec2>,
    line_end: Position<DVec2>,
) -> Option<f64> {
    let line_dir = line_end - line_start;
    let length_sq = line_dir.magnitude_squared();
    if length_sq == 0. {
        return None;
    }
    Some(line_dir.dot(point - line_start) / length_sq)
}

/// Returns the bearing of `point` as seen from `center`.
#[must_use]
pub fn bearing_from(center: Position<DVec2>, point: Position<DVec2>) -> Angle {
    let delta = point - center;
    delta.y().into_meters().atan2(delta.x().into_meters()).into()
}

/// Returns the point on the circle around `center` with `radius` at the bearing `angle`.
#[must_use]
pub fn point_on_circle(center: Position<DVec2>, radius: Length<f64>, angle: Angle) -> Position<DVec2> {
    center + Length::vec2_from_meters(angle.cos(), angle.sin()) * radius.into_meters()
}
