//! Decides whether a query point belongs to a path segment.
//!
//! Segment `i` joins node `i + 1` to node `i`.
//! Aircraft fly from the higher index to the lower one,
//! so node `i + 1` is called upstream and node `i` downstream below.
//! Points in the gap between two segments are assigned to the downstream segment;
//! points covered by the upstream neighbor are left to that neighbor.

use bevy_math::DVec2;
use math::{Length, Position, Sign, line_projection_ratio, orientation};

use crate::consts::{DEGENERATE_LEG_TOLERANCE, TURN_END_CAPTURE_DISTANCE};
use crate::{Error, PathNode, Result, Segment, TurnArc};


/// A segment accepting the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossTrack {
    /// Index of the node whose segment along-path distance is measured on.
    pub index:    usize,
    /// Perpendicular distance for straight segments, radial distance for turns,
    /// or the distance to the nearest end when the point lies beyond the segment.
    pub distance: Length<f64>,
}

/// Tests whether `point` belongs to the segment of node `index`.
///
/// Returns `Ok(None)` if the segment rejects the point.
/// `index` must be less than `path.len()`.
pub fn resolve(path: &[PathNode], index: usize, point: Position<DVec2>) -> Result<Option<CrossTrack>> {
    let Some(upstream) = path.get(index + 1) else {
        // the last node has no segment
        return Ok(None);
    };
    let downstream = &path[index];

    let distance = match downstream.segment {
        Segment::Turn(arc) => turn(path, index, &arc, upstream, downstream, point),
        Segment::Straight => straight(path, index, upstream, downstream, point),
        Segment::Unset => return Err(Error::InvalidSegment { index }),
    };
    Ok(distance.map(|distance| CrossTrack { index, distance }))
}

fn turn(
    path: &[PathNode],
    index: usize,
    arc: &TurnArc,
    upstream: &PathNode,
    downstream: &PathNode,
    point: Position<DVec2>,
) -> Option<Length<f64>> {
    let center = arc.center;
    let radial = || (point.distance_exact(center) - arc.radius).abs();

    let turn_sense = orientation(center, upstream.position, downstream.position);
    if turn_sense == Sign::Zero {
        bevy::log::error!("turn segment of path node {index} has zero length");
        return None;
    }

    let point_sense = orientation(center, upstream.position, point);
    if point_sense.is_opposite(turn_sense) {
        // before the upstream end of the turn
        return match upstream.segment {
            Segment::Turn(prev_arc) => {
                let prev_sense = orientation(prev_arc.center, upstream.position, point);
                prev_sense.is_opposite(point_sense).then(radial)
            }
            Segment::Straight | Segment::Unset => {
                let prev_upstream = path.get(index + 2)?.position;
                // an obtuse angle at the upstream node puts the point beyond the previous leg
                let beyond_prev_leg = prev_upstream.distance_squared(point)
                    > upstream.position.distance_squared(point)
                        + prev_upstream.distance_squared(upstream.position);
                beyond_prev_leg.then(|| upstream.position.distance_exact(point))
            }
        };
    }

    let exit_sense = orientation(center, downstream.position, point);
    if point_sense.is_same_nonzero(exit_sense) {
        // past the downstream end of the turn
        if index == 0 {
            let end_distance = downstream.position.distance_exact(point);
            if end_distance < TURN_END_CAPTURE_DISTANCE {
                return Some(end_distance);
            }
        }
        return None;
    }

    Some(radial())
}

fn straight(
    path: &[PathNode],
    index: usize,
    upstream: &PathNode,
    downstream: &PathNode,
    point: Position<DVec2>,
) -> Option<Length<f64>> {
    if upstream.position.coincides_within(downstream.position, DEGENERATE_LEG_TOLERANCE) {
        bevy::log::error!("straight segment of path node {index} has zero length");
        return point
            .coincides_within(downstream.position, DEGENERATE_LEG_TOLERANCE)
            .then_some(Length::ZERO);
    }

    let ratio = line_projection_ratio(point, upstream.position, downstream.position)?;
    if ratio < 0. {
        // before the upstream end of the leg
        if let Some(prev_upstream) = path.get(index + 2) {
            let in_prev_segment = match upstream.segment {
                Segment::Turn(prev_arc) => {
                    let prev_sense =
                        orientation(prev_arc.center, upstream.position, prev_upstream.position);
                    if prev_sense == Sign::Zero {
                        return None;
                    }
                    orientation(prev_arc.center, upstream.position, point).is_same_nonzero(prev_sense)
                }
                Segment::Straight | Segment::Unset => {
                    (prev_upstream.position - upstream.position).dot(point - upstream.position) >= 0.
                }
            };
            if in_prev_segment {
                return None;
            }
        }
        return Some(upstream.position.distance_exact(point));
    }

    if ratio > 1. {
        // past the downstream end; kept only at the end of the route
        if index > 0 {
            return None;
        }
        return Some(downstream.position.distance_exact(point));
    }

    Some(upstream.position.lerp(downstream.position, ratio).distance_exact(point))
}
