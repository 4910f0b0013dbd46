//! Conversions between planar positions and along-path distances.

use bevy_math::DVec2;
use math::{Course, Length, Position};

use crate::consts::{ON_NODE_TOLERANCE, PATH_END_OVERSHOOT};
use crate::cross_track::{self, CrossTrack};
use crate::rank::rank_nodes;
use crate::{Error, PathNode, Result, Segment};

#[cfg(test)]
mod tests;

/// A position resolved onto a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLocation {
    /// Along-path distance from node 0.
    pub distance: Length<f64>,
    /// Path course in the direction of increasing along-path distance.
    pub course:   Course,
    /// Index of the node whose segment contains the position.
    pub index:    usize,
}

/// A path point resolved from an along-path distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub position: Position<DVec2>,
    /// Path course in the direction of increasing along-path distance.
    pub course:   Course,
    /// Index of the node whose segment contains the point.
    pub index:    usize,
}

/// Resolves `point` to an along-path distance.
///
/// Candidate segments are tried in ascending distance of their node from `point`,
/// skipping nodes before `starting_index`,
/// and the first one with a cross-track distance within `tolerance` is used.
pub fn position_to_path(
    path: &[PathNode],
    point: Position<DVec2>,
    starting_index: usize,
    tolerance: Length<f64>,
) -> Result<PathLocation> {
    bevy::log::trace!(
        "resolving {point:?} onto a path of {} nodes from node {starting_index}",
        path.len()
    );

    let mut closest_cross_track = None::<Length<f64>>;
    let mut accepted = None;
    for candidate in rank_nodes(path, point, starting_index)? {
        let Some(cross_track) = cross_track::resolve(path, candidate.index, point)? else {
            continue;
        };
        if cross_track.distance <= tolerance {
            accepted = Some(cross_track);
            break;
        }
        closest_cross_track = Some(match closest_cross_track {
            Some(closest) => closest.min(cross_track.distance),
            None => cross_track.distance,
        });
    }

    let Some(CrossTrack { index, .. }) = accepted else {
        return Err(Error::NoAcceptableNode { position: point, closest_cross_track });
    };
    let node = &path[index];

    let (offset, course) = match node.segment {
        Segment::Straight => (node.course_offset(point), node.course),
        Segment::Turn(arc) => {
            if point.coincides_within(arc.center, ON_NODE_TOLERANCE) {
                // every bearing is equally valid at the center
                (Length::ZERO, node.course)
            } else {
                let bearing = math::bearing_from(arc.center, point);
                (arc.offset_of_bearing(bearing), arc.course_at_bearing(bearing))
            }
        }
        Segment::Unset => return Err(Error::InvalidSegment { index }),
    };

    Ok(PathLocation { distance: node.cumulative_length + offset, course, index })
}

/// Resolves an along-path distance to a point on the path.
///
/// The search for the bracketing nodes starts at `starting_index`.
/// Distances before node 0 or after the last node continue straight along the terminal course.
pub fn path_to_position(
    path: &[PathNode],
    distance: Length<f64>,
    starting_index: usize,
) -> Result<PathPoint> {
    bevy::log::trace!("resolving distance {distance:?} on a path of {} nodes", path.len());

    let index = find_segment(path, distance, starting_index)?;
    let node = &path[index];
    let offset = distance - node.cumulative_length;

    if offset.is_negative() || index + 1 == path.len() {
        return Ok(PathPoint {
            position: node.position + offset.with_course(node.course),
            course: node.course,
            index,
        });
    }

    match node.segment {
        Segment::Straight => Ok(PathPoint {
            position: node.position + offset.with_course(node.course),
            course: node.course,
            index,
        }),
        Segment::Turn(arc) => {
            let bearing = arc.bearing_at(offset);
            Ok(PathPoint {
                position: arc.position_at_bearing(bearing),
                course: arc.course_at_bearing(bearing),
                index,
            })
        }
        Segment::Unset => Err(Error::InvalidSegment { index }),
    }
}

/// Finds the node whose segment contains `distance`, searching from `starting_index`.
///
/// A distance matching a node within [`ON_NODE_TOLERANCE`] resolves to that node.
/// Distances after the last node resolve to the last node.
pub fn find_segment(path: &[PathNode], distance: Length<f64>, starting_index: usize) -> Result<usize> {
    let last = path.len().checked_sub(1).ok_or(Error::EmptyPath)?;

    for (index, node) in path.iter().enumerate().skip(starting_index) {
        if (distance - node.cumulative_length).abs() < ON_NODE_TOLERANCE {
            return Ok(index);
        }
        if distance < node.cumulative_length {
            return Ok(index.saturating_sub(1));
        }
    }

    if distance > path[last].cumulative_length + PATH_END_OVERSHOOT {
        bevy::log::trace!("distance {distance:?} is beyond the path end");
    }
    Ok(last)
}
