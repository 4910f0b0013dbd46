//! Conversion of stored paths into core path nodes.

use math::{Course, Length};

use crate::consts::GEOMETRY_TOLERANCE;
use crate::{PathNode, Segment, TurnArc};


/// Validates `stored` and converts it into path nodes.
///
/// Courses and turn bearings are kept as stored,
/// except that node courses are wrapped into `0..2π`.
pub fn path(stored: &store::HorizontalPath) -> Result<Vec<PathNode>, Error> {
    if stored.nodes.len() < 2 {
        return Err(Error::TooFewNodes(stored.nodes.len()));
    }

    let mut previous_length = None::<Length<f64>>;
    let last = stored.nodes.len() - 1;
    let nodes = stored
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let converted = node_from_store(index, node, index == last)?;
            if previous_length.is_some_and(|previous| converted.cumulative_length < previous) {
                return Err(Error::DecreasingLength { index });
            }
            previous_length = Some(converted.cumulative_length);
            Ok(converted)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    for (index, pair) in nodes.windows(2).enumerate() {
        if !segment_matches_nodes(&pair[0], &pair[1]) {
            return Err(Error::InconsistentGeometry { index });
        }
    }
    Ok(nodes)
}

/// Checks that the segment of `downstream` actually joins `upstream` to it
/// and that the cumulative length difference equals the segment length.
fn segment_matches_nodes(downstream: &PathNode, upstream: &PathNode) -> bool {
    let length_delta = upstream.cumulative_length - downstream.cumulative_length;
    let segment_length = match downstream.segment {
        Segment::Straight => downstream.position.distance_exact(upstream.position),
        Segment::Turn(arc) => {
            let ends_on_arc = arc
                .position_at_bearing(arc.start_angle)
                .coincides_within(downstream.position, GEOMETRY_TOLERANCE)
                && arc
                    .position_at_bearing(arc.end_angle)
                    .coincides_within(upstream.position, GEOMETRY_TOLERANCE);
            if !ends_on_arc {
                return false;
            }
            let sweep = ((arc.end_angle - arc.start_angle) * arc.direction).normalize_unsigned();
            arc.radius.radius_to_arc(sweep)
        }
        Segment::Unset => return false,
    };
    (length_delta - segment_length).abs() <= GEOMETRY_TOLERANCE
}

fn node_from_store(index: usize, node: &store::PathNode, is_last: bool) -> Result<PathNode, Error> {
    let non_finite = |field| Error::NonFiniteFloat { index, field };

    if !node.position.is_finite() {
        return Err(non_finite("position"));
    }
    if !node.cumulative_length.into_meters().is_finite() {
        return Err(non_finite("cumulative_length"));
    }
    if !node.course.radians().into_radians().is_finite() {
        return Err(non_finite("course"));
    }

    let segment = match node.segment {
        store::Segment::Straight => Segment::Straight,
        store::Segment::Turn(arc) => Segment::Turn(turn_from_store(index, &arc)?),
        store::Segment::Unset if is_last => Segment::Unset,
        store::Segment::Unset => return Err(Error::MissingSegment { index }),
    };

    Ok(PathNode {
        position: node.position,
        cumulative_length: node.cumulative_length,
        course: Course::from_radians(node.course.radians()),
        segment,
    })
}

fn turn_from_store(index: usize, arc: &store::TurnArc) -> Result<TurnArc, Error> {
    let non_finite = |field| Error::NonFiniteFloat { index, field };

    if !arc.center.is_finite() {
        return Err(non_finite("turn center"));
    }
    if !arc.start_angle.into_radians().is_finite() {
        return Err(non_finite("turn start angle"));
    }
    if !arc.end_angle.into_radians().is_finite() {
        return Err(non_finite("turn end angle"));
    }
    if !arc.radius.into_meters().is_finite() {
        return Err(non_finite("turn radius"));
    }
    if !arc.radius.is_positive() {
        return Err(Error::NonPositiveRadius { index });
    }

    Ok(TurnArc {
        center:      arc.center,
        start_angle: arc.start_angle,
        end_angle:   arc.end_angle,
        radius:      arc.radius,
        direction:   arc.direction,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("A path needs at least two nodes, got {0}")]
    TooFewNodes(usize),
    #[error("Non-finite {field} at path node {index}")]
    NonFiniteFloat { index: usize, field: &'static str },
    #[error("Cumulative length of path node {index} is less than that of the previous node")]
    DecreasingLength { index: usize },
    #[error("Turn radius of path node {index} is not positive")]
    NonPositiveRadius { index: usize },
    #[error("Path node {index} has no segment but is not the last node")]
    MissingSegment { index: usize },
    #[error("Segment of path node {index} does not match the node positions and cumulative lengths")]
    InconsistentGeometry { index: usize },
}
