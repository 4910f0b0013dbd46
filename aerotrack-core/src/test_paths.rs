//! Path fixtures shared by unit tests.

use std::f64::consts::FRAC_PI_2;

use math::{Angle, Course, Length, Position, TurnDirection};

use crate::{PathNode, Segment, TurnArc};

pub(crate) fn node(x: f64, y: f64, cumulative: f64, course: Course, segment: Segment) -> PathNode {
    PathNode {
        position: Position::from_origin_meters(x, y),
        cumulative_length: Length::from_meters(cumulative),
        course,
        segment,
    }
}

/// `(0, 0) -> (1000, 0) -> (1000, 1000)`, two straight legs.
pub(crate) fn corner() -> Vec<PathNode> {
    vec![
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(1000., 0., 1000., Course::NORTH, Segment::Straight),
        node(1000., 1000., 2000., Course::NORTH, Segment::Unset),
    ]
}

/// Quarter arc around `(1000, 1000)` with radius 1000 between two straight legs.
///
/// Node 1 is at bearing `-π/2`, node 2 at bearing `0`.
pub(crate) fn quarter_turn() -> Vec<PathNode> {
    let arc_length = 1000. * FRAC_PI_2;
    vec![
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(
            1000.,
            0.,
            1000.,
            Course::EAST,
            Segment::Turn(TurnArc {
                center:      Position::from_origin_meters(1000., 1000.),
                start_angle: Angle::from_radians(-FRAC_PI_2),
                end_angle:   Angle::from_radians(0.),
                radius:      Length::from_meters(1000.),
                direction:   TurnDirection::CounterClockwise,
            }),
        ),
        node(2000., 1000., 1000. + arc_length, Course::NORTH, Segment::Straight),
        node(2000., 2000., 2000. + arc_length, Course::NORTH, Segment::Unset),
    ]
}

/// A single straight leg along the `x` axis.
pub(crate) fn straight(length: f64) -> Vec<PathNode> {
    vec![
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(length, 0., length, Course::EAST, Segment::Unset),
    ]
}

/// Node 1 duplicates node 0, leaving a zero-length leg.
pub(crate) fn duplicated_start() -> Vec<PathNode> {
    vec![
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(1000., 0., 1000., Course::EAST, Segment::Unset),
    ]
}

/// Mirror image of [`quarter_turn`] turning clockwise around `(1000, -1000)`.
pub(crate) fn clockwise_quarter_turn() -> Vec<PathNode> {
    let arc_length = 1000. * FRAC_PI_2;
    vec![
        node(0., 0., 0., Course::EAST, Segment::Straight),
        node(
            1000.,
            0.,
            1000.,
            Course::EAST,
            Segment::Turn(TurnArc {
                center:      Position::from_origin_meters(1000., -1000.),
                start_angle: Angle::from_radians(FRAC_PI_2),
                end_angle:   Angle::from_radians(0.),
                radius:      Length::from_meters(1000.),
                direction:   TurnDirection::Clockwise,
            }),
        ),
        node(2000., -1000., 1000. + arc_length, Course::SOUTH, Segment::Straight),
        node(2000., -2000., 2000. + arc_length, Course::SOUTH, Segment::Unset),
    ]
}
