//! Path data model and the end extensions used by trackers.

use bevy_math::DVec2;
use math::{Angle, Course, Length, Position, TurnDirection, point_on_circle};

use crate::consts::EXTENSION_LENGTH;
use crate::{Error, Result};


/// One vertex of a horizontal path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub position:          Position<DVec2>,
    /// Along-path distance from node 0 to this node.
    pub cumulative_length: Length<f64>,
    /// Direction of increasing along-path distance when leaving this node.
    pub course:            Course,
    /// Shape of the segment joining node `i + 1` to this node.
    pub segment:           Segment,
}

impl PathNode {
    #[must_use]
    pub fn straight(position: Position<DVec2>, cumulative_length: Length<f64>, course: Course) -> Self {
        Self { position, cumulative_length, course, segment: Segment::Straight }
    }

    /// Signed distance of `point` from this node projected on the node course.
    #[must_use]
    pub fn course_offset(&self, point: Position<DVec2>) -> Length<f64> {
        (point - self.position).project_onto_course(self.course)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Straight,
    Turn(TurnArc),
    /// No segment attached. Only valid on the last node.
    Unset,
}

/// A circular arc from node `i` (at `start_angle`) to node `i + 1` (at `end_angle`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnArc {
    pub center:      Position<DVec2>,
    pub start_angle: Angle,
    pub end_angle:   Angle,
    pub radius:      Length<f64>,
    /// Rotation sense in the direction of increasing along-path distance.
    pub direction:   TurnDirection,
}

impl TurnArc {
    /// Bearing from the center after travelling `offset` along the arc from node `i`.
    #[must_use]
    pub fn bearing_at(&self, offset: Length<f64>) -> Angle {
        self.start_angle + offset.arc_to_angle(self.radius) * self.direction
    }

    /// Signed arc length from node `i` to the point at `bearing`.
    #[must_use]
    pub fn offset_of_bearing(&self, bearing: Angle) -> Length<f64> {
        self.radius.radius_to_arc((bearing - self.start_angle).normalize_signed() * self.direction)
    }

    #[must_use]
    pub fn position_at_bearing(&self, bearing: Angle) -> Position<DVec2> {
        point_on_circle(self.center, self.radius, bearing)
    }

    /// Tangent course at `bearing` in the direction of increasing along-path distance.
    #[must_use]
    pub fn course_at_bearing(&self, bearing: Angle) -> Course {
        Course::from_radians(bearing + Angle::RIGHT * self.direction)
    }
}

/// Total along-path length of a path.
#[must_use]
pub fn total_length(path: &[PathNode]) -> Length<f64> {
    path.last().map_or(Length::ZERO, |node| node.cumulative_length)
}

/// Returns a copy of `path` with a straight segment of [`EXTENSION_LENGTH`] added to each end.
///
/// The leading node lies behind node 0 along its course and starts the distance count,
/// so every authored cumulative length is shifted by `EXTENSION_LENGTH`.
/// The trailing node continues the last course and carries no segment.
pub fn extend(path: &[PathNode]) -> Result<Vec<PathNode>> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Err(Error::EmptyPath);
    };

    let mut extended = Vec::with_capacity(path.len() + 2);
    extended.push(PathNode::straight(
        first.position - EXTENSION_LENGTH.with_course(first.course),
        Length::ZERO,
        first.course,
    ));
    extended.extend(path.iter().map(|node| PathNode {
        cumulative_length: node.cumulative_length + EXTENSION_LENGTH,
        ..*node
    }));
    if let Some(authored_last) = extended.last_mut() {
        authored_last.segment = Segment::Straight;
    }
    extended.push(PathNode {
        position:          last.position + EXTENSION_LENGTH.with_course(last.course),
        cumulative_length: last.cumulative_length + EXTENSION_LENGTH * 2.,
        course:            last.course,
        segment:           Segment::Unset,
    });
    Ok(extended)
}
