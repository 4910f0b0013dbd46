use bevy_math::DVec2;
use math::{Angle, Course, Length, Position, TurnDirection};
use serde::{Deserialize, Serialize};

/// A piecewise horizontal path produced by route construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPath {
    /// Path vertices ordered by increasing along-path distance.
    ///
    /// The route is flown from the last node towards the first node.
    pub nodes: Vec<PathNode>,
}

/// One vertex of a [`HorizontalPath`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// Location of the vertex in the local plane.
    pub position:          Position<DVec2>,
    /// Along-path distance from the first node to this node.
    pub cumulative_length: Length<f64>,
    /// Direction of increasing along-path distance when leaving this node.
    pub course:            Course,
    /// Shape of the segment joining the next node to this node.
    #[serde(default)]
    pub segment:           Segment,
}

/// Shape of the segment joining node `i + 1` to node `i`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Segment {
    /// No segment is attached, as for the last node of a path.
    #[default]
    Unset,
    /// A straight leg.
    Straight,
    /// A circular arc.
    Turn(TurnArc),
}

/// Geometry of a circular turn segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnArc {
    /// Center of the turn circle.
    pub center:      Position<DVec2>,
    /// Bearing from the center to node `i`.
    pub start_angle: Angle,
    /// Bearing from the center to node `i + 1`.
    pub end_angle:   Angle,
    /// Radius of the turn circle.
    pub radius:      Length<f64>,
    /// Rotation sense from `start_angle` to `end_angle`.
    pub direction:   TurnDirection,
}
