use bevy_math::DVec2;
use math::{Length, Position};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No candidate segment is within the cross-track tolerance.
    ///
    /// This is expected before the route start, after the route end
    /// and during capture clearances, so callers may recover from it.
    #[error(
        "No path node with acceptable cross-track distance for {position:?} (closest: \
         {closest_cross_track:?})"
    )]
    NoAcceptableNode {
        position:            Position<DVec2>,
        closest_cross_track: Option<Length<f64>>,
    },
    #[error("Undefined distance computed for path node {index}")]
    NanDistance { index: usize },
    #[error("Path node {index} has neither a straight nor a turn segment")]
    InvalidSegment { index: usize },
    #[error("Invalid index progression from node {current} to node {resolved}")]
    InvalidIndexProgression { current: usize, resolved: usize },
    #[error("Path has no nodes")]
    EmptyPath,
}

impl Error {
    /// Whether this is the recoverable [`Error::NoAcceptableNode`] condition.
    #[must_use]
    pub fn is_no_acceptable_node(&self) -> bool { matches!(self, Self::NoAcceptableNode { .. }) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
