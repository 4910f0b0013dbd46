//! Stateful progress of one aircraft along its horizontal path.

use bevy_math::DVec2;
use math::{Length, Position};
use store::ProgressionDirection;

use crate::consts::{EXTENSION_LENGTH, ON_NODE_TOLERANCE};
use crate::{Error, PathNode, Result, path};


/// Current node index in the extended path, tagged with the expected progression direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The index may stay or advance by one node per resolution.
    Incrementing(usize),
    /// The index may stay or retreat by one node per resolution.
    Decrementing(usize),
    /// The index may jump anywhere.
    Undefined(usize),
}

/// Nodes worth checking after the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// Only the adjacent node in the progression direction, if it exists.
    Adjacent(Option<usize>),
    /// Every node of the path.
    All,
}

impl Progress {
    fn starting(direction: ProgressionDirection, path_len: usize) -> Self {
        match direction {
            ProgressionDirection::Incrementing => Self::Incrementing(0),
            // just before the synthetic tail node
            ProgressionDirection::Decrementing => Self::Decrementing(path_len.saturating_sub(2)),
            ProgressionDirection::Undefined => Self::Undefined(0),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Incrementing(index) | Self::Decrementing(index) | Self::Undefined(index) => index,
        }
    }

    #[must_use]
    pub fn direction(self) -> ProgressionDirection {
        match self {
            Self::Incrementing(_) => ProgressionDirection::Incrementing,
            Self::Decrementing(_) => ProgressionDirection::Decrementing,
            Self::Undefined(_) => ProgressionDirection::Undefined,
        }
    }

    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        match self {
            Self::Incrementing(_) => Self::Incrementing(index),
            Self::Decrementing(_) => Self::Decrementing(index),
            Self::Undefined(_) => Self::Undefined(index),
        }
    }

    /// Whether moving from the current index to `candidate` respects the progression direction.
    #[must_use]
    pub fn accepts(self, candidate: usize) -> bool {
        match self {
            Self::Incrementing(index) => candidate == index || Some(candidate) == index.checked_add(1),
            Self::Decrementing(index) => candidate == index || Some(candidate) == index.checked_sub(1),
            Self::Undefined(_) => true,
        }
    }

    #[must_use]
    pub fn lookahead(self, path_len: usize) -> Lookahead {
        match self {
            Self::Incrementing(index) => Lookahead::Adjacent(Some(index + 1).filter(|&next| next < path_len)),
            Self::Decrementing(index) => Lookahead::Adjacent(index.checked_sub(1)),
            Self::Undefined(_) => Lookahead::All,
        }
    }
}

/// Tracks the active segment of an extended path across repeated resolutions.
///
/// The tracked path is the authored path with a straight [`EXTENSION_LENGTH`] segment
/// added to each end, so positions slightly off either end still resolve.
/// All indices exposed by the tracker refer to the extended path
/// unless stated otherwise.
#[derive(Debug, Clone)]
pub struct HorizontalPathTracker {
    horizontal_path:     Vec<PathNode>,
    extended_path:       Vec<PathNode>,
    progress:            Progress,
    passed_end_of_route: bool,
}

impl HorizontalPathTracker {
    pub fn new(horizontal_path: Vec<PathNode>, direction: ProgressionDirection) -> Result<Self> {
        let extended_path = path::extend(&horizontal_path)?;
        let progress = Progress::starting(direction, extended_path.len());
        Ok(Self {
            horizontal_path,
            extended_path,
            progress,
            passed_end_of_route: direction == ProgressionDirection::Incrementing,
        })
    }

    /// Index of the active node in the extended path.
    #[must_use]
    pub fn current_index(&self) -> usize { self.progress.index() }

    /// Index of the active node in the authored path.
    ///
    /// Returns `None` while the active node is one of the synthetic extension nodes.
    #[must_use]
    pub fn current_trajectory_index(&self) -> Option<usize> {
        self.current_index().checked_sub(1).filter(|&index| index < self.horizontal_path.len())
    }

    #[must_use]
    pub fn progress(&self) -> Progress { self.progress }

    #[must_use]
    pub fn expected_progression_direction(&self) -> ProgressionDirection {
        self.progress.direction()
    }

    #[must_use]
    pub fn is_passed_end_of_route(&self) -> bool { self.passed_end_of_route }

    /// The authored path, without extension segments.
    #[must_use]
    pub fn horizontal_path(&self) -> &[PathNode] { &self.horizontal_path }

    #[must_use]
    pub fn extended_path(&self) -> &[PathNode] { &self.extended_path }

    /// The node whose segment is currently flown.
    #[must_use]
    pub fn active_segment(&self) -> &PathNode { &self.extended_path[self.current_index()] }

    /// The node whose segment follows the active one.
    ///
    /// Follows the declared direction for directional trackers
    /// and the direction of flight otherwise.
    #[must_use]
    pub fn next_segment(&self) -> Option<&PathNode> {
        let next = match self.progress {
            Progress::Incrementing(index) => index.checked_add(1),
            Progress::Decrementing(index) | Progress::Undefined(index) => index.checked_sub(1),
        };
        next.and_then(|index| self.extended_path.get(index))
    }

    /// Resets the active node to the start appropriate for the progression direction.
    pub fn initialize_starting_index(&mut self) {
        self.progress = Progress::starting(self.progress.direction(), self.extended_path.len());
    }

    pub(crate) fn update_current_index(&mut self, index: usize) {
        self.progress = self.progress.with_index(index);
    }

    /// First node index considered when resolving onto the extended path.
    ///
    /// Directional trackers start one node behind the active node,
    /// undefined trackers search the whole path.
    #[must_use]
    pub fn search_start(&self) -> usize {
        match self.progress {
            Progress::Incrementing(index) | Progress::Decrementing(index) => index.saturating_sub(1),
            Progress::Undefined(_) => 0,
        }
    }

    /// Whether `candidate` differs from the active node by at most one step in the declared direction.
    #[must_use]
    pub fn validate_index_progression(&self, candidate: usize) -> bool { self.progress.accepts(candidate) }

    /// Returns the index of the node coinciding with `position`.
    ///
    /// Only the active node and its neighbor in the declared direction are checked,
    /// unless the direction is undefined.
    #[must_use]
    pub fn is_position_on_node(&self, position: Position<DVec2>) -> Option<usize> {
        self.find_node(|node| node.position.coincides_within(position, ON_NODE_TOLERANCE))
    }

    /// Returns the index of the node at the authored along-path distance `distance`.
    ///
    /// Uses the same search as [`Self::is_position_on_node`].
    #[must_use]
    pub fn is_distance_along_path_on_node(&self, distance: Length<f64>) -> Option<usize> {
        let extended_distance = distance + EXTENSION_LENGTH;
        self.find_node(|node| {
            (node.cumulative_length - extended_distance).abs() < ON_NODE_TOLERANCE
        })
    }

    fn find_node(&self, mut matches: impl FnMut(&PathNode) -> bool) -> Option<usize> {
        let current = self.current_index();
        if matches(&self.extended_path[current]) {
            return Some(current);
        }

        match self.progress.lookahead(self.extended_path.len()) {
            Lookahead::Adjacent(next) => next.filter(|&index| matches(&self.extended_path[index])),
            Lookahead::All => self.extended_path.iter().position(matches),
        }
    }

    /// Replaces the tracked path after a route change.
    ///
    /// The active node is looked up in the new extended path and stays active if found.
    /// Otherwise the starting index is re-initialized for the declared direction.
    pub fn update_horizontal_trajectory(&mut self, horizontal_path: Vec<PathNode>) -> Result<()> {
        let extended_path = path::extend(&horizontal_path)?;
        let active = *self.active_segment();

        self.horizontal_path = horizontal_path;
        self.extended_path = extended_path;

        match self.extended_path.iter().position(|node| *node == active) {
            Some(index) => self.update_current_index(index),
            None => {
                bevy::log::debug!(
                    "active node {active:?} is absent from the new path, resetting progress"
                );
                self.initialize_starting_index();
            }
        }
        Ok(())
    }

    /// Updates the passed-end-of-route flag from an authored along-path distance.
    ///
    /// Decrementing trackers only ever set the flag, incrementing trackers only ever clear it.
    pub(crate) fn latch_passed_end_of_route(&mut self, distance: Length<f64>) {
        let passed = distance.is_negative();
        match self.progress {
            Progress::Decrementing(_) => self.passed_end_of_route |= passed,
            Progress::Incrementing(_) => self.passed_end_of_route &= passed,
            Progress::Undefined(_) => self.passed_end_of_route = passed,
        }
    }

    pub(crate) fn set_passed_end_of_route(&mut self, passed: bool) {
        self.passed_end_of_route = passed;
    }

    /// Builds the progression error for `resolved`, logging the nodes between it and the current node.
    pub(crate) fn invalid_progression(&self, resolved: usize, context: &str) -> Error {
        let current = self.current_index();
        bevy::log::error!(
            "invalid index progression in {context}: current index {current}, resolved index {resolved}"
        );
        let low = current.min(resolved);
        let high = current.max(resolved) + 1;
        for (index, node) in self.extended_path.iter().enumerate().take(high + 1).skip(low) {
            bevy::log::trace!("{index}: {:?}", node.position);
        }
        Error::InvalidIndexProgression { current, resolved }
    }
}
