//! Along-path distance of an aircraft position.

use std::mem;

use bevy_math::DVec2;
use math::{Course, Length, Position};
use store::{CrossTrackTolerance, ProgressionDirection, TrackerConfig};

use crate::consts::{CROSS_TRACK_TOLERANCE, EXTENDED_CROSS_TRACK_TOLERANCE, EXTENSION_LENGTH};
use crate::{HorizontalPathTracker, PathNode, Result, resolve};


/// Along-path distance and path course of a resolved position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlongPathDistance {
    /// Distance from the first authored node.
    ///
    /// Negative after passing the end of the route.
    pub distance: Length<f64>,
    /// Path course in the direction of increasing along-path distance.
    pub course:   Course,
}

/// Resolves successive positions of one aircraft to along-path distances.
#[derive(Debug, Clone)]
pub struct AlongPathDistanceCalculator {
    tracker:    HorizontalPathTracker,
    tolerance:  Length<f64>,
    first_call: bool,
}

impl AlongPathDistanceCalculator {
    /// Creates a calculator with the standard cross-track tolerance.
    pub fn new(horizontal_path: Vec<PathNode>, direction: ProgressionDirection) -> Result<Self> {
        Self::with_tolerance(horizontal_path, direction, CrossTrackTolerance::Standard)
    }

    /// Creates a calculator with a custom cross-track tolerance,
    /// such as the extended tolerance of capture clearances.
    pub fn with_tolerance(
        horizontal_path: Vec<PathNode>,
        direction: ProgressionDirection,
        tolerance: CrossTrackTolerance,
    ) -> Result<Self> {
        Ok(Self {
            tracker:    HorizontalPathTracker::new(horizontal_path, direction)?,
            tolerance:  tolerance_length(tolerance),
            first_call: true,
        })
    }

    pub fn from_config(horizontal_path: Vec<PathNode>, config: &TrackerConfig) -> Result<Self> {
        Self::with_tolerance(horizontal_path, config.progression, config.tolerance)
    }

    #[must_use]
    pub fn tracker(&self) -> &HorizontalPathTracker { &self.tracker }

    #[must_use]
    pub fn tolerance(&self) -> Length<f64> { self.tolerance }

    /// Resolves `position` and advances the tracker to the segment containing it.
    ///
    /// The first call after construction or [`Self::update_horizontal_trajectory`]
    /// searches the whole path and accepts whichever segment it finds.
    /// Later calls fail with [`Error::InvalidIndexProgression`](crate::Error::InvalidIndexProgression)
    /// if the resolved segment is not reachable from the previous one.
    pub fn calculate(&mut self, position: Position<DVec2>) -> Result<AlongPathDistance> {
        bevy::log::trace!("calculating along-path distance of {position:?}");

        let (extended, index) = match self.tracker.is_position_on_node(position) {
            Some(index) => {
                let node = &self.tracker.extended_path()[index];
                (AlongPathDistance { distance: node.cumulative_length, course: node.course }, index)
            }
            None => {
                if self.first_call {
                    self.tracker.update_current_index(0);
                }
                let location = resolve::position_to_path(
                    self.tracker.extended_path(),
                    position,
                    self.tracker.search_start(),
                    self.tolerance,
                )?;
                (
                    AlongPathDistance { distance: location.distance, course: location.course },
                    location.index,
                )
            }
        };

        if mem::take(&mut self.first_call) {
            self.tracker.update_current_index(index);
        }
        if !self.tracker.validate_index_progression(index) {
            return Err(self.tracker.invalid_progression(index, "along-path distance calculation"));
        }
        self.tracker.update_current_index(index);

        let distance = extended.distance - EXTENSION_LENGTH;
        self.tracker.set_passed_end_of_route(distance.is_negative());
        Ok(AlongPathDistance { distance, course: extended.course })
    }

    /// Replaces the path after a route change.
    ///
    /// The next [`Self::calculate`] call re-establishes the active segment from scratch.
    pub fn update_horizontal_trajectory(&mut self, horizontal_path: Vec<PathNode>) -> Result<()> {
        self.tracker.update_horizontal_trajectory(horizontal_path)?;
        self.first_call = true;
        Ok(())
    }
}

/// The cross-track distance selected by `tolerance`.
#[must_use]
pub fn tolerance_length(tolerance: CrossTrackTolerance) -> Length<f64> {
    match tolerance {
        CrossTrackTolerance::Standard => CROSS_TRACK_TOLERANCE,
        CrossTrackTolerance::Extended => EXTENDED_CROSS_TRACK_TOLERANCE,
        CrossTrackTolerance::Explicit(length) => length,
    }
}
