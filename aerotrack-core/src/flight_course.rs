//! Position and direction of flight at an along-path distance.

use math::{Course, Length};
use store::ProgressionDirection;

use crate::consts::EXTENSION_LENGTH;
use crate::{HorizontalPathTracker, PathNode, PathPoint, Result, path, resolve};


/// Resolves `distance` through the tracker and advances its active segment.
///
/// Distances beyond the end of the extended path are tolerated without advancing.
fn advance(
    tracker: &mut HorizontalPathTracker,
    distance: Length<f64>,
    context: &str,
) -> Result<PathPoint> {
    let extended_distance = distance + EXTENSION_LENGTH;
    let point =
        resolve::path_to_position(tracker.extended_path(), extended_distance, tracker.search_start())?;

    tracker.latch_passed_end_of_route(distance);

    if tracker.validate_index_progression(point.index) {
        tracker.update_current_index(point.index);
    } else if extended_distance > path::total_length(tracker.extended_path()) {
        bevy::log::error!(
            "distance {distance:?} in {context} is too long for the path, allowing it for now"
        );
    } else {
        return Err(tracker.invalid_progression(point.index, context));
    }
    Ok(point)
}

/// Courses of flight at the two ends of the authored route.
fn route_courses(tracker: &HorizontalPathTracker) -> (Course, Course) {
    let extended = tracker.extended_path();
    // the extended path wraps at least one authored node between the synthetic ends
    let authored_first = &extended[1];
    let authored_last = &extended[extended.len() - 2];
    (authored_last.course.opposite(), authored_first.course.opposite())
}

/// Maps successive along-path distances of one aircraft to the direction it flies in.
#[derive(Debug, Clone)]
pub struct DirectionOfFlightCourseCalculator {
    tracker:      HorizontalPathTracker,
    start_course: Course,
    end_course:   Course,
}

impl DirectionOfFlightCourseCalculator {
    pub fn new(horizontal_path: Vec<PathNode>, direction: ProgressionDirection) -> Result<Self> {
        let tracker = HorizontalPathTracker::new(horizontal_path, direction)?;
        let (start_course, end_course) = route_courses(&tracker);
        Ok(Self { tracker, start_course, end_course })
    }

    #[must_use]
    pub fn tracker(&self) -> &HorizontalPathTracker { &self.tracker }

    /// Course of flight when entering the route at its last authored node.
    #[must_use]
    pub fn start_course(&self) -> Course { self.start_course }

    /// Course of flight when leaving the route at its first authored node.
    #[must_use]
    pub fn end_course(&self) -> Course { self.end_course }

    /// Course of flight at `distance`, opposite to the path course.
    pub fn calculate(&mut self, distance: Length<f64>) -> Result<Course> {
        let point = advance(&mut self.tracker, distance, "direction of flight calculation")?;
        Ok(point.course.opposite())
    }

    pub fn update_horizontal_trajectory(&mut self, horizontal_path: Vec<PathNode>) -> Result<()> {
        self.tracker.update_horizontal_trajectory(horizontal_path)?;
        (self.start_course, self.end_course) = route_courses(&self.tracker);
        Ok(())
    }
}

/// Maps successive along-path distances of one aircraft to positions on the path.
#[derive(Debug, Clone)]
pub struct PositionCalculator {
    tracker: HorizontalPathTracker,
}

impl PositionCalculator {
    pub fn new(horizontal_path: Vec<PathNode>, direction: ProgressionDirection) -> Result<Self> {
        Ok(Self { tracker: HorizontalPathTracker::new(horizontal_path, direction)? })
    }

    #[must_use]
    pub fn tracker(&self) -> &HorizontalPathTracker { &self.tracker }

    /// Resolves `distance` to a point on the path and advances the tracker.
    ///
    /// The returned index and course refer to the extended path.
    pub fn calculate(&mut self, distance: Length<f64>) -> Result<PathPoint> {
        bevy::log::trace!("calculating position at along-path distance {distance:?}");
        advance(&mut self.tracker, distance, "position calculation")
    }

    pub fn update_horizontal_trajectory(&mut self, horizontal_path: Vec<PathNode>) -> Result<()> {
        self.tracker.update_horizontal_trajectory(horizontal_path)
    }
}
