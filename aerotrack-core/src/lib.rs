//! Horizontal path geometry and along-path tracking.
//!
//! A path is a sequence of [`PathNode`]s ordered by increasing along-path distance.
//! Aircraft fly it from the last node towards node 0,
//! so along-path distance doubles as distance-to-go.

pub mod consts;

mod error;
pub use error::{Error, Result};

pub mod path;
pub use path::{PathNode, Segment, TurnArc};

pub mod rank;
pub mod cross_track;
pub mod resolve;
pub use resolve::{PathLocation, PathPoint};

pub mod tracker;
pub use tracker::HorizontalPathTracker;

pub mod along_path;
pub use along_path::{AlongPathDistance, AlongPathDistanceCalculator};

pub mod flight_course;
pub use flight_course::{DirectionOfFlightCourseCalculator, PositionCalculator};

pub mod load;

#[cfg(test)]
mod test_paths;
