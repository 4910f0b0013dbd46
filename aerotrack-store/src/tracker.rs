use math::Length;
use serde::{Deserialize, Serialize};

/// Tracking options of a simulated aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum cross-track distance accepted when resolving a position onto the path.
    pub tolerance:   CrossTrackTolerance,
    /// Expected direction in which the node index moves between resolutions.
    pub progression: ProgressionDirection,
}

/// Selects the cross-track tolerance of position resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CrossTrackTolerance {
    /// The standard 2.5 nm tolerance.
    #[default]
    Standard,
    /// The 4 nm tolerance used during capture clearances.
    Extended,
    /// An explicit tolerance.
    Explicit(Length<f64>),
}

/// Expected direction of node index travel along a path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ProgressionDirection {
    /// No direction is known or expected.
    #[default]
    Undefined,
    /// The index starts from the first node and increases,
    /// as in trajectory prediction passes.
    Incrementing,
    /// The index starts from the end of the path and decreases,
    /// consistent with the direction of flight.
    Decrementing,
}
