//! Process-wide tolerances of path resolution.

use math::Length;

/// Default cross-track tolerance of position resolution.
pub const CROSS_TRACK_TOLERANCE: Length<f64> = Length::from_nm(2.5);

/// Cross-track tolerance used during capture clearances.
pub const EXTENDED_CROSS_TRACK_TOLERANCE: Length<f64> = Length::from_nm(4.);

/// Length of the synthetic straight segments added to both ends of a tracked path.
pub const EXTENSION_LENGTH: Length<f64> = Length::from_nm(1.);

/// A position or distance within this tolerance of a node is considered on the node.
pub const ON_NODE_TOLERANCE: Length<f64> = Length::from_meters(1e-10);

/// Straight legs shorter than this on both axes are degenerate.
pub const DEGENERATE_LEG_TOLERANCE: Length<f64> = Length::from_meters(1e-5);

/// Allowed mismatch between stored segment geometry and the node positions and lengths.
pub const GEOMETRY_TOLERANCE: Length<f64> = Length::from_meters(1e-3);

/// Maximum distance from the final turn exit at which a position past the turn is still captured.
pub const TURN_END_CAPTURE_DISTANCE: Length<f64> = Length::from_meters(500.);

/// Distances this far beyond the path end still resolve onto the last node.
pub const PATH_END_OVERSHOOT: Length<f64> = Length::from_meters(1e-4);
