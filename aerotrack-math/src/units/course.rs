use std::f64::consts::{FRAC_PI_2, PI};
use std::{fmt, ops};

use bevy_math::DVec2;

use super::Angle;


/// An absolute direction in the local plane.
///
/// Measured counter-clockwise from the `+x` (east) axis,
/// so that east is `0` and north is `π/2`.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Course(
    Angle, // always 0 <= course < FULL
);

impl Course {
    /// Course towards `+x`.
    pub const EAST: Self = Self(Angle::new(0.));
    /// Course towards `+y`.
    pub const NORTH: Self = Self(Angle::new(FRAC_PI_2));
    /// Course towards `-x`.
    pub const WEST: Self = Self(Angle::new(PI));
    /// Course towards `-y`.
    pub const SOUTH: Self = Self(Angle::new(FRAC_PI_2 * 3.));

    /// Creates a course from an angle in radians, wrapping it into `0..FULL`.
    #[must_use]
    pub fn from_radians(radians: Angle) -> Self { Self(radians.normalize_unsigned()) }

    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self { Self::from_radians(Angle::from_degrees(degrees)) }

    /// Returns the course in radians in the range `0 <= value < FULL`.
    #[must_use]
    pub fn radians(self) -> Angle { self.0 }

    /// Returns the course in degrees in the range `0..360`.
    #[must_use]
    pub fn degrees(self) -> f64 { self.0.into_degrees() }

    /// Converts the course into a unit direction vector.
    #[must_use]
    pub fn into_unit_vector(self) -> DVec2 {
        let (y, x) = self.0.0.sin_cos();
        DVec2::new(x, y)
    }

    /// Returns the opposite direction of this course.
    #[must_use]
    pub fn opposite(self) -> Self { self + Angle::STRAIGHT }
}

impl fmt::Debug for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Course")
            .field("radians", &self.radians().0)
            .field("degrees", &self.degrees())
            .finish()
    }
}

impl ops::Add<Angle> for Course {
    type Output = Self;
    /// Offsets `self` by `angle` counter-clockwise.
    fn add(self, angle: Angle) -> Self { Self::from_radians(self.0 + angle) }
}

/// The rotation sense of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TurnDirection {
    /// A left turn, increasing the course angle.
    CounterClockwise,
    /// A right turn, decreasing the course angle.
    Clockwise,
}

impl TurnDirection {
    /// `1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.,
            Self::Clockwise => -1.,
        }
    }
}

/// Negates the angle for clockwise turns.
impl ops::Mul<TurnDirection> for Angle {
    type Output = Self;

    fn mul(self, dir: TurnDirection) -> Self { self * dir.signum() }
}
