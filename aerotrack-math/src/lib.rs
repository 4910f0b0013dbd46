//! Unit types and planar geometry shared by the trajectory crates.
//!
//! All quantities are `f64` in a local tangent plane:
//! lengths in meters, `x` pointing east, `y` pointing north,
//! angles in radians counter-clockwise from the `+x` axis.

mod units;
pub use units::*;

mod alg2d;
pub use alg2d::*;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of a raw value. NaN is treated as zero.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0. {
            Self::Positive
        } else if value < 0. {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// Whether `self` and `other` are both nonzero and differ.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive)
        )
    }

    /// Whether `self` and `other` are both nonzero and equal.
    #[must_use]
    pub fn is_same_nonzero(self, other: Self) -> bool {
        self == other && self != Self::Zero
    }
}
