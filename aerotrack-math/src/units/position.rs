use std::{fmt, ops};

use bevy_math::DVec2;

use super::{Length, Quantity};

/// An absolute location in the local plane, as opposed to a displacement [`Length`].
#[derive(Clone, Copy, PartialEq, serde::Serialize)]
pub struct Position<T>(pub Length<T>);

impl<'de, T: serde::Deserialize<'de> + super::IsFinite> serde::Deserialize<'de> for Position<T> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        <Length<T> as serde::Deserialize<'de>>::deserialize(d).map(Self)
    }
}

impl<T> Position<T> {
    pub const fn new(value: T) -> Self { Position(Quantity::new(value)) }

    pub fn get(self) -> T { self.0.0 }
}

impl Position<DVec2> {
    pub const ORIGIN: Self = Self(Length::vec2_from_meters(0., 0.));

    #[must_use]
    pub const fn from_origin_meters(x: f64, y: f64) -> Self {
        Position(Length::vec2_from_meters(x, y))
    }

    #[must_use]
    pub fn x(self) -> Length<f64> { self.0.x() }

    #[must_use]
    pub fn y(self) -> Length<f64> { self.0.y() }

    #[must_use]
    pub fn distance_exact(self, other: Self) -> Length<f64> { (self - other).magnitude_exact() }

    /// Squared distance in square meters.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 { (self - other).magnitude_squared() }

    /// Whether both components differ from `other` by less than `tolerance`.
    #[must_use]
    pub fn coincides_within(self, other: Self, tolerance: Length<f64>) -> bool {
        let delta = self - other;
        delta.x().abs() < tolerance && delta.y().abs() < tolerance
    }

    #[must_use]
    pub fn lerp(self, other: Self, s: f64) -> Self { Self::new(self.get().lerp(other.get(), s)) }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }
}

impl fmt::Debug for Position<DVec2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position").field("x", &self.0.0.x).field("y", &self.0.0.y).finish()
    }
}

impl<T: ops::AddAssign> ops::Add<Length<T>> for Position<T> {
    type Output = Self;

    fn add(mut self, rhs: Length<T>) -> Self::Output {
        self.0 += rhs;
        self
    }
}

impl<T: ops::AddAssign> ops::AddAssign<Length<T>> for Position<T> {
    fn add_assign(&mut self, rhs: Length<T>) { self.0 += rhs; }
}

impl<T: ops::SubAssign> ops::Sub<Length<T>> for Position<T> {
    type Output = Self;

    fn sub(mut self, rhs: Length<T>) -> Self::Output {
        self.0 -= rhs;
        self
    }
}

impl<T: ops::SubAssign> ops::SubAssign<Length<T>> for Position<T> {
    fn sub_assign(&mut self, rhs: Length<T>) { self.0 -= rhs; }
}

impl<T: ops::Sub<Output = T>> ops::Sub for Position<T> {
    type Output = Length<T>;

    fn sub(self, rhs: Self) -> Length<T> { self.0 - rhs.0 }
}
