use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::marker::PhantomData;
use std::{cmp, fmt, ops};

use bevy_math::DVec2;

mod course;
pub use course::{Course, TurnDirection};
mod position;
pub use position::Position;

#[cfg(test)]
mod tests;

/// Converts nautical miles to meters.
pub const METERS_PER_NM: f64 = 1852.;

pub struct Quantity<T, Base>(pub T, pub PhantomData<Base>);

impl<T, Base> Quantity<T, Base> {
    pub const fn new(value: T) -> Self { Self(value, PhantomData) }
}

/// Raw value types with a constant additive identity.
pub trait ConstZero: Copy {
    const ZERO: Self;
}

impl ConstZero for f64 {
    const ZERO: Self = 0.;
}

impl ConstZero for DVec2 {
    const ZERO: Self = DVec2::ZERO;
}

impl<T: ConstZero, Base> Quantity<T, Base> {
    pub const ZERO: Self = Self(T::ZERO, PhantomData);
}

impl<T, Base> Clone for Quantity<T, Base>
where
    T: Clone,
{
    fn clone(&self) -> Self { Self(self.0.clone(), PhantomData) }
}

impl<T, Base> Copy for Quantity<T, Base> where T: Copy {}

impl<T, Base> PartialEq for Quantity<T, Base>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<T, Base> PartialOrd for Quantity<T, Base>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<T, Base> ops::Add for Quantity<T, Base>
where
    T: ops::Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<T, Base> ops::AddAssign for Quantity<T, Base>
where
    T: ops::AddAssign,
{
    fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl<T, Base> ops::Sub for Quantity<T, Base>
where
    T: ops::Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<T, Base> ops::SubAssign for Quantity<T, Base>
where
    T: ops::SubAssign,
{
    fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl<T, Base> ops::Mul<f64> for Quantity<T, Base>
where
    T: ops::Mul<f64, Output = T>,
{
    type Output = Self;

    fn mul(self, other: f64) -> Self { Self(self.0 * other, PhantomData) }
}

impl<T, Base> ops::Div<f64> for Quantity<T, Base>
where
    T: ops::Div<f64, Output = T>,
{
    type Output = Self;

    fn div(self, other: f64) -> Self { Self(self.0 / other, PhantomData) }
}

impl<T, Base> ops::Div for Quantity<T, Base>
where
    T: ops::Div,
{
    type Output = T::Output;

    fn div(self, other: Self) -> Self::Output { self.0 / other.0 }
}

impl<T, Base> ops::Neg for Quantity<T, Base>
where
    T: ops::Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self { Self(-self.0, PhantomData) }
}

impl<T, Base> From<T> for Quantity<T, Base> {
    fn from(value: T) -> Self { Self(value, PhantomData) }
}

impl<Base> Quantity<f64, Base> {
    #[must_use]
    pub fn is_positive(self) -> bool { self.0 > 0. }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }

    #[must_use]
    pub fn is_nan(self) -> bool { self.0.is_nan() }

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    #[must_use]
    pub fn min(self, other: Self) -> Self { Self(self.0.min(other.0), PhantomData) }
}

pub struct LengthBase;

/// A distance quantity. Internal representation is in meters.
pub type Length<T> = Quantity<T, LengthBase>;

pub struct AngleBase;

/// A relative angle. Internal representation is in radians.
pub type Angle = Quantity<f64, AngleBase>;

impl fmt::Debug for Length<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length").field("meters", &self.0).field("nm", &self.into_nm()).finish()
    }
}

impl fmt::Debug for Length<DVec2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length").field("x.meters", &self.0.x).field("y.meters", &self.0.y).finish()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle")
            .field("radians", &self.0)
            .field("degrees", &self.into_degrees())
            .finish()
    }
}

impl Length<f64> {
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self { Self(meters, PhantomData) }

    #[must_use]
    pub const fn into_meters(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_nm(nm: f64) -> Self { Self(nm * METERS_PER_NM, PhantomData) }

    #[must_use]
    pub const fn into_nm(self) -> f64 { self.0 / METERS_PER_NM }

    /// Converts the receiver into a vector of this magnitude pointing along `course`.
    #[must_use]
    pub fn with_course(self, course: Course) -> Length<DVec2> {
        Quantity(course.into_unit_vector() * self.0, PhantomData)
    }

    /// Computes the arc length given a radius (the receiver) and the subtended angle.
    #[must_use]
    pub fn radius_to_arc(self, angle: Angle) -> Length<f64> { Length::new(self.0 * angle.0) }

    /// Computes the angle subtended by an arc of length `self` on a circle of `radius`.
    #[must_use]
    pub fn arc_to_angle(self, radius: Length<f64>) -> Angle { Angle::new(self.0 / radius.0) }
}

impl Length<DVec2> {
    #[must_use]
    pub const fn vec2_from_meters(x: f64, y: f64) -> Self { Self(DVec2::new(x, y), PhantomData) }

    #[must_use]
    pub const fn into_meters(self) -> DVec2 { self.0 }

    #[must_use]
    pub fn x(self) -> Length<f64> { Quantity(self.0.x, PhantomData) }

    #[must_use]
    pub fn y(self) -> Length<f64> { Quantity(self.0.y, PhantomData) }

    #[must_use]
    pub fn magnitude_exact(self) -> Length<f64> { Quantity(self.0.length(), PhantomData) }

    /// Squared magnitude in square meters.
    #[must_use]
    pub fn magnitude_squared(self) -> f64 { self.0.length_squared() }

    /// Dot product in square meters.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 { self.0.dot(other.0) }

    /// Two-dimensional cross product in square meters.
    ///
    /// Positive if `other` is counter-clockwise from `self`.
    #[must_use]
    pub fn perp_dot(self, other: Self) -> f64 { self.0.perp_dot(other.0) }

    /// Returns the vector component projected along `course`.
    #[must_use]
    pub fn project_onto_course(self, course: Course) -> Length<f64> {
        Quantity(self.0.dot(course.into_unit_vector()), PhantomData)
    }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }
}

impl Angle {
    pub const RIGHT: Self = Self(FRAC_PI_2, PhantomData);
    pub const STRAIGHT: Self = Self(PI, PhantomData);
    pub const FULL: Self = Self(TAU, PhantomData);

    #[must_use]
    pub const fn from_radians(radians: f64) -> Self { Self(radians, PhantomData) }

    #[must_use]
    pub const fn into_radians(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self { Self(degrees.to_radians(), PhantomData) }

    #[must_use]
    pub const fn into_degrees(self) -> f64 { self.0.to_degrees() }

    #[must_use]
    pub fn sin(self) -> f64 { self.0.sin() }

    #[must_use]
    pub fn cos(self) -> f64 { self.0.cos() }

    /// Wraps the angle into `-STRAIGHT < value <= STRAIGHT`.
    #[must_use]
    pub fn normalize_signed(self) -> Self {
        let mut value = self.0.rem_euclid(TAU);
        if value > PI {
            value -= TAU;
        }
        Self(value, PhantomData)
    }

    /// Wraps the angle into `0 <= value < FULL`.
    #[must_use]
    pub fn normalize_unsigned(self) -> Self {
        let value = self.0.rem_euclid(TAU);
        // rem_euclid may round up to TAU for tiny negative inputs
        Self(if value >= TAU { 0. } else { value }, PhantomData)
    }
}

pub trait IsFinite: Copy {
    fn is_finite(self) -> bool;
}

impl IsFinite for f64 {
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

impl IsFinite for DVec2 {
    fn is_finite(self) -> bool { DVec2::is_finite(self) }
}

impl<T, Base> serde::Serialize for Quantity<T, Base>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T, Base> serde::Deserialize<'de> for Quantity<T, Base>
where
    T: serde::Deserialize<'de> + IsFinite,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}
