//! Unit-tagged angular values.
//!
//! [`Degrees`] and [`Radians`] are distinct types that never interconvert
//! implicitly; crossing units takes an explicit [`Angle::to_radians`] or
//! [`Angle::to_degrees`] call. Trigonometric accessors always evaluate in
//! radians regardless of the stored unit.

use core::marker::PhantomData;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Marker trait for angular units.
pub trait AngleUnit {
    /// Radians per one unit of this measure.
    const RAD_PER_UNIT: f64;
    /// Short label used by `Display`.
    const SYMBOL: &'static str;
}

/// Degree unit marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Deg {}

/// Radian unit marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rad {}

impl AngleUnit for Deg {
    const RAD_PER_UNIT: f64 = PI / 180.0;
    const SYMBOL: &'static str = "deg";
}

impl AngleUnit for Rad {
    const RAD_PER_UNIT: f64 = 1.0;
    const SYMBOL: &'static str = "rad";
}

/// An angular magnitude tagged with its unit.
#[derive(Debug, PartialEq, PartialOrd)]
pub struct Angle<U: AngleUnit> {
    value: f64,
    _unit: PhantomData<U>,
}

impl<U: AngleUnit> Clone for Angle<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: AngleUnit> Copy for Angle<U> {}

/// Angle measured in degrees.
pub type Degrees = Angle<Deg>;

/// Angle measured in radians.
pub type Radians = Angle<Rad>;

impl<U: AngleUnit> Angle<U> {
    /// Wraps a raw magnitude expressed in unit `U`.
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw magnitude in unit `U`.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Converts to radians.
    pub fn to_radians(self) -> Radians {
        Radians::new(self.value * U::RAD_PER_UNIT)
    }

    /// Converts to degrees.
    pub fn to_degrees(self) -> Degrees {
        Degrees::new(self.value * U::RAD_PER_UNIT * 180.0 / PI)
    }

    /// Tangent of the angle, evaluated in radians.
    pub fn tan(&self) -> f64 {
        self.to_radians().value().tan()
    }
}

impl<U: AngleUnit> Add for Angle<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U: AngleUnit> Sub for Angle<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U: AngleUnit> Mul<f64> for Angle<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: AngleUnit> Div<f64> for Angle<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<U: AngleUnit> Neg for Angle<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: AngleUnit> fmt::Display for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::{Degrees, Radians};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn degrees_to_radians() {
        let rad = Degrees::new(180.0).to_radians();
        assert!((rad.value() - PI).abs() < 1e-12);
        assert!((Degrees::new(90.0).to_radians().value() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn radians_to_degrees() {
        let deg = Radians::new(FRAC_PI_4).to_degrees();
        assert!((deg.value() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn conversion_round_trip() {
        for deg in [0.0, 15.0, 32.0, 90.0, 179.0] {
            let back = Degrees::new(deg).to_radians().to_degrees();
            assert!((back.value() - deg).abs() < 1e-12);
        }
    }

    #[test]
    fn tan_evaluates_in_radians() {
        assert!((Degrees::new(45.0).tan() - 1.0).abs() < 1e-12);
        assert!((Radians::new(FRAC_PI_4).tan() - 1.0).abs() < 1e-12);
        assert!(Degrees::new(0.0).tan().abs() < 1e-12);
    }

    #[test]
    fn division_halves_a_field_of_view() {
        let half = Degrees::new(30.0) / 2.0;
        assert!((half.value() - 15.0).abs() < 1e-12);
        assert!((half.tan() - (PI / 12.0).tan()).abs() < 1e-12);
    }

    #[test]
    fn negation_mirrors_the_angle() {
        let angle = Radians::new(0.3);
        assert!(((-angle).tan() + angle.tan()).abs() < 1e-12);
    }

    #[test]
    fn display_carries_the_unit_symbol() {
        assert_eq!(format!("{}", Degrees::new(30.0)), "30 deg");
        assert_eq!(format!("{}", Radians::new(0.5)), "0.5 rad");
    }
}
