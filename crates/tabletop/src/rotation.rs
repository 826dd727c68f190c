//! Fill rotation in 45° steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rotation of a pattern fill: one of 0, 45, ..., 315 degrees.
///
/// The inner value is private so an invalid angle cannot be built outside
/// [`Rotation::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Rotation(u16);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0);

    /// Degrees per step.
    pub const STEP: u16 = 45;

    /// Number of distinct rotations. `next()` applied this many times is the
    /// identity.
    pub const STEPS: usize = 8;

    /// Build a rotation from degrees; anything but a multiple of 45 in
    /// `0..360` fails with [`Error::InvalidRotation`].
    pub fn new(degrees: i64) -> Result<Self> {
        if (0..360).contains(&degrees) && degrees % Self::STEP as i64 == 0 {
            Ok(Self(degrees as u16))
        } else {
            Err(Error::InvalidRotation { degrees })
        }
    }

    /// Advance by one step, wrapping at 360.
    #[inline]
    pub fn next(self) -> Self {
        Self((self.0 + Self::STEP) % 360)
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// All eight rotations in ascending order.
    pub fn all() -> impl Iterator<Item = Rotation> {
        (0..Self::STEPS as u16).map(|i| Rotation(i * Self::STEP))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Rotation {
    type Error = Error;

    fn try_from(degrees: i64) -> Result<Self> {
        Self::new(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_45_degree_steps() {
        assert_eq!(Rotation::new(135).map(Rotation::degrees), Ok(135));
        assert_eq!(Rotation::new(30), Err(Error::InvalidRotation { degrees: 30 }));
        assert_eq!(Rotation::new(360), Err(Error::InvalidRotation { degrees: 360 }));
        assert_eq!(Rotation::new(-45), Err(Error::InvalidRotation { degrees: -45 }));
    }

    #[test]
    fn next_wraps_after_eight_steps() {
        let start = Rotation::new(90).unwrap();
        let mut r = start;
        for _ in 0..Rotation::STEPS {
            r = r.next();
        }
        assert_eq!(r, start);
        assert_eq!(Rotation::new(315).unwrap().next(), Rotation::ZERO);
    }

    #[test]
    fn all_lists_every_step() {
        let degrees: Vec<u16> = Rotation::all().map(Rotation::degrees).collect();
        assert_eq!(degrees, vec![0, 45, 90, 135, 180, 225, 270, 315]);
    }

    #[test]
    fn serde_validates() {
        assert_eq!(serde_yaml::from_str::<Rotation>("225").unwrap().degrees(), 225);
        assert!(serde_yaml::from_str::<Rotation>("10").is_err());
    }
}
