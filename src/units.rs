//! Length units. Every width the wrapper works with is expressed in [`Pt`];
//! the other units exist so callers can state sizes however is convenient
//! and convert with `.into()`.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Points (1/72 of an inch), the base length unit of the crate
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
#[display("{_0}in")]
pub struct In(pub f32);

/// Millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// CSS pixels (1/96 of an inch)
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Pt {
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<Px> for Pt {
    fn from(value: Px) -> Self {
        Pt(value.0 * 0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(Px(16.0)), Pt(12.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn sums_and_scales() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(total * 2.0, Pt(8.0));
        assert_eq!(total / 4.0, Pt(1.0));
        assert_eq!(format!("{}", Pt(3.0)), "3pt");
    }
}
