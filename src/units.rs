use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch). All page coordinates, font sizes,
/// and leadings in the crate are expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

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

impl Pt {
    /// Whether the value is finite and not negative
    pub fn is_non_negative(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Whether the value is finite and strictly greater than zero
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}
