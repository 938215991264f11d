use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A measurement in PDF points, where 72 points make up 1 inch. All page
/// geometry and content coordinates in the crate are expressed in points;
/// [Mm] and [In] exist to express values in friendlier units and convert
/// them on the way in.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Display, From, Into, Sum,
)]
pub struct Pt(pub f32);

impl std::ops::Sub for Pt {
    type Output = Pt;

    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Pt {
    fn sub_assign(&mut self, rhs: Pt) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// A measurement in millimetres. Only used as an input convenience; convert
/// to [Pt] before doing any arithmetic
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

/// A measurement in inches. Only used as an input convenience; convert to
/// [Pt] before doing any arithmetic
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}
