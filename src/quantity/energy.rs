use std::ops::Mul;

use crate::quantity::{
    cost::Cost,
    power::Kilowatts,
    proportions::Percent,
    rate::KilowattHourRate,
    time::Hours,
};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 1);

implement_mul!(KilowattHours, KilowattHourRate, Cost);
implement_div!(KilowattHours, Hours, Kilowatts);

impl KilowattHours {
    /// Round to whole kilowatt-hours.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl Mul<Percent> for KilowattHours {
    type Output = Self;

    fn mul(self, percent: Percent) -> Self::Output {
        self * percent.to_proportion()
    }
}
