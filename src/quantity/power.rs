use crate::quantity::{cost::Cost, energy::KilowattHours, rate::KilowattPrice, time::Hours};

quantity!(
    /// Rated (peak) capacity.
    Kilowatts, via: f64, suffix: "kWp", precision: 2
);
quantity!(Watts, via: f64, suffix: "W", precision: 0);

implement_mul!(Kilowatts, Hours, KilowattHours);
implement_mul!(Kilowatts, KilowattPrice, Cost);

impl Kilowatts {
    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl Watts {
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}
