quantity!(Tonnes, via: f64, suffix: "t", precision: 2);

impl Tonnes {
    pub fn from_kilograms(kilograms: f64) -> Self {
        Self(kilograms / 1000.0)
    }
}
