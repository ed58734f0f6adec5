quantity!(Percent, via: u16, suffix: "%", precision: 0);

impl Percent {
    pub const HUNDRED: Self = Self(100);

    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_proportion(self) -> f64 {
        0.01 * f64::from(self.0)
    }

    /// Saturate an arbitrary number into `0..=100`, treating `NaN` as zero.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn saturating_from(value: f64) -> Self {
        if value.is_nan() { Self::ZERO } else { Self(value.round().clamp(0.0, 100.0) as u16) }
    }
}
