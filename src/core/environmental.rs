use crate::{
    core::financial::MONTHS_PER_YEAR,
    quantity::{energy::KilowattHours, mass::Tonnes},
};

/// Grid emission factor, kilograms of CO₂ per kilowatt-hour.
pub const CO2_PER_KILOWATT_HOUR: f64 = 0.709;

/// Trees absorbing as much CO₂ in a year, per kilowatt-hour.
pub const TREES_PER_KILOWATT_HOUR: f64 = 0.012;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Impact {
    pub co2_reduction_yearly: Tonnes,
    pub tree_equivalent: f64,
}

pub fn evaluate(monthly_generation: KilowattHours) -> Impact {
    let monthly_generation = monthly_generation.non_negative();
    Impact {
        co2_reduction_yearly: Tonnes::from_kilograms(
            monthly_generation.0 * MONTHS_PER_YEAR * CO2_PER_KILOWATT_HOUR,
        ),
        tree_equivalent: monthly_generation.0 * TREES_PER_KILOWATT_HOUR * MONTHS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_evaluate() {
        let impact = evaluate(KilowattHours(560.4));
        assert_abs_diff_eq!(impact.co2_reduction_yearly.0, 560.4 * 12.0 * 0.709 / 1000.0);
        assert_abs_diff_eq!(impact.tree_equivalent, 560.4 * 0.012 * 12.0);
    }

    #[test]
    fn test_zero_generation() {
        assert_eq!(
            evaluate(KilowattHours::ZERO),
            Impact { co2_reduction_yearly: Tonnes::ZERO, tree_equivalent: 0.0 },
        );
    }
}
