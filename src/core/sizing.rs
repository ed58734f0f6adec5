use crate::{
    core::topology::SystemTopology,
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, proportions::Percent, time::Hours},
};

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Real-world losses: soiling, wiring, inverter.
pub const PERFORMANCE_RATIO: f64 = 0.90;

/// Battery capacity per kilowatt-peak of the array.
pub const STORAGE_DURATION: Hours = Hours(0.5);

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sizing {
    /// Rounded to hundredths.
    pub recommended_capacity: Kilowatts,

    pub storage_capacity: KilowattHours,
    pub monthly_generation: KilowattHours,

    /// Self-consumed part of the generation, net of the losses.
    pub effective_savings: KilowattHours,
}

impl Sizing {
    pub const ZERO: Self = Self {
        recommended_capacity: Kilowatts::ZERO,
        storage_capacity: KilowattHours::ZERO,
        monthly_generation: KilowattHours::ZERO,
        effective_savings: KilowattHours::ZERO,
    };
}

/// Size the array to the monthly consumption.
#[instrument(skip_all, fields(%consumption, %sun_hours, ?topology, %day_usage))]
pub fn size(
    consumption: KilowattHours,
    sun_hours: Hours,
    topology: SystemTopology,
    day_usage: Percent,
) -> Sizing {
    if !sun_hours.is_positive() {
        warn!("non-positive sun hours, nothing to size");
        return Sizing::ZERO;
    }

    let daily_consumption = consumption.non_negative() / DAYS_PER_MONTH;
    let required_capacity = match topology {
        // The battery shifts the generation, so cover the entire load:
        SystemTopology::Hybrid => daily_consumption / sun_hours,
        // Without storage, only the daytime load is worth covering:
        SystemTopology::GridTied => (daily_consumption * day_usage) / sun_hours,
    };
    let recommended_capacity = required_capacity.round_to_hundredths();
    let monthly_generation = recommended_capacity * sun_hours * DAYS_PER_MONTH;
    let sizing = Sizing {
        recommended_capacity,
        storage_capacity: if topology.has_storage() {
            recommended_capacity * STORAGE_DURATION
        } else {
            KilowattHours::ZERO
        },
        monthly_generation,
        effective_savings: monthly_generation * day_usage * PERFORMANCE_RATIO,
    };
    debug!(
        recommended_capacity = %sizing.recommended_capacity,
        storage_capacity = %sizing.storage_capacity,
        monthly_generation = %sizing.monthly_generation,
        "sized"
    );
    sizing
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_hybrid() {
        let sizing = size(KilowattHours(560.0), Hours(4.0), SystemTopology::Hybrid, Percent(50));
        assert_abs_diff_eq!(sizing.recommended_capacity.0, 4.67);
        assert_abs_diff_eq!(sizing.storage_capacity.0, 2.335, epsilon = 1e-9);
        assert_abs_diff_eq!(sizing.monthly_generation.0, 4.67 * 4.0 * 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            sizing.effective_savings.0,
            4.67 * 4.0 * 30.0 * 0.5 * 0.9,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_grid_tied() {
        let sizing = size(KilowattHours(560.0), Hours(4.0), SystemTopology::GridTied, Percent(50));
        // 560 / 30 × 0.5 / 4 = 2.333…
        assert_abs_diff_eq!(sizing.recommended_capacity.0, 2.33);
        assert_eq!(sizing.storage_capacity, KilowattHours::ZERO);
        assert_abs_diff_eq!(sizing.monthly_generation.0, 2.33 * 4.0 * 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hybrid_is_larger_unless_daytime_only() {
        for day_usage in (0..100).map(Percent) {
            let hybrid = size(KilowattHours(450.0), Hours(2.9), SystemTopology::Hybrid, day_usage);
            let grid_tied =
                size(KilowattHours(450.0), Hours(2.9), SystemTopology::GridTied, day_usage);
            assert!(hybrid.recommended_capacity > grid_tied.recommended_capacity, "{day_usage}");
        }
    }

    #[test]
    fn test_daytime_only_load() {
        let hybrid =
            size(KilowattHours(450.0), Hours(4.0), SystemTopology::Hybrid, Percent::HUNDRED);
        let grid_tied =
            size(KilowattHours(450.0), Hours(4.0), SystemTopology::GridTied, Percent::HUNDRED);
        assert_eq!(hybrid.recommended_capacity, grid_tied.recommended_capacity);
    }

    #[test]
    fn test_zero_sun_hours() {
        assert_eq!(
            size(KilowattHours(560.0), Hours::ZERO, SystemTopology::Hybrid, Percent(50)),
            Sizing::ZERO,
        );
    }

    #[test]
    fn test_zero_consumption() {
        assert_eq!(
            size(KilowattHours::ZERO, Hours(4.0), SystemTopology::GridTied, Percent(50)),
            Sizing::ZERO,
        );
    }
}
