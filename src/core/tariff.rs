mod bracket;
mod consumption;

use serde::{Deserialize, Serialize};

pub use self::{
    bracket::{BracketCharge, BracketSchedule, TariffBracket},
    consumption::ConsumptionInput,
};
use crate::{
    core::customer::CustomerClass,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

pub const VAT_MULTIPLIER: f64 = 1.08;

/// Pre-tax average rates of the non-residential classes.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct FlatRates {
    pub business: KilowattHourRate,
    pub manufacturing: KilowattHourRate,
    pub administrative: KilowattHourRate,
}

impl Default for FlatRates {
    fn default() -> Self {
        Self {
            business: KilowattHourRate(2887.0),
            manufacturing: KilowattHourRate(1809.0),
            administrative: KilowattHourRate(1940.0),
        }
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Tariff {
    /// Converts a pre-tax amount into the after-tax one.
    pub vat_multiplier: f64,

    pub household: BracketSchedule,
    pub flat_rates: FlatRates,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            vat_multiplier: VAT_MULTIPLIER,
            household: BracketSchedule::residential(),
            flat_rates: FlatRates::default(),
        }
    }
}

/// How a customer class is billed.
#[derive(Copy, Clone, Debug)]
pub enum Pricing<'a> {
    Progressive(&'a BracketSchedule),
    Flat(KilowattHourRate),
}

impl Pricing<'_> {
    /// Pre-tax cost of the consumption.
    pub fn price(self, consumption: KilowattHours) -> Cost {
        match self {
            Self::Progressive(schedule) => schedule.price(consumption),
            Self::Flat(rate) => consumption.non_negative() * rate,
        }
    }

    /// Unrounded consumption paid for by the pre-tax amount.
    pub fn consumption_for(self, budget: Cost) -> KilowattHours {
        match self {
            Self::Progressive(schedule) => schedule.consumption_for(budget),
            Self::Flat(rate) if rate.is_positive() => budget.non_negative() / rate,
            Self::Flat(_) => KilowattHours::ZERO,
        }
    }

    /// Blended pre-tax rate, always re-derived by forward pricing the consumption.
    pub fn average_rate(self, consumption: KilowattHours) -> KilowattHourRate {
        if !consumption.is_positive() {
            return KilowattHourRate::ZERO;
        }
        match self {
            Self::Progressive(schedule) => schedule.price(consumption) / consumption,
            Self::Flat(rate) => rate,
        }
    }
}

/// The customer's situation before installing anything.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Baseline {
    pub consumption: KilowattHours,

    /// After tax.
    pub original_bill: Cost,

    /// Pre-tax.
    pub average_rate: KilowattHourRate,
}

impl Baseline {
    pub const ZERO: Self = Self {
        consumption: KilowattHours::ZERO,
        original_bill: Cost::ZERO,
        average_rate: KilowattHourRate::ZERO,
    };
}

impl Tariff {
    /// Pricing of the class, or zero pricing for an unrecognised class.
    pub fn pricing(&self, customer_class: Option<CustomerClass>) -> Pricing<'_> {
        match customer_class {
            Some(CustomerClass::Household) => Pricing::Progressive(&self.household),
            Some(CustomerClass::Business) => Pricing::Flat(self.flat_rates.business),
            Some(CustomerClass::Manufacturing) => Pricing::Flat(self.flat_rates.manufacturing),
            Some(CustomerClass::Administrative) => Pricing::Flat(self.flat_rates.administrative),
            None => {
                debug!("no customer class, pricing at zero");
                Pricing::Flat(KilowattHourRate::ZERO)
            }
        }
    }

    /// After-tax cost of the consumption.
    pub fn bill(&self, pricing: Pricing<'_>, consumption: KilowattHours) -> Cost {
        pricing.price(consumption) * self.vat_multiplier
    }

    /// Resolve the monthly consumption and the bill from whichever of them is known.
    #[instrument(skip_all, fields(?consumption))]
    pub fn resolve(&self, pricing: Pricing<'_>, consumption: ConsumptionInput) -> Baseline {
        let (consumption, original_bill) = match consumption {
            ConsumptionInput::KnownKwh(consumption) => {
                let consumption = consumption.non_negative();
                (consumption, self.bill(pricing, consumption))
            }
            ConsumptionInput::KnownBill(bill) => {
                let bill = bill.non_negative();
                let consumption = pricing.consumption_for(bill / self.vat_multiplier).round();
                (consumption, bill)
            }
        };
        if !consumption.is_positive() {
            debug!("zero consumption");
            return Baseline::ZERO;
        }
        let baseline = Baseline {
            consumption,
            original_bill,
            average_rate: pricing.average_rate(consumption),
        };
        debug!(
            consumption = %baseline.consumption,
            original_bill = %baseline.original_bill,
            average_rate = %baseline.average_rate,
            "resolved"
        );
        baseline
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_household_from_kwh() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Household)),
            ConsumptionInput::KnownKwh(KilowattHours(356.0)),
        );
        assert_abs_diff_eq!(baseline.consumption.0, 356.0);
        assert_abs_diff_eq!(baseline.original_bill.0, 927_100.0 * 1.08, epsilon = 1e-6);
        assert_abs_diff_eq!(baseline.average_rate.0, 927_100.0 / 356.0, epsilon = 1e-9);
    }

    #[test]
    fn test_household_from_bill() {
        let tariff = Tariff::default();
        let pricing = tariff.pricing(Some(CustomerClass::Household));
        let bill = Cost(1_000_000.0);

        // 925 926 ₫ pre-tax covers the first four brackets (739 500 ₫),
        // and the rest buys 55.65 kWh at 3350 ₫/kWh:
        let baseline = tariff.resolve(pricing, ConsumptionInput::KnownBill(bill));
        assert_abs_diff_eq!(baseline.consumption.0, 356.0);
        assert_eq!(baseline.original_bill, bill);

        // Deterministic:
        assert_eq!(tariff.resolve(pricing, ConsumptionInput::KnownBill(bill)), baseline);

        // Re-pricing the rounded consumption lands within 1%:
        assert_relative_eq!(
            tariff.bill(pricing, baseline.consumption).0,
            bill.0,
            max_relative = 0.01,
        );

        // The average rate comes from the forward pricing of the rounded consumption:
        assert_abs_diff_eq!(baseline.average_rate.0, 927_100.0 / 356.0, epsilon = 1e-9);
    }

    #[test]
    fn test_household_round_trip() {
        let tariff = Tariff::default();
        let pricing = tariff.pricing(Some(CustomerClass::Household));
        for consumption in [1.0, 49.0, 50.0, 51.0, 150.0, 299.0, 356.0, 400.0, 401.0, 1234.0] {
            let bill = tariff.bill(pricing, KilowattHours(consumption));
            let baseline = tariff.resolve(pricing, ConsumptionInput::KnownBill(bill));
            assert_abs_diff_eq!(baseline.consumption.0, consumption, epsilon = 1.0);
        }
    }

    #[test]
    fn test_business_from_kwh() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Business)),
            ConsumptionInput::KnownKwh(KilowattHours(1000.0)),
        );
        assert_abs_diff_eq!(baseline.original_bill.0, 1000.0 * 2887.0 * 1.08, epsilon = 1e-6);
        assert_eq!(baseline.average_rate, tariff.flat_rates.business);
    }

    #[test]
    fn test_manufacturing_from_bill() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Manufacturing)),
            ConsumptionInput::KnownBill(Cost(10_000_000.0)),
        );
        // 10 000 000 / (1809 × 1.08) = 5118.4…
        assert_abs_diff_eq!(baseline.consumption.0, 5118.0);
        assert_eq!(baseline.original_bill, Cost(10_000_000.0));
        assert_eq!(baseline.average_rate, tariff.flat_rates.manufacturing);
    }

    #[test]
    fn test_zero_consumption() {
        let tariff = Tariff::default();
        for class in CustomerClass::ALL {
            let baseline = tariff.resolve(
                tariff.pricing(Some(class)),
                ConsumptionInput::KnownKwh(KilowattHours::ZERO),
            );
            assert_eq!(baseline, Baseline::ZERO);
        }
    }

    #[test]
    fn test_zero_bill() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Household)),
            ConsumptionInput::KnownBill(Cost::ZERO),
        );
        assert_eq!(baseline, Baseline::ZERO);
    }

    #[test]
    fn test_tiny_bill_rounds_to_zero() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Household)),
            ConsumptionInput::KnownBill(Cost(500.0)),
        );
        assert_eq!(baseline, Baseline::ZERO);
    }

    #[test]
    fn test_negative_kwh() {
        let tariff = Tariff::default();
        let baseline = tariff.resolve(
            tariff.pricing(Some(CustomerClass::Household)),
            ConsumptionInput::KnownKwh(KilowattHours(-100.0)),
        );
        assert_eq!(baseline, Baseline::ZERO);
    }

    #[test]
    fn test_unrecognised_class() {
        let tariff = Tariff::default();
        let pricing = tariff.pricing(None);
        assert_eq!(
            tariff.resolve(pricing, ConsumptionInput::KnownBill(Cost(1_000_000.0))),
            Baseline::ZERO,
        );
        let baseline = tariff.resolve(pricing, ConsumptionInput::KnownKwh(KilowattHours(300.0)));
        assert_eq!(baseline.original_bill, Cost::ZERO);
        assert_eq!(baseline.average_rate, KilowattHourRate::ZERO);
    }
}
