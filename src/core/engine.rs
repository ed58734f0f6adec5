use bon::Builder;

use crate::{
    core::{
        customer::CustomerClass,
        environmental::{self, Impact},
        financial::{self, Financials, Investment},
        region::RegionSunHours,
        result::CalculationResult,
        sizing::{self, Sizing},
        tariff::{Baseline, ConsumptionInput, Tariff},
        topology::SystemTopology,
    },
    prelude::*,
    quantity::{proportions::Percent, time::Hours},
};

#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct CalculationInput {
    pub consumption: ConsumptionInput,

    /// `None` for an unrecognised class, which is priced at zero.
    pub customer_class: Option<CustomerClass>,

    #[builder(into)]
    pub region: String,

    pub topology: SystemTopology,

    /// Share of the load that falls on daylight hours.
    pub day_usage: Percent,

    pub investment: Investment,
}

/// Every intermediate result of a calculation.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Quote {
    pub baseline: Baseline,
    pub sun_hours: Hours,
    pub sizing: Sizing,
    pub financials: Financials,
    pub impact: Impact,
}

/// Immutable configuration that the calculations run against.
///
/// Reloading the configuration means building a new engine.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Engine {
    pub tariff: Tariff,
    pub regions: RegionSunHours,
}

impl Engine {
    /// Resolve the baseline only.
    pub fn resolve(
        &self,
        customer_class: Option<CustomerClass>,
        consumption: ConsumptionInput,
    ) -> Baseline {
        self.tariff.resolve(self.tariff.pricing(customer_class), consumption)
    }

    #[instrument(skip_all, fields(region = %input.region, topology = ?input.topology))]
    pub fn quote(&self, input: &CalculationInput) -> Quote {
        let baseline = self.resolve(input.customer_class, input.consumption);
        let sun_hours = self.regions.sun_hours(&input.region);
        let sizing =
            sizing::size(baseline.consumption, sun_hours, input.topology, input.day_usage);
        let financials = financial::evaluate(
            &sizing,
            input.topology,
            &baseline,
            self.tariff.vat_multiplier,
            &input.investment,
        );
        let impact = environmental::evaluate(sizing.monthly_generation);
        Quote { baseline, sun_hours, sizing, financials, impact }
    }

    pub fn calculate(&self, input: &CalculationInput) -> CalculationResult {
        CalculationResult::from(&self.quote(input))
    }
}
