use serde::Serialize;

use crate::{
    core::engine::Quote,
    quantity::{
        area::SquareMetres,
        cost::Cost,
        energy::KilowattHours,
        mass::Tonnes,
        power::Kilowatts,
    },
};

/// Flat calculation result, as read by the stored reports.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_kwh: KilowattHours,
    pub recommended_kwp: Kilowatts,
    pub number_of_panels: u32,

    #[serde(rename = "requiredArea")]
    pub required_area: SquareMetres,

    pub storage_kwh: KilowattHours,
    pub total_investment: Cost,
    pub monthly_savings: Cost,
    pub new_bill: Cost,

    #[serde(rename = "paybackPeriodYears")]
    pub payback_years: f64,

    #[serde(rename = "roiFirstYear")]
    pub roi_first_year_percent: f64,

    #[serde(rename = "co2ReductionYearly")]
    pub co2_reduction_yearly: Tonnes,

    pub tree_equivalent: f64,
    pub original_bill: Cost,
    pub annual_savings: Cost,
}

impl From<&Quote> for CalculationResult {
    fn from(quote: &Quote) -> Self {
        Self {
            monthly_kwh: quote.baseline.consumption,
            recommended_kwp: quote.sizing.recommended_capacity,
            number_of_panels: quote.financials.number_of_panels,
            required_area: quote.financials.required_area,
            storage_kwh: quote.sizing.storage_capacity,
            total_investment: quote.financials.total_investment,
            monthly_savings: quote.financials.monthly_savings,
            new_bill: quote.financials.new_bill,
            payback_years: quote.financials.payback_years,
            roi_first_year_percent: quote.financials.roi_first_year_percent,
            co2_reduction_yearly: quote.impact.co2_reduction_yearly,
            tree_equivalent: quote.impact.tree_equivalent,
            original_bill: quote.baseline.original_bill,
            annual_savings: quote.financials.annual_savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{
        core::{
            customer::CustomerClass,
            engine::{CalculationInput, Engine},
            financial::Investment,
            tariff::ConsumptionInput,
            topology::SystemTopology,
        },
        quantity::{
            power::Watts,
            proportions::Percent,
            rate::{KilowattHourRate, KilowattPrice},
        },
    };

    #[test]
    fn test_field_names() {
        let input = CalculationInput::builder()
            .consumption(ConsumptionInput::KnownKwh(KilowattHours(560.0)))
            .customer_class(CustomerClass::Household)
            .region("Miền Nam")
            .topology(SystemTopology::Hybrid)
            .day_usage(Percent(50))
            .investment(
                Investment::builder()
                    .panel_price(KilowattPrice(10_000_000.0))
                    .storage_price(KilowattHourRate(5_000_000.0))
                    .panel_wattage(Watts(620.0))
                    .build(),
            )
            .build();
        let value = serde_json::to_value(Engine::default().calculate(&input)).unwrap();
        let keys = value.as_object().unwrap().keys().map(String::as_str).sorted().collect_vec();
        assert_eq!(
            keys,
            [
                "annualSavings",
                "co2ReductionYearly",
                "monthlyKwh",
                "monthlySavings",
                "newBill",
                "numberOfPanels",
                "originalBill",
                "paybackPeriodYears",
                "recommendedKwp",
                "requiredArea",
                "roiFirstYear",
                "storageKwh",
                "totalInvestment",
                "treeEquivalent",
            ],
        );
        assert_eq!(value["numberOfPanels"], 8);
        assert_eq!(value["recommendedKwp"], 4.67);
    }
}
