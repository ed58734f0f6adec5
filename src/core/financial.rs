use bon::Builder;

use crate::{
    core::{sizing::Sizing, tariff::Baseline, topology::SystemTopology},
    prelude::*,
    quantity::{
        area::SquareMetres,
        cost::Cost,
        power::{Kilowatts, Watts},
        rate::{KilowattHourRate, KilowattPrice},
    },
};

/// Roof area taken by one kilowatt-peak of panels, in square metres.
pub const AREA_PER_KILOWATT: f64 = 5.45;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unit prices of the hardware.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Investment {
    pub panel_price: KilowattPrice,
    pub storage_price: KilowattHourRate,
    pub panel_wattage: Watts,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Financials {
    pub total_investment: Cost,
    pub monthly_savings: Cost,
    pub annual_savings: Cost,

    /// After tax, never negative: excess generation is not credited.
    pub new_bill: Cost,

    /// Zero when unknown, which is not the same as an instant payback.
    pub payback_years: f64,

    pub roi_first_year_percent: f64,
    pub number_of_panels: u32,
    pub required_area: SquareMetres,
}

#[instrument(skip_all, fields(?topology))]
pub fn evaluate(
    sizing: &Sizing,
    topology: SystemTopology,
    baseline: &Baseline,
    vat_multiplier: f64,
    investment: &Investment,
) -> Financials {
    let monthly_savings = sizing.effective_savings * baseline.average_rate * vat_multiplier;
    let annual_savings = monthly_savings * MONTHS_PER_YEAR;

    let panel_investment = sizing.recommended_capacity * investment.panel_price;
    let storage_investment = if topology.has_storage() {
        sizing.storage_capacity * investment.storage_price
    } else {
        Cost::ZERO
    };
    let total_investment = panel_investment + storage_investment;

    let payback_years = if total_investment.is_positive() && annual_savings.is_positive() {
        total_investment / annual_savings
    } else {
        0.0
    };
    let roi_first_year_percent = if total_investment.is_positive() {
        annual_savings / total_investment * 100.0
    } else {
        0.0
    };

    let financials = Financials {
        total_investment,
        monthly_savings,
        annual_savings,
        new_bill: (baseline.original_bill - monthly_savings).non_negative(),
        payback_years,
        roi_first_year_percent,
        number_of_panels: count_panels(sizing.recommended_capacity, investment.panel_wattage),
        required_area: SquareMetres(sizing.recommended_capacity.0 * AREA_PER_KILOWATT),
    };
    debug!(
        total_investment = %financials.total_investment,
        monthly_savings = %financials.monthly_savings,
        payback_years = financials.payback_years,
        "evaluated"
    );
    financials
}

/// Whole panels needed to reach the capacity.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_panels(capacity: Kilowatts, panel_wattage: Watts) -> u32 {
    if !panel_wattage.is_positive() {
        return 0;
    }
    (Watts::from(capacity.non_negative()) / panel_wattage).ceil() as u32
}
