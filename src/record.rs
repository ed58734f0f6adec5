use serde::Deserialize;

use crate::{
    core::{
        customer::CustomerClass,
        engine::CalculationInput,
        financial::Investment,
        tariff::ConsumptionInput,
        topology::SystemTopology,
    },
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Watts,
        proportions::Percent,
        rate::{KilowattHourRate, KilowattPrice},
    },
};

/// Calculation request as submitted by the web form.
///
/// Either `monthlyKwh` or `monthlyBill` is zero, meaning «derive this one from the other».
#[must_use]
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationRequest {
    pub monthly_kwh: KilowattHours,
    pub monthly_bill: Cost,
    pub investment_cost_per_kwp: KilowattPrice,
    pub panel_wattage: Watts,
    pub system_type: String,
    pub storage_investment_cost: KilowattHourRate,

    /// Percent.
    pub day_usage_ratio: f64,

    pub customer_type: String,
    pub region: String,
}

/// One request or a batch of them.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Requests {
    Many(Vec<CalculationRequest>),
    One(CalculationRequest),
}

impl From<CalculationRequest> for CalculationInput {
    fn from(request: CalculationRequest) -> Self {
        let customer_class = CustomerClass::from_label(&request.customer_type);
        if customer_class.is_none() {
            warn!(customer_type = request.customer_type.as_str(), "unrecognised customer type");
        }
        Self::builder()
            .consumption(ConsumptionInput::from_sentinels(
                request.monthly_kwh,
                request.monthly_bill,
            ))
            .maybe_customer_class(customer_class)
            .region(request.region)
            .topology(SystemTopology::from_system_type(&request.system_type))
            .day_usage(Percent::saturating_from(request.day_usage_ratio))
            .investment(
                Investment::builder()
                    .panel_price(request.investment_cost_per_kwp)
                    .storage_price(request.storage_investment_cost)
                    .panel_wattage(request.panel_wattage)
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() -> Result {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "monthlyKwh": 0,
                "monthlyBill": 1000000,
                "investmentCostPerKwp": 12000000,
                "panelWattage": 620,
                "systemType": "Hybrid",
                "storageInvestmentCost": 6000000,
                "dayUsageRatio": 60,
                "customerType": "Hộ gia đình",
                "region": "Miền Bắc"
            }"#,
        )?;
        let input = CalculationInput::from(request);
        assert_eq!(input.consumption, ConsumptionInput::KnownBill(Cost(1_000_000.0)));
        assert_eq!(input.customer_class, Some(CustomerClass::Household));
        assert_eq!(input.region, "Miền Bắc");
        assert_eq!(input.topology, SystemTopology::Hybrid);
        assert_eq!(input.day_usage, Percent(60));
        assert_eq!(input.investment.panel_price, KilowattPrice(12_000_000.0));
        assert_eq!(input.investment.storage_price, KilowattHourRate(6_000_000.0));
        assert_eq!(input.investment.panel_wattage, Watts(620.0));
        Ok(())
    }

    #[test]
    fn test_missing_fields() -> Result {
        let input = CalculationInput::from(serde_json::from_str::<CalculationRequest>(
            r#"{ "monthlyKwh": 300, "customerType": "Kinh doanh" }"#,
        )?);
        assert_eq!(input.consumption, ConsumptionInput::KnownKwh(KilowattHours(300.0)));
        assert_eq!(input.customer_class, Some(CustomerClass::Business));
        assert_eq!(input.topology, SystemTopology::GridTied);
        assert_eq!(input.day_usage, Percent::ZERO);
        assert_eq!(input.investment.panel_wattage, Watts::ZERO);
        Ok(())
    }

    #[test]
    fn test_unrecognised_customer_type() -> Result {
        let input = CalculationInput::from(serde_json::from_str::<CalculationRequest>(
            r#"{ "monthlyKwh": 300, "customerType": "Nông nghiệp" }"#,
        )?);
        assert_eq!(input.customer_class, None);
        Ok(())
    }

    #[test]
    fn test_day_usage_ratio_is_clamped() -> Result {
        let input = CalculationInput::from(serde_json::from_str::<CalculationRequest>(
            r#"{ "dayUsageRatio": 150 }"#,
        )?);
        assert_eq!(input.day_usage, Percent::HUNDRED);
        Ok(())
    }

    #[test]
    fn test_requests() -> Result {
        assert!(matches!(serde_json::from_str(r#"{ "monthlyKwh": 1 }"#)?, Requests::One(_)));
        assert!(matches!(
            serde_json::from_str(r#"[{ "monthlyKwh": 1 }, { "monthlyBill": 2 }]"#)?,
            Requests::Many(requests) if requests.len() == 2,
        ));
        Ok(())
    }
}
