use clap::Parser;

use crate::{
    core::tariff::ConsumptionInput,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Monthly consumption, or the bill to derive it from.
#[must_use]
#[derive(Copy, Clone, Parser)]
#[group(required = true, multiple = false)]
pub struct ConsumptionArgs {
    /// Metered monthly consumption in kilowatt-hours.
    #[clap(long = "monthly-kwh", env = "MONTHLY_KWH")]
    pub monthly_kwh: Option<u32>,

    /// Monthly bill in đồng, VAT included.
    #[clap(long = "monthly-bill", env = "MONTHLY_BILL")]
    pub monthly_bill: Option<Cost>,
}

impl From<ConsumptionArgs> for ConsumptionInput {
    fn from(args: ConsumptionArgs) -> Self {
        Self::from_sentinels(
            args.monthly_kwh.map_or(KilowattHours::ZERO, |kwh| KilowattHours(f64::from(kwh))),
            args.monthly_bill.unwrap_or(Cost::ZERO),
        )
    }
}
