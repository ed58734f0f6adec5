use clap::Parser;

use crate::{
    cli::consumption::ConsumptionArgs,
    core::{
        customer::CustomerClass,
        engine::{CalculationInput, Engine},
        financial::Investment,
        result::CalculationResult,
        topology::SystemTopology,
    },
    prelude::*,
    quantity::{
        power::Watts,
        proportions::Percent,
        rate::{KilowattHourRate, KilowattPrice},
    },
    tables::{build_baseline_table, build_breakdown_table, build_quote_table},
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    pub consumption: ConsumptionArgs,

    #[clap(long, value_enum, default_value = "household", env = "CUSTOMER_CLASS")]
    pub customer: CustomerClass,

    /// Region to look the sun hours up for.
    #[clap(long, default_value = "Miền Nam", env = "REGION")]
    pub region: String,

    #[clap(long = "system-type", value_enum, default_value = "grid-tied", env = "SYSTEM_TYPE")]
    pub topology: SystemTopology,

    /// Share of the load that falls on daylight hours, in percent.
    #[clap(
        long = "day-usage-percent",
        default_value = "50",
        env = "DAY_USAGE_PERCENT",
        value_parser = clap::value_parser!(u16).range(0..=100),
    )]
    pub day_usage_percent: u16,

    #[clap(flatten)]
    pub investment: InvestmentArgs,

    /// Print the JSON result instead of the tables.
    #[clap(long)]
    pub json: bool,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct InvestmentArgs {
    /// Installed cost of a kilowatt-peak of panels in đồng.
    #[clap(
        long = "investment-cost-per-kwp",
        default_value = "12000000",
        env = "INVESTMENT_COST_PER_KWP"
    )]
    pub panel_price: KilowattPrice,

    /// Cost of a kilowatt-hour of storage in đồng.
    #[clap(long = "storage-cost-per-kwh", default_value = "6000000", env = "STORAGE_COST_PER_KWH")]
    pub storage_price: KilowattHourRate,

    /// Nameplate power of a single panel.
    #[clap(long = "panel-wattage", default_value = "620", env = "PANEL_WATTAGE")]
    pub panel_wattage: Watts,
}

impl From<InvestmentArgs> for Investment {
    fn from(args: InvestmentArgs) -> Self {
        Self::builder()
            .panel_price(args.panel_price)
            .storage_price(args.storage_price)
            .panel_wattage(args.panel_wattage)
            .build()
    }
}

#[instrument(skip_all)]
pub fn quote(engine: &Engine, args: &QuoteArgs) -> Result {
    let input = CalculationInput::builder()
        .consumption(args.consumption.into())
        .customer_class(args.customer)
        .region(args.region.as_str())
        .topology(args.topology)
        .day_usage(Percent(args.day_usage_percent))
        .investment(args.investment.into())
        .build();
    let quote = engine.quote(&input);
    info!(
        capacity = %quote.sizing.recommended_capacity,
        payback_years = quote.financials.payback_years,
        "quoted"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&CalculationResult::from(&quote))?);
        return Ok(());
    }
    println!("{}", build_baseline_table(args.customer, &quote.baseline));
    if args.customer == CustomerClass::Household {
        println!(
            "{}",
            build_breakdown_table(engine.tariff.household.breakdown(quote.baseline.consumption)),
        );
    }
    println!("{}", build_quote_table(&quote, args.topology));
    Ok(())
}
