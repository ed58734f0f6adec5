use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::consumption::ConsumptionArgs,
    config::TariffConfig,
    core::{customer::CustomerClass, engine::Engine},
    prelude::*,
    tables::{build_baseline_table, build_breakdown_table, build_regions_table, build_tariff_table},
};

#[derive(Parser)]
pub struct TariffArgs {
    #[command(subcommand)]
    pub command: TariffCommand,
}

#[derive(Subcommand)]
pub enum TariffCommand {
    /// Print the brackets, the flat rates, and the regional sun hours.
    #[clap(name = "show")]
    Show,

    /// Write the active tariff to a TOML file.
    #[clap(name = "export")]
    Export { path: PathBuf },

    /// Resolve the monthly consumption and bill without sizing anything.
    #[clap(name = "resolve")]
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    #[clap(flatten)]
    pub consumption: ConsumptionArgs,

    #[clap(long, value_enum, default_value = "household", env = "CUSTOMER_CLASS")]
    pub customer: CustomerClass,
}

pub fn tariff(engine: &Engine, args: &TariffArgs) -> Result {
    match &args.command {
        TariffCommand::Show => {
            info!(vat_multiplier = engine.tariff.vat_multiplier, "active tariff");
            println!("{}", build_tariff_table(&engine.tariff));
            println!("{}", build_regions_table(&engine.regions));
        }
        TariffCommand::Export { path } => {
            TariffConfig::from(engine).write_to(path)?;
            info!(path = %path.display(), "exported");
        }
        TariffCommand::Resolve(args) => {
            let baseline = engine.resolve(Some(args.customer), args.consumption.into());
            println!("{}", build_baseline_table(args.customer, &baseline));
            if args.customer == CustomerClass::Household {
                println!(
                    "{}",
                    build_breakdown_table(engine.tariff.household.breakdown(baseline.consumption)),
                );
            }
        }
    }
    Ok(())
}
