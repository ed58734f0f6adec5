mod consumption;
mod evaluate;
mod quote;
mod tariff;
mod tariff_file;

use clap::{Parser, Subcommand};

pub use self::{evaluate::evaluate, quote::quote, tariff::tariff};
use self::{
    evaluate::EvaluateArgs,
    quote::QuoteArgs,
    tariff::TariffArgs,
    tariff_file::TariffFileArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub tariff_file: TariffFileArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: resolve the consumption, size the system, and print the quote.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Answer JSON calculation requests with JSON results.
    #[clap(name = "evaluate")]
    Evaluate(EvaluateArgs),

    /// Inspect the active tariff.
    #[clap(name = "tariff")]
    Tariff(TariffArgs),
}
