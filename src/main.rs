mod cli;
mod config;
mod core;
mod prelude;
mod quantity;
mod record;
mod tables;

use std::io;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, evaluate, quote, tariff},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let engine = args.tariff_file.load_engine()?;

    match args.command {
        Command::Quote(args) => quote(&engine, &args)?,
        Command::Evaluate(args) => evaluate(&engine, &args)?,
        Command::Tariff(args) => tariff(&engine, &args)?,
    }

    info!("done!");
    Ok(())
}
