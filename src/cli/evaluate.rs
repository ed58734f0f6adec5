use std::{fs, io, path::PathBuf};

use clap::Parser;
use itertools::Itertools;

use crate::{
    core::engine::Engine,
    prelude::*,
    record::{CalculationRequest, Requests},
};

#[derive(Parser)]
pub struct EvaluateArgs {
    /// JSON file with a request or an array of requests, `-` for the standard input.
    #[clap(default_value = "-")]
    pub input: PathBuf,

    /// Print the results on a single line.
    #[clap(long)]
    pub compact: bool,
}

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn evaluate(engine: &Engine, args: &EvaluateArgs) -> Result {
    let text = if args.input.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("failed to read the standard input")?
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read `{}`", args.input.display()))?
    };
    let requests: Requests = serde_json::from_str(&text).context("failed to parse the requests")?;

    let calculate = |request: CalculationRequest| engine.calculate(&request.into());
    let results = match requests {
        Requests::One(request) => serde_json::to_value(calculate(request))?,
        Requests::Many(requests) => {
            info!(len = requests.len(), "evaluating the batch…");
            serde_json::to_value(requests.into_iter().map(calculate).collect_vec())?
        }
    };

    if args.compact {
        println!("{results}");
    } else {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}
