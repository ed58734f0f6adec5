use std::path::PathBuf;

use clap::Parser;

use crate::{config::TariffConfig, core::engine::Engine, prelude::*};

#[must_use]
#[derive(Parser)]
pub struct TariffFileArgs {
    /// TOML tariff file, the built-in Vietnamese tariff when omitted.
    #[clap(long = "tariff-file", env = "TARIFF_FILE", global = true)]
    pub path: Option<PathBuf>,
}

impl TariffFileArgs {
    pub fn load_engine(&self) -> Result<Engine> {
        let Some(path) = &self.path else {
            debug!("using the built-in tariff");
            return Ok(Engine::default());
        };
        Engine::try_from(TariffConfig::read_from(path)?)
            .with_context(|| format!("invalid tariff file `{}`", path.display()))
    }
}
