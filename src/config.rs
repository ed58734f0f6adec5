use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        engine::Engine,
        region::RegionSunHours,
        tariff::{BracketSchedule, FlatRates, Tariff, TariffBracket},
    },
    prelude::*,
    quantity::time::Hours,
};

/// Tariff document, as stored in a TOML file.
#[must_use]
#[derive(Serialize, Deserialize)]
pub struct TariffConfig {
    pub vat_multiplier: f64,

    /// Sun hours of a region missing from [`TariffConfig::regions`].
    pub default_sun_hours: Hours,

    pub flat_rates: FlatRates,

    /// Average daily peak-sun-hours by region.
    pub regions: BTreeMap<String, Hours>,

    pub household_brackets: Vec<TariffBracket>,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self::from(&Engine::default())
    }
}

impl TariffConfig {
    #[instrument(name = "reading the tariff…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    #[instrument(skip(self), name = "writing the tariff…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        let text = toml::to_string(self).context("failed to serialize the tariff")?;
        fs::write(path, text).with_context(|| format!("failed to write `{}`", path.display()))
    }
}

impl TryFrom<TariffConfig> for Engine {
    type Error = Error;

    fn try_from(config: TariffConfig) -> Result<Self> {
        ensure!(
            config.vat_multiplier.is_finite() && config.vat_multiplier >= 1.0,
            "VAT multiplier must be at least 1, got {}",
            config.vat_multiplier,
        );
        let flat_rates = config.flat_rates;
        for (class, rate) in [
            ("business", flat_rates.business),
            ("manufacturing", flat_rates.manufacturing),
            ("administrative", flat_rates.administrative),
        ] {
            ensure!(
                rate.0.is_finite() && rate.0 >= 0.0,
                "{class} flat rate must be non-negative, got {rate}",
            );
        }
        let household = BracketSchedule::try_new(config.household_brackets)
            .context("invalid household brackets")?;
        let regions = RegionSunHours::try_new(config.regions, config.default_sun_hours)
            .context("invalid regions")?;
        Ok(Self {
            tariff: Tariff { vat_multiplier: config.vat_multiplier, household, flat_rates },
            regions,
        })
    }
}

impl From<&Engine> for TariffConfig {
    fn from(engine: &Engine) -> Self {
        Self {
            vat_multiplier: engine.tariff.vat_multiplier,
            default_sun_hours: engine.regions.fallback(),
            flat_rates: engine.tariff.flat_rates,
            regions: engine
                .regions
                .iter()
                .map(|(region, sun_hours)| (region.to_string(), sun_hours))
                .collect(),
            household_brackets: engine.tariff.household.iter().copied().collect(),
        }
    }
}
