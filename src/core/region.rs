use std::collections::BTreeMap;

use crate::{prelude::*, quantity::time::Hours};

pub const DEFAULT_SUN_HOURS: Hours = Hours(4.0);

/// Average daily peak-sun-hours by region.
#[must_use]
#[derive(Clone, Debug)]
pub struct RegionSunHours {
    table: BTreeMap<String, Hours>,
    fallback: Hours,
}

impl Default for RegionSunHours {
    fn default() -> Self {
        Self {
            table: BTreeMap::from([
                ("Miền Bắc".to_string(), Hours(2.9)),
                ("Miền Trung".to_string(), Hours(4.0)),
                ("Miền Nam".to_string(), Hours(4.0)),
            ]),
            fallback: DEFAULT_SUN_HOURS,
        }
    }
}

impl RegionSunHours {
    pub fn try_new(table: BTreeMap<String, Hours>, fallback: Hours) -> Result<Self> {
        ensure!(
            fallback.is_positive() && fallback.0.is_finite(),
            "default sun hours must be positive, got {fallback}",
        );
        for (region, sun_hours) in &table {
            ensure!(
                sun_hours.is_positive() && sun_hours.0.is_finite(),
                "sun hours of `{region}` must be positive, got {sun_hours}",
            );
        }
        Ok(Self { table, fallback })
    }

    pub const fn fallback(&self) -> Hours {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Hours)> {
        self.table.iter().map(|(region, sun_hours)| (region.as_str(), *sun_hours))
    }

    /// Sun hours of the region, or the fallback for a region missing from the table.
    pub fn sun_hours(&self, region: &str) -> Hours {
        if let Some(sun_hours) = self.table.get(region) {
            *sun_hours
        } else {
            warn!(region, fallback = %self.fallback, "unknown region, using the default sun hours");
            self.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_region() {
        assert_eq!(RegionSunHours::default().sun_hours("Miền Bắc"), Hours(2.9));
        assert_eq!(RegionSunHours::default().sun_hours("Miền Nam"), Hours(4.0));
    }

    #[test]
    fn test_unknown_region() {
        assert_eq!(RegionSunHours::default().sun_hours("Atlantis"), DEFAULT_SUN_HOURS);
    }

    #[test]
    fn test_non_positive_sun_hours() {
        let table = BTreeMap::from([("Nowhere".to_string(), Hours::ZERO)]);
        assert!(RegionSunHours::try_new(table, DEFAULT_SUN_HOURS).is_err());
    }

    #[test]
    fn test_non_positive_fallback() {
        assert!(RegionSunHours::try_new(BTreeMap::new(), Hours(-1.0)).is_err());
    }
}
