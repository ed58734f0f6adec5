use std::{ops::ControlFlow, slice};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffBracket {
    #[serde(rename = "min_kwh")]
    pub min: KilowattHours,

    /// Exclusive of the next bracket. `None` for the open-ended top bracket.
    #[serde(rename = "max_kwh", default, skip_serializing_if = "Option::is_none")]
    pub max: Option<KilowattHours>,

    /// Pre-tax rate.
    pub rate: KilowattHourRate,
}

impl TariffBracket {
    pub const fn bounded(min: f64, max: f64, rate: f64) -> Self {
        Self {
            min: KilowattHours(min),
            max: Some(KilowattHours(max)),
            rate: KilowattHourRate(rate),
        }
    }

    pub const fn unbounded(min: f64, rate: f64) -> Self {
        Self { min: KilowattHours(min), max: None, rate: KilowattHourRate(rate) }
    }

    pub fn width(&self) -> Option<KilowattHours> {
        self.max.map(|max| max - self.min)
    }

    /// Pre-tax cost of consuming the entire bracket.
    pub fn max_spend(&self) -> Option<Cost> {
        self.width().map(|width| width * self.rate)
    }

    /// The part of the remaining consumption that falls into this bracket.
    fn take(&self, remaining: KilowattHours) -> KilowattHours {
        self.width().map_or(remaining, |width| remaining.min(width))
    }
}

/// Consumption billed within a single bracket.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct BracketCharge {
    pub bracket: TariffBracket,
    pub consumption: KilowattHours,

    /// Pre-tax.
    pub cost: Cost,
}

/// Progressive schedule: contiguous brackets, ascending from zero, the last one unbounded.
#[must_use]
#[derive(Clone, Debug)]
pub struct BracketSchedule(Vec<TariffBracket>);

impl BracketSchedule {
    pub fn try_new(brackets: Vec<TariffBracket>) -> Result<Self> {
        let (Some(first), Some(last)) = (brackets.first(), brackets.last()) else {
            bail!("the bracket schedule is empty");
        };
        ensure!(
            first.min == KilowattHours::ZERO,
            "the first bracket must start at zero, but it starts at {}",
            first.min,
        );
        ensure!(last.max.is_none(), "the last bracket must be unbounded");
        for (index, bracket) in brackets.iter().enumerate() {
            ensure!(
                bracket.rate.is_positive() && bracket.rate.0.is_finite(),
                "bracket #{} has an invalid rate: {}",
                index + 1,
                bracket.rate,
            );
        }
        for (index, (lower, upper)) in brackets.iter().tuple_windows().enumerate() {
            let Some(max) = lower.max else {
                bail!("only the last bracket may be unbounded, but #{} is as well", index + 1);
            };
            ensure!(max > lower.min, "bracket #{} is empty or inverted", index + 1);
            ensure!(
                upper.min == max,
                "brackets #{} and #{} are not contiguous: {} ≠ {}",
                index + 1,
                index + 2,
                max,
                upper.min,
            );
        }
        Ok(Self(brackets))
    }

    /// EVN residential schedule.
    pub fn residential() -> Self {
        Self(vec![
            TariffBracket::bounded(0.0, 50.0, 1984.0),
            TariffBracket::bounded(50.0, 100.0, 2050.0),
            TariffBracket::bounded(100.0, 200.0, 2380.0),
            TariffBracket::bounded(200.0, 300.0, 2998.0),
            TariffBracket::bounded(300.0, 400.0, 3350.0),
            TariffBracket::unbounded(400.0, 3460.0),
        ])
    }

    pub fn iter(&self) -> slice::Iter<'_, TariffBracket> {
        self.0.iter()
    }

    /// Pre-tax cost of the consumption.
    pub fn price(&self, consumption: KilowattHours) -> Cost {
        let (_, total) = self.iter().fold(
            (consumption.non_negative(), Cost::ZERO),
            |(remaining, total), bracket| {
                let consumed = bracket.take(remaining);
                (remaining - consumed, total + consumed * bracket.rate)
            },
        );
        total
    }

    /// Per-bracket line items of [`Self::price`], up to the last non-empty bracket.
    pub fn breakdown(&self, consumption: KilowattHours) -> impl Iterator<Item = BracketCharge> {
        self.iter()
            .scan(consumption.non_negative(), |remaining, bracket| {
                let consumed = bracket.take(*remaining);
                *remaining -= consumed;
                Some(BracketCharge {
                    bracket: *bracket,
                    consumption: consumed,
                    cost: consumed * bracket.rate,
                })
            })
            .take_while(|charge| charge.consumption.is_positive())
    }

    /// Consumption paid for by the pre-tax amount, unrounded.
    ///
    /// Spends the budget bracket by bracket from the cheapest one. The top bracket absorbs
    /// whatever is left.
    pub fn consumption_for(&self, budget: Cost) -> KilowattHours {
        let flow = self.iter().try_fold(
            (budget.non_negative(), KilowattHours::ZERO),
            |(remaining, consumption), bracket| match (bracket.width(), bracket.max_spend()) {
                (Some(width), Some(max_spend)) if remaining > max_spend => {
                    ControlFlow::Continue((remaining - max_spend, consumption + width))
                }
                _ => ControlFlow::Break(consumption + remaining / bracket.rate),
            },
        );
        match flow {
            ControlFlow::Break(consumption) | ControlFlow::Continue((_, consumption)) => {
                consumption
            }
        }
    }
}
