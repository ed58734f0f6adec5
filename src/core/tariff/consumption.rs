use crate::quantity::{cost::Cost, energy::KilowattHours};

/// What the customer knows about their monthly usage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConsumptionInput {
    /// Metered monthly consumption.
    KnownKwh(KilowattHours),

    /// Monthly bill after tax, consumption to be derived.
    KnownBill(Cost),
}

impl ConsumptionInput {
    /// Decode the legacy pair where a zero consumption means «derive it from the bill».
    ///
    /// Both being zero yields a zero bill, indistinguishable from no usage at all.
    pub fn from_sentinels(consumption: KilowattHours, bill: Cost) -> Self {
        if consumption.is_positive() { Self::KnownKwh(consumption) } else { Self::KnownBill(bill) }
    }
}
