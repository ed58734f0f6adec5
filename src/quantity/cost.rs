use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

quantity!(
    /// Vietnamese đồng.
    Cost, via: f64, suffix: "₫", precision: 0
);

implement_div!(Cost, KilowattHourRate, KilowattHours);
implement_div!(Cost, KilowattHours, KilowattHourRate);
