quantity!(
    /// Đồng per kilowatt-hour.
    KilowattHourRate, via: f64, suffix: "₫/kWh", precision: 0
);

quantity!(
    /// Đồng per kilowatt-peak of installed capacity.
    KilowattPrice, via: f64, suffix: "₫/kWp", precision: 0
);
