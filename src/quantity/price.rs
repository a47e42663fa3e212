quantity!(
    /// Price of one kilowatt-hour in the user's currency.
    KilowattHourPrice, suffix: "/kWh"
);

impl KilowattHourPrice {
    pub const DEFAULT: Self = Self(0.41);
}
