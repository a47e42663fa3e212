use crate::quantity::{cost::Cost, price::KilowattHourPrice};

quantity!(Watts, suffix: "W");

/// Earnings per hour at the given power: `price × W / 1000`.
impl std::ops::Mul<KilowattHourPrice> for Watts {
    type Output = Cost;

    fn mul(self, price: KilowattHourPrice) -> Self::Output {
        Cost(price.0 * self.0 / 1000.0)
    }
}
