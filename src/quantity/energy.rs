use crate::quantity::{cost::Cost, price::KilowattHourPrice};

quantity!(KilowattHours, suffix: "kWh");

implement_mul!(KilowattHours, KilowattHourPrice, Cost);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_by_price_ok() {
        assert_eq!(KilowattHours(1000.0) * KilowattHourPrice(0.41), Cost(410.0));
        assert_eq!(KilowattHourPrice(0.41) * KilowattHours(1000.0), Cost(410.0));
    }
}
