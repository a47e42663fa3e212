use crate::{
    error::DerivationError,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Watts,
        price::KilowattHourPrice,
    },
    reading::InverterReading,
};

/// Earnings derived from the latest reading and the current price, no rounding applied.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedEarnings {
    /// Per hour at the instantaneous power.
    pub now: Cost,

    pub today: Cost,

    pub total: Cost,
}

impl DerivedEarnings {
    /// Recompute the earnings in place.
    ///
    /// Power that is not a plain non-negative integer and empty energy values leave
    /// the corresponding earnings untouched. Nothing is updated when an energy value is malformed.
    pub fn update(
        &mut self,
        reading: &InverterReading,
        price: KilowattHourPrice,
    ) -> Result<(), DerivationError> {
        let mut updated = *self;
        if let Some(power) = parse_power(&reading.power) {
            updated.now = power * price;
        }
        if let Some(energy_today) =
            parse_energy(InverterReading::ENERGY_TODAY, &reading.energy_today)?
        {
            updated.today = energy_today * price;
        }
        if let Some(energy_total) =
            parse_energy(InverterReading::ENERGY_TOTAL, &reading.energy_total)?
        {
            updated.total = energy_total * price;
        }
        *self = updated;
        Ok(())
    }
}

/// Only digits are accepted: signs, decimals, and blanks are skipped.
fn parse_power(value: &str) -> Option<Watts> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_energy(
    field: &'static str,
    value: &str,
) -> Result<Option<KilowattHours>, DerivationError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| DerivationError { field, value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::Local;

    use super::*;

    fn reading(power: &str, energy_today: &str, energy_total: &str) -> InverterReading {
        InverterReading {
            serial: "4100123456".to_string(),
            power: power.to_string(),
            energy_today: energy_today.to_string(),
            energy_total: energy_total.to_string(),
            uptime: "37".to_string(),
            fetched_at: Local::now(),
        }
    }

    const PRICE: KilowattHourPrice = KilowattHourPrice(0.41);

    #[test]
    fn total_ok() -> Result<(), DerivationError> {
        let mut earnings = DerivedEarnings::default();
        earnings.update(&reading("0", "0", "1000"), PRICE)?;
        assert_eq!(earnings.total, Cost(410.0));
        Ok(())
    }

    #[test]
    fn now_ok() -> Result<(), DerivationError> {
        let mut earnings = DerivedEarnings::default();
        earnings.update(&reading("500", "", ""), PRICE)?;
        assert_eq!(earnings.now, Cost(0.205));
        Ok(())
    }

    #[test]
    fn now_keeps_the_multiplication_order() -> Result<(), DerivationError> {
        let mut earnings = DerivedEarnings::default();
        earnings.update(&reading("3", "", ""), KilowattHourPrice(0.32))?;
        assert_eq!(earnings.now, Cost(0.32 * 3.0 / 1000.0));
        Ok(())
    }

    #[test]
    fn today_ok() -> Result<(), DerivationError> {
        let mut earnings = DerivedEarnings::default();
        earnings.update(&reading("0", "2.4", ""), PRICE)?;
        assert_abs_diff_eq!(earnings.today.0, 0.984, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn non_numeric_power_skipped() -> Result<(), DerivationError> {
        let mut earnings = DerivedEarnings { now: Cost(1.5), ..DerivedEarnings::default() };
        earnings.update(&reading("abc", "1", "1"), PRICE)?;
        assert_eq!(earnings.now, Cost(1.5));
        earnings.update(&reading("12.5", "1", "1"), PRICE)?;
        assert_eq!(earnings.now, Cost(1.5));
        earnings.update(&reading("-3", "1", "1"), PRICE)?;
        assert_eq!(earnings.now, Cost(1.5));
        Ok(())
    }

    #[test]
    fn empty_energy_skipped() -> Result<(), DerivationError> {
        let mut earnings =
            DerivedEarnings { now: Cost::ZERO, today: Cost(7.0), total: Cost(8.0) };
        earnings.update(&reading("0", "", ""), PRICE)?;
        assert_eq!(earnings.today, Cost(7.0));
        assert_eq!(earnings.total, Cost(8.0));
        Ok(())
    }

    #[test]
    fn malformed_energy_fails_atomically() {
        let mut earnings = DerivedEarnings { now: Cost(1.0), today: Cost(2.0), total: Cost(3.0) };
        let result = earnings.update(&reading("500", "2.4", "n/a"), PRICE);
        match result {
            Err(error) => {
                assert_eq!(error.field, InverterReading::ENERGY_TOTAL);
                assert_eq!(error.value, "n/a");
            }
            Ok(()) => panic!("malformed energy must fail"),
        }
        assert_eq!(earnings, DerivedEarnings { now: Cost(1.0), today: Cost(2.0), total: Cost(3.0) });
    }

    #[test]
    fn update_is_idempotent() -> Result<(), DerivationError> {
        let reading = reading("523", "3.7", "1234.5");
        let mut first = DerivedEarnings::default();
        first.update(&reading, PRICE)?;
        let mut second = first;
        second.update(&reading, PRICE)?;
        second.update(&reading, PRICE)?;
        assert_eq!(first.now.0.to_bits(), second.now.0.to_bits());
        assert_eq!(first.today.0.to_bits(), second.today.0.to_bits());
        assert_eq!(first.total.0.to_bits(), second.total.0.to_bits());
        Ok(())
    }
}
