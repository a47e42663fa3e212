quantity!(Cost, suffix: "€");

impl Cost {
    /// Round half to even at 2 decimals, as shown for the current earnings.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round_ties_even() / 100.0)
    }

    /// Round half to even at whole units, as shown for the daily and total earnings.
    #[must_use]
    pub fn round_to_units(self) -> Self {
        Self(self.0.round_ties_even())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_to_cents_ok() {
        assert_abs_diff_eq!(Cost(0.205_1).round_to_cents().0, 0.21);
        assert_abs_diff_eq!(Cost(1.234).round_to_cents().0, 1.23);
    }

    #[test]
    fn round_to_units_ok() {
        assert_abs_diff_eq!(Cost(409.6).round_to_units().0, 410.0);
        assert_abs_diff_eq!(Cost(2.49).round_to_units().0, 2.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(Cost(2.5).round_to_units(), Cost(2.0));
        assert_eq!(Cost(3.5).round_to_units(), Cost(4.0));
        assert_abs_diff_eq!(Cost(0.125).round_to_cents().0, 0.12);
        assert_abs_diff_eq!(Cost(0.375).round_to_cents().0, 0.38);
    }
}
