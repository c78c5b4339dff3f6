//! Currency conversion for deal prices.

/// USD→INR conversion rate, fetched once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(pub f64);

impl ExchangeRate {
    /// Convert a USD amount to INR, rounded to 2 decimal places.
    pub fn to_inr(self, usd: f64) -> f64 {
        round2(usd * self.0)
    }
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_inr() {
        let rate = ExchangeRate(83.0);
        assert_eq!(rate.to_inr(9.99), 829.17);
        assert_eq!(rate.to_inr(19.99), 1659.17);
    }

    #[test]
    fn test_to_inr_zero_price() {
        let rate = ExchangeRate(83.0);
        assert_eq!(rate.to_inr(0.0), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(829.1700000001), 829.17);
        assert_eq!(round2(829.176), 829.18);
        assert_eq!(round2(-1.234), -1.23);
        assert_eq!(round2(2.0), 2.0);
    }
}
