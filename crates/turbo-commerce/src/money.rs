//! Exact money arithmetic for prices and cart totals.
//!
//! Amounts are integers in the currency's minor unit, so
//! `29.99 * 2 + 19.99` is `79.97`, not `79.97000000000001`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies prices can be quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
        Currency::AUD,
    ];

    /// ISO code, display symbol and minor-unit exponent.
    const fn details(self) -> (&'static str, &'static str, u32) {
        match self {
            Currency::USD => ("USD", "$", 2),
            Currency::EUR => ("EUR", "€", 2),
            Currency::GBP => ("GBP", "£", 2),
            Currency::JPY => ("JPY", "¥", 0),
            Currency::CAD => ("CAD", "CA$", 2),
            Currency::AUD => ("AUD", "A$", 2),
        }
    }

    pub fn code(&self) -> &'static str {
        self.details().0
    }

    pub fn symbol(&self) -> &'static str {
        self.details().1
    }

    /// Digits after the decimal point (0 for JPY).
    pub fn decimal_places(&self) -> u32 {
        self.details().2
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when parsing a currency code that isn't supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(code.to_string()))
    }
}

/// An amount of money in a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the currency's minor unit (cents for USD).
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a decimal amount, rounding to the nearest minor unit.
    ///
    /// ```
    /// use turbo_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(29.99, Currency::USD).amount_cents, 2999);
    /// assert_eq!(Money::from_decimal(1200.0, Currency::JPY).amount_cents, 1200);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(minor, currency)
    }

    /// Shorthand for a USD amount in dollars.
    pub fn usd(amount: f64) -> Self {
        Self::from_decimal(amount, Currency::USD)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents.is_negative()
    }

    /// The amount in major units. Lossy; use only for display or interop.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Symbol plus grouped amount, e.g. `$1,049.99` or `-$5.00`.
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{}{}", self.currency.symbol(), self.display_amount())
    }

    /// The absolute amount without a symbol, e.g. `1,049.99`.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_cents.unsigned_abs();
        let major = group_thousands(abs / per_major);

        match places {
            0 => major,
            _ => format!("{major}.{:0width$}", abs % per_major, width = places as usize),
        }
    }

    /// Checked addition. `None` on overflow or when currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        (self.currency == other.currency)
            .then(|| self.amount_cents.checked_add(other.amount_cents))
            .flatten()
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Checked multiplication by a quantity.
    pub fn try_multiply(&self, qty: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(qty)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, clamping at the `i64` bounds.
    pub fn saturating_multiply(&self, qty: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(qty), self.currency)
    }

    /// Add another amount, clamping at the `i64` bounds.
    ///
    /// Keeps the currency of `self`; callers only sum one currency.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Checked sum of amounts in `currency`.
    pub fn try_sum<'a>(
        values: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        values
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::usd(29.99).amount_cents, 2999);
        assert_eq!(Money::usd(0.1 + 0.2).amount_cents, 30);
        assert_eq!(Money::from_decimal(999.0, Currency::JPY).amount_cents, 999);
    }

    #[test]
    fn test_to_decimal() {
        assert!((Money::new(7997, Currency::USD).to_decimal() - 79.97).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::usd(19.99).display(), "$19.99");
        assert_eq!(Money::usd(0.0).display(), "$0.00");
        assert_eq!(Money::usd(1000.0).display(), "$1,000.00");
        assert_eq!(Money::usd(1234567.5).display(), "$1,234,567.50");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-1999, Currency::USD).display(), "-$19.99");
        assert_eq!(Money::new(12500, Currency::JPY).display(), "¥12,500");
        assert_eq!(Money::new(i64::MIN, Currency::USD).display_amount(), "92,233,720,368,547,758.08");
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::usd(29.99);
        assert_eq!(price.try_multiply(2), Some(Money::usd(59.98)));
        assert_eq!(price.try_add(&Money::usd(19.99)), Some(Money::usd(49.98)));
        assert_eq!(price.try_add(&Money::new(100, Currency::EUR)), None);
        assert_eq!(Money::new(i64::MAX, Currency::USD).try_multiply(2), None);
    }

    #[test]
    fn test_saturating_arithmetic() {
        let max = Money::new(i64::MAX, Currency::USD);
        assert_eq!(max.saturating_multiply(3).amount_cents, i64::MAX);
        assert_eq!(max.saturating_add(&Money::usd(1.0)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_try_sum() {
        let lines = [Money::usd(29.99), Money::usd(29.99), Money::usd(19.99)];
        assert_eq!(Money::try_sum(&lines, Currency::USD), Some(Money::new(7997, Currency::USD)));
        assert_eq!(Money::try_sum(&[], Currency::GBP), Some(Money::zero(Currency::GBP)));

        let mixed = [Money::usd(1.0), Money::new(100, Currency::EUR)];
        assert_eq!(Money::try_sum(&mixed, Currency::USD), None);
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" GBP ".parse::<Currency>(), Ok(Currency::GBP));
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(Currency::JPY.to_string(), "JPY");
    }
}
