//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation so effective prices and range
//! bounds compare exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CHF,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CHF => "CHF ",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use watchshop_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(7499.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 749999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Parse a decimal string such as `"1299.50"`.
    ///
    /// Returns `None` for non-numeric, non-finite or negative input.
    pub fn parse_decimal(s: &str, currency: Currency) -> Option<Self> {
        let amount: f64 = s.trim().parse().ok()?;
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        Some(Self::from_decimal(amount, currency))
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Apply a percentage discount, rounding half-up to the minor unit.
    ///
    /// For display. Comparisons against a bound go through
    /// [`Money::cmp_discounted`], which does not round. Percentages above
    /// 100 are treated as 100.
    pub fn apply_discount(&self, percent: u8) -> Money {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.amount_cents) * keep;
        let discounted = (scaled + 50).div_euclid(100);
        Money::new(discounted as i64, self.currency)
    }

    /// Compare the exact discounted amount against `bound`.
    ///
    /// Both sides are scaled by 100 so fractional minor units still count:
    /// 999 at 15% off is 849.15 and compares greater than 849.
    pub fn cmp_discounted(&self, percent: u8, bound: &Money) -> Ordering {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.amount_cents) * keep;
        scaled.cmp(&(i128::from(bound.amount_cents) * 100))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
