//! Prices in integer cents.
//!
//! The catalog API sends prices as decimal dollars (`109.95`). They are
//! converted to cents once, in [`decimal`], so that cart totals are exact.
//! Conversion truncates toward zero: a price below a whole-dollar bound
//! stays below it in cents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cents per dollar.
const CENTS: i64 = 100;

/// Currency of a price. The catalog prices everything in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Prefix used when formatting (e.g. "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
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

    /// Convert a decimal amount, dropping digits past the cent.
    ///
    /// Works on the shortest decimal form of `amount` (what `{}` prints),
    /// so `49.99` is 4999 cents and `49.996` is 4999 cents, never 5000.
    /// `None` for non-finite amounts or amounts beyond `i64` cents.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(109.95, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 10995);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let digits = amount.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let cents: String = fraction.chars().chain(std::iter::repeat('0')).take(2).collect();

        let cents = whole
            .parse::<i64>()
            .ok()?
            .checked_mul(CENTS)?
            .checked_add(cents.parse::<i64>().ok()?)?;
        let cents = if amount < 0.0 { -cents } else { cents };
        Some(Self::new(cents, currency))
    }

    /// A whole number of dollars.
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(CENTS), currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// The amount in dollars.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS as f64
    }

    /// Symbol and two decimals, e.g. "$49.99".
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Price times quantity, saturating at `i64::MAX` cents.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Total of every amount, saturating at `i64::MAX` cents. `currency`
    /// is the currency of the (possibly empty) result.
    pub fn sum<'a>(amounts: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        let cents = amounts.fold(0_i64, |acc, m| acc.saturating_add(m.amount_cents));
        Money::new(cents, currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Serde adapter for prices carried as plain decimal numbers (`109.95`).
///
/// Use with `#[serde(with = "crate::money::decimal")]`. Negative and
/// non-finite values are rejected.
pub mod decimal {
    use super::{Currency, Money};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if value < 0.0 {
            return Err(D::Error::custom(format!(
                "price must be a non-negative number, got {value}"
            )));
        }
        Money::from_decimal(value, Currency::USD)
            .ok_or_else(|| D::Error::custom(format!("price out of range: {value}")))
    }
}
