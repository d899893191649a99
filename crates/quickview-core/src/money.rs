use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in minor currency units (cents), as the storefront's `.js`
/// endpoints report prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// The amount in major units with two decimal places, e.g. `1299` → `12.99`.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Renders the amount with a currency prefix, e.g. `"$12.99"`.
    #[must_use]
    pub fn format(self, currency_symbol: &str) -> String {
        let amount = self.to_decimal();
        if amount.is_sign_negative() {
            format!("-{currency_symbol}{}", amount.abs())
        } else {
            format!("{currency_symbol}{amount}")
        }
    }
}
