//! Currencies and money rounding.
//!
//! Amounts are `rust_decimal::Decimal` everywhere; floats never touch money.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown for every supported currency.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// ISO 4217 currency codes used by the supported countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// Brazilian Real
    Brl,
    /// US Dollar
    Usd,
    /// Swiss Franc
    Chf,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Chf => "CHF",
        }
    }

    /// Symbol printed next to amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Chf => "CHF",
        }
    }
}

/// Rounds an amount to two decimal places, midpoints away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
