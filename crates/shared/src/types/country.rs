//! Supported countries and their tax and formatting profiles.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{Currency, round_money};

/// Country a company operates in.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// Portugal
    #[default]
    PT,
    /// Brazil
    BR,
    /// Spain
    ES,
    /// Germany
    DE,
    /// Switzerland
    CH,
    /// United States
    US,
    /// Italy
    IT,
}

/// Static tax and number-formatting profile of a country.
#[derive(Debug, Clone, Copy)]
pub struct CountryProfile {
    /// Currency used for quotes.
    pub currency: Currency,
    /// Default VAT rate in percent, as (mantissa, scale).
    default_vat: (i64, u32),
    /// Label of the sales tax line.
    pub vat_label: &'static str,
    /// Label of the company/client tax identifier.
    pub tax_id_label: &'static str,
    /// Decimal separator.
    pub decimal_separator: char,
    /// Thousands separator.
    pub thousands_separator: char,
    /// Whether the currency symbol precedes the amount.
    pub symbol_first: bool,
    /// `chrono` format string for dates.
    pub date_format: &'static str,
}

impl CountryProfile {
    /// Default VAT rate in percent.
    #[must_use]
    pub fn default_vat_rate(&self) -> Decimal {
        Decimal::new(self.default_vat.0, self.default_vat.1)
    }

    /// Formats a date for display.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }

    /// Formats an amount for display, rounded to two decimal places.
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = round_money(amount);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        let number = format!("{grouped}{}{frac_part}", self.decimal_separator);
        let sign = if negative { "-" } else { "" };
        let symbol = self.currency.symbol();

        if self.symbol_first {
            if symbol.len() > 1 {
                format!("{sign}{symbol} {number}")
            } else {
                format!("{sign}{symbol}{number}")
            }
        } else {
            format!("{sign}{number} {symbol}")
        }
    }
}

impl CountryCode {
    /// All supported countries.
    pub const ALL: [Self; 7] = [
        Self::PT,
        Self::BR,
        Self::ES,
        Self::DE,
        Self::CH,
        Self::US,
        Self::IT,
    ];

    /// Returns the tax and formatting profile of the country.
    #[must_use]
    pub const fn profile(&self) -> CountryProfile {
        match self {
            Self::PT => CountryProfile {
                currency: Currency::Eur,
                default_vat: (23, 0),
                vat_label: "IVA",
                tax_id_label: "NIF",
                decimal_separator: ',',
                thousands_separator: ' ',
                symbol_first: false,
                date_format: "%d/%m/%Y",
            },
            Self::BR => CountryProfile {
                currency: Currency::Brl,
                default_vat: (5, 0),
                vat_label: "ISS",
                tax_id_label: "CNPJ",
                decimal_separator: ',',
                thousands_separator: '.',
                symbol_first: true,
                date_format: "%d/%m/%Y",
            },
            Self::ES => CountryProfile {
                currency: Currency::Eur,
                default_vat: (21, 0),
                vat_label: "IVA",
                tax_id_label: "NIF",
                decimal_separator: ',',
                thousands_separator: '.',
                symbol_first: false,
                date_format: "%d/%m/%Y",
            },
            Self::DE => CountryProfile {
                currency: Currency::Eur,
                default_vat: (19, 0),
                vat_label: "MwSt",
                tax_id_label: "USt-IdNr",
                decimal_separator: ',',
                thousands_separator: '.',
                symbol_first: false,
                date_format: "%d.%m.%Y",
            },
            Self::CH => CountryProfile {
                currency: Currency::Chf,
                default_vat: (81, 1),
                vat_label: "MWST",
                tax_id_label: "UID",
                decimal_separator: '.',
                thousands_separator: '\'',
                symbol_first: true,
                date_format: "%d.%m.%Y",
            },
            Self::US => CountryProfile {
                currency: Currency::Usd,
                default_vat: (0, 0),
                vat_label: "Sales Tax",
                tax_id_label: "EIN",
                decimal_separator: '.',
                thousands_separator: ',',
                symbol_first: true,
                date_format: "%m/%d/%Y",
            },
            Self::IT => CountryProfile {
                currency: Currency::Eur,
                default_vat: (22, 0),
                vat_label: "IVA",
                tax_id_label: "P.IVA",
                decimal_separator: ',',
                thousands_separator: '.',
                symbol_first: false,
                date_format: "%d/%m/%Y",
            },
        }
    }

    /// Returns the currency used in the country.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.profile().currency
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::PT => "PT",
            Self::BR => "BR",
            Self::ES => "ES",
            Self::DE => "DE",
            Self::CH => "CH",
            Self::US => "US",
            Self::IT => "IT",
        };
        f.write_str(code)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown country: {s}"))
    }
}
