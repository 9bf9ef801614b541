//! Currency formatting helpers for storefront prices.
//!
//! Formats numeric amounts as currency strings under a fixed `en-US` style
//! convention: `.` decimal separator, `,` thousands grouping, and the currency
//! symbol before the amount. Currencies without a well-known symbol fall back
//! to `CODE amount` (e.g., `PLN 10.00`).
//!
//! # Example
//!
//! ```rust
//! use storefront_api::money::{format_money, format_money_range, Money, MoneyRange};
//!
//! assert_eq!(format_money(1234.5, "USD"), "$1,234.50");
//! assert_eq!(format_money(99.99, "EUR"), "€99.99");
//!
//! let range = MoneyRange {
//!     start: Some(Money { amount: 10.0, currency: "USD".to_string() }),
//!     stop: Some(Money { amount: 20.0, currency: "USD".to_string() }),
//! };
//! assert_eq!(format_money_range(Some(&range)), Some("$10.00 - $20.00".to_string()));
//! ```

use serde::{Deserialize, Serialize};

/// A monetary amount with its ISO 4217 currency code, as returned by
/// storefront price fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The numeric amount.
    pub amount: f64,
    /// The ISO 4217 currency code (e.g., "USD").
    pub currency: String,
}

impl Money {
    /// Formats this amount as a currency string.
    #[must_use]
    pub fn format(&self) -> String {
        format_money(self.amount, &self.currency)
    }
}

/// A price range with independently optional bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoneyRange {
    /// The lower bound, if any.
    #[serde(default)]
    pub start: Option<Money>,
    /// The upper bound, if any.
    #[serde(default)]
    pub stop: Option<Money>,
}

/// Formats an amount as a currency string under the fixed `en-US` convention.
///
/// Well-known currency symbols are prefixed directly (`$10.00`); other codes
/// render as `CODE amount` (`PLN 10.00`). Zero-decimal currencies such as JPY
/// and KRW render without fraction digits. Unknown codes are not an error;
/// they take the code-prefix fallback.
///
/// # Example
///
/// ```rust
/// use storefront_api::money::format_money;
///
/// assert_eq!(format_money(10.0, "USD"), "$10.00");
/// assert_eq!(format_money(1500.0, "JPY"), "¥1,500");
/// assert_eq!(format_money(-5.25, "GBP"), "-£5.25");
/// assert_eq!(format_money(10.0, "PLN"), "PLN 10.00");
/// ```
#[must_use]
pub fn format_money(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let digits = fraction_digits(&code);
    let formatted = format!("{:.*}", digits, amount.abs());

    // Split into integer and fraction parts and add grouping separators
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let grouped = add_grouping(integer_part);
    let number = fraction_part.map_or(grouped.clone(), |frac| format!("{grouped}.{frac}"));

    let sign = if amount < 0.0 { "-" } else { "" };

    currency_symbol(&code).map_or_else(
        || format!("{sign}{code} {number}"),
        |symbol| format!("{sign}{symbol}{number}"),
    )
}

/// Formats a price range, collapsing equal bounds to a single value.
///
/// If both bounds format to the same text, that single value is returned.
/// A single absent bound yields just the present bound; a wholly absent range
/// yields `None`.
///
/// # Example
///
/// ```rust
/// use storefront_api::money::{format_money_range, Money, MoneyRange};
///
/// let usd = |amount| Money { amount, currency: "USD".to_string() };
///
/// let range = MoneyRange { start: Some(usd(10.0)), stop: Some(usd(10.0)) };
/// assert_eq!(format_money_range(Some(&range)), Some("$10.00".to_string()));
///
/// assert_eq!(format_money_range(None), None);
/// ```
#[must_use]
pub fn format_money_range(range: Option<&MoneyRange>) -> Option<String> {
    let range = range?;
    let start = range.start.as_ref().map(Money::format);
    let stop = range.stop.as_ref().map(Money::format);

    match (start, stop) {
        (None, None) => None,
        (Some(single), None) | (None, Some(single)) => Some(single),
        (Some(start), Some(stop)) => {
            if start == stop {
                Some(start)
            } else {
                Some(format!("{start} - {stop}"))
            }
        }
    }
}

/// Currency symbol for well-known codes, `en-US` display forms.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        "CNY" => Some("CN\u{a5}"),
        "INR" => Some("\u{20b9}"),
        "KRW" => Some("\u{20a9}"),
        "BRL" => Some("R$"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "NZD" => Some("NZ$"),
        "HKD" => Some("HK$"),
        "MXN" => Some("MX$"),
        _ => None,
    }
}

/// Fraction digits per ISO 4217: most currencies use two, a handful use none.
fn fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

/// Inserts thousands separators into a bare integer string.
fn add_grouping(integer_part: &str) -> String {
    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}
