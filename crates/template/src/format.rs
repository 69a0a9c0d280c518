//! Money and date formatting shared by rows and page totals.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Printed in place of a missing brand, model or identifier.
pub const NOT_AVAILABLE: &str = "N/A";

/// Printed when a record carries no notes.
pub const NO_NOTES: &str = "No additional notes";

const NEGATIVE_CLASS: &str = "negative";

/// Currency rendering: two decimals, half away from zero, grouped thousands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `$1,234.50`, or `-$1,234.50` for negative values.
    pub fn currency(&self, value: Decimal) -> String {
        let rounded = round_cents(value);
        let digits = grouped(rounded.abs());
        if rounded < Decimal::ZERO {
            format!("-{}{}", self.symbol, digits)
        } else {
            format!("{}{}", self.symbol, digits)
        }
    }

    /// The absolute value as currency; negatives are conveyed only by the
    /// `negative` style class wrapped around the figure.
    pub fn amount(&self, value: Decimal) -> String {
        let rounded = round_cents(value);
        let figure = format!("{}{}", self.symbol, grouped(rounded.abs()));
        if rounded < Decimal::ZERO {
            format!("<span class=\"{NEGATIVE_CLASS}\">{figure}</span>")
        } else {
            figure
        }
    }
}

/// See [`CurrencyFormat::amount`], with the default `$` symbol.
pub fn format_amount(value: Decimal) -> String {
    CurrencyFormat::default().amount(value)
}

/// See [`CurrencyFormat::currency`], with the default `$` symbol.
pub fn format_currency(value: Decimal) -> String {
    CurrencyFormat::default().currency(value)
}

/// Two decimals without a currency symbol or grouping (`-12.50`).
pub fn format_plain(value: Decimal) -> String {
    let mut rounded = round_cents(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// A percentage rate without trailing zeros (`5`, `7.5`, `14.975`).
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// `Mon DD, YYYY`, e.g. `Oct 05, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn grouped(value: Decimal) -> String {
    let mut value = value;
    value.rescale(2);
    let text = value.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::with_capacity(text.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(cents);
    out
}
