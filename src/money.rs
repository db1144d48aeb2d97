//! Monetary value type and free-form money input parsing.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::ParseFailure;

/// A monetary amount, displayed with two fractional digits.
///
/// Zero is a valid amount; "unset" is the caller's concern and expressed as
/// `Option<Money>` or an empty raw field, never as a sentinel value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn new(value: f64) -> Self {
        Money(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded to two decimals, the display convention for every amount.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Money(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Div<f64> for Money {
    type Output = Money;

    fn div(self, rhs: f64) -> Money {
        Money(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Normalizes free-form text into a monetary value.
///
/// Currency symbols and grouping separators are discarded: only digits, the
/// first decimal point, and a leading minus sign survive the strip. Negative
/// values are accepted here; positivity is the caller's rule.
pub fn parse_money(input: &str) -> Result<Money, ParseFailure> {
    let cleaned = strip_non_numeric(input);
    if cleaned.is_empty() {
        return Err(ParseFailure::EmptyInput);
    }
    let value: f64 = cleaned.parse().map_err(|_| ParseFailure::NotANumber)?;
    if !value.is_finite() {
        return Err(ParseFailure::NotANumber);
    }
    Ok(Money(value))
}

/// Permissive variant used by category, pin, and goal inputs: any parse
/// failure falls back to zero.
pub fn parse_money_or_zero(input: &str) -> Money {
    parse_money(input).unwrap_or(Money::ZERO)
}

fn strip_non_numeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_point = false;
    for ch in input.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                out.push(ch);
            }
            '-' if out.is_empty() => out.push(ch),
            _ => {}
        }
    }
    out
}
