//! Money type and codec for currency amounts
//!
//! Internally stores amounts in minor units (i64 hundredths) to avoid
//! floating-point drift while editing. Parsing is lenient: any text resolves
//! to an amount, unparseable input resolving to zero, so keystroke-level
//! editing is never interrupted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default currency prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "R$ ";

/// Represents a monetary amount stored as minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use budget_grid::models::Money;
    /// let amount = Money::from_cents(123456); // R$ 1.234,56
    /// assert_eq!(amount.cents(), 123456);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a major-unit value, rounding half away from zero
    pub fn from_major(value: f64) -> Self {
        Self(major_to_minor(value))
    }

    /// Parse locale-formatted text leniently (comma as decimal separator)
    ///
    /// # Examples
    /// ```
    /// use budget_grid::models::Money;
    /// assert_eq!(Money::parse_lenient("R$ 1.234,56").cents(), 123456);
    /// assert_eq!(Money::parse_lenient("abc").cents(), 0);
    /// ```
    pub fn parse_lenient(text: &str) -> Self {
        Self(parse_minor_units(text, ','))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in major units
    pub fn to_major(&self) -> f64 {
        to_major_units(self.0)
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at the largest amount
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Format with an explicit currency prefix and the default separators
    pub fn format_with_prefix(&self, prefix: &str) -> String {
        MoneyFormat::with_prefix(prefix).format(*self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&MoneyFormat::default().format(*self))
    }
}

// Arithmetic saturates at the i64 bounds, matching the lenient parser's clamp

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Display conventions for monetary and decimal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    /// Text placed before the digits (after the sign)
    pub prefix: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

impl MoneyFormat {
    /// pt-BR separators with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// Format an amount: sign, prefix, grouped digits, exactly two decimals
    pub fn format(&self, amount: Money) -> String {
        let magnitude = amount.cents().unsigned_abs();
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{}{:02}",
            sign,
            self.prefix,
            group_digits(magnitude / 100, self.grouping_separator),
            self.decimal_separator,
            magnitude % 100
        )
    }

    /// Format an optional amount; absent amounts format as zero
    pub fn format_optional(&self, amount: Option<Money>) -> String {
        self.format(amount.unwrap_or_default())
    }

    /// Format a plain decimal with two fractional digits and no prefix
    pub fn format_decimal(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let fixed = format!("{:.2}", value.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let whole: u64 = whole.parse().unwrap_or(0);
        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!(
            "{}{}{}{}",
            sign,
            group_digits(whole, self.grouping_separator),
            self.decimal_separator,
            frac
        )
    }

    /// Parse text leniently using this format's decimal separator
    pub fn parse(&self, text: &str) -> Money {
        Money::from_cents(parse_minor_units(text, self.decimal_separator))
    }
}

/// Raw input accepted by the codec: a number in major units or typed text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for RawAmount<'_> {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(value: &'a str) -> Self {
        RawAmount::Text(value)
    }
}

impl<'a> From<&'a String> for RawAmount<'a> {
    fn from(value: &'a String) -> Self {
        RawAmount::Text(value.as_str())
    }
}

/// Convert a number or locale-formatted text into minor units
///
/// Never fails: empty or unparseable input yields `0`.
pub fn to_minor_units<'a>(input: impl Into<RawAmount<'a>>) -> i64 {
    match input.into() {
        RawAmount::Number(value) => major_to_minor(value),
        RawAmount::Text(text) => parse_minor_units(text, ','),
    }
}

/// Convert minor units into major units
pub fn to_major_units(minor_units: i64) -> f64 {
    minor_units as f64 / 100.0
}

/// Format minor units with a prefix
///
/// # Examples
/// ```
/// use budget_grid::models::money::format_money;
/// assert_eq!(format_money(123456, "R$ "), "R$ 1.234,56");
/// assert_eq!(format_money(-50, "R$ "), "-R$ 0,50");
/// ```
pub fn format_money(minor_units: i64, prefix: &str) -> String {
    MoneyFormat::with_prefix(prefix).format(Money::from_cents(minor_units))
}

/// Format optional minor units; an absent amount formats as zero
pub fn format_money_opt(minor_units: Option<i64>, prefix: &str) -> String {
    MoneyFormat::with_prefix(prefix).format_optional(minor_units.map(Money::from_cents))
}

fn major_to_minor(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    // `as` saturates at the i64 bounds
    (value * 100.0).round() as i64
}

/// Lenient decimal parser
///
/// Every character other than digits, `-` and the decimal separator is
/// dropped. The first separator becomes the decimal point and the longest
/// leading `-?digits[.digits]` run is read; anything after it is ignored.
fn parse_minor_units(text: &str, decimal_separator: char) -> i64 {
    let mut cleaned = String::with_capacity(text.len());
    let mut seen_separator = false;
    for c in text.chars() {
        if c.is_ascii_digit() || c == '-' {
            cleaned.push(c);
        } else if c == decimal_separator {
            if seen_separator {
                // a second separator terminates the number
                cleaned.push('|');
            } else {
                cleaned.push('.');
                seen_separator = true;
            }
        }
    }

    let bytes = cleaned.as_bytes();
    let mut pos = 0;
    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos = 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return 0;
    }

    let whole = int_digits.iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    let digit_at = |i: usize| frac_digits.get(i).map_or(0, |d| i64::from(d - b'0'));
    let mut cents = digit_at(0) * 10 + digit_at(1);
    if digit_at(2) >= 5 {
        cents += 1;
    }

    let magnitude = whole.saturating_mul(100).saturating_add(cents);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
