//! Money input editing session
//!
//! Builds an amount digit by digit, the way a cash register does: each digit
//! shifts the amount one place left in minor units, backspace shifts it
//! right. While the field is focused, external value updates are ignored so
//! an in-progress edit is never overwritten.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::money::{MoneyFormat, RawAmount, DEFAULT_PREFIX};
use crate::models::Money;

/// Largest amount accepted by default, in minor units (99.999.999,99)
pub const DEFAULT_MAX_CENTS: i64 = 9_999_999_999;

/// Result of feeding one key to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed by the input
    pub handled: bool,
    /// The amount changed and listeners should be notified
    pub should_emit: bool,
}

impl KeyOutcome {
    const PASS: Self = Self {
        handled: false,
        should_emit: false,
    };
    const SWALLOWED: Self = Self {
        handled: true,
        should_emit: false,
    };
    const CHANGED: Self = Self {
        handled: true,
        should_emit: true,
    };
}

/// Per-field money editing state
#[derive(Debug, Clone)]
pub struct MoneyInput {
    amount: Money,
    focused: bool,
    format: MoneyFormat,
    max: Money,
}

impl Default for MoneyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MoneyInput {
    /// Create an unfocused input at zero
    pub fn new() -> Self {
        Self {
            amount: Money::zero(),
            focused: false,
            format: MoneyFormat::with_prefix(DEFAULT_PREFIX),
            max: Money::from_cents(DEFAULT_MAX_CENTS),
        }
    }

    /// Set the initial amount
    pub fn initial<'a>(mut self, value: impl Into<RawAmount<'a>>) -> Self {
        self.amount = amount_from(&self.format, value.into());
        self
    }

    /// Set the display format
    pub fn format(mut self, format: MoneyFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the largest accepted amount
    pub fn max(mut self, max: Money) -> Self {
        self.max = max;
        self
    }

    /// Current amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Current amount in major units
    pub fn value(&self) -> f64 {
        self.amount.to_major()
    }

    /// Replace the amount, unless the user is editing the field
    pub fn set_value<'a>(&mut self, value: impl Into<RawAmount<'a>>) {
        if self.focused {
            return;
        }
        self.amount = amount_from(&self.format, value.into());
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Append a digit; returns false if rejected (not a digit, or over max)
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }

        let next = self
            .amount
            .cents()
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)));

        match next {
            Some(cents) if cents <= self.max.cents() => {
                self.amount = Money::from_cents(cents);
                true
            }
            _ => false,
        }
    }

    /// Drop the last digit
    pub fn pop_digit(&mut self) {
        self.amount = Money::from_cents(self.amount.cents().div_euclid(10));
    }

    /// Text shown in the field; blank while unfocused at zero
    pub fn display_value(&self) -> String {
        if self.amount.is_zero() && !self.focused {
            return String::new();
        }
        self.format.format(self.amount)
    }

    /// Feed one key event
    ///
    /// Navigation keys and modifier chords pass through untouched, backspace
    /// removes a digit, digits are appended and every other character is
    /// swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Backspace => {
                self.pop_digit();
                return KeyOutcome::CHANGED;
            }
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Esc
            | KeyCode::Enter
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Delete
            | KeyCode::F(_) => return KeyOutcome::PASS,
            _ => {}
        }

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return KeyOutcome::PASS;
        }

        match key.code {
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) if c.is_ascii_digit() => {
                    if self.push_digit(digit as u8) {
                        KeyOutcome::CHANGED
                    } else {
                        KeyOutcome::SWALLOWED
                    }
                }
                _ => KeyOutcome::SWALLOWED,
            },
            _ => KeyOutcome::SWALLOWED,
        }
    }
}

fn amount_from(format: &MoneyFormat, value: RawAmount<'_>) -> Money {
    match value {
        RawAmount::Number(n) => Money::from_major(n),
        RawAmount::Text(text) => format.parse(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_accumulation() {
        let mut input = MoneyInput::new();
        assert!(input.push_digit(1));
        assert!(input.push_digit(2));
        assert!(input.push_digit(3));
        assert_eq!(input.amount().cents(), 123);
        input.set_focused(true);
        assert_eq!(input.display_value(), "R$ 1,23");
    }

    #[test]
    fn test_backspace() {
        let mut input = MoneyInput::new().initial(1.23);
        assert_eq!(input.amount().cents(), 123);
        input.pop_digit();
        assert_eq!(input.amount().cents(), 12);
        input.pop_digit();
        input.pop_digit();
        input.pop_digit();
        assert_eq!(input.amount().cents(), 0);
    }

    #[test]
    fn test_max_rejects_digit() {
        let mut input = MoneyInput::new().max(Money::from_cents(999));
        assert!(input.push_digit(9));
        assert!(input.push_digit(9));
        assert!(input.push_digit(9));
        assert!(!input.push_digit(0));
        assert_eq!(input.amount().cents(), 999);
        assert!(!input.push_digit(10));
    }

    #[test]
    fn test_set_value_ignored_while_focused() {
        let mut input = MoneyInput::new();
        input.set_value("12,50");
        assert_eq!(input.amount().cents(), 1250);

        input.set_focused(true);
        input.set_value("99,00");
        assert_eq!(input.amount().cents(), 1250);

        input.set_focused(false);
        input.set_value(3.0);
        assert_eq!(input.amount().cents(), 300);
        assert_eq!(input.value(), 3.0);
    }

    #[test]
    fn test_display_blank_when_unfocused_zero() {
        let mut input = MoneyInput::new();
        assert_eq!(input.display_value(), "");
        input.set_focused(true);
        assert_eq!(input.display_value(), "R$ 0,00");
    }

    #[test]
    fn test_handle_key() {
        let mut input = MoneyInput::new();
        input.set_focused(true);

        assert_eq!(input.handle_key(key(KeyCode::Char('4'))), KeyOutcome::CHANGED);
        assert_eq!(input.handle_key(key(KeyCode::Char('2'))), KeyOutcome::CHANGED);
        assert_eq!(input.handle_key(key(KeyCode::Char('x'))), KeyOutcome::SWALLOWED);
        assert_eq!(input.handle_key(key(KeyCode::Tab)), KeyOutcome::PASS);
        assert_eq!(input.amount().cents(), 42);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_c), KeyOutcome::PASS);

        assert_eq!(input.handle_key(key(KeyCode::Backspace)), KeyOutcome::CHANGED);
        assert_eq!(input.amount().cents(), 4);
    }
}
