//! Predicted vs executed variance classification
//!
//! One comparison rule shared by cells, row totals, column totals and the
//! grand total.

use std::fmt;

use super::money::Money;

/// Outcome of comparing an executed amount with its prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variance {
    /// Executed exceeds predicted
    Over,
    /// Predicted exceeds executed
    Under,
    /// Both are equal
    Neutral,
}

impl Variance {
    /// Classify a predicted/executed pair
    pub fn classify(predicted: Money, executed: Money) -> Self {
        if executed > predicted {
            Variance::Over
        } else if predicted > executed {
            Variance::Under
        } else {
            Variance::Neutral
        }
    }

    /// ANSI color code used by terminal output (red over, blue under)
    pub fn ansi_color(&self) -> Option<&'static str> {
        match self {
            Variance::Over => Some("31"),
            Variance::Under => Some("34"),
            Variance::Neutral => None,
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variance::Over => write!(f, "over"),
            Variance::Under => write!(f, "under"),
            Variance::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let small = Money::from_cents(100);
        let large = Money::from_cents(200);

        assert_eq!(Variance::classify(small, large), Variance::Over);
        assert_eq!(Variance::classify(large, small), Variance::Under);
        assert_eq!(Variance::classify(small, small), Variance::Neutral);
        assert_eq!(Variance::classify(Money::zero(), Money::zero()), Variance::Neutral);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Variance::Over.ansi_color(), Some("31"));
        assert_eq!(Variance::Under.ansi_color(), Some("34"));
        assert_eq!(Variance::Neutral.ansi_color(), None);
        assert_eq!(Variance::Over.to_string(), "over");
    }
}
