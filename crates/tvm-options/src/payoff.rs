//! Vanilla option payoffs at expiry.
//!
//! - **Call**: `max(S - K, 0) - premium`
//! - **Put**: `max(K - S, 0) - premium`
//!
//! Payoffs are profits: the premium paid is already subtracted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

/// Profit of a long call at expiry.
///
/// # Example
///
/// ```rust
/// use tvm_options::payoff::call_payoff;
///
/// assert_eq!(call_payoff(7.0, 5.0, 1.0), 1.0);
/// assert_eq!(call_payoff(3.0, 5.0, 1.0), -1.0);
/// ```
pub fn call_payoff(spot: f64, strike: f64, premium: f64) -> f64 {
    (spot - strike).max(0.0) - premium
}

/// Profit of a long put at expiry.
pub fn put_payoff(spot: f64, strike: f64, premium: f64) -> f64 {
    (strike - spot).max(0.0) - premium
}

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Profit of one long option of this kind.
    pub fn payoff(self, spot: f64, strike: f64, premium: f64) -> f64 {
        match self {
            Self::Call => call_payoff(spot, strike, premium),
            Self::Put => put_payoff(spot, strike, premium),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => f.write_str("call"),
            Self::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            _ => Err(OptionsError::InvalidLeg(format!("unknown option kind: {}", s))),
        }
    }
}

/// One position in a strategy.
///
/// `quantity` is signed: positive for bought options, negative for written
/// ones. A written option collects its premium, so its profit is the negated
/// long profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Call or put.
    pub kind: OptionKind,
    /// Strike price.
    pub strike: f64,
    /// Premium per option.
    pub premium: f64,
    /// Signed number of options.
    pub quantity: f64,
}

impl OptionLeg {
    /// One long call.
    #[must_use]
    pub fn call(strike: f64, premium: f64) -> Self {
        Self {
            kind: OptionKind::Call,
            strike,
            premium,
            quantity: 1.0,
        }
    }

    /// One long put.
    #[must_use]
    pub fn put(strike: f64, premium: f64) -> Self {
        Self {
            kind: OptionKind::Put,
            strike,
            premium,
            quantity: 1.0,
        }
    }

    /// Sets the signed quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Profit of the leg at expiry.
    pub fn payoff(&self, spot: f64) -> f64 {
        self.quantity * self.kind.payoff(spot, self.strike, self.premium)
    }

    /// Checks strike, premium and quantity.
    pub fn validate(&self) -> OptionsResult<()> {
        if !self.strike.is_finite() || self.strike < 0.0 {
            return Err(OptionsError::InvalidStrike(self.strike));
        }
        if !self.premium.is_finite() {
            return Err(OptionsError::InvalidLeg(format!(
                "premium must be finite, got {}",
                self.premium
            )));
        }
        if !self.quantity.is_finite() || self.quantity == 0.0 {
            return Err(OptionsError::InvalidLeg(format!(
                "quantity must be finite and non-zero, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(call_payoff(10.0, 5.0, 1.0), 4.0);
        assert_eq!(call_payoff(5.0, 5.0, 1.0), -1.0);
        assert_eq!(call_payoff(0.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(put_payoff(2.0, 5.0, 1.0), 2.0);
        assert_eq!(put_payoff(9.0, 5.0, 1.0), -1.0);
        assert_eq!(put_payoff(0.0, 5.0, 0.0), 5.0);
    }

    #[test]
    fn test_short_leg() {
        let short_call = OptionLeg::call(50.0, 6.0).with_quantity(-2.0);

        // Premium collected below the strike
        assert_eq!(short_call.payoff(40.0), 12.0);
        assert_eq!(short_call.payoff(60.0), -8.0);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_validate() {
        assert!(OptionLeg::call(30.0, 0.0).validate().is_ok());
        assert_eq!(
            OptionLeg::put(-1.0, 0.0).validate(),
            Err(OptionsError::InvalidStrike(-1.0))
        );
        assert!(matches!(
            OptionLeg::call(30.0, f64::NAN).validate(),
            Err(OptionsError::InvalidLeg(_))
        ));
        assert!(matches!(
            OptionLeg::call(30.0, 1.0).with_quantity(0.0).validate(),
            Err(OptionsError::InvalidLeg(_))
        ));
    }
}
