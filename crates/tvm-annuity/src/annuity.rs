//! Closed-form formulas for ordinary simple annuities.
//!
//! An ordinary simple annuity pays `R` at the end of each of `n` conversion
//! periods at rate `i` per period:
//!
//! - accumulated value `S = R * ((1 + i)^n - 1) / i`
//! - discounted value `A = R * (1 - (1 + i)^-n) / i`
//!
//! At `i = 0` both reduce to `R * n`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnnuityError, AnnuityResult};

/// Which end of the term a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Future value at the end of the term.
    Accumulated,
    /// Present value at the start of the term.
    Discounted,
}

impl ValueKind {
    /// Returns the value of `payment` per period under this kind.
    pub fn value(self, payment: f64, rate: f64, periods: u32) -> AnnuityResult<f64> {
        match self {
            Self::Accumulated => accumulated_value(payment, rate, periods),
            Self::Discounted => discounted_value(payment, rate, periods),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accumulated => "accumulated",
            Self::Discounted => "discounted",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = AnnuityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accumulated" => Ok(Self::Accumulated),
            "discounted" => Ok(Self::Discounted),
            _ => Err(AnnuityError::UnknownValueKind(s.to_string())),
        }
    }
}

/// Accumulated (future) value of the annuity.
///
/// # Arguments
///
/// * `payment` - Periodic payment `R`
/// * `rate` - Interest rate per conversion period `i`
/// * `periods` - Number of conversion periods `n`
///
/// # Example
///
/// ```rust
/// use tvm_annuity::annuity::accumulated_value;
///
/// let s = accumulated_value(100.0, 0.05, 10).unwrap();
/// assert!((s - 1257.789253554883).abs() < 1e-9);
/// ```
pub fn accumulated_value(payment: f64, rate: f64, periods: u32) -> AnnuityResult<f64> {
    validate_amount("payment", payment)?;
    validate_rate(rate)?;
    validate_periods(periods)?;

    Ok(payment * annuity_factor(ValueKind::Accumulated, rate, periods))
}

/// Discounted (present) value of the annuity.
///
/// # Example
///
/// ```rust
/// use tvm_annuity::annuity::discounted_value;
///
/// let a = discounted_value(100.0, 0.05, 10).unwrap();
/// assert!((a - 772.1734929184818).abs() < 1e-9);
/// ```
pub fn discounted_value(payment: f64, rate: f64, periods: u32) -> AnnuityResult<f64> {
    validate_amount("payment", payment)?;
    validate_rate(rate)?;
    validate_periods(periods)?;

    Ok(payment * annuity_factor(ValueKind::Discounted, rate, periods))
}

/// Periodic payment required to reach `value`.
///
/// `kind` says whether `value` is an accumulated or a discounted value.
pub fn periodic_payment(value: f64, rate: f64, periods: u32, kind: ValueKind) -> AnnuityResult<f64> {
    validate_amount("value", value)?;
    validate_rate(rate)?;
    validate_periods(periods)?;

    Ok(value / annuity_factor(kind, rate, periods))
}

/// Value of a unit payment: `s(n, i)` or `a(n, i)`.
///
/// `(1 + i)^n - 1` is evaluated as `expm1(n * ln1p(i))` so rates too small
/// to change `1 + i` still give a factor near `n`.
///
/// Callers validate `rate > -1` and `periods >= 1`.
pub(crate) fn annuity_factor(kind: ValueKind, rate: f64, periods: u32) -> f64 {
    let n = f64::from(periods);
    if rate == 0.0 {
        return n;
    }

    let log_growth = n * rate.ln_1p();
    match kind {
        ValueKind::Accumulated => log_growth.exp_m1() / rate,
        ValueKind::Discounted => -(-log_growth).exp_m1() / rate,
    }
}

pub(crate) fn validate_rate(rate: f64) -> AnnuityResult<()> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(AnnuityError::InvalidRate { rate });
    }
    Ok(())
}

pub(crate) fn validate_periods(periods: u32) -> AnnuityResult<()> {
    if periods == 0 {
        return Err(AnnuityError::InvalidPeriods { periods });
    }
    Ok(())
}

pub(crate) fn validate_amount(name: &'static str, value: f64) -> AnnuityResult<()> {
    if !value.is_finite() {
        return Err(AnnuityError::InvalidAmount {
            name,
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}
