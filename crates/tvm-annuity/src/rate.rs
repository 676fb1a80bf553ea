//! Implied interest rate of an annuity.
//!
//! No closed form gives the rate at which `n` payments of `R` reach a target
//! value `V`, so the rate is backed out numerically. The objective is the
//! ratio of the unit annuity factor to `V / R`, minus one:
//!
//! - accumulated: `f(x) = ((1 + x)^n - 1) / x / (V / R) - 1`
//! - discounted: `f(x) = (1 - (1 + x)^-n) / x / (V / R) - 1`
//!
//! and its root is found by bisection over a fixed bracket.

use serde::{Deserialize, Serialize};
use tvm_math::solvers::{bisection, RootResult};

use crate::annuity::{annuity_factor, validate_periods, ValueKind};
use crate::error::{AnnuityError, AnnuityResult};

/// Default lower end of the rate bracket.
pub const DEFAULT_LOWER_RATE: f64 = 0.01;

/// Default upper end of the rate bracket.
pub const DEFAULT_UPPER_RATE: f64 = 0.99;

/// Default number of bisection steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Bracket and iteration budget for the implied-rate solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedRateConfig {
    /// Lowest rate searched.
    pub lower: f64,
    /// Highest rate searched.
    pub upper: f64,
    /// Number of bisection steps.
    pub max_iterations: u32,
}

impl Default for ImpliedRateConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_RATE,
            upper: DEFAULT_UPPER_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ImpliedRateConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(lower: f64, upper: f64, max_iterations: u32) -> Self {
        Self {
            lower,
            upper,
            max_iterations,
        }
    }

    /// Sets the rate bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration can be used for a solve.
    pub fn validate(&self) -> AnnuityResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(AnnuityError::invalid_config("bracket must be finite"));
        }
        if self.lower <= -1.0 {
            return Err(AnnuityError::invalid_config(format!(
                "lower rate {} must be greater than -1",
                self.lower
            )));
        }
        if self.lower >= self.upper {
            return Err(AnnuityError::invalid_config(format!(
                "lower rate {} must be below upper rate {}",
                self.lower, self.upper
            )));
        }
        if self.max_iterations == 0 {
            return Err(AnnuityError::invalid_config(
                "at least one iteration is required",
            ));
        }
        Ok(())
    }
}

/// Closed-form check of a solved rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    /// The solved rate.
    pub rate: f64,
    /// Value recomputed from the closed-form formula at `rate`.
    pub value: f64,
    /// Target value minus recomputed value.
    pub error: f64,
}

/// Result of an implied-rate solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedRate {
    /// Kind of the target value.
    pub kind: ValueKind,
    /// The target value.
    pub target: f64,
    /// Raw solver outcome.
    pub outcome: RootResult,
    /// Present only when the solver produced a rate.
    pub reconstruction: Option<Reconstruction>,
}

impl ImpliedRate {
    /// The solved rate, if any.
    pub fn rate(&self) -> Option<f64> {
        self.reconstruction.map(|r| r.rate)
    }

    /// Returns true when the solver produced a rate.
    pub fn is_converged(&self) -> bool {
        self.reconstruction.is_some()
    }
}

/// Solves for the per-period rate with the default bracket `[0.01, 0.99]`
/// and 50 bisection steps.
///
/// # Arguments
///
/// * `value` - Target accumulated or discounted value `V`
/// * `payment` - Periodic payment `R`
/// * `periods` - Number of conversion periods `n`
/// * `kind` - Whether `value` is accumulated or discounted
///
/// A bracket without a sign change is not an error: the returned
/// [`ImpliedRate`] carries the solver outcome and no reconstruction.
pub fn implied_rate(
    value: f64,
    payment: f64,
    periods: u32,
    kind: ValueKind,
) -> AnnuityResult<ImpliedRate> {
    implied_rate_with_config(value, payment, periods, kind, &ImpliedRateConfig::default())
}

/// Solves for the per-period rate with an explicit configuration.
pub fn implied_rate_with_config(
    value: f64,
    payment: f64,
    periods: u32,
    kind: ValueKind,
    config: &ImpliedRateConfig,
) -> AnnuityResult<ImpliedRate> {
    validate_positive("value", value)?;
    validate_positive("payment", payment)?;
    validate_periods(periods)?;
    config.validate()?;

    let ratio = value / payment;
    let objective = |x: f64| annuity_factor(kind, x, periods) / ratio - 1.0;

    let outcome = bisection(objective, config.lower, config.upper, config.max_iterations);

    let reconstruction = match outcome.root() {
        Some(rate) => {
            let recomputed = kind.value(payment, rate, periods)?;
            let error = value - recomputed;
            log::info!(
                "implied {} rate {} ({}), recomputed value {} with error {:.3e}",
                kind,
                rate,
                outcome.label(),
                recomputed,
                error
            );
            Some(Reconstruction {
                rate,
                value: recomputed,
                error,
            })
        }
        None => {
            log::warn!(
                "no implied {} rate for value {} in [{}, {}]: {}",
                kind,
                value,
                config.lower,
                config.upper,
                outcome.label()
            );
            None
        }
    };

    Ok(ImpliedRate {
        kind,
        target: value,
        outcome,
        reconstruction,
    })
}

fn validate_positive(name: &'static str, value: f64) -> AnnuityResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnnuityError::InvalidAmount {
            name,
            value,
            reason: "must be finite and positive",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::{accumulated_value, discounted_value};
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulated_round_trip() {
        let target = accumulated_value(100.0, 0.05, 10).unwrap();

        let implied = implied_rate(target, 100.0, 10, ValueKind::Accumulated).unwrap();

        assert!(matches!(
            implied.outcome,
            RootResult::ApproximateRoot { iterations: 50, .. }
        ));
        assert_relative_eq!(implied.rate().unwrap(), 0.05, epsilon = 1e-10);
        let reconstruction = implied.reconstruction.unwrap();
        assert!(reconstruction.error.abs() < 1e-8);
        assert_relative_eq!(reconstruction.value, target, max_relative = 1e-10);
    }

    #[test]
    fn test_discounted_round_trip() {
        let target = discounted_value(250.0, 0.015, 48).unwrap();

        let implied = implied_rate(target, 250.0, 48, ValueKind::Discounted).unwrap();

        assert_relative_eq!(implied.rate().unwrap(), 0.015, epsilon = 1e-10);
        assert!(implied.reconstruction.unwrap().error.abs() < 1e-8);
    }

    #[test]
    fn test_target_below_bracket() {
        // 10 payments of 100 can't accumulate to 500 at a positive rate
        let implied = implied_rate(500.0, 100.0, 10, ValueKind::Accumulated).unwrap();

        assert!(matches!(implied.outcome, RootResult::NoGuaranteedRoot { .. }));
        assert!(!implied.is_converged());
        assert_eq!(implied.rate(), None);
        assert_eq!(implied.reconstruction, None);
    }

    #[test]
    fn test_target_above_bracket() {
        // a(n) never drops below 1 / 1.99 per unit payment inside the bracket
        let implied = implied_rate(40.0, 100.0, 10, ValueKind::Discounted).unwrap();

        assert!(matches!(implied.outcome, RootResult::NoGuaranteedRoot { .. }));
        assert_eq!(implied.reconstruction, None);
    }

    #[test]
    fn test_custom_bracket() {
        let target = accumulated_value(100.0, 0.001, 120).unwrap();

        // Default bracket starts at 1%
        let default = implied_rate(target, 100.0, 120, ValueKind::Accumulated).unwrap();
        assert!(!default.is_converged());

        let config = ImpliedRateConfig::default()
            .with_bracket(0.0001, 0.05)
            .with_max_iterations(60);
        let implied =
            implied_rate_with_config(target, 100.0, 120, ValueKind::Accumulated, &config).unwrap();

        assert_relative_eq!(implied.rate().unwrap(), 0.001, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_amounts() {
        assert!(matches!(
            implied_rate(1000.0, 0.0, 10, ValueKind::Accumulated),
            Err(AnnuityError::InvalidAmount { name: "payment", .. })
        ));
        assert!(matches!(
            implied_rate(-5.0, 100.0, 10, ValueKind::Discounted),
            Err(AnnuityError::InvalidAmount { name: "value", .. })
        ));
        assert!(matches!(
            implied_rate(1000.0, 100.0, 0, ValueKind::Discounted),
            Err(AnnuityError::InvalidPeriods { .. })
        ));
    }

    #[test]
    fn test_invalid_config() {
        let cases = [
            ImpliedRateConfig::new(0.5, 0.1, 50),
            ImpliedRateConfig::new(-1.0, 0.5, 50),
            ImpliedRateConfig::new(0.01, f64::INFINITY, 50),
            ImpliedRateConfig::new(0.01, 0.99, 0),
        ];

        for config in cases {
            assert!(matches!(
                implied_rate_with_config(1000.0, 100.0, 8, ValueKind::Accumulated, &config),
                Err(AnnuityError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_serialize() {
        let target = accumulated_value(100.0, 0.05, 10).unwrap();
        let implied = implied_rate(target, 100.0, 10, ValueKind::Accumulated).unwrap();

        let json = serde_json::to_value(implied).unwrap();

        assert_eq!(json["kind"], "accumulated");
        assert_eq!(json["outcome"]["outcome"], "approximate_root");
        assert!(json["reconstruction"]["rate"].is_f64());
    }
}
