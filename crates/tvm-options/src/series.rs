//! Payoff curves over a grid of spot prices.
//!
//! A payoff series is the sequence of `(spot, payoff)` pairs a diagram is
//! drawn from. Breakevens are located on the same grid and then refined with
//! the bisection solver.

use serde::{Deserialize, Serialize};
use tvm_math::solvers::bisection;

use crate::error::{OptionsError, OptionsResult};
use crate::strategy::Strategy;

/// Largest grid [`spot_grid`] will allocate.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Bisection steps used to refine a breakeven between two grid points.
const BREAKEVEN_ITERATIONS: u32 = 60;

/// One point of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Spot price at expiry.
    pub spot: f64,
    /// Profit of the position at that spot.
    pub payoff: f64,
}

/// Evenly spaced spots over the half-open range `[start, stop)`.
///
/// Points are `start + k * step`, computed by multiplication so long grids
/// don't accumulate rounding drift.
///
/// # Example
///
/// ```rust
/// use tvm_options::series::spot_grid;
///
/// let grid = spot_grid(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn spot_grid(start: f64, stop: f64, step: f64) -> OptionsResult<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(OptionsError::InvalidGrid(format!(
            "bounds must be finite, got [{}, {})",
            start, stop
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(OptionsError::InvalidGrid(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if stop <= start {
        return Err(OptionsError::InvalidGrid(format!(
            "stop {} must be greater than start {}",
            stop, start
        )));
    }

    let count = ((stop - start) / step).ceil();
    if count > MAX_GRID_POINTS as f64 {
        return Err(OptionsError::InvalidGrid(format!(
            "{} points exceeds the limit of {}",
            count, MAX_GRID_POINTS
        )));
    }

    // Rounding in `count` can put one point on `stop`
    Ok((0..count as usize)
        .map(|k| start + k as f64 * step)
        .take_while(|&spot| spot < stop)
        .collect())
}

/// Evaluates `strategy` at every spot in `grid`.
pub fn payoff_series(strategy: &Strategy, grid: &[f64]) -> Vec<PayoffPoint> {
    grid.iter()
        .map(|&spot| PayoffPoint {
            spot,
            payoff: strategy.payoff(spot),
        })
        .collect()
}

/// Spots in `[start, stop)` where the payoff of `strategy` crosses zero.
///
/// A crossing is a sign change between two grid points with non-zero payoff.
/// When the grid lands exactly on zero the first such spot is reported;
/// otherwise the crossing is refined by bisection between the two grid points.
/// A single zero on the first or last grid point next to a non-zero payoff is
/// reported too. Flat stretches of zero payoff that do not change sign are
/// not breakevens.
pub fn breakevens(strategy: &Strategy, start: f64, stop: f64, step: f64) -> OptionsResult<Vec<f64>> {
    let grid = spot_grid(start, stop, step)?;
    let series = payoff_series(strategy, &grid);

    let mut found = Vec::new();
    let mut previous: Option<PayoffPoint> = None;
    // First spot and length of the current run of zero payoffs
    let mut zero_run: Option<(f64, usize)> = None;

    for point in series {
        if point.payoff == 0.0 {
            zero_run = Some(match zero_run {
                Some((spot, len)) => (spot, len + 1),
                None => (point.spot, 1),
            });
            continue;
        }

        match previous {
            Some(prev) if prev.payoff.signum() != point.payoff.signum() => {
                let spot = match zero_run {
                    Some((spot, _)) => spot,
                    None => bisection(
                        |s| strategy.payoff(s),
                        prev.spot,
                        point.spot,
                        BREAKEVEN_ITERATIONS,
                    )
                    .into_result()?,
                };
                found.push(spot);
            }
            None => {
                if let Some((spot, 1)) = zero_run {
                    found.push(spot);
                }
            }
            Some(_) => {}
        }

        zero_run = None;
        previous = Some(point);
    }

    if let (Some(_), Some((spot, 1))) = (previous, zero_run) {
        found.push(spot);
    }

    log::debug!(
        "{}: {} breakeven(s) in [{}, {})",
        strategy.name(),
        found.len(),
        start,
        stop
    );
    Ok(found)
}
