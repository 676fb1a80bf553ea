//! Bisection root-finding algorithm.

use crate::solvers::{BisectionStep, RootResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket `[a, b]`, keeping the half whose endpoints
/// show a sign change, for exactly `max_iterations` steps unless a midpoint is
/// an exact root or the sign check breaks down first.
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints). Otherwise the
/// call returns [`RootResult::NoGuaranteedRoot`] without iterating.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `max_iterations` - Number of halving steps
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::bisection;
///
/// let f = |x: f64| x * x - x - 1.0;
///
/// let result = bisection(f, 1.0, 2.0, 25);
/// assert!((result.root().unwrap() - 1.618033988749895).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, max_iterations: u32) -> RootResult
where
    F: Fn(f64) -> f64,
{
    bisection_with_observer(f, a, b, max_iterations, |_| {})
}

/// Bisection with a per-iteration observer.
///
/// `observer` is called once per completed iteration with the bracket after
/// the update. It is not called when the entry check rejects the bracket or
/// when the sign check fails mid-iteration.
pub fn bisection_with_observer<F, O>(
    f: F,
    a: f64,
    b: f64,
    max_iterations: u32,
    mut observer: O,
) -> RootResult
where
    F: Fn(f64) -> f64,
    O: FnMut(&BisectionStep),
{
    let fa = f(a);
    let fb = f(b);

    // NaN endpoints must not pass
    let product = fa * fb;
    if product.is_nan() || product >= 0.0 {
        log::debug!(
            "bisection: no guaranteed root in [{}, {}], f(a) = {}, f(b) = {}",
            a,
            b,
            fa,
            fb
        );
        return RootResult::NoGuaranteedRoot { fa, fb };
    }

    let mut lo = a;
    let mut hi = b;
    let mut f_lo = fa;
    let mut f_hi = fb;

    for iteration in 1..=max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid == 0.0 {
            observer(&BisectionStep {
                iteration,
                mid,
                f_mid,
                lower: lo,
                upper: hi,
            });
            log::debug!("bisection: exact root {} at iteration {}", mid, iteration);
            return RootResult::ExactRoot {
                root: mid,
                iterations: iteration,
            };
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
            f_hi = f_mid;
        } else if f_hi * f_mid < 0.0 {
            lo = mid;
            f_lo = f_mid;
        } else {
            log::warn!(
                "bisection: no sign change in [{}, {}] at iteration {} (f(mid) = {})",
                lo,
                hi,
                iteration,
                f_mid
            );
            return RootResult::DegenerateFailure {
                iteration,
                lower: lo,
                upper: hi,
                f_mid,
            };
        }

        observer(&BisectionStep {
            iteration,
            mid,
            f_mid,
            lower: lo,
            upper: hi,
        });
    }

    let root = (lo + hi) / 2.0;
    log::debug!(
        "bisection: approximate root {} after {} iterations (width {:.2e})",
        root,
        max_iterations,
        (hi - lo).abs()
    );
    RootResult::ApproximateRoot {
        root,
        iterations: max_iterations,
        lower: lo,
        upper: hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[test]
    fn test_golden_ratio() {
        let f = |x: f64| x * x - x - 1.0;

        let result = bisection(f, 1.0, 2.0, 25);

        assert!(matches!(
            result,
            RootResult::ApproximateRoot { iterations: 25, .. }
        ));
        assert_relative_eq!(result.root().unwrap(), 1.618033988749895, epsilon = 1e-6);
    }

    #[test]
    fn test_exact_hit() {
        let f = |x: f64| (2.0 * x - 1.0) * (x - 3.0);

        let result = bisection(f, 0.0, 1.0, 10);

        assert_eq!(
            result,
            RootResult::ExactRoot {
                root: 0.5,
                iterations: 1
            }
        );
    }

    #[test]
    fn test_same_sign_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, 2.0, 3.0, 50);

        assert_eq!(result, RootResult::NoGuaranteedRoot { fa: 2.0, fb: 7.0 });
    }

    #[test]
    fn test_root_at_endpoint_is_not_guaranteed() {
        // f(a) * f(b) == 0 is rejected
        let f = |x: f64| x - 1.0;

        let result = bisection(f, 0.0, 1.0, 50);

        assert_eq!(result, RootResult::NoGuaranteedRoot { fa: -1.0, fb: 0.0 });
    }

    #[test]
    fn test_rejected_bracket_skips_iteration() {
        let calls = Cell::new(0u32);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * x + 1.0
        };
        let mut steps = 0;

        let result = bisection_with_observer(f, -1.0, 1.0, 50, |_| steps += 1);

        assert!(matches!(result, RootResult::NoGuaranteedRoot { .. }));
        assert_eq!(calls.get(), 2);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_nan_endpoint() {
        let f = |x: f64| if x < 0.5 { f64::NAN } else { x };

        let result = bisection(f, 0.0, 1.0, 50);

        assert!(matches!(result, RootResult::NoGuaranteedRoot { .. }));
    }

    #[test]
    fn test_degenerate_failure() {
        // Sign change at the ends, undefined in the middle
        let f = |x: f64| {
            if x < 0.25 {
                -1.0
            } else if x > 0.75 {
                1.0
            } else {
                f64::NAN
            }
        };

        let result = bisection(f, 0.0, 1.0, 50);

        assert_eq!(result.iterations(), 1);
        assert!(matches!(
            result,
            RootResult::DegenerateFailure {
                iteration: 1,
                lower,
                upper,
                ..
            } if lower == 0.0 && upper == 1.0
        ));
        assert_eq!(result.root(), None);
    }

    #[test]
    fn test_interval_halving() {
        let f = |x: f64| x * x - 2.0;
        let (a, b) = (1.0, 2.0);
        let mut widths = Vec::new();

        let result = bisection_with_observer(f, a, b, 30, |step| widths.push(step.width()));

        assert_eq!(widths.len(), 30);
        for (k, width) in widths.iter().enumerate() {
            let expected = (b - a) / 2f64.powi(k as i32 + 1);
            assert_relative_eq!(*width, expected, max_relative = 1e-12);
        }
        if let RootResult::ApproximateRoot { lower, upper, .. } = result {
            assert_relative_eq!(upper - lower, (b - a) / 2f64.powi(30), max_relative = 1e-12);
        } else {
            panic!("Expected ApproximateRoot");
        }
    }

    #[test]
    fn test_bracket_keeps_sign_change() {
        let f = |x: f64| x.cos() - x;

        bisection_with_observer(f, 0.0, 1.0, 40, |step| {
            assert!(f(step.lower) * f(step.upper) < 0.0);
        });
    }

    #[test]
    fn test_zero_iterations() {
        let f = |x: f64| x - 0.3;

        let result = bisection(f, 0.0, 1.0, 0);

        assert_eq!(
            result,
            RootResult::ApproximateRoot {
                root: 0.5,
                iterations: 0,
                lower: 0.0,
                upper: 1.0
            }
        );
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;

        let result = bisection(f, -2.0, 0.5, 60);

        assert_relative_eq!(result.root().unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

        assert_eq!(bisection(f, 2.0, 3.0, 40), bisection(f, 2.0, 3.0, 40));
    }
}
