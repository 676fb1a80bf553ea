//! Property-based tests for the bisection solver.
//!
//! These tests verify properties that should hold for any input:
//! - A sign-changing bracket always produces a root
//! - A bracket without a sign change is rejected before any iteration
//! - Repeated calls agree
//! - Every iteration halves the bracket

use std::cell::Cell;

use proptest::prelude::*;
use tvm_math::prelude::*;

/// Strictly increasing cubic with a single real root at `r`.
fn shifted_cubic(r: f64) -> impl Fn(f64) -> f64 {
    move |x: f64| (x - r).powi(3) + (x - r)
}

proptest! {
    #[test]
    fn sign_change_always_converges(
        root in -50.0f64..50.0,
        below in 0.1f64..20.0,
        above in 0.1f64..20.0,
        iterations in 1u32..80,
    ) {
        let f = shifted_cubic(root);
        let (a, b) = (root - below, root + above);

        let result = bisection(&f, a, b, iterations);

        prop_assert!(result.is_converged(), "unexpected outcome {:?}", result);
        let x = result.root().unwrap();
        prop_assert!(x >= a && x <= b);
        if let RootResult::ApproximateRoot { .. } = result {
            let bound = (b - a) / 2f64.powi(iterations as i32 + 1);
            prop_assert!((x - root).abs() <= bound * (1.0 + 1e-9) + 1e-12);
        }
    }

    #[test]
    fn same_sign_is_rejected_without_iterating(
        offset in 0.0f64..10.0,
        a in -10.0f64..10.0,
        width in 0.01f64..10.0,
    ) {
        let calls = Cell::new(0u32);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x * x + offset
        };
        let mut steps = 0u32;

        let result = bisection_with_observer(f, a, a + width, 50, |_| steps += 1);

        let is_no_guaranteed_root = matches!(result, RootResult::NoGuaranteedRoot { .. });
        prop_assert!(is_no_guaranteed_root);
        prop_assert_eq!(calls.get(), 2);
        prop_assert_eq!(steps, 0);
    }

    #[test]
    fn repeated_calls_agree(
        root in -5.0f64..5.0,
        iterations in 1u32..60,
    ) {
        let f = shifted_cubic(root);

        let first = bisection(&f, -10.0, 10.0, iterations);
        let second = bisection(&f, -10.0, 10.0, iterations);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_iteration_halves_the_bracket(
        root in 0.05f64..0.95,
        iterations in 1u32..40,
    ) {
        let f = shifted_cubic(root);
        let mut previous = 1.0f64;

        bisection_with_observer(&f, 0.0, 1.0, iterations, |step| {
            let width = step.width();
            assert!((width - previous / 2.0).abs() <= previous * 1e-12);
            assert!(f(step.lower) * f(step.upper) <= 0.0);
            previous = width;
        });
    }
}
