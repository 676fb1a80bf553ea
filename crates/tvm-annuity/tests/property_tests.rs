//! Property-based tests for annuity invariants.
//!
//! These tests verify properties that should always hold:
//! - The payment formula inverts the value formulas
//! - Accumulated value = discounted value compounded over the term
//! - A solved implied rate reproduces its target value

use approx::relative_eq;
use proptest::prelude::*;
use tvm_annuity::prelude::*;

proptest! {
    #[test]
    fn payment_inverts_value(
        payment in 1.0f64..10_000.0,
        rate in 0.0001f64..0.5,
        periods in 1u32..400,
    ) {
        for kind in [ValueKind::Accumulated, ValueKind::Discounted] {
            let value = kind.value(payment, rate, periods).unwrap();
            let recovered = periodic_payment(value, rate, periods, kind).unwrap();
            prop_assert!(relative_eq!(recovered, payment, max_relative = 1e-9));
        }
    }

    #[test]
    fn accumulated_is_compounded_discounted(
        payment in 1.0f64..10_000.0,
        rate in 0.0001f64..0.2,
        periods in 1u32..200,
    ) {
        let s = accumulated_value(payment, rate, periods).unwrap();
        let a = discounted_value(payment, rate, periods).unwrap();
        let growth = (1.0 + rate).powf(f64::from(periods));
        prop_assert!(relative_eq!(s, a * growth, max_relative = 1e-9));
    }

    #[test]
    fn implied_rate_reproduces_target(
        payment in 10.0f64..5_000.0,
        rate in 0.012f64..0.95,
        periods in 2u32..120,
        accumulated in any::<bool>(),
    ) {
        let kind = if accumulated { ValueKind::Accumulated } else { ValueKind::Discounted };
        let target = kind.value(payment, rate, periods).unwrap();

        let implied = implied_rate(target, payment, periods, kind).unwrap();

        let reconstruction = implied.reconstruction.unwrap();
        prop_assert!(relative_eq!(reconstruction.value, target, max_relative = 1e-8));
        prop_assert!((reconstruction.rate - rate).abs() < 1e-8);
    }
}
