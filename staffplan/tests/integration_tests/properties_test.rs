// tests/integration_tests/properties_test.rs
use proptest::prelude::*;
use staffplan::utils::ROUNDING_ULPS;
use staffplan::{
    HierarchyConfig, SupervisorPolicy, distribute, ratio_based_staff, time_based_staff,
    total_with_reserve,
};

fn hierarchy() -> impl Strategy<Value = HierarchyConfig> {
    (
        1_u32..=3,
        1_u32..50,
        1_u32..20,
        0_u32..3,
        0.0_f64..=0.5,
        prop_oneof![Just(SupervisorPolicy::Max), Just(SupervisorPolicy::Additive)],
    )
        .prop_map(
            |(shifts, sup_ratio, asst_ratio, required, reserve, policy)| HierarchyConfig {
                shifts_per_day: shifts,
                supervisor_ratio: sup_ratio,
                assistant_head_ratio: asst_ratio,
                required_assistant_heads_per_shift: required,
                reserve_fraction: reserve,
                policy,
            },
        )
}

proptest! {
    #[test]
    fn ratio_staff_is_monotonic(a in 0_u32..100_000, b in 0_u32..100_000, ratio in 1_u32..500) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let ratio = f64::from(ratio);
        prop_assert!(
            ratio_based_staff(f64::from(low), ratio) <= ratio_based_staff(f64::from(high), ratio)
        );
    }

    #[test]
    fn ratio_staff_matches_integer_ceiling(quantity in 0_u32..1_000_000, ratio in 1_u32..1000) {
        let expected = u64::from(quantity).div_ceil(u64::from(ratio));
        prop_assert_eq!(ratio_based_staff(f64::from(quantity), f64::from(ratio)), expected);
    }

    #[test]
    fn ratio_staff_matches_fractional_ceiling(quantity in 0.0_f64..1e9, ratio in 1e-6_f64..1e6) {
        let quotient = quantity / ratio;
        let nearest = quotient.round();
        let within_slack = nearest > 0.0
            && (quotient - nearest).abs() <= quotient * f64::EPSILON * ROUNDING_ULPS;
        let expected = if within_slack { nearest } else { quotient.ceil() };
        prop_assert_eq!(ratio_based_staff(quantity, ratio), expected as u64);
    }

    #[test]
    fn positive_quantity_needs_at_least_one(quantity in 1e-300_f64..1.0, ratio in 1.0_f64..1e6) {
        prop_assert!(ratio_based_staff(quantity, ratio) >= 1);
    }

    #[test]
    fn time_staff_is_zero_without_hours(events in 0.0_f64..1e6, minutes in 0.1_f64..60.0, days in 0_u32..30) {
        prop_assert_eq!(time_based_staff(events, minutes, days, 0), 0);
        prop_assert_eq!(time_based_staff(events, minutes, 0, days), 0);
    }

    #[test]
    fn providers_equal_base_staff(base in 0_u64..100_000, config in hierarchy()) {
        let breakdown = distribute(base, &config);
        prop_assert_eq!(breakdown.service_provider, base);
        prop_assert_eq!(breakdown.head, 1);
        prop_assert!(breakdown.field_supervisor >= u64::from(config.shifts_per_day));
    }

    #[test]
    fn reserve_never_shrinks_total(base in 0_u64..100_000, config in hierarchy()) {
        let breakdown = distribute(base, &config);
        let total = total_with_reserve(&breakdown, config.reserve_fraction);
        prop_assert!(total >= breakdown.subtotal());
    }

    #[test]
    fn distribution_is_idempotent(base in 0_u64..100_000, config in hierarchy()) {
        prop_assert_eq!(distribute(base, &config), distribute(base, &config));
    }
}
