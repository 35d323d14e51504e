//! Property tests for the activation encoder.

use proptest::prelude::*;

use mandala_base::{
    GATE_WHEEL, activation_from_longitude, encode_fraction, index_of, opposite_gate,
    wheel_fraction,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every level stays in its domain for longitudes in [0, 360).
    #[test]
    fn property_levels_in_range(lon in 0.0f64..360.0) {
        let a = activation_from_longitude(lon).unwrap();
        prop_assert!(GATE_WHEEL.contains(&a.gate));
        prop_assert!((1..=6).contains(&a.line));
        prop_assert!((1..=6).contains(&a.color));
        prop_assert!((1..=6).contains(&a.tone));
        prop_assert!((1..=5).contains(&a.base));
    }

    /// PROPERTY: arbitrary finite longitudes reduce to a fraction in [0, 1).
    #[test]
    fn property_fraction_in_unit_interval(lon in -1.0e9f64..1.0e9) {
        let f = wheel_fraction(lon);
        prop_assert!((0.0..1.0).contains(&f), "lon {} -> {}", lon, f);
        let a = encode_fraction(f);
        prop_assert!((1..=64).contains(&a.gate));
        prop_assert!((1..=5).contains(&a.base));
    }

    /// PROPERTY: the gate is the wheel entry at floor(fraction * 64).
    #[test]
    fn property_gate_matches_index(lon in 0.0f64..360.0) {
        let f = wheel_fraction(lon);
        let a = encode_fraction(f);
        prop_assert_eq!(index_of(a.gate).unwrap(), (f * 64.0) as usize);
    }

    /// PROPERTY: opposite() moves only the gate and undoes itself.
    #[test]
    fn property_opposite_structural(lon in 0.0f64..360.0) {
        let a = activation_from_longitude(lon).unwrap();
        let o = a.opposite().unwrap();
        prop_assert_eq!(o.gate, opposite_gate(a.gate).unwrap());
        prop_assert_eq!((o.line, o.color, o.tone, o.base), (a.line, a.color, a.tone, a.base));
        prop_assert_eq!(o.opposite().unwrap(), a);
    }

    /// PROPERTY: encoding is deterministic.
    #[test]
    fn property_deterministic(lon in -720.0f64..720.0) {
        prop_assert_eq!(activation_from_longitude(lon), activation_from_longitude(lon));
    }
}
