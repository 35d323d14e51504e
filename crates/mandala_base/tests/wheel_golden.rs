//! Golden tests for gate placement around the wheel.
//!
//! Pure arithmetic, no ephemeris needed.

use mandala_base::{
    ALL_CENTERS, Activation, BaseError, Center, GATE_COUNT, GATE_SPAN_DEG, GATE_WHEEL,
    activation_from_longitude, center_of_gate, gate_at, gate_start_longitude_deg, index_of,
    opposite_gate,
};

// ---------------------------------------------------------------------------
// Wheel table
// ---------------------------------------------------------------------------

#[test]
fn every_gate_once() {
    let mut sorted = GATE_WHEEL;
    sorted.sort_unstable();
    let expected: Vec<u8> = (1..=64).collect();
    assert_eq!(sorted.to_vec(), expected);
}

#[test]
fn opposition_is_involution_for_all_gates() {
    for gate in 1..=64u8 {
        let o = opposite_gate(gate).unwrap();
        assert_ne!(o, gate, "gate {gate} is its own opposite");
        assert_eq!(opposite_gate(o).unwrap(), gate, "gate {gate}");
    }
}

#[test]
fn opposition_is_half_a_wheel() {
    for gate in 1..=64u8 {
        let i = index_of(gate).unwrap();
        let j = index_of(opposite_gate(gate).unwrap()).unwrap();
        assert_eq!((j + GATE_COUNT - i) % GATE_COUNT, 32, "gate {gate}");
    }
}

#[test]
fn lookups_outside_table_fail() {
    assert_eq!(gate_at(GATE_COUNT), Err(BaseError::IndexOutOfRange(64)));
    assert_eq!(opposite_gate(0), Err(BaseError::GateNotFound(0)));
}

// ---------------------------------------------------------------------------
// Longitude placement
// ---------------------------------------------------------------------------

#[test]
fn gate_sweep_all_64() {
    for (i, &gate) in GATE_WHEEL.iter().enumerate() {
        // A little past the middle of the gate, away from line boundaries.
        let lon = 302.0 + (i as f64 + 0.55) * GATE_SPAN_DEG;
        let a = activation_from_longitude(lon).unwrap();
        assert_eq!(a.gate, gate, "gate at {lon} deg");
        assert_eq!(a.line, 4, "line at {lon} deg");
    }
}

#[test]
fn gate_1_begins_at_13_15_scorpio() {
    // Scorpio starts at 210 deg.
    let start = gate_start_longitude_deg(index_of(1).unwrap()).unwrap();
    assert!((start - 223.25).abs() < 1e-9, "start = {start}");
    assert_eq!(activation_from_longitude(223.26).unwrap().gate, 1);
    assert_eq!(activation_from_longitude(223.24).unwrap().gate, 44);
}

#[test]
fn gate_2_begins_at_13_15_taurus() {
    let start = gate_start_longitude_deg(index_of(2).unwrap()).unwrap();
    assert!((start - 43.25).abs() < 1e-9, "start = {start}");
}

#[test]
fn zero_point_activation() {
    assert_eq!(
        activation_from_longitude(302.0).unwrap(),
        Activation {
            gate: GATE_WHEEL[0],
            line: 1,
            color: 1,
            tone: 1,
            base: 1,
        }
    );
}

#[test]
fn zero_degrees_aries_is_gate_25() {
    // 0 deg + 58 = 58 deg into the wheel: index 10 (56.25..61.875).
    let a = activation_from_longitude(0.0).unwrap();
    assert_eq!(a.gate, 25);
    assert_eq!(a.to_string_depth(2), "25.2");
}

// ---------------------------------------------------------------------------
// Centers
// ---------------------------------------------------------------------------

#[test]
fn every_gate_belongs_to_exactly_one_center() {
    for &gate in &GATE_WHEEL {
        let owners: Vec<Center> = ALL_CENTERS
            .iter()
            .copied()
            .filter(|c| c.gates().contains(&gate))
            .collect();
        assert_eq!(owners.len(), 1, "gate {gate} owned by {owners:?}");
        assert_eq!(center_of_gate(gate), Ok(owners[0]));
    }
    let total: usize = ALL_CENTERS.iter().map(|c| c.gates().len()).sum();
    assert_eq!(total, GATE_COUNT);
}

#[test]
fn center_gate_counts() {
    let counts: Vec<(Center, usize)> = ALL_CENTERS.iter().map(|&c| (c, c.gates().len())).collect();
    assert_eq!(
        counts,
        vec![
            (Center::Head, 3),
            (Center::Ajna, 6),
            (Center::Throat, 11),
            (Center::G, 8),
            (Center::Heart, 4),
            (Center::Spleen, 7),
            (Center::SolarPlexus, 7),
            (Center::Sacral, 9),
            (Center::Root, 9),
        ]
    );
}
