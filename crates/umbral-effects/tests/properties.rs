//! Property-based tests for the gate envelope.
//!
//! Uses proptest to check the invariants that must hold for every valid
//! parameter set and any input: bounded gain, exact per-segment factors,
//! flat hold and floor segments, and the stream length contract.

use proptest::prelude::*;
use umbral_effects::{
    GateEnvelope, GateParams, GateState, OutputMode, compute_start_rise, process_buffer,
};

/// Valid parameters with small sample counts so segments fit in the input.
fn any_params() -> impl Strategy<Value = GateParams> {
    (
        prop_oneof![Just(1000.0), Just(8000.0), Just(44100.0)],
        0.0f64..0.01,
        0.0f64..0.02,
        0.001f64..0.5,
        0.0f64..1.0,
        0.0f64..0.01,
    )
        .prop_map(|(sr, rise, fall, floor, threshold, look)| {
            GateParams::new(sr, rise, fall, floor, threshold, look).unwrap()
        })
}

/// Bursty input: runs of loud and quiet samples, either polarity.
fn any_signal() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec((-1.0f32..=1.0, 1usize..120), 1..20).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(level, len)| core::iter::repeat_n(level, len))
            .collect()
    })
}

fn trace(params: GateParams, input: &[f32]) -> Vec<(GateState, f64)> {
    let mut env = GateEnvelope::new(params);
    input
        .iter()
        .map(|&s| {
            let v = env.tick(s);
            (env.state(), v)
        })
        .collect()
}

fn is_falling(state: GateState) -> bool {
    matches!(state, GateState::Fall | GateState::FallUntil)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The gain never leaves [floor, 1.0].
    #[test]
    fn gain_stays_in_range(params in any_params(), input in any_signal()) {
        for (i, (_, v)) in trace(params, &input).into_iter().enumerate() {
            prop_assert!(
                v >= params.floor() && v <= 1.0,
                "gain {} out of range at sample {}", v, i
            );
        }
    }

    /// Hold is exactly unity; Off and OffUntil are exactly the floor.
    #[test]
    fn flat_states_are_exact(params in any_params(), input in any_signal()) {
        for (state, v) in trace(params, &input) {
            match state {
                GateState::Hold => prop_assert_eq!(v, 1.0),
                GateState::Off | GateState::OffUntil => prop_assert_eq!(v, params.floor()),
                _ => {}
            }
        }
    }

    /// Within one fall segment each gain is the previous one times the fall
    /// factor, until it settles on the floor.
    #[test]
    fn fall_uses_fall_factor(params in any_params(), input in any_signal()) {
        let out = trace(params, &input);
        for w in out.windows(2) {
            let ((prev_state, prev), (state, v)) = (w[0], w[1]);
            if is_falling(prev_state) && is_falling(state) {
                let expected = (prev * params.fall_factor()).max(params.floor());
                prop_assert_eq!(v, expected);
            }
        }
    }

    /// Within one rise segment each gain is the previous one times the rise
    /// factor, capped at unity.
    #[test]
    fn rise_uses_rise_factor(params in any_params(), input in any_signal()) {
        let out = trace(params, &input);
        for w in out.windows(2) {
            let ((prev_state, prev), (state, v)) = (w[0], w[1]);
            if prev_state == GateState::Rise && state == GateState::Rise {
                prop_assert_eq!(v, (prev * params.rise_factor()).min(1.0));
            }
        }
    }

    /// A rise lands on unity exactly at its on_count. With a one-sample
    /// look-ahead the rise can only begin at on_count itself, so it lands
    /// one sample later.
    #[test]
    fn hold_entered_at_on_count(params in any_params(), input in any_signal()) {
        prop_assume!(params.delay_len() >= 2);
        let mut env = GateEnvelope::new(params);
        let mut prev = env.state();
        for &s in &input {
            let now = env.now();
            env.tick(s);
            if prev == GateState::Rise && env.state() == GateState::Hold {
                prop_assert_eq!(now, env.on_count());
            }
            prev = env.state();
        }
    }

    /// Output length is input length plus the look-ahead, in both modes.
    #[test]
    fn stream_length(params in any_params(), input in any_signal(), gated in any::<bool>()) {
        let mode = if gated { OutputMode::Gated } else { OutputMode::Envelope };
        let out = process_buffer(params, mode, &input);
        prop_assert_eq!(out.len(), input.len() + params.delay_len());
    }

    /// A scheduled rise never starts after it is due to finish.
    #[test]
    fn start_rise_not_after_on_count(
        rise in 1i64..10_000,
        fall in 1i64..10_000,
        start_fall in 0i64..1_000_000,
        ahead in 0i64..50_000,
    ) {
        let on_count = start_fall + ahead;
        prop_assert!(compute_start_rise(rise, fall, on_count, start_fall) <= on_count);
    }
}
