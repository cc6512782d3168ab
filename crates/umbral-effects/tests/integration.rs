//! End-to-end behavior of the look-ahead gate on step signals.
//!
//! All scenarios run at 1 kHz so that seconds read directly as
//! milliseconds and sample indices are easy to follow.

use umbral_core::Effect;
use umbral_effects::{
    GateEnvelope, GateError, GateParams, GateState, LookaheadGate, MAX_TIME_SAMPLES, OutputMode,
    process_buffer,
};

const SAMPLE_RATE: f64 = 1000.0;

/// Below threshold for [0, 1000), above through 2000 inclusive, below after.
fn step_signal() -> Vec<f32> {
    let mut input = vec![0.1_f32; 1000];
    input.extend(vec![0.9_f32; 1001]);
    input.extend(vec![0.1_f32; 999]);
    input
}

/// Envelope states and gains for `input` plus its silent tail.
fn trace(params: GateParams, input: &[f32]) -> Vec<(GateState, f64)> {
    let mut env = GateEnvelope::new(params);
    input
        .iter()
        .copied()
        .chain(core::iter::repeat_n(0.0, params.delay_len()))
        .map(|s| {
            let v = env.tick(s);
            (env.state(), v)
        })
        .collect()
}

#[test]
fn step_with_short_lookahead_reaches_unity_at_on_count() {
    // rise 20 > delay 10: the crossing is seen at 1000, after start_rise
    // (1010 - 20 = 990) has passed, so the rise starts late and is cut short.
    let params = GateParams::new(SAMPLE_RATE, 0.02, 0.05, 0.01, 0.5, 0.01).unwrap();
    let out = trace(params, &step_signal());
    assert_eq!(out.len(), 3010);

    for &(state, v) in &out[..1000] {
        assert_eq!(state, GateState::Off);
        assert_eq!(v, 0.01);
    }
    assert_eq!(out[1000], (GateState::OffUntil, 0.01));
    assert_eq!(out[1001].0, GateState::Rise);
    for &(state, v) in &out[1001..1010] {
        assert_eq!(state, GateState::Rise);
        assert!(v < 1.0);
    }
    assert_eq!(out[1010], (GateState::Hold, 1.0));
}

#[test]
fn step_holds_through_last_crossing_plus_delay() {
    let params = GateParams::new(SAMPLE_RATE, 0.02, 0.05, 0.01, 0.5, 0.01).unwrap();
    let out = trace(params, &step_signal());

    // Last crossing at 2000 -> off_count 2010
    for &(state, v) in &out[1010..2010] {
        assert_eq!(state, GateState::Hold);
        assert_eq!(v, 1.0);
    }
    // Fall begins at off_count; the first decayed gain follows one tick later.
    assert_eq!(out[2010], (GateState::Fall, 1.0));
    let factor = params.fall_factor();
    assert!((out[2011].1 - factor).abs() < 1e-12);
    for w in out[2011..2059].windows(2) {
        assert!((w[1].1 / w[0].1 - factor).abs() < 1e-9);
    }
    // stop_count = 2010 + 50
    assert_eq!(out[2060], (GateState::Off, 0.01));
    for &(state, v) in &out[2060..] {
        assert_eq!(state, GateState::Off);
        assert_eq!(v, 0.01);
    }
}

#[test]
fn step_with_long_lookahead_runs_full_rise() {
    // delay 20 >= rise 10: the whole rise fits before the step reaches the
    // output.
    let params = GateParams::new(SAMPLE_RATE, 0.01, 0.05, 0.01, 0.5, 0.02).unwrap();
    let out = trace(params, &step_signal());
    assert_eq!(out.len(), 3020);

    for &(state, v) in &out[1000..1010] {
        assert_eq!(state, GateState::OffUntil);
        assert_eq!(v, 0.01);
    }
    // start_rise = 1020 - 10
    assert_eq!(out[1010], (GateState::Rise, 0.01));
    let factor = params.rise_factor();
    for w in out[1010..1020].windows(2) {
        assert!((w[1].1 / w[0].1 - factor).abs() < 1e-9);
    }
    assert_eq!(out[1020], (GateState::Hold, 1.0));
    assert_eq!(out[2020], (GateState::Fall, 1.0));
}

#[test]
fn gated_output_is_delayed_input_times_gain() {
    let params = GateParams::new(SAMPLE_RATE, 0.01, 0.05, 0.01, 0.5, 0.02).unwrap();
    let input = step_signal();
    let envelope = process_buffer(params, OutputMode::Envelope, &input);
    let gated = process_buffer(params, OutputMode::Gated, &input);
    assert_eq!(gated.len(), input.len() + 20);

    for (i, (&g, &e)) in gated.iter().zip(&envelope).enumerate() {
        let delayed = if i >= 20 { input.get(i - 20).copied().unwrap_or(0.0) } else { 0.0 };
        assert_eq!(g, delayed * e, "sample {i}");
    }
    // The first loud sample reaches the output with the gate fully open.
    assert_eq!(gated[1020], 0.9);
    // Quiet signal before the step is attenuated to the floor.
    assert!((gated[500] - 0.001).abs() < 1e-7);
}

#[test]
fn block_processing_matches_stream() {
    let params = GateParams::new(48000.0, 0.002, 0.03, 0.05, 0.2, 0.004).unwrap();
    let input: Vec<f32> = (0..4800)
        .map(|i| {
            let t = i as f32 / 48000.0;
            let burst = if (i / 600) % 2 == 0 { 0.8 } else { 0.05 };
            burst * (2.0 * core::f32::consts::PI * 220.0 * t).sin()
        })
        .collect();

    let expected = process_buffer(params, OutputMode::Gated, &input);

    let mut gate = LookaheadGate::with_mode(params, OutputMode::Gated);
    let mut actual = vec![0.0; input.len() + gate.tail_samples()];
    for (inp, out) in input.chunks(256).zip(actual.chunks_mut(256)) {
        gate.process_block(inp, &mut out[..inp.len()]);
    }
    let written = gate.process_tail(&mut actual[input.len()..]);
    assert_eq!(written, params.delay_len());
    assert_eq!(actual, expected);
}

#[test]
fn negative_excursions_never_open_the_gate() {
    let params = GateParams::new(SAMPLE_RATE, 0.01, 0.02, 0.01, 0.5, 0.01).unwrap();
    let input = vec![-1.0_f32; 500];
    let out = process_buffer(params, OutputMode::Envelope, &input);
    assert!(out.iter().all(|&v| v == 0.01));
}

#[test]
fn zero_threshold_opens_on_silence() {
    let params = GateParams::new(SAMPLE_RATE, 0.01, 0.02, 0.01, 0.0, 0.01).unwrap();
    let out = process_buffer(params, OutputMode::Envelope, &[0.0; 100]);
    // Crossing at 0 -> on_count 10; gate stays open through the tail.
    assert_eq!(out[10], 1.0);
    assert!(out[10..].iter().all(|&v| v == 1.0));
}

#[test]
fn independent_streams_do_not_interfere() {
    let params = GateParams::new(SAMPLE_RATE, 0.01, 0.02, 0.01, 0.5, 0.01).unwrap();
    let loud = vec![1.0_f32; 200];
    let quiet = vec![0.0_f32; 200];

    let mut a = LookaheadGate::new(params);
    let mut b = LookaheadGate::new(params);
    for (&x, &y) in loud.iter().zip(&quiet) {
        a.process(x);
        b.process(y);
    }
    assert_eq!(a.state(), GateState::Hold);
    assert_eq!(b.state(), GateState::Off);
    assert_eq!(b.gain(), 0.01);
}

#[test]
fn overlong_rise_or_fall_is_a_construction_error() {
    for (rise, fall, param) in [(0.01, 1e16, "falltime"), (1e16, 0.01, "risetime")] {
        let err = GateParams::new(48000.0, rise, fall, 0.01, 0.5, 0.01).unwrap_err();
        assert!(
            matches!(err, GateError::TimeTooLong { param: p, .. } if p == param),
            "got {err:?}"
        );
    }
}

#[test]
fn longest_accepted_times_run_without_overflow() {
    let longest = MAX_TIME_SAMPLES as f64 / SAMPLE_RATE;
    let params = GateParams::new(SAMPLE_RATE, longest, longest, 0.01, 0.5, 0.01).unwrap();
    let mut input = vec![0.0_f32; 100];
    input.extend(vec![1.0_f32; 200]);

    let out = trace(params, &input);
    assert_eq!(out.len(), 310);
    assert_eq!(out[100].0, GateState::OffUntil);
    assert_eq!(out[101].0, GateState::Rise);
    assert_eq!(out[110], (GateState::Hold, 1.0));
    // Last crossing at 299 -> fall entered at 309, still at unity.
    assert_eq!(out[309], (GateState::Fall, 1.0));
    assert!(out.iter().all(|&(_, v)| (0.01..=1.0).contains(&v)));

    let gated = process_buffer(params, OutputMode::Gated, &input);
    assert_eq!(gated[110], 1.0);
}
