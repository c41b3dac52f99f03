use super::*;
use crate::buffer::Engine;
use alloc::vec::Vec;

const TOL: f32 = 1e-3;

fn naive_dft(x: &[Complex32]) -> Vec<Complex32> {
    let n = x.len();
    (0..n)
        .map(|k| {
            let mut sum = Complex32::new(0.0, 0.0);
            for (j, xj) in x.iter().enumerate() {
                let angle = -2.0 * core::f32::consts::PI * (k as f32) * (j as f32) / (n as f32);
                sum += *xj * Complex32::new(angle.cos(), angle.sin());
            }
            sum
        })
        .collect()
}

fn run_generic(m: usize, input: &[Complex32]) -> Vec<Complex32> {
    let mut engine = Engine::new();
    engine.precompute_twiddles(m).unwrap();
    let half = m / 2;
    let twiddles: Vec<_> = engine.twiddles(half).iter().copied().collect();

    let mut primary: Vec<f32> = input.iter().flat_map(|c| [c.re, c.im]).collect();
    let mut scratch = alloc::vec![0f32; m * 2];
    let landed_in_scratch = forward(&mut primary, &mut scratch, &twiddles, m);
    let buf = if landed_in_scratch { &scratch } else { &primary };
    (0..m).map(|k| load(buf, k)).collect()
}

#[test]
fn matches_naive_dft_for_64_and_128() {
    for &m in &[64usize, 128] {
        let input: Vec<Complex32> = (0..m)
            .map(|i| Complex32::new((i as f32) * 0.11 - 2.0, (i as f32) * -0.05 + 0.3))
            .collect();
        let want = naive_dft(&input);
        let got = run_generic(m, &input);
        for (g, w) in got.iter().zip(&want) {
            assert!((g - w).norm() < TOL, "{g:?} vs {w:?}");
        }
    }
}

#[test]
fn natural_order_dc_input_collapses_to_single_bin() {
    let m = 256usize;
    let input = alloc::vec![Complex32::new(1.0, 0.0); m];
    let got = run_generic(m, &input);
    assert!((got[0] - Complex32::new(m as f32, 0.0)).norm() < TOL);
    for c in &got[1..] {
        assert!(c.norm() < TOL);
    }
}

#[test]
fn result_parity_matches_stage_count() {
    // One buffer swap per stage: an even stage count (log2(m) even) lands
    // the result back in the caller's `primary` slot, an odd count leaves
    // it in `scratch` for the caller to copy back.
    let mut engine = Engine::new();
    engine.precompute_twiddles(64).unwrap();
    let twiddles: Vec<_> = engine.twiddles(32).iter().copied().collect();
    let mut primary = alloc::vec![0f32; 128];
    let mut scratch = alloc::vec![0f32; 128];
    primary[0] = 1.0;
    let landed_in_scratch = forward(&mut primary, &mut scratch, &twiddles, 64);
    // log2(64) = 6, even -> result lands in primary.
    assert!(!landed_in_scratch);
}
