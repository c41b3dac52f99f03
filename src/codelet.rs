// src/codelet.rs
//
// Fully-specialized decimation-in-time codelets for the four small sizes the
// generic Stockham engine never has to handle directly. Each codelet loads
// its input through a fixed bit-reversal table, runs every butterfly stage
// with twiddle factors embedded as literal constants, and stores natural-
// order output, no twiddle table, no scratch buffer, no loop over size.

use crate::buffer::Sample;
use num_complex::Complex32;

const ONE: Complex32 = Complex32::new(1.0, 0.0);
const NEG_I: Complex32 = Complex32::new(0.0, -1.0);
const C4: f32 = core::f32::consts::FRAC_1_SQRT_2; // cos(pi/4) == sin(pi/4)

// cos/sin(pi/8)
const C2: f32 = 0.923_879_53;
const S2: f32 = 0.382_683_43;
// cos/sin(pi/16)
const C1: f32 = 0.980_785_28;
const S1: f32 = 0.195_090_32;
// cos/sin(3*pi/16)
const C3: f32 = 0.831_469_61;
const S3: f32 = 0.555_570_23;

/// `W_4^j` for `j = 0, 1`.
const W4: [Complex32; 2] = [ONE, NEG_I];

/// `W_8^j` for `j = 0..4`.
const W8: [Complex32; 4] = [
    ONE,
    Complex32::new(C4, -C4),
    NEG_I,
    Complex32::new(-C4, -C4),
];

/// `W_16^j` for `j = 0..8`.
const W16: [Complex32; 8] = [
    ONE,
    Complex32::new(C2, -S2),
    Complex32::new(C4, -C4),
    Complex32::new(S2, -C2),
    NEG_I,
    Complex32::new(-S2, -C2),
    Complex32::new(-C4, -C4),
    Complex32::new(-C2, -S2),
];

/// `W_32^j` for `j = 0..16`.
const W32: [Complex32; 16] = [
    ONE,
    Complex32::new(C1, -S1),
    Complex32::new(C2, -S2),
    Complex32::new(C3, -S3),
    Complex32::new(C4, -C4),
    Complex32::new(S3, -C3),
    Complex32::new(S2, -C2),
    Complex32::new(S1, -C1),
    NEG_I,
    Complex32::new(-S1, -C1),
    Complex32::new(-S2, -C2),
    Complex32::new(-S3, -C3),
    Complex32::new(-C4, -C4),
    Complex32::new(-C3, -S3),
    Complex32::new(-C2, -S2),
    Complex32::new(-C1, -S1),
];

const BITREV_4: [usize; 4] = [0, 2, 1, 3];
const BITREV_8: [usize; 8] = [0, 4, 2, 6, 1, 5, 3, 7];
const BITREV_16: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
const BITREV_32: [usize; 32] = [
    0, 16, 8, 24, 4, 20, 12, 28, 2, 18, 10, 26, 6, 22, 14, 30, 1, 17, 9, 25, 5, 21, 13, 29, 3, 19,
    11, 27, 7, 23, 15, 31,
];

/// One decimation-in-time butterfly stage: combines pairs `2*half_m` apart
/// using twiddle `tw[j] = W_{2*half_m}^j`.
#[inline]
fn dit_stage(a: &mut [Complex32], half_m: usize, tw: &[Complex32]) {
    let m = half_m * 2;
    let n = a.len();
    let mut k = 0;
    while k < n {
        for j in 0..half_m {
            let w = tw[j];
            let t = a[k + j + half_m] * w;
            let u = a[k + j];
            a[k + j] = u + t;
            a[k + j + half_m] = u - t;
        }
        k += m;
    }
}

pub fn codelet_4(input: &[Sample], output: &mut [Sample]) {
    let mut a = [
        input[BITREV_4[0]].to_complex(),
        input[BITREV_4[1]].to_complex(),
        input[BITREV_4[2]].to_complex(),
        input[BITREV_4[3]].to_complex(),
    ];
    dit_stage(&mut a, 1, &[ONE]);
    dit_stage(&mut a, 2, &W4);
    for (dst, v) in output.iter_mut().zip(a) {
        *dst = Sample::from_complex(v);
    }
}

pub fn codelet_8_dit(input: &[Sample], output: &mut [Sample]) {
    let mut a: [Complex32; 8] = core::array::from_fn(|i| input[BITREV_8[i]].to_complex());
    dit_stage(&mut a, 1, &[ONE]);
    dit_stage(&mut a, 2, &W4);
    dit_stage(&mut a, 4, &W8);
    for (dst, v) in output.iter_mut().zip(a) {
        *dst = Sample::from_complex(v);
    }
}

pub fn codelet_16_dit(input: &[Sample], output: &mut [Sample]) {
    let mut a: [Complex32; 16] = core::array::from_fn(|i| input[BITREV_16[i]].to_complex());
    dit_stage(&mut a, 1, &[ONE]);
    dit_stage(&mut a, 2, &W4);
    dit_stage(&mut a, 4, &W8);
    dit_stage(&mut a, 8, &W16);
    for (dst, v) in output.iter_mut().zip(a) {
        *dst = Sample::from_complex(v);
    }
}

pub fn codelet_32_dit(input: &[Sample], output: &mut [Sample]) {
    let mut a: [Complex32; 32] = core::array::from_fn(|i| input[BITREV_32[i]].to_complex());
    dit_stage(&mut a, 1, &[ONE]);
    dit_stage(&mut a, 2, &W4);
    dit_stage(&mut a, 4, &W8);
    dit_stage(&mut a, 8, &W16);
    dit_stage(&mut a, 16, &W32);
    for (dst, v) in output.iter_mut().zip(a) {
        *dst = Sample::from_complex(v);
    }
}

/// Dispatches to the codelet matching `m`, or `None` if `m` has no
/// specialized codelet (the caller falls back to the generic engine).
pub fn dispatch(m: usize, input: &[Sample], output: &mut [Sample]) -> bool {
    match m {
        4 => {
            codelet_4(input, output);
            true
        }
        8 => {
            codelet_8_dit(input, output);
            true
        }
        16 => {
            codelet_16_dit(input, output);
            true
        }
        32 => {
            codelet_32_dit(input, output);
            true
        }
        _ => false,
    }
}

#[path = "codelet_tests.rs"]
#[cfg(test)]
mod tests;
