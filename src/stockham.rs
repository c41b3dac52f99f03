// src/stockham.rs
//
// Generic dual-complex Stockham auto-sort FFT for any power-of-two size not
// covered by a specialized codelet. Out-of-place, ping-pong between two
// buffers; produces naturally-ordered output with no separate bit-reversal
// pass. Each stage packs two consecutive complex samples into one 128-bit
// SIMD register on x86_64; every other target falls back to plain
// `Complex32` arithmetic with identical math.

use crate::buffer::ReplicatedTwiddle;
use num_complex::Complex32;

#[cfg(target_arch = "x86_64")]
mod simd_x86;

#[inline]
fn load(a: &[f32], i: usize) -> Complex32 {
    Complex32::new(a[2 * i], a[2 * i + 1])
}

#[inline]
fn store(a: &mut [f32], i: usize, v: Complex32) {
    a[2 * i] = v.re;
    a[2 * i + 1] = v.im;
}

/// Runs every Stockham stage for an `m`-point complex FFT, reading `primary`
/// and writing the final stage's output into whichever of `primary`/
/// `scratch` it physically lands in.
///
/// `twiddles` must hold `m/2` pre-replicated `W_m^k` entries as computed by
/// [`crate::Engine::precompute_twiddles`]. Returns `true` if the result
/// ended up in `scratch` (the caller is then responsible for copying it
/// back), `false` if it is already in `primary`.
pub(crate) fn forward(
    mut primary: &mut [f32],
    mut scratch: &mut [f32],
    twiddles: &[ReplicatedTwiddle],
    m: usize,
) -> bool {
    debug_assert!(m.is_power_of_two() && m >= 4);

    let half = m / 2;
    let stage_count = m.trailing_zeros();
    let mut l = 1usize; // number of already-completed groups
    let mut r = half; // butterfly span for the current stage

    while r >= 1 {
        let stride = half / l;
        for j in 0..l {
            let w = twiddles[j * stride];
            let wc = w.to_complex();
            let src_base = j * 2 * r;
            let dst_base = j * r;
            let mut k = 0usize;

            #[cfg(target_arch = "x86_64")]
            {
                k = unsafe {
                    simd_x86::butterfly_pairs(
                        &mut *primary,
                        &mut *scratch,
                        src_base,
                        dst_base,
                        half,
                        r,
                        w,
                    )
                };
            }

            while k < r {
                let a = load(primary, src_base + k);
                let b = load(primary, src_base + k + r);
                let bw = b * wc;
                store(scratch, dst_base + k, a + bw);
                store(scratch, dst_base + k + half, a - bw);
                k += 1;
            }
        }
        core::mem::swap(&mut primary, &mut scratch);
        r /= 2;
        l *= 2;
    }

    // Buffers were swapped once per stage; after an odd number of stages the
    // result sits in the caller's `scratch` (now bound to `primary` here).
    stage_count % 2 == 1
}

#[path = "stockham_tests.rs"]
#[cfg(test)]
mod tests;
