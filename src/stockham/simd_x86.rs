// Dual-complex SSE2 fast path: two consecutive complex samples packed into
// one 128-bit register so each butterfly processes a pair at a time.
//
// SSE2 is part of the x86_64 baseline, so no runtime feature detection is
// needed here.

use crate::buffer::ReplicatedTwiddle;
use core::arch::x86_64::*;

/// Runs as many `r`-wide butterflies as fit in pairs (`k`, `k+1`), reading
/// `src[src_base + k ..]` / `src[src_base + k + r ..]` and writing
/// `dst[dst_base + k ..]` / `dst[dst_base + k + half ..]`. Returns the
/// number of elements consumed (even, `<= r`) so the caller can finish any
/// odd remainder with scalar code.
#[inline]
pub(super) unsafe fn butterfly_pairs(
    src: &[f32],
    dst: &mut [f32],
    src_base: usize,
    dst_base: usize,
    half: usize,
    r: usize,
    w: ReplicatedTwiddle,
) -> usize {
    if r < 2 {
        return 0;
    }

    let warr = w.as_array();
    let wv = _mm_loadu_ps(warr.as_ptr());
    // Broadcast re/im of the (single) twiddle across both packed lanes.
    let wr = _mm_shuffle_ps::<0xA0>(wv, wv);
    let wi = _mm_shuffle_ps::<0xF5>(wv, wv);
    // Negate the real-part lanes (0 and 2) after the cross product below,
    // implementing (a+bi)(c+di) = (ac-bd) + (ad+bc)i via one multiply, one
    // lane-swapped multiply, and one sign flip instead of four scalar muls.
    let sign_mask = _mm_castsi128_ps(_mm_set_epi32(0, i32::MIN, 0, i32::MIN));

    let mut k = 0usize;
    while k + 2 <= r {
        let a = _mm_loadu_ps(src.as_ptr().add(2 * (src_base + k)));
        let b = _mm_loadu_ps(src.as_ptr().add(2 * (src_base + k + r)));

        let b_swapped = _mm_shuffle_ps::<0xB1>(b, b);
        let p = _mm_mul_ps(b, wr);
        let q = _mm_xor_ps(_mm_mul_ps(b_swapped, wi), sign_mask);
        let bw = _mm_add_ps(p, q);

        _mm_storeu_ps(dst.as_mut_ptr().add(2 * (dst_base + k)), _mm_add_ps(a, bw));
        _mm_storeu_ps(
            dst.as_mut_ptr().add(2 * (dst_base + k + half)),
            _mm_sub_ps(a, bw),
        );
        k += 2;
    }
    k
}
