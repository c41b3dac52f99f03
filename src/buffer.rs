// src/buffer.rs
//
// Owns the engine's single 256 KiB linear memory region and hands out typed,
// bounds-checked views over its four fixed segments.

use crate::common::FftError;
use alloc::boxed::Box;
use num_complex::Complex32;

pub const PRIMARY_OFFSET: usize = 0;
pub const PRIMARY_LEN: usize = 32_768;
pub const SCRATCH_OFFSET: usize = PRIMARY_OFFSET + PRIMARY_LEN;
pub const SCRATCH_LEN: usize = 32_768;
pub const TWIDDLES_OFFSET: usize = SCRATCH_OFFSET + SCRATCH_LEN;
pub const TWIDDLES_LEN: usize = 65_536;
pub const RFFT_TWIDDLES_OFFSET: usize = TWIDDLES_OFFSET + TWIDDLES_LEN;
pub const RFFT_TWIDDLES_LEN: usize = 131_072;
pub const TOTAL_SIZE: usize = RFFT_TWIDDLES_OFFSET + RFFT_TWIDDLES_LEN;

/// Largest complex transform size the fixed buffer can hold.
pub const MAX_COMPLEX_SIZE: usize = TWIDDLES_LEN / core::mem::size_of::<ReplicatedTwiddle>();
/// Largest real transform size the fixed buffer can hold.
///
/// An N-point RFFT needs room for N/2+1 complex bins in PRIMARY, one more
/// complex sample than the N/2 packed complexes the forward step starts
/// from, so the limit is one notch below `PRIMARY_LEN / 8` rather than
/// `PRIMARY_LEN / 4`: the largest power of two `M` with `(M + 1) * 8 <=
/// PRIMARY_LEN` is `PRIMARY_LEN / 16`, not `PRIMARY_LEN / 8`.
pub const MAX_REAL_SIZE: usize = 2 * (PRIMARY_LEN / 16);

/// One packed complex sample, `[re, im]`, laid out identically to
/// `num_complex::Complex32` so the two cast to each other for free.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample([f32; 2]);

unsafe impl bytemuck::Zeroable for Sample {}
unsafe impl bytemuck::Pod for Sample {}

impl Sample {
    #[inline]
    pub fn to_complex(self) -> Complex32 {
        Complex32::new(self.0[0], self.0[1])
    }

    #[inline]
    pub fn from_complex(c: Complex32) -> Self {
        Sample([c.re, c.im])
    }
}

/// A single twiddle `[re, im]` pre-replicated as `[re, im, re, im]` so the
/// SIMD fast path can load it straight into a 128-bit register without a
/// separate broadcast step.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReplicatedTwiddle([f32; 4]);

unsafe impl bytemuck::Zeroable for ReplicatedTwiddle {}
unsafe impl bytemuck::Pod for ReplicatedTwiddle {}

impl ReplicatedTwiddle {
    #[inline]
    pub fn new(re: f32, im: f32) -> Self {
        ReplicatedTwiddle([re, im, re, im])
    }

    #[inline]
    pub fn re(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn im(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn to_complex(self) -> Complex32 {
        Complex32::new(self.0[0], self.0[1])
    }

    #[inline]
    pub fn as_array(self) -> [f32; 4] {
        self.0
    }
}

#[repr(align(16))]
pub(crate) struct AlignedBuffer([u8; TOTAL_SIZE]);

impl Default for AlignedBuffer {
    fn default() -> Self {
        AlignedBuffer([0u8; TOTAL_SIZE])
    }
}

/// Owns the fixed 256 KiB working buffer and the precomputed twiddle tables
/// for the active transform size.
///
/// One `Engine` is meant to be reused across many calls: precompute once per
/// size, then call `fft`/`ifft`/`rfft`/`irfft` repeatedly. `&mut self` on
/// every entry point enforces exclusive access for the duration of a call.
pub struct Engine {
    buf: Box<AlignedBuffer>,
    pub(crate) twiddles_valid_for: Option<usize>,
    pub(crate) rfft_twiddles_valid_for: Option<usize>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            buf: Box::new(AlignedBuffer::default()),
            twiddles_valid_for: None,
            rfft_twiddles_valid_for: None,
        }
    }

    pub(crate) fn check_complex_size(m: usize) -> Result<(), FftError> {
        if m < 4 {
            Err(FftError::SizeTooSmall)
        } else if m > MAX_COMPLEX_SIZE {
            Err(FftError::SizeTooLarge)
        } else if !m.is_power_of_two() {
            Err(FftError::NotPowerOfTwo)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_real_size(n: usize) -> Result<(), FftError> {
        if n % 2 != 0 {
            return Err(FftError::NotEven);
        }
        if n < 8 {
            return Err(FftError::SizeTooSmall);
        }
        if n > MAX_REAL_SIZE {
            return Err(FftError::SizeTooLarge);
        }
        if !(n / 2).is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        Ok(())
    }

    /// Primary segment viewed as `m` complex samples.
    pub fn primary_complex(&mut self, m: usize) -> &mut [Sample] {
        let bytes = &mut self.buf.0[PRIMARY_OFFSET..PRIMARY_OFFSET + m * 8];
        bytemuck::cast_slice_mut(bytes)
    }

    /// Primary segment viewed as `n` real (f32) samples.
    pub fn primary_real(&mut self, n: usize) -> &mut [f32] {
        let bytes = &mut self.buf.0[PRIMARY_OFFSET..PRIMARY_OFFSET + n * 4];
        bytemuck::cast_slice_mut(bytes)
    }

    /// Disjoint mutable views of `m` complex samples in PRIMARY and SCRATCH,
    /// for callers (the codelet dispatcher) that need a scratch landing pad
    /// without borrowing the same region twice.
    pub(crate) fn primary_and_scratch_complex(&mut self, m: usize) -> (&mut [Sample], &mut [Sample]) {
        let (primary_region, after_primary) = self.buf.0.split_at_mut(SCRATCH_OFFSET);
        let scratch_region = &mut after_primary[..SCRATCH_LEN];
        let primary: &mut [Sample] = bytemuck::cast_slice_mut(&mut primary_region[..m * 8]);
        let scratch: &mut [Sample] = bytemuck::cast_slice_mut(&mut scratch_region[..m * 8]);
        (primary, scratch)
    }

    /// Disjoint views for RFFT pre/post-processing: `primary_len` complex
    /// samples in PRIMARY (read/write, the segment being transformed),
    /// `scratch_len` complex samples in SCRATCH (read/write, used as the
    /// in-buffer snapshot of whichever side PRIMARY is about to overwrite),
    /// and `twiddle_len` entries of RFFT_TWIDDLES (read-only). All three
    /// regions are disjoint byte ranges of the same backing buffer, so no
    /// heap allocation is needed to hold a pre-overwrite snapshot.
    pub(crate) fn rfft_scratch_views(
        &mut self,
        primary_len: usize,
        scratch_len: usize,
        twiddle_len: usize,
    ) -> (&mut [Sample], &mut [Sample], &[Sample]) {
        let (primary_region, after_primary) = self.buf.0.split_at_mut(SCRATCH_OFFSET);
        let (scratch_region, after_scratch) = after_primary.split_at_mut(SCRATCH_LEN);
        let (_twiddle_region, rfft_region) = after_scratch.split_at_mut(TWIDDLES_LEN);

        let primary: &mut [Sample] = bytemuck::cast_slice_mut(&mut primary_region[..primary_len * 8]);
        let scratch: &mut [Sample] = bytemuck::cast_slice_mut(&mut scratch_region[..scratch_len * 8]);
        let rfft_tw: &[Sample] = bytemuck::cast_slice(&rfft_region[..twiddle_len * 8]);
        (primary, scratch, rfft_tw)
    }

    pub(crate) fn twiddles(&self, m: usize) -> &[ReplicatedTwiddle] {
        let bytes = &self.buf.0[TWIDDLES_OFFSET..TWIDDLES_OFFSET + m * 16];
        bytemuck::cast_slice(bytes)
    }

    pub(crate) fn twiddles_mut(&mut self, m: usize) -> &mut [ReplicatedTwiddle] {
        let bytes = &mut self.buf.0[TWIDDLES_OFFSET..TWIDDLES_OFFSET + m * 16];
        bytemuck::cast_slice_mut(bytes)
    }

    pub(crate) fn rfft_twiddles(&self, count: usize) -> &[Sample] {
        let bytes = &self.buf.0[RFFT_TWIDDLES_OFFSET..RFFT_TWIDDLES_OFFSET + count * 8];
        bytemuck::cast_slice(bytes)
    }

    pub(crate) fn rfft_twiddles_mut(&mut self, count: usize) -> &mut [Sample] {
        let bytes = &mut self.buf.0[RFFT_TWIDDLES_OFFSET..RFFT_TWIDDLES_OFFSET + count * 8];
        bytemuck::cast_slice_mut(bytes)
    }

    /// Runs the generic Stockham engine over the primary segment (m complex
    /// samples), ping-ponging against the scratch segment, and leaves the
    /// natural-order result back in the primary segment.
    pub(crate) fn stockham_forward(&mut self, m: usize) -> Result<(), FftError> {
        if self.twiddles_valid_for != Some(m) {
            return Err(FftError::TwiddlesUninitialized);
        }
        let half = m / 2;

        // One split of the whole backing array gives disjoint, simultaneous
        // mutable views of primary/scratch and a shared view of twiddles.
        let (primary_region, after_primary) = self.buf.0.split_at_mut(SCRATCH_OFFSET);
        let (scratch_region, after_scratch) = after_primary.split_at_mut(SCRATCH_LEN);
        let (twiddle_region, _rfft_region) = after_scratch.split_at_mut(TWIDDLES_LEN);

        let primary: &mut [f32] = bytemuck::cast_slice_mut(&mut primary_region[..m * 8]);
        let scratch: &mut [f32] = bytemuck::cast_slice_mut(&mut scratch_region[..m * 8]);
        let twiddles: &[ReplicatedTwiddle] = bytemuck::cast_slice(&twiddle_region[..half * 16]);

        let result_in_scratch =
            crate::stockham::forward(&mut *primary, &mut *scratch, twiddles, m);
        if result_in_scratch {
            primary.copy_from_slice(scratch);
        }
        Ok(())
    }
}

#[path = "buffer_tests.rs"]
#[cfg(test)]
mod tests;
