// src/complex.rs
//
// Forward/inverse complex FFT dispatcher. Forward picks a size-specialized
// codelet when one exists and falls through to the generic Stockham engine
// otherwise; inverse is derived from forward by conjugation, per spec:
// `ifft(x) = (1/M) * conj(fft(conj(x)))`.

use crate::buffer::{Engine, Sample};
use crate::codelet;
use crate::common::FftError;
use num_complex::Complex32;

impl Engine {
    /// In-place forward complex FFT of `m` samples in the primary segment.
    ///
    /// For `m` in `{4, 8, 16, 32}` this runs a straight-line DIT codelet
    /// that needs no twiddle table; for larger `m` it falls through to the
    /// generic Stockham engine, which requires a prior matching call to
    /// [`Engine::precompute_twiddles`].
    pub fn fft(&mut self, m: usize) -> Result<(), FftError> {
        Engine::check_complex_size(m)?;

        let (primary, scratch) = self.primary_and_scratch_complex(m);
        if codelet::dispatch(m, &*primary, scratch) {
            primary.copy_from_slice(scratch);
            return Ok(());
        }

        self.stockham_forward(m)
    }

    /// In-place inverse complex FFT: conjugate, forward-transform, then
    /// conjugate and scale by `1/m`.
    pub fn ifft(&mut self, m: usize) -> Result<(), FftError> {
        Engine::check_complex_size(m)?;
        flip_imag_signs(self.primary_complex(m));
        self.fft(m)?;
        scale_and_flip_imag_signs(self.primary_complex(m), 1.0 / (m as f32));
        Ok(())
    }
}

/// Flips the sign of every imaginary lane: `conj` applied across the whole
/// segment in one pass.
fn flip_imag_signs(samples: &mut [Sample]) {
    for s in samples.iter_mut() {
        let c = s.to_complex();
        *s = Sample::from_complex(Complex32::new(c.re, -c.im));
    }
}

/// Fuses the post-transform conjugate with the `1/m` scale so each sample
/// is touched once.
fn scale_and_flip_imag_signs(samples: &mut [Sample], scale: f32) {
    for s in samples.iter_mut() {
        let c = s.to_complex();
        *s = Sample::from_complex(Complex32::new(c.re * scale, -c.im * scale));
    }
}

#[path = "complex_tests.rs"]
#[cfg(test)]
mod tests;
