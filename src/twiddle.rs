// src/twiddle.rs
//
// Fills the TWIDDLES and RFFT_TWIDDLES segments for a given transform size.
// Must be re-run whenever the active size changes; Engine tracks which size
// each table is currently valid for and refuses to transform against a
// stale or absent table.

use crate::buffer::{Engine, ReplicatedTwiddle, Sample};
use crate::common::FftError;
use crate::trig::{cos32, sin32};
use core::f32::consts::PI;

impl Engine {
    /// Fills the complex-twiddle table with `W_m^k = e^{-2*pi*i*k/m}` for
    /// `k` in `0..m/2`, pre-replicated as `[re, im, re, im]` per entry.
    ///
    /// `m` is the complex-FFT size the generic Stockham engine will run at;
    /// only `m/2` distinct twiddles are needed (the Stockham recursion only
    /// ever indexes the first half of the table by construction).
    pub fn precompute_twiddles(&mut self, m: usize) -> Result<(), FftError> {
        Engine::check_complex_size(m)?;
        let half = m / 2;
        let table = self.twiddles_mut(half);
        for (k, slot) in table.iter_mut().enumerate() {
            let angle = -2.0 * PI * (k as f32) / (m as f32);
            *slot = ReplicatedTwiddle::new(cos32(angle), sin32(angle));
        }
        self.twiddles_valid_for = Some(m);
        Ok(())
    }

    /// Fills the RFFT post-processing twiddle table with `W_n^k` for `k` in
    /// `0..=n/2`, and (re-)fills the complex-twiddle table for the
    /// half-size complex FFT the real transform delegates to.
    pub fn precompute_rfft_twiddles(&mut self, n: usize) -> Result<(), FftError> {
        Engine::check_real_size(n)?;
        let m = n / 2;
        self.precompute_twiddles(m)?;

        let count = m + 1;
        let table = self.rfft_twiddles_mut(count);
        for (k, slot) in table.iter_mut().enumerate() {
            let angle = -2.0 * PI * (k as f32) / (n as f32);
            *slot = Sample::from_complex(num_complex::Complex32::new(cos32(angle), sin32(angle)));
        }
        self.rfft_twiddles_valid_for = Some(n);
        Ok(())
    }
}

#[path = "twiddle_tests.rs"]
#[cfg(test)]
mod tests;
