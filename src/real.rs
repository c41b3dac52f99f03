// src/real.rs
//
// Real-input FFT layered on the complex engine: packs N reals as M = N/2
// complex samples, runs the forward complex FFT, then unpacks the natural-
// order result into the N/2+1-bin half spectrum. IRFFT runs the exact
// inverse of the unpacking step followed by `ifft`.

use crate::buffer::{Engine, Sample};
use crate::common::FftError;
use num_complex::Complex32;

impl Engine {
    /// In-place real-to-half-spectrum forward FFT.
    ///
    /// Reads `n` reals from the primary segment (as `n/2` packed complex
    /// samples) and replaces them with `n/2 + 1` complex bins: DC at index
    /// 0, Nyquist at index `n/2`, both with a zero imaginary part.
    pub fn rfft(&mut self, n: usize) -> Result<(), FftError> {
        Engine::check_real_size(n)?;
        if self.rfft_twiddles_valid_for != Some(n) {
            return Err(FftError::TwiddlesUninitialized);
        }

        let m = n / 2;
        self.fft(m)?;
        self.rfft_postprocess(n);
        Ok(())
    }

    /// In-place half-spectrum-to-real inverse FFT, the exact inverse of
    /// [`Engine::rfft`].
    pub fn irfft(&mut self, n: usize) -> Result<(), FftError> {
        Engine::check_real_size(n)?;
        if self.rfft_twiddles_valid_for != Some(n) {
            return Err(FftError::TwiddlesUninitialized);
        }

        let m = n / 2;
        self.rfft_preprocess(n);
        self.ifft(m)
    }

    /// Unpacks the `m = n/2`-point complex spectrum left by `fft(m)` into
    /// the `m + 1`-bin real half spectrum, per spec section 4.5.
    fn rfft_postprocess(&mut self, n: usize) {
        let m = n / 2;
        let quarter = m / 2;

        // Every output bin this stage writes overlaps an input bin its
        // "mirror" bin also reads (k and m-k), so the packed spectrum is
        // snapshotted into SCRATCH before PRIMARY is overwritten in place
        // with the wider half spectrum, no heap allocation, same in-buffer
        // ping-pong discipline the generic Stockham engine already uses.
        let (primary, scratch, w) = self.rfft_scratch_views(m + 1, m, m + 1);
        scratch.copy_from_slice(&primary[..m]);
        let z = &*scratch;

        // DC / Nyquist: read before overwrite, since primary[0] aliases z[0].
        let z0 = z[0].to_complex();
        primary[0] = Sample::from_complex(Complex32::new(z0.re + z0.im, 0.0));
        primary[m] = Sample::from_complex(Complex32::new(z0.re - z0.im, 0.0));

        for k in 1..quarter {
            let (xk, xmk) = unpack_pair(
                z[k].to_complex(),
                z[m - k].to_complex(),
                w[k].to_complex(),
                w[m - k].to_complex(),
            );
            primary[k] = Sample::from_complex(xk);
            primary[m - k] = Sample::from_complex(xmk);
        }

        // Middle bin: Z[m/2] is its own mirror, which collapses the
        // generic formula to a plain conjugate (spec section 4.5, "Middle").
        primary[quarter] = Sample::from_complex(z[quarter].to_complex().conj());
    }

    /// Packs the `m + 1`-bin half spectrum back into the `m`-point complex
    /// spectrum `ifft(m)` expects, the exact inverse of `rfft_postprocess`.
    fn rfft_preprocess(&mut self, n: usize) {
        let m = n / 2;
        let quarter = m / 2;

        let (primary, scratch, w) = self.rfft_scratch_views(m + 1, m + 1, m + 1);
        scratch.copy_from_slice(primary);
        let x = &*scratch;

        let x0 = x[0].to_complex();
        let xm = x[m].to_complex();
        primary[0] = Sample::from_complex(Complex32::new(
            (x0.re + xm.re) * 0.5,
            (x0.re - xm.re) * 0.5,
        ));

        for k in 1..quarter {
            let (zk, zmk) = pack_pair(x[k].to_complex(), x[m - k].to_complex(), w[k].to_complex());
            primary[k] = Sample::from_complex(zk);
            primary[m - k] = Sample::from_complex(zmk);
        }

        primary[quarter] = Sample::from_complex(x[quarter].to_complex().conj());
    }
}

/// Forward unpacking of one mirror pair `(k, m-k)` into half-spectrum bins
/// `X[k]`, `X[m-k]`, per spec section 4.5:
///
/// `X[j] = 1/2 * ((Z_j + conj(Z_{m-j})) + W_rot(j) * (Z_j - conj(Z_{m-j})))`
///
/// applied once with `j = k` (using `w_k = W_n^k`) and once with `j = m-k`
/// (using `w_mk = W_n^{m-k}`, already in the precomputed table).
fn unpack_pair(zk: Complex32, zmk: Complex32, wk: Complex32, wmk: Complex32) -> (Complex32, Complex32) {
    let rot_k = Complex32::new(wk.im, -wk.re);
    let sum = zk + zmk.conj();
    let diff = zk - zmk.conj();
    let xk = (sum + rot_k * diff).scale(0.5);

    let rot_mk = Complex32::new(wmk.im, -wmk.re);
    let sum_mk = zmk + zk.conj();
    let diff_mk = zmk - zk.conj();
    let xmk = (sum_mk + rot_mk * diff_mk).scale(0.5);

    (xk, xmk)
}

/// Inverse of [`unpack_pair`]: recovers the packed complex bins `Z[k]`,
/// `Z[m-k]` from half-spectrum bins `X[k]`, `X[m-k]`, using only `w_k =
/// W_n^k` (the `(m-k)`-side rotation is `conj(w_k)`'s own conjugate, which
/// cancels out algebraically, so no second table lookup is needed).
fn pack_pair(xk: Complex32, xmk: Complex32, wk: Complex32) -> (Complex32, Complex32) {
    let conj_rot_k = Complex32::new(wk.im, wk.re);
    let sum = xk + xmk.conj();
    let diff = (xk - xmk.conj()) * conj_rot_k;
    let zk = (sum + diff).scale(0.5);
    let zmk = (sum - diff).scale(0.5).conj();
    (zk, zmk)
}

#[path = "real_tests.rs"]
#[cfg(test)]
mod tests;
