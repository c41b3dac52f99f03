// src/common.rs

/// Errors returned at the boundary of an [`Engine`](crate::Engine) call.
///
/// The underlying kernels have no fallible operations (spec: arithmetic and
/// precomputed-index memory access only); these variants exist because a
/// native Rust API can cheaply validate preconditions the original
/// caller-owns-the-contract interface left undefined.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// Size is not a power of two.
    NotPowerOfTwo,
    /// Size is below the minimum supported for the operation.
    SizeTooSmall,
    /// Size exceeds the engine's fixed buffer capacity.
    SizeTooLarge,
    /// RFFT/IRFFT size must be even.
    NotEven,
    /// The complex-twiddle table has not been precomputed for this size, or
    /// was last precomputed for a different size.
    TwiddlesUninitialized,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfTwo => write!(f, "size must be a power of two"),
            FftError::SizeTooSmall => write!(f, "size is below the minimum supported"),
            FftError::SizeTooLarge => write!(f, "size exceeds engine buffer capacity"),
            FftError::NotEven => write!(f, "real FFT size must be even"),
            FftError::TwiddlesUninitialized => {
                write!(f, "twiddle table was not precomputed for this size")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
