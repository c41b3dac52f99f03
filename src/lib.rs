#![no_std]

extern crate alloc;

// Enables the standard library only for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod codelet;
pub mod common;
pub mod complex;
pub mod real;
pub mod stockham;
pub mod trig;
pub mod twiddle;

pub use buffer::Engine;
pub use common::FftError;
