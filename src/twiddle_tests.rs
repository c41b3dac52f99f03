use super::*;
use crate::buffer::Engine;

const TOL: f32 = 1e-4;

#[test]
fn first_entry_is_always_one() {
    let mut e = Engine::new();
    e.precompute_twiddles(64).unwrap();
    let t = e.twiddles(32)[0];
    assert!((t.re() - 1.0).abs() < TOL);
    assert!(t.im().abs() < TOL);
}

#[test]
fn table_matches_closed_form() {
    let mut e = Engine::new();
    let m = 16usize;
    e.precompute_twiddles(m).unwrap();
    for (k, entry) in e.twiddles(m / 2).iter().enumerate() {
        let angle = -2.0 * core::f32::consts::PI * (k as f32) / (m as f32);
        assert!((entry.re() - angle.cos()).abs() < TOL);
        assert!((entry.im() - angle.sin()).abs() < TOL);
    }
}

#[test]
fn replication_is_consistent() {
    let mut e = Engine::new();
    e.precompute_twiddles(8).unwrap();
    for entry in e.twiddles(4) {
        let a = entry.as_array();
        assert_eq!(a[0], a[2]);
        assert_eq!(a[1], a[3]);
    }
}

#[test]
fn rfft_twiddles_cover_nyquist_inclusive() {
    let mut e = Engine::new();
    let n = 32usize;
    e.precompute_rfft_twiddles(n).unwrap();
    let m = n / 2;
    let table = e.rfft_twiddles(m + 1);
    assert_eq!(table.len(), m + 1);
    let last = table[m].to_complex();
    // W_n^{n/2} = e^{-i*pi} = -1
    assert!((last.re + 1.0).abs() < TOL);
    assert!(last.im.abs() < TOL);
}

#[test]
fn rejects_non_power_of_two() {
    let mut e = Engine::new();
    assert_eq!(e.precompute_twiddles(6), Err(FftError::NotPowerOfTwo));
}

#[test]
fn rejects_odd_real_size() {
    let mut e = Engine::new();
    assert_eq!(e.precompute_rfft_twiddles(15), Err(FftError::NotEven));
}
