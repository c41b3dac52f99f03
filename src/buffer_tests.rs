use super::*;

#[test]
fn segments_are_contiguous_and_non_overlapping() {
    assert_eq!(PRIMARY_OFFSET, 0);
    assert_eq!(SCRATCH_OFFSET, PRIMARY_OFFSET + PRIMARY_LEN);
    assert_eq!(TWIDDLES_OFFSET, SCRATCH_OFFSET + SCRATCH_LEN);
    assert_eq!(RFFT_TWIDDLES_OFFSET, TWIDDLES_OFFSET + TWIDDLES_LEN);
    assert_eq!(TOTAL_SIZE, RFFT_TWIDDLES_OFFSET + RFFT_TWIDDLES_LEN);
    assert_eq!(TOTAL_SIZE, 256 * 1024);
}

#[test]
fn max_real_size_leaves_room_for_the_half_spectrums_extra_bin() {
    // The forward half-spectrum needs m+1 complex bins (m = N/2 packed
    // complexes plus one for the Nyquist bin); that must still fit inside
    // PRIMARY_LEN, unlike a naive PRIMARY_LEN/4 bound would allow.
    let m = MAX_REAL_SIZE / 2;
    assert!(m.is_power_of_two());
    assert!((m + 1) * 8 <= PRIMARY_LEN);
    // One size class up would overflow, confirming the bound is tight.
    assert!((m * 2 + 1) * 8 > PRIMARY_LEN);
}

#[test]
fn max_complex_size_matches_twiddle_table_capacity() {
    assert_eq!(MAX_COMPLEX_SIZE * 16, TWIDDLES_LEN);
}

#[test]
fn sample_round_trips_through_complex32() {
    let c = Complex32::new(1.5, -2.25);
    let s = Sample::from_complex(c);
    assert_eq!(s.to_complex(), c);
}

#[test]
fn replicated_twiddle_stores_a_repeated_pair() {
    let t = ReplicatedTwiddle::new(0.5, -0.5);
    assert_eq!(t.as_array(), [0.5, -0.5, 0.5, -0.5]);
    assert_eq!(t.to_complex(), Complex32::new(0.5, -0.5));
}

#[test]
fn check_complex_size_rejects_out_of_range_and_non_power_of_two() {
    assert_eq!(Engine::check_complex_size(2), Err(FftError::SizeTooSmall));
    assert_eq!(Engine::check_complex_size(6), Err(FftError::NotPowerOfTwo));
    assert_eq!(
        Engine::check_complex_size(MAX_COMPLEX_SIZE * 2),
        Err(FftError::SizeTooLarge)
    );
    assert_eq!(Engine::check_complex_size(MAX_COMPLEX_SIZE), Ok(()));
    assert_eq!(Engine::check_complex_size(4), Ok(()));
}

#[test]
fn check_real_size_rejects_odd_too_small_and_non_power_of_two_half() {
    assert_eq!(Engine::check_real_size(15), Err(FftError::NotEven));
    assert_eq!(Engine::check_real_size(6), Err(FftError::SizeTooSmall));
    assert_eq!(Engine::check_real_size(24), Err(FftError::NotPowerOfTwo));
    assert_eq!(Engine::check_real_size(MAX_REAL_SIZE), Ok(()));
    assert_eq!(
        Engine::check_real_size(MAX_REAL_SIZE * 2),
        Err(FftError::SizeTooLarge)
    );
}

#[test]
fn new_engine_has_no_valid_twiddle_tables() {
    let e = Engine::new();
    assert_eq!(e.twiddles_valid_for, None);
    assert_eq!(e.rfft_twiddles_valid_for, None);
}
