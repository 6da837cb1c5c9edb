use super::*;

#[test]
fn xor_in_place_combines_bytes() {
    let mut left = [0xFF, 0x00, 0xAA, 0x55];
    xor_in_place(&mut left, &[0x0F, 0x0F, 0xF0, 0xF0]);
    assert_eq!(left, [0xF0, 0x0F, 0x5A, 0xA5]);
}

#[test]
fn xor_with_self_clears_block() {
    let mut block = [1u8, 2, 3, 4];
    let copy = block;
    xor_in_place(&mut block, &copy);
    assert_eq!(block, [0, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "XOR operands must have equal length.")]
fn xor_in_place_panics_on_length_mismatch() {
    let mut dst = [0u8; 4];
    xor_in_place(&mut dst, &[0u8; 3]);
}

#[test]
fn xor_blocks_resets_before_accumulating() {
    let a = [0x01u8, 0x23, 0x45];
    let b = [0xFFu8, 0x00, 0xFF];
    let c = [0x10u8, 0x20, 0x30];

    let mut out = [0xEEu8; 3];
    xor_blocks(&mut out, [&a[..], &b[..], &c[..]]);
    assert_eq!(out, [0x01 ^ 0xFF ^ 0x10, 0x23 ^ 0x20, 0x45 ^ 0xFF ^ 0x30]);

    xor_blocks(&mut out, [&a[..], &b[..], &c[..]]);
    assert_eq!(
        out,
        [0x01 ^ 0xFF ^ 0x10, 0x23 ^ 0x20, 0x45 ^ 0xFF ^ 0x30],
        "recomputing must not double-XOR"
    );
}

#[test]
fn xor_blocks_of_nothing_is_zero() {
    let mut out = [0x77u8; 8];
    xor_blocks(&mut out, std::iter::empty::<&[u8]>());
    assert_eq!(out, [0u8; 8]);
}

#[test]
fn xor_is_order_independent() {
    let a = [0x01u8, 0x23, 0x45, 0x67];
    let b = [0xFFu8, 0x00, 0xFF, 0x00];
    let c = [0x10u8, 0x20, 0x30, 0x40];

    let mut forward = [0u8; 4];
    xor_blocks(&mut forward, [&a[..], &b[..], &c[..]]);
    let mut backward = [0u8; 4];
    xor_blocks(&mut backward, [&c[..], &b[..], &a[..]]);
    assert_eq!(forward, backward);
}

#[test]
fn zeroed_allocates_requested_length() {
    let buf = zeroed(MAX_BLOCK_SIZE).expect("zeroed");
    assert_eq!(buf.len(), MAX_BLOCK_SIZE);
    assert!(buf.iter().all(|&b| b == 0));
    assert!(zeroed(0).expect("empty").is_empty());
}

#[test]
fn zeroed_reports_impossible_reservation() {
    let err = zeroed(usize::MAX).unwrap_err();
    assert!(matches!(
        err,
        RaidError::AllocationFailure { bytes: usize::MAX }
    ));
}
