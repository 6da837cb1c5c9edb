use super::*;
use rand::RngCore;

#[test]
fn decode_pairs_digits_big_endian() {
    let out = decode(b"01020304", 4).expect("decode");
    assert_eq!(out, vec![0x01, 0x02, 0x03, 0x04]);

    let out = decode(b"f00d", 2).expect("decode");
    assert_eq!(out, vec![0xF0, 0x0D]);
}

#[test]
fn decode_is_case_insensitive() {
    let lower = decode(b"deadbeef", 4).expect("lower");
    let upper = decode(b"DEADBEEF", 4).expect("upper");
    let mixed = decode(b"DeAdBeEf", 4).expect("mixed");
    assert_eq!(lower, vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn decode_accepts_trailing_newline() {
    let out = decode(b"0a0b\n", 2).expect("decode");
    assert_eq!(out, vec![0x0A, 0x0B]);

    let out = decode(b"0a0b \r\n", 2).expect("decode");
    assert_eq!(out, vec![0x0A, 0x0B]);
}

#[test]
fn decode_rejects_trailing_data() {
    let err = decode(b"0a0b0c", 2).unwrap_err();
    assert!(
        matches!(err, RaidError::MalformedInput { index: 2, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn decode_reports_first_missing_byte_on_short_input() {
    let err = decode(b"010", 4).unwrap_err();
    assert!(
        matches!(err, RaidError::MalformedInput { index: 1, .. }),
        "unexpected error: {err}"
    );

    let err = decode(b"", 1).unwrap_err();
    assert!(matches!(err, RaidError::MalformedInput { index: 0, .. }));
}

#[test]
fn decode_reports_byte_holding_invalid_digit() {
    let err = decode(b"0102z304", 4).unwrap_err();
    assert!(
        matches!(err, RaidError::MalformedInput { index: 2, .. }),
        "unexpected error: {err}"
    );

    let err = decode(b"01 2", 2).unwrap_err();
    assert!(matches!(err, RaidError::MalformedInput { index: 1, .. }));
}

#[test]
fn decode_zero_length_is_empty() {
    assert!(decode(b"", 0).expect("decode").is_empty());
    assert!(decode(b"\n", 0).expect("decode").is_empty());
}

#[test]
fn encode_keeps_leading_zeros_and_lowercase() {
    assert_eq!(encode(&[0x00, 0x0F, 0xA0, 0xFF]), "000fa0ff");
    assert_eq!(encode(&[]), "");
}

#[test]
fn random_buffers_survive_encode_then_decode() {
    let mut rng = rand::rng();
    for len in [1usize, 7, 512, 4097] {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);

        let text = encode(&data);
        assert_eq!(text.len(), 2 * len, "encode must emit two digits per byte");
        assert_eq!(decode(text.as_bytes(), len).expect("decode"), data);
    }
}

#[test]
fn encode_to_matches_encode_across_chunk_boundaries() {
    let mut data = vec![0u8; 3 * ENCODE_CHUNK + 17];
    rand::rng().fill_bytes(&mut data);

    let mut sink = Vec::new();
    encode_to(&mut sink, &data).expect("encode_to");
    assert_eq!(sink, encode(&data).into_bytes());
}

#[test]
fn decode_rejects_length_that_overflows_digit_count() {
    let err = decode(b"00", usize::MAX).unwrap_err();
    assert!(
        matches!(err, RaidError::MalformedInput { index: 0, .. }),
        "unexpected error: {err}"
    );
}
