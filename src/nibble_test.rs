use super::*;

#[test]
fn bytes_to_nibbles_splits_high_and_low() {
    assert_eq!(bytes_to_nibbles(&[0xab, 0x01]), vec![0xa, 0xb, 0x0, 0x1]);
}

#[test]
fn nibbles_to_bytes_packs_pairs() {
    assert_eq!(nibbles_to_bytes(&[0xa, 0xb, 0x0, 0x1]), vec![0xab, 0x01]);
}

#[test]
fn nibbles_to_bytes_pads_odd_length() {
    assert_eq!(nibbles_to_bytes(&[0xa, 0xb, 0xc]), vec![0xab, 0xc0]);
}

#[test]
fn nibbles_to_bytes_roundtrips_bytes_to_nibbles() {
    let original = vec![1u8, 255, 0, 128, 17];
    let nibbles = bytes_to_nibbles(&original);
    assert_eq!(nibbles_to_bytes(&nibbles), original);
}

#[test]
fn hex_rendering_is_lowercase() {
    assert_eq!(nibbles_to_hex(&[0xd, 0xe, 0xa, 0xd]), "dead");
}

#[test]
fn common_prefix_len_stops_at_first_mismatch() {
    assert_eq!(common_prefix_len(&[1, 2, 3, 4], &[1, 2, 9, 4]), 2);
}

#[test]
fn common_prefix_len_bounded_by_shorter_input() {
    assert_eq!(common_prefix_len(&[1, 2], &[1, 2, 3]), 2);
}

#[test]
fn path_of_has_one_nibble_per_hex_digit_of_the_digest() {
    let path = path_of(b"anything");
    assert_eq!(path.len(), 64);
    assert!(path.iter().all(|n| *n < 16));
}

#[test]
fn path_of_is_deterministic_and_value_sensitive() {
    assert_eq!(path_of(b"same"), path_of(b"same"));
    assert_ne!(path_of(b"same"), path_of(b"different"));
}
