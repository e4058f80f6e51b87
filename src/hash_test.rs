use super::*;

#[test]
fn zero_is_not_a_digest_output() {
    // Blake2b-256 of the empty string is a well-known non-zero value;
    // this just pins that ZERO is a sentinel, not an achievable output.
    assert_ne!(digest(&[]), Hash::ZERO);
}

#[test]
fn digest_is_deterministic() {
    let a = digest(b"hello");
    let b = digest(b"hello");
    assert_eq!(a, b);
}

#[test]
fn digest_is_sensitive_to_input() {
    assert_ne!(digest(b"hello"), digest(b"hellp"));
}

#[test]
fn hex_roundtrip() {
    let h = digest(b"roundtrip me");
    let hex = h.to_hex();
    let bytes = hex::decode(&hex).unwrap();
    assert_eq!(Hash::from_slice(&bytes).unwrap(), h);
}

#[test]
fn serde_roundtrip() {
    let h = digest(b"serde");
    let json = serde_json::to_string(&h).unwrap();
    let back: Hash = serde_json::from_str(&json).unwrap();
    assert_eq!(h, back);
}

#[test]
fn from_slice_rejects_wrong_length() {
    assert!(Hash::from_slice(&[0u8; 31]).is_err());
    assert!(Hash::from_slice(&[0u8; 33]).is_err());
}
