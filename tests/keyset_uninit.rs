//! The ambient keyset, used before `keyset_init` is ever called.
//!
//! This lives in its own test binary, not alongside `renewal.rs` —
//! `AMBIENT` is a single process-wide static, and every other test file
//! that calls `keyset_init` runs in its own process, so the only way to
//! observe the genuinely uninitialized state is to never call it in this
//! process at all.

use sm2_ringsig::{keypair_dispatch, keypair_dispatch_b64, verify, verify_b64, RingSigError};

#[test]
fn verify_before_init_is_a_configuration_error_not_a_reject() {
    let err = verify(b"msg", &[0u8; 129]).unwrap_err();
    assert!(matches!(err, RingSigError::KeysetUninit));
}

#[test]
fn verify_b64_before_init_is_a_configuration_error() {
    let err = verify_b64(b"msg", "AAAA").unwrap_err();
    assert!(matches!(err, RingSigError::KeysetUninit));
}

#[test]
fn dispatch_before_init_is_a_configuration_error() {
    let err = keypair_dispatch(0).unwrap_err();
    assert!(matches!(err, RingSigError::KeysetUninit));
}

#[test]
fn dispatch_b64_before_init_is_a_configuration_error() {
    let err = keypair_dispatch_b64(0).unwrap_err();
    assert!(matches!(err, RingSigError::KeysetUninit));
}
