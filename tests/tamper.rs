//! Tamper and malformed-input handling for the codec and verifier.

use sm2_ringsig::{sign, sign_len, verify_ring, Signature, SignerHandle};
use sm2::elliptic_curve::ff::Field;
use sm2::elliptic_curve::ops::MulByGenerator;
use sm2::{AffinePoint, ProjectivePoint, Scalar};

fn fresh_ring(n: usize) -> (Vec<Scalar>, Vec<AffinePoint>) {
    let mut rng = rand_core::OsRng;
    let mut privs = Vec::with_capacity(n);
    let mut pubs = Vec::with_capacity(n);
    for _ in 0..n {
        let s = loop {
            let candidate = Scalar::random(&mut rng);
            if !bool::from(candidate.is_zero()) {
                break candidate;
            }
        };
        pubs.push(ProjectivePoint::mul_by_generator(&s).to_affine());
        privs.push(s);
    }
    (privs, pubs)
}

#[test]
fn swapping_a_ring_member_out_for_an_unrelated_key_breaks_verification() {
    let (privs, mut pubs) = fresh_ring(3);
    let handle = SignerHandle::new(pubs.clone(), 0, privs[0]).unwrap();
    let sig = sign(&handle, b"msg").unwrap();

    let (_, replacement) = fresh_ring(1);
    pubs[1] = replacement[0];
    assert!(!verify_ring(b"msg", &sig, &pubs));
}

#[test]
fn decode_round_trips_through_bytes() {
    let (privs, pubs) = fresh_ring(3);
    let handle = SignerHandle::new(pubs.clone(), 2, privs[2]).unwrap();
    let bytes = sign(&handle, b"codec round trip").unwrap();
    assert_eq!(bytes.len(), sign_len(3));

    let parsed = Signature::from_bytes(3, &bytes).unwrap();
    assert_eq!(parsed.ring_size(), 3);
    assert_eq!(parsed.to_bytes(), bytes);
}

#[test]
fn wrong_ring_size_is_rejected_at_parse_time() {
    let (privs, pubs) = fresh_ring(3);
    let handle = SignerHandle::new(pubs.clone(), 0, privs[0]).unwrap();
    let bytes = sign(&handle, b"msg").unwrap();
    assert!(Signature::from_bytes(4, &bytes).is_err());
}

#[test]
fn zero_size_ring_is_rejected() {
    assert!(Signature::from_bytes(0, &[]).is_err());
    assert!(!verify_ring(b"msg", &[], &[]));
}

#[test]
fn non_canonical_point_bytes_are_rejected() {
    let garbage = vec![0xffu8; sign_len(1)];
    assert!(Signature::from_bytes(1, &garbage).is_err());
}
