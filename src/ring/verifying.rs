//! Ring signature verification.
//!
//! Deliberately returns `bool`, never `Result` — the policy from the
//! error design doc is that a malformed signature, a wrong signature,
//! and a signature over a different ring must all look identical to the
//! caller. Distinguishing them would open an oracle. The one place this
//! crate *does* distinguish a failure is the ambient façade in
//! [`crate::keyset`], and only for "the keyset was never initialized" —
//! a caller bug, not a property of the signature.

use crate::codec::Signature;
use crate::primitives::{hash_point_to_scalar, prehash};
use sm2::elliptic_curve::ops::MulByGenerator;
use sm2::{AffinePoint, ProjectivePoint};
use subtle::ConstantTimeEq;

/// Verify `sig` against `msg` and an explicit `ring` of public keys.
///
/// The ring embedded in `sig` must equal `ring`, position for position —
/// an ambient keyset or an explicit caller-supplied ring is authoritative,
/// and a signature naming a different ring is rejected before the
/// challenge chain is even recomputed.
pub fn verify_ring(msg: &[u8], sig: &[u8], ring: &[AffinePoint]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }
    let Ok(parsed) = Signature::from_bytes(n, sig) else {
        return false;
    };
    verify_parsed(msg, &parsed, ring)
}

/// Verify a base64-encoded `sig` against `msg` and an explicit `ring`.
pub fn verify_ring_b64(msg: &[u8], sig_b64: &str, ring: &[AffinePoint]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }
    let Ok(parsed) = Signature::from_b64(n, sig_b64) else {
        return false;
    };
    verify_parsed(msg, &parsed, ring)
}

fn verify_parsed(msg: &[u8], parsed: &Signature, ring: &[AffinePoint]) -> bool {
    if parsed.pubs.len() != ring.len() {
        return false;
    }
    if parsed
        .pubs
        .iter()
        .zip(ring)
        .any(|(embedded, ambient)| embedded != ambient)
    {
        return false;
    }

    let prehashed = prehash(msg);
    let mut c = parsed.c0;
    for i in 0..ring.len() {
        let t = (ProjectivePoint::mul_by_generator(&parsed.r[i]) + ProjectivePoint::from(ring[i]) * c)
            .to_affine();
        c = hash_point_to_scalar(&prehashed, &t);
    }

    bool::from(c.ct_eq(&parsed.c0))
}
