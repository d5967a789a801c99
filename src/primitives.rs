//! Curve and hash primitives the ring signature builds on.
//!
//! Everything here is a thin wrapper around the `sm2` and `sm3` crates:
//! scalar sampling with rejection, the SEC1 point encoding, and the
//! "prehash the message once, fork per point" hashing discipline the
//! Fiat–Shamir chain depends on.

use crate::error::{Result, RingSigError};
use rand_core::{CryptoRng, RngCore};
use sm2::elliptic_curve::ff::{Field, PrimeField};
use sm2::elliptic_curve::ops::Reduce;
use sm2::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use sm2::{AffinePoint, EncodedPoint, FieldBytes, Scalar};
use sm3::{Digest, Sm3};

/// Uncompressed SEC1 point size: `0x04 || X(32) || Y(32)`.
pub(crate) const POINT_SIZE: usize = 65;

/// Big-endian scalar size.
pub(crate) const SCALAR_SIZE: usize = 32;

/// Sample a scalar uniformly from `[1, q-1]`.
///
/// Uses rejection sampling: [`Field::random`] draws from the full field
/// and we redraw on the (negligibly likely) zero outcome, so every value
/// this returns is safe to use as a nonce or a chain blinding factor
/// without a separate "is it zero" check downstream.
pub(crate) fn sample_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> Scalar {
    loop {
        let candidate = Scalar::random(&mut *rng);
        if !bool::from(candidate.is_zero()) {
            return candidate;
        }
    }
}

/// Encode a point in uncompressed SEC1 form.
pub(crate) fn encode_point(point: &AffinePoint) -> [u8; POINT_SIZE] {
    let encoded = point.to_encoded_point(false);
    let mut out = [0u8; POINT_SIZE];
    out.copy_from_slice(encoded.as_bytes());
    out
}

/// Decode an uncompressed SEC1 point, validating curve membership.
pub(crate) fn decode_point(bytes: &[u8]) -> Result<AffinePoint> {
    let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| RingSigError::InvalidPoint)?;
    Option::from(AffinePoint::from_encoded_point(&encoded)).ok_or(RingSigError::InvalidPoint)
}

/// Encode a scalar as 32-byte big-endian.
pub(crate) fn encode_scalar(scalar: &Scalar) -> [u8; SCALAR_SIZE] {
    let repr = scalar.to_bytes();
    let mut out = [0u8; SCALAR_SIZE];
    out.copy_from_slice(&repr);
    out
}

/// Decode a 32-byte big-endian scalar, rejecting non-canonical values
/// (i.e. `>= q`) rather than silently reducing them.
pub(crate) fn decode_scalar(bytes: &[u8]) -> Result<Scalar> {
    if bytes.len() != SCALAR_SIZE {
        return Err(RingSigError::BadLength {
            expected: SCALAR_SIZE,
            got: bytes.len(),
        });
    }
    let field_bytes = FieldBytes::clone_from_slice(bytes);
    Option::from(Scalar::from_repr(field_bytes)).ok_or(RingSigError::InvalidScalar)
}

/// Stage the message into a fresh SM3 context. Cloning this context is
/// cheap, which is what lets [`hash_point_to_scalar`] fork it per point
/// instead of re-absorbing the message every time.
pub(crate) fn prehash(msg: &[u8]) -> Sm3 {
    let mut ctx = Sm3::new();
    ctx.update(msg);
    ctx
}

/// Fork the prehashed context, absorb `point`'s encoding, finalize, and
/// interpret the digest as a scalar mod `q`.
pub(crate) fn hash_point_to_scalar(ctx: &Sm3, point: &AffinePoint) -> Scalar {
    let mut forked = ctx.clone();
    forked.update(encode_point(point));
    let digest = forked.finalize();
    Scalar::reduce_bytes(FieldBytes::from_slice(&digest))
}
