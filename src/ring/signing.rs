//! Ring signature generation.
//!
//! ## Algorithm
//!
//! ```text
//! prehash <- H(msg)                              // staged once, forked per point
//! k       <- sample_scalar()
//! c[pi+1] <- hash_point_to_scalar(prehash, k*G)
//! for i = pi+1 .. pi-1 (mod n):
//!     r[i]   <- sample_scalar()
//!     T      <- r[i]*G + c[i]*pub[i]
//!     c[i+1] <- hash_point_to_scalar(prehash, T)
//! r[pi] <- k - c[pi] * priv   (mod q)
//! if r[pi] == 0: restart with a fresh k
//! signature <- (c[0], pub[0..n], r[0..n])
//! ```

use crate::codec::{decode_ring_b64, decode_scalar_b64, Signature};
use crate::error::{Result, RingSigError};
use crate::primitives::{hash_point_to_scalar, prehash, sample_scalar};
use rand_core::{CryptoRng, OsRng, RngCore};
use sm2::elliptic_curve::ops::MulByGenerator;
use sm2::{AffinePoint, ProjectivePoint, Scalar};
use zeroize::Zeroize;

/// A transient view into one ring member's key material, presented to
/// [`sign`]/[`sign_b64`]. Valid for a single sign call; its private
/// scalar is zeroized when dropped.
pub struct SignerHandle {
    ring_pubs: Vec<AffinePoint>,
    index: usize,
    priv_scalar: Scalar,
}

impl Drop for SignerHandle {
    fn drop(&mut self) {
        self.priv_scalar.zeroize();
    }
}

impl SignerHandle {
    /// Build a handle directly from already-decoded ring state.
    pub fn new(ring_pubs: Vec<AffinePoint>, index: usize, priv_scalar: Scalar) -> Result<Self> {
        let n = ring_pubs.len();
        if n < 1 {
            return Err(RingSigError::InvalidRingSize(n));
        }
        if index >= n {
            return Err(RingSigError::IndexOutOfRange { index, n });
        }
        if bool::from(priv_scalar.is_zero()) {
            return Err(RingSigError::ZeroPrivateKey);
        }
        Ok(Self {
            ring_pubs,
            index,
            priv_scalar,
        })
    }

    /// Build a handle from externally supplied base64 material: the
    /// ring's concatenated public points and this member's private
    /// scalar, both as produced by [`crate::codec`]'s base64 helpers.
    pub fn from_b64(ring_pubs_b64: &str, priv_b64: &str, n: usize, index: usize) -> Result<Self> {
        let ring_pubs = decode_ring_b64(n, ring_pubs_b64)?;
        let priv_scalar = decode_scalar_b64(priv_b64)?;
        Self::new(ring_pubs, index, priv_scalar)
    }

    /// Ring size this handle signs over.
    pub fn ring_size(&self) -> usize {
        self.ring_pubs.len()
    }
}

/// Sign `msg` under `handle`'s ring and private key, returning the
/// fixed-width signature bytes.
pub fn sign(handle: &SignerHandle, msg: &[u8]) -> Result<Vec<u8>> {
    sign_with_rng(handle, msg, &mut OsRng).map(|sig| sig.to_bytes())
}

/// Sign `msg`, returning the base64 envelope.
pub fn sign_b64(handle: &SignerHandle, msg: &[u8]) -> Result<String> {
    sign_with_rng(handle, msg, &mut OsRng).map(|sig| sig.to_b64())
}

/// Core signing routine, parameterized over the RNG so tests can inject
/// a deterministic one. Not part of the public API: callers only ever
/// need [`sign`]/[`sign_b64`], which always use a CSPRNG.
pub(crate) fn sign_with_rng<R: CryptoRng + RngCore>(
    handle: &SignerHandle,
    msg: &[u8],
    rng: &mut R,
) -> Result<Signature> {
    let n = handle.ring_pubs.len();
    let pi = handle.index;
    let prehashed = prehash(msg);

    loop {
        let mut k = sample_scalar(rng);
        let mut c = vec![Scalar::ZERO; n];
        let mut r = vec![Scalar::ZERO; n];

        let start = (pi + 1) % n;
        let kg = ProjectivePoint::mul_by_generator(&k).to_affine();
        c[start] = hash_point_to_scalar(&prehashed, &kg);

        let mut i = start;
        while i != pi {
            let ri = sample_scalar(rng);
            let t = (ProjectivePoint::mul_by_generator(&ri)
                + ProjectivePoint::from(handle.ring_pubs[i]) * c[i])
                .to_affine();
            let next = (i + 1) % n;
            c[next] = hash_point_to_scalar(&prehashed, &t);
            r[i] = ri;
            i = next;
        }

        let r_pi = k - c[pi] * handle.priv_scalar;
        k.zeroize();

        if bool::from(r_pi.is_zero()) {
            // Negligibly likely, but the chain is forced to fail closed
            // here rather than ever emitting a zero response scalar.
            continue;
        }
        r[pi] = r_pi;

        return Ok(Signature {
            c0: c[0],
            pubs: handle.ring_pubs.clone(),
            r,
        });
    }
}
