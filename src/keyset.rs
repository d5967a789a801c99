//! The process-wide ambient ring used by the verifier façade.
//!
//! This is deliberately *not* where the core algorithm lives — [`crate::ring`]
//! takes its ring as an explicit parameter and knows nothing about global
//! state. What lives here is a thin, lock-guarded façade around that core,
//! matching the re-architecture guidance: ambient state is a convenience
//! layer, not a place to bury the interesting logic.

use crate::codec::{encode_ring_b64, encode_scalar_b64};
use crate::error::{Result, RingSigError};
use crate::primitives::sample_scalar;
use crate::ring::signing::SignerHandle;
use crate::ring::verifying::{verify_ring, verify_ring_b64};
use rand_core::OsRng;
use sm2::elliptic_curve::ops::MulByGenerator;
use sm2::{AffinePoint, ProjectivePoint, Scalar};
use std::sync::{OnceLock, RwLock};
use zeroize::Zeroize;

/// One ring member: a private scalar and its corresponding public point.
#[derive(Clone)]
struct Keypair {
    priv_scalar: Scalar,
    pub_point: AffinePoint,
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.priv_scalar.zeroize();
    }
}

/// The ambient ring: `n` freshly generated keypairs, held in internal
/// (scalar/point) form only. Base64 projections are derived on demand by
/// the `codec` module rather than cached here — see the module docs on
/// why keeping two representations in parallel is a drift hazard.
struct Keyset {
    members: Vec<Keypair>,
}

impl Keyset {
    fn generate(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(RingSigError::InvalidRingSize(n));
        }
        let mut rng = OsRng;
        let members = (0..n)
            .map(|_| {
                let priv_scalar = sample_scalar(&mut rng);
                let pub_point = ProjectivePoint::mul_by_generator(&priv_scalar).to_affine();
                Keypair {
                    priv_scalar,
                    pub_point,
                }
            })
            .collect();
        Ok(Self { members })
    }

    fn ring(&self) -> Vec<AffinePoint> {
        self.members.iter().map(|k| k.pub_point).collect()
    }
}

static AMBIENT: OnceLock<RwLock<Option<Keyset>>> = OnceLock::new();

fn ambient() -> &'static RwLock<Option<Keyset>> {
    AMBIENT.get_or_init(|| RwLock::new(None))
}

/// Generate a fresh ring of `n` keypairs and publish it as the ambient
/// ring. Safe to call again later; prefer [`keyset_renew`] for that case
/// since the name documents the intent (old signatures become
/// unverifiable).
pub fn keyset_init(n: usize) -> Result<()> {
    let fresh = Keyset::generate(n)?;
    *ambient().write().expect("ambient keyset lock poisoned") = Some(fresh);
    Ok(())
}

/// Replace the ambient ring with a freshly generated one of size `n`.
/// Readers that already cloned what they needed out from behind the lock
/// (an in-flight `verify` or a dispatched `SignerHandle`) are unaffected;
/// every signature produced against the retired ring stops verifying.
pub fn keyset_renew(n: usize) -> Result<()> {
    keyset_init(n)
}

/// Build a [`SignerHandle`] for ring member `i` from the ambient keyset.
pub fn keypair_dispatch(i: usize) -> Result<SignerHandle> {
    let guard = ambient().read().expect("ambient keyset lock poisoned");
    let keyset = guard.as_ref().ok_or(RingSigError::KeysetUninit)?;
    let n = keyset.members.len();
    if i >= n {
        return Err(RingSigError::IndexOutOfRange { index: i, n });
    }
    SignerHandle::new(keyset.ring(), i, keyset.members[i].priv_scalar)
}

/// Export ring member `i` from the ambient keyset as base64 material:
/// the whole ring's public points, and that member's private scalar.
/// The analogue of [`keypair_dispatch`] for a caller that needs to hand
/// the key material to a different process rather than sign in this one
/// — see [`SignerHandle::from_b64`] on the receiving end.
pub fn keypair_dispatch_b64(i: usize) -> Result<(String, String)> {
    let guard = ambient().read().expect("ambient keyset lock poisoned");
    let keyset = guard.as_ref().ok_or(RingSigError::KeysetUninit)?;
    let n = keyset.members.len();
    if i >= n {
        return Err(RingSigError::IndexOutOfRange { index: i, n });
    }
    let ring_pubs_b64 = encode_ring_b64(&keyset.ring());
    let priv_b64 = encode_scalar_b64(&keyset.members[i].priv_scalar);
    Ok((ring_pubs_b64, priv_b64))
}

/// Verify `sig` against the ambient ring.
///
/// Returns `Err(RingSigError::KeysetUninit)` if [`keyset_init`] was never
/// called — a caller programming error, distinct from a cryptographic
/// reject. Otherwise returns `Ok(accepted)`.
pub fn verify(msg: &[u8], sig: &[u8]) -> Result<bool> {
    let guard = ambient().read().expect("ambient keyset lock poisoned");
    let keyset = guard.as_ref().ok_or(RingSigError::KeysetUninit)?;
    Ok(verify_ring(msg, sig, &keyset.ring()))
}

/// Verify a base64-encoded `sig` against the ambient ring.
pub fn verify_b64(msg: &[u8], sig_b64: &str) -> Result<bool> {
    let guard = ambient().read().expect("ambient keyset lock poisoned");
    let keyset = guard.as_ref().ok_or(RingSigError::KeysetUninit)?;
    Ok(verify_ring_b64(msg, sig_b64, &keyset.ring()))
}
