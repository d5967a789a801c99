//! Fixed-width signature layout and its base64 envelope.
//!
//! Wire layout for a ring of size `n`:
//!
//! ```text
//! [0, 32)                 c0, big-endian
//! [32, 32 + 65n)          P0..P(n-1), uncompressed SEC1 points
//! [32 + 65n, 32 + 97n)    r0..r(n-1), big-endian scalars
//! ```

use crate::error::{Result, RingSigError};
use crate::primitives::{decode_point, decode_scalar, encode_point, encode_scalar, POINT_SIZE, SCALAR_SIZE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sm2::{AffinePoint, Scalar};

/// Byte length of a ring signature over `n` members.
pub const fn sign_len(n: usize) -> usize {
    SCALAR_SIZE + n * POINT_SIZE + n * SCALAR_SIZE
}

/// Length of the base64 (standard, padded) encoding of [`sign_len`].
pub const fn sign_b64_len(n: usize) -> usize {
    sign_len(n).div_ceil(3) * 4
}

/// A parsed ring signature: the closing challenge, the ring of public
/// keys the signer claims to have used, and the per-member response
/// scalars.
#[derive(Clone, Debug)]
pub struct Signature {
    pub(crate) c0: Scalar,
    pub(crate) pubs: Vec<AffinePoint>,
    pub(crate) r: Vec<Scalar>,
}

impl Signature {
    /// Ring size this signature was produced over.
    pub fn ring_size(&self) -> usize {
        self.pubs.len()
    }

    /// Serialize to the fixed-width wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = self.pubs.len();
        let mut out = Vec::with_capacity(sign_len(n));
        out.extend_from_slice(&encode_scalar(&self.c0));
        for p in &self.pubs {
            out.extend_from_slice(&encode_point(p));
        }
        for r in &self.r {
            out.extend_from_slice(&encode_scalar(r));
        }
        out
    }

    /// Serialize to the standard base64 envelope.
    pub fn to_b64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse a signature for a ring of size `n` out of `bytes`.
    ///
    /// Accepts `bytes.len() >= sign_len(n)` and ignores anything past the
    /// expected length — this is a deliberate tolerance, not a bug (see
    /// the verifier's design notes).
    pub fn from_bytes(n: usize, bytes: &[u8]) -> Result<Self> {
        if n == 0 {
            return Err(RingSigError::InvalidRingSize(n));
        }
        let needed = sign_len(n);
        if bytes.len() < needed {
            return Err(RingSigError::BadLength {
                expected: needed,
                got: bytes.len(),
            });
        }

        let c0 = decode_scalar(&bytes[0..SCALAR_SIZE])?;

        let mut pubs = Vec::with_capacity(n);
        let mut offset = SCALAR_SIZE;
        for _ in 0..n {
            pubs.push(decode_point(&bytes[offset..offset + POINT_SIZE])?);
            offset += POINT_SIZE;
        }

        let mut r = Vec::with_capacity(n);
        for _ in 0..n {
            r.push(decode_scalar(&bytes[offset..offset + SCALAR_SIZE])?);
            offset += SCALAR_SIZE;
        }

        Ok(Self { c0, pubs, r })
    }

    /// Parse a signature for a ring of size `n` out of its base64 envelope.
    pub fn from_b64(n: usize, b64: &str) -> Result<Self> {
        let bytes = STANDARD.decode(b64)?;
        Self::from_bytes(n, &bytes)
    }
}

/// Encode a ring of public keys as a concatenated-uncompressed-points
/// base64 blob — the format `Keyset`'s external representation uses.
pub(crate) fn encode_ring_b64(pubs: &[AffinePoint]) -> String {
    let mut buf = Vec::with_capacity(pubs.len() * POINT_SIZE);
    for p in pubs {
        buf.extend_from_slice(&encode_point(p));
    }
    STANDARD.encode(buf)
}

/// Decode a base64 blob of `n` concatenated uncompressed points.
pub(crate) fn decode_ring_b64(n: usize, b64: &str) -> Result<Vec<AffinePoint>> {
    let buf = STANDARD.decode(b64)?;
    if buf.len() != n * POINT_SIZE {
        return Err(RingSigError::BadLength {
            expected: n * POINT_SIZE,
            got: buf.len(),
        });
    }
    (0..n)
        .map(|i| decode_point(&buf[i * POINT_SIZE..(i + 1) * POINT_SIZE]))
        .collect()
}

/// Encode a single scalar as a base64 blob.
pub(crate) fn encode_scalar_b64(scalar: &Scalar) -> String {
    STANDARD.encode(encode_scalar(scalar))
}

/// Decode a single scalar from a base64 blob.
pub(crate) fn decode_scalar_b64(b64: &str) -> Result<Scalar> {
    let buf = STANDARD.decode(b64)?;
    decode_scalar(&buf)
}
