//! Error taxonomy for the ring signature core.
//!
//! Verification itself never surfaces through this type — see the module
//! docs on [`crate::ring::verifying`] for why a reject is always a plain
//! `bool`. This type is for the failures that *are* the caller's fault:
//! bad configuration, malformed material handed to the signer, or a
//! starved RNG.

use thiserror::Error;

/// Errors produced by the ring-signature core.
#[derive(Debug, Error)]
pub enum RingSigError {
    /// Ring size was zero (or otherwise not representable).
    #[error("ring size must be at least 1, got {0}")]
    InvalidRingSize(usize),

    /// Signer index was not `0 <= index < n`.
    #[error("signer index {index} out of range for ring size {n}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The ring size it was checked against.
        n: usize,
    },

    /// A private scalar decoded to zero, which can never be a valid key.
    #[error("private key decoded to zero")]
    ZeroPrivateKey,

    /// Base64 material failed to decode.
    #[error("malformed base64 input")]
    Base64(#[from] base64::DecodeError),

    /// A fixed-width buffer had the wrong length for the ring size it was
    /// claimed to belong to.
    #[error("expected {expected} bytes, got {got}")]
    BadLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },

    /// A 65-byte point buffer did not decode to a point on the curve.
    #[error("point is not on the curve")]
    InvalidPoint,

    /// A 32-byte scalar buffer was not a canonical representative mod `q`.
    #[error("scalar is out of range")]
    InvalidScalar,

    /// The ambient keyset was used before `keyset_init` was ever called.
    #[error("ambient keyset not initialized")]
    KeysetUninit,

    /// The CSPRNG failed to produce randomness.
    #[error("random number generator failed")]
    Rng,
}

/// Convenience alias for this crate's fallible operations.
pub type Result<T> = core::result::Result<T, RingSigError>;
