//! SAG-style ring signatures: signing and verifying.
//!
//! See the crate-level docs for a worked usage example. This module
//! splits the two directions of the algorithm into [`signing`] and
//! [`verifying`]; both are re-exported flat at the crate root.

pub(crate) mod signing;
pub(crate) mod verifying;

pub use self::signing::SignerHandle;
pub use self::verifying::{verify_ring, verify_ring_b64};
