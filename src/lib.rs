#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod codec;
mod error;
mod keyset;
mod primitives;
mod ring;

pub use codec::{sign_b64_len, sign_len, Signature};
pub use error::{Result, RingSigError};
pub use keyset::{keypair_dispatch, keypair_dispatch_b64, keyset_init, keyset_renew, verify, verify_b64};
pub use ring::signing::{sign, sign_b64};
pub use ring::verifying::{verify_ring, verify_ring_b64};
pub use ring::SignerHandle;
