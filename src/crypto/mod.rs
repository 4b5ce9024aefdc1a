//! Crypto provider boundary: keyed digests and asymmetric sign/verify.
//!
//! Everything in here delegates to the RustCrypto implementation crates.
//! ECDSA functions speak DER at this boundary; the fixed-width raw form is
//! produced by [`crate::codec`] above it.

pub mod ecdsa;
pub mod hmac;
pub mod rsa;
