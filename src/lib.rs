//! Signature creation and verification for the fixed catalog of
//! token-signing algorithm identifiers: `PLAIN` (no-op), `HS256/384/512`
//! (HMAC), `RS256/384/512` (RSA PKCS#1 v1.5), and `ES256/384/512` (ECDSA
//! over P-256/P-384/P-521).
//!
//! ECDSA signatures use the fixed-width raw encoding mandated by the token
//! format: `r ‖ s`, each zero-padded to the curve's field width. Note the
//! `ES512` width is 132 bytes (66 + 66) — the curve paired with SHA-512 is
//! P-521.
//!
//! ```no_run
//! let secret = b"shared secret";
//! let signature = jwa::sign("HS256", b"payload", secret)?;
//! assert!(jwa::verify("HS256", &signature, b"payload", secret)?);
//! # Ok::<(), jwa::JwaError>(())
//! ```
//!
//! Keys are byte sequences: raw secrets for HMAC, DER-encoded keys for
//! RSA (PKCS#8/PKCS#1, SPKI) and ECDSA (PKCS#8/SEC1, SPKI). `PLAIN`
//! ignores its key.

mod algorithm;
mod codec;
mod crypto;
mod error;
mod registry;

pub use self::algorithm::{Digest, Family, SignatureAlgorithm};
pub use self::error::{JwaError, JwaResult};
pub use self::registry::{AlgorithmId, sign, verify};
