use thiserror::Error;

use crate::algorithm::Family;

/// Errors surfaced by signing and verification.
///
/// Verification never fails for a merely wrong or wrong-length signature —
/// that is reported as `Ok(false)`. Only structurally invalid calls (unknown
/// algorithm, unparseable key) produce an error.
#[derive(Debug, Clone, Error)]
pub enum JwaError {
    // ── Algorithm lookup / construction ───────────────────────────────
    #[error("unsupported algorithm \"{0}\"")]
    UnsupportedAlgorithm(String),
    #[error("unsupported {family:?} digest width {digest_bits}")]
    InvalidAlgorithmSpec { family: Family, digest_bits: u32 },

    // ── ECDSA signature format ────────────────────────────────────────
    #[error("malformed ECDSA signature: {0}")]
    MalformedSignature(&'static str),

    // ── Provider failures, propagated unchanged ───────────────────────
    #[error("key parse failed: {0}")]
    KeyParse(String),
    #[error("signing failed: {0}")]
    Signing(String),
}

/// Type alias for results that may return a [`JwaError`].
pub type JwaResult<T> = std::result::Result<T, JwaError>;
