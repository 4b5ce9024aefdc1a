use std::fmt;
use std::str::FromStr;

use crate::algorithm::{Digest, SignatureAlgorithm};
use crate::error::{JwaError, JwaResult};

/// The fixed catalog of recognized algorithm identifiers.
///
/// The identifier-to-algorithm mapping is a closed, immutable table
/// resolved by exhaustive match — safe for unsynchronized concurrent
/// reads from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorithmId {
    Plain,
    Hs256,
    Hs384,
    Hs512,
    Rs256,
    Rs384,
    Rs512,
    Es256,
    Es384,
    Es512,
}

impl AlgorithmId {
    /// Every recognized identifier, in catalog order.
    pub const ALL: [AlgorithmId; 10] = [
        Self::Plain,
        Self::Hs256,
        Self::Hs384,
        Self::Hs512,
        Self::Rs256,
        Self::Rs384,
        Self::Rs512,
        Self::Es256,
        Self::Es384,
        Self::Es512,
    ];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
            Self::Rs256 => "RS256",
            Self::Rs384 => "RS384",
            Self::Rs512 => "RS512",
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
        }
    }

    /// The algorithm variant this identifier names.
    pub const fn algorithm(self) -> SignatureAlgorithm {
        match self {
            Self::Plain => SignatureAlgorithm::Plain,
            Self::Hs256 => SignatureAlgorithm::Hmac(Digest::Sha256),
            Self::Hs384 => SignatureAlgorithm::Hmac(Digest::Sha384),
            Self::Hs512 => SignatureAlgorithm::Hmac(Digest::Sha512),
            Self::Rs256 => SignatureAlgorithm::Rsa(Digest::Sha256),
            Self::Rs384 => SignatureAlgorithm::Rsa(Digest::Sha384),
            Self::Rs512 => SignatureAlgorithm::Rsa(Digest::Sha512),
            Self::Es256 => SignatureAlgorithm::Ecdsa(Digest::Sha256),
            Self::Es384 => SignatureAlgorithm::Ecdsa(Digest::Sha384),
            Self::Es512 => SignatureAlgorithm::Ecdsa(Digest::Sha512),
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = JwaError;

    /// Case-insensitive lookup; unknown names fail with
    /// [`JwaError::UnsupportedAlgorithm`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| JwaError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign `input` under the named algorithm.
///
/// The name is matched case-insensitively against the catalog; an unknown
/// name fails with [`JwaError::UnsupportedAlgorithm`]. See
/// [`SignatureAlgorithm::sign`] for per-family key expectations.
pub fn sign(algorithm: &str, input: &[u8], key: &[u8]) -> JwaResult<Vec<u8>> {
    algorithm.parse::<AlgorithmId>()?.algorithm().sign(input, key)
}

/// Verify `signature` over `input` under the named algorithm.
///
/// Same lookup as [`sign`]. A mismatched or wrong-length signature yields
/// `Ok(false)`; only structurally invalid calls error.
pub fn verify(algorithm: &str, signature: &[u8], input: &[u8], key: &[u8]) -> JwaResult<bool> {
    algorithm
        .parse::<AlgorithmId>()?
        .algorithm()
        .verify(signature, input, key)
}
