use crate::codec;
use crate::crypto::{ecdsa, hmac, rsa};
use crate::error::{JwaError, JwaResult};

/// Signature algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// No-op algorithm: empty signatures.
    None,
    /// Keyed-hash message authentication code.
    Hmac,
    /// RSA with PKCS#1 v1.5 padding.
    Rsa,
    /// ECDSA over the NIST curve matching the digest width.
    Ecdsa,
}

/// Digest widths recognized by the non-trivial families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Digest {
    Sha256,
    Sha384,
    Sha512,
}

impl Digest {
    /// Map a nominal width in bits to a digest, if recognized.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            256 => Some(Self::Sha256),
            384 => Some(Self::Sha384),
            512 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Width of the digest in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Sha256 => 256,
            Self::Sha384 => 384,
            Self::Sha512 => 512,
        }
    }
}

/// One algorithm variant: family plus digest width.
///
/// Immutable once constructed; instances are plain data and may be shared
/// and invoked from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// `PLAIN`: signatures are empty byte sequences.
    Plain,
    /// `HS256` / `HS384` / `HS512`.
    Hmac(Digest),
    /// `RS256` / `RS384` / `RS512`.
    Rsa(Digest),
    /// `ES256` / `ES384` / `ES512`.
    Ecdsa(Digest),
}

impl SignatureAlgorithm {
    /// Construct from a family tag and nominal digest width.
    ///
    /// The accepted pairs are exactly: `None`/0, and `Hmac`/`Rsa`/`Ecdsa`
    /// with 256, 384, or 512. Anything else fails with
    /// [`JwaError::InvalidAlgorithmSpec`].
    pub fn new(family: Family, digest_bits: u32) -> JwaResult<Self> {
        let invalid = || JwaError::InvalidAlgorithmSpec {
            family,
            digest_bits,
        };
        match family {
            Family::None if digest_bits == 0 => Ok(Self::Plain),
            Family::None => Err(invalid()),
            Family::Hmac => Digest::from_bits(digest_bits)
                .map(Self::Hmac)
                .ok_or_else(invalid),
            Family::Rsa => Digest::from_bits(digest_bits)
                .map(Self::Rsa)
                .ok_or_else(invalid),
            Family::Ecdsa => Digest::from_bits(digest_bits)
                .map(Self::Ecdsa)
                .ok_or_else(invalid),
        }
    }

    /// The family tag.
    pub const fn family(self) -> Family {
        match self {
            Self::Plain => Family::None,
            Self::Hmac(_) => Family::Hmac,
            Self::Rsa(_) => Family::Rsa,
            Self::Ecdsa(_) => Family::Ecdsa,
        }
    }

    /// Nominal digest width declared by the identifier. 0 for `Plain`.
    pub const fn digest_bits(self) -> u32 {
        match self {
            Self::Plain => 0,
            Self::Hmac(d) | Self::Rsa(d) | Self::Ecdsa(d) => d.bits(),
        }
    }

    /// Effective bit width for ECDSA field-element encoding.
    ///
    /// Equal to [`digest_bits`](Self::digest_bits) except for `ES512`: the
    /// curve paired with SHA-512 is P-521, whose order needs 521 bits.
    pub const fn field_bits(self) -> u32 {
        match self {
            Self::Ecdsa(Digest::Sha512) => 521,
            other => other.digest_bits(),
        }
    }

    /// Bytes per field element in the raw ECDSA signature encoding:
    /// 256→32, 384→48, 521→66.
    pub const fn field_width_bytes(self) -> usize {
        self.field_bits().div_ceil(8) as usize
    }

    /// Sign `input` with `key`.
    ///
    /// `key` is the HMAC secret for the HMAC family and a DER-encoded
    /// private key for RSA/ECDSA. `Plain` ignores the key entirely.
    /// ECDSA output is the fixed-width raw `r ‖ s` form, each half
    /// zero-padded to [`field_width_bytes`](Self::field_width_bytes).
    pub fn sign(self, input: &[u8], key: &[u8]) -> JwaResult<Vec<u8>> {
        match self {
            Self::Plain => Ok(Vec::new()),
            Self::Hmac(digest) => Ok(hmac::sign(digest, key, input)),
            Self::Rsa(digest) => rsa::sign(digest, key, input),
            Self::Ecdsa(digest) => {
                let der = ecdsa::sign(digest, key, input)?;
                codec::der_to_raw(&der, self.field_width_bytes())
            }
        }
    }

    /// Verify `signature` over `input` with `key`.
    ///
    /// `key` is the HMAC secret for the HMAC family and a DER-encoded
    /// public key for RSA/ECDSA. A mismatched or wrong-length signature
    /// yields `Ok(false)`, never an error.
    pub fn verify(self, signature: &[u8], input: &[u8], key: &[u8]) -> JwaResult<bool> {
        match self {
            Self::Plain => Ok(signature.is_empty()),
            Self::Hmac(digest) => Ok(hmac::verify(digest, key, input, signature)),
            Self::Rsa(digest) => rsa::verify(digest, key, input, signature),
            Self::Ecdsa(digest) => {
                let width = self.field_width_bytes();
                if signature.len() != 2 * width {
                    return Ok(false);
                }
                let der = codec::raw_to_der(signature, width);
                ecdsa::verify(digest, key, input, &der)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_construction_pairs() {
        assert_eq!(
            SignatureAlgorithm::new(Family::None, 0).unwrap(),
            SignatureAlgorithm::Plain
        );
        for bits in [256, 384, 512] {
            SignatureAlgorithm::new(Family::Hmac, bits).unwrap();
            SignatureAlgorithm::new(Family::Rsa, bits).unwrap();
            SignatureAlgorithm::new(Family::Ecdsa, bits).unwrap();
        }
    }

    #[test]
    fn rejected_construction_pairs() {
        for (family, bits) in [
            (Family::None, 256),
            (Family::Hmac, 0),
            (Family::Hmac, 255),
            (Family::Rsa, 1024),
            (Family::Ecdsa, 0),
            (Family::Ecdsa, 521),
        ] {
            let err = SignatureAlgorithm::new(family, bits).unwrap_err();
            assert!(matches!(err, JwaError::InvalidAlgorithmSpec { .. }));
        }
    }

    #[test]
    fn field_width_override_for_es512() {
        let es512 = SignatureAlgorithm::new(Family::Ecdsa, 512).unwrap();
        assert_eq!(es512.digest_bits(), 512);
        assert_eq!(es512.field_bits(), 521);
        assert_eq!(es512.field_width_bytes(), 66);

        let es256 = SignatureAlgorithm::new(Family::Ecdsa, 256).unwrap();
        assert_eq!(es256.field_bits(), 256);
        assert_eq!(es256.field_width_bytes(), 32);

        let es384 = SignatureAlgorithm::new(Family::Ecdsa, 384).unwrap();
        assert_eq!(es384.field_bits(), 384);
        assert_eq!(es384.field_width_bytes(), 48);

        // HMAC/RSA carry no override
        let hs512 = SignatureAlgorithm::new(Family::Hmac, 512).unwrap();
        assert_eq!(hs512.field_bits(), 512);
    }

    #[test]
    fn plain_signs_empty_and_ignores_key() {
        let plain = SignatureAlgorithm::Plain;
        assert!(plain.sign(b"payload", b"any key").unwrap().is_empty());
        assert!(plain.sign(b"", &[]).unwrap().is_empty());
        assert!(plain.verify(&[], b"payload", b"whatever").unwrap());
        assert!(!plain.verify(b"x", b"payload", b"whatever").unwrap());
    }

    #[test]
    fn ecdsa_wrong_length_signature_is_false_not_error() {
        let es256 = SignatureAlgorithm::new(Family::Ecdsa, 256).unwrap();
        // Key is never inspected when the length gate fails.
        assert!(!es256.verify(&[0u8; 63], b"input", b"not-a-key").unwrap());
        assert!(!es256.verify(&[0u8; 65], b"input", b"not-a-key").unwrap());
        assert!(!es256.verify(&[], b"input", b"not-a-key").unwrap());
    }
}
