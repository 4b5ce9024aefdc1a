use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};
use signature::{Signer, Verifier};

use crate::algorithm::Digest;
use crate::error::{JwaError, JwaResult};

/// PKCS#1 v1.5 signature over the digest of `input`.
///
/// `key` is a DER-encoded private key, PKCS#8 or PKCS#1. The provider's
/// signature bytes are returned unmodified.
pub fn sign(digest: Digest, key: &[u8], input: &[u8]) -> JwaResult<Vec<u8>> {
    let private_key = private_key(key)?;
    let signature = match digest {
        Digest::Sha256 => SigningKey::<Sha256>::new(private_key).try_sign(input),
        Digest::Sha384 => SigningKey::<Sha384>::new(private_key).try_sign(input),
        Digest::Sha512 => SigningKey::<Sha512>::new(private_key).try_sign(input),
    }
    .map_err(|e| JwaError::Signing(e.to_string()))?;

    let bytes: Box<[u8]> = signature.into();
    Ok(bytes.into_vec())
}

/// PKCS#1 v1.5 verification with a DER-encoded public key (SPKI or PKCS#1).
///
/// A signature the provider cannot parse or match is reported as `false`;
/// only an unparseable key is an error.
pub fn verify(digest: Digest, key: &[u8], input: &[u8], signature: &[u8]) -> JwaResult<bool> {
    let public_key = public_key(key)?;
    let Ok(signature) = Signature::try_from(signature) else {
        return Ok(false);
    };
    let result = match digest {
        Digest::Sha256 => VerifyingKey::<Sha256>::new(public_key).verify(input, &signature),
        Digest::Sha384 => VerifyingKey::<Sha384>::new(public_key).verify(input, &signature),
        Digest::Sha512 => VerifyingKey::<Sha512>::new(public_key).verify(input, &signature),
    };
    Ok(result.is_ok())
}

fn private_key(key: &[u8]) -> JwaResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(key)
        .or_else(|_| RsaPrivateKey::from_pkcs1_der(key))
        .map_err(|e| JwaError::KeyParse(e.to_string()))
}

fn public_key(key: &[u8]) -> JwaResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(key)
        .or_else(|_| RsaPublicKey::from_pkcs1_der(key))
        .map_err(|e| JwaError::KeyParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1::EncodeRsaPrivateKey;
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
    use std::sync::OnceLock;

    /// 2048-bit key generated once; RSA keygen dominates test time otherwise.
    fn test_key() -> &'static RsaPrivateKey {
        static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
        KEY.get_or_init(|| {
            let mut rng = rsa::rand_core::OsRng;
            RsaPrivateKey::new(&mut rng, 2048).unwrap()
        })
    }

    fn key_pair_der() -> (Vec<u8>, Vec<u8>) {
        let key = test_key();
        let private = key.to_pkcs8_der().unwrap().as_bytes().to_vec();
        let public = key
            .to_public_key()
            .to_public_key_der()
            .unwrap()
            .as_bytes()
            .to_vec();
        (private, public)
    }

    #[test]
    fn sign_verify_round_trip_all_widths() {
        let (private, public) = key_pair_der();
        for digest in [Digest::Sha256, Digest::Sha384, Digest::Sha512] {
            let sig = sign(digest, &private, b"payload").unwrap();
            assert_eq!(sig.len(), 256); // 2048-bit modulus
            assert!(verify(digest, &public, b"payload", &sig).unwrap());
        }
    }

    #[test]
    fn tampered_signature_or_input_fails() {
        let (private, public) = key_pair_der();
        let mut sig = sign(Digest::Sha256, &private, b"payload").unwrap();
        assert!(!verify(Digest::Sha256, &public, b"other", &sig).unwrap());
        sig[0] ^= 0x01;
        assert!(!verify(Digest::Sha256, &public, b"payload", &sig).unwrap());
    }

    #[test]
    fn wrong_length_signature_is_false_not_error() {
        let (_, public) = key_pair_der();
        assert!(!verify(Digest::Sha256, &public, b"payload", &[0u8; 16]).unwrap());
    }

    #[test]
    fn pkcs1_key_encoding_is_accepted() {
        let key = test_key();
        let private = key.to_pkcs1_der().unwrap().as_bytes().to_vec();
        let sig = sign(Digest::Sha256, &private, b"payload").unwrap();
        let public = key
            .to_public_key()
            .to_public_key_der()
            .unwrap()
            .as_bytes()
            .to_vec();
        assert!(verify(Digest::Sha256, &public, b"payload", &sig).unwrap());
    }

    #[test]
    fn garbage_key_is_a_key_parse_error() {
        let err = sign(Digest::Sha256, b"not-a-key", b"payload").unwrap_err();
        assert!(matches!(err, JwaError::KeyParse(_)));
        let err = verify(Digest::Sha256, b"not-a-key", b"payload", &[]).unwrap_err();
        assert!(matches!(err, JwaError::KeyParse(_)));
    }
}
