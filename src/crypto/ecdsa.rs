use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use signature::{Signer, Verifier};

use crate::algorithm::Digest;
use crate::error::{JwaError, JwaResult};

/// ECDSA signature over the curve paired with `digest`: SHA-256 → P-256,
/// SHA-384 → P-384, SHA-512 → P-521.
///
/// `key` is a DER-encoded private key, PKCS#8 or SEC1. The output is the
/// provider's DER-encoded `(r, s)` SEQUENCE; the fixed-width raw form is
/// produced by [`crate::codec::der_to_raw`] above this boundary.
pub fn sign(digest: Digest, key: &[u8], input: &[u8]) -> JwaResult<Vec<u8>> {
    match digest {
        Digest::Sha256 => sign_p256(key, input),
        Digest::Sha384 => sign_p384(key, input),
        Digest::Sha512 => sign_p521(key, input),
    }
}

/// ECDSA verification of a DER-encoded `(r, s)` SEQUENCE.
///
/// `key` is a DER-encoded public key (SPKI) or a raw SEC1 point. A
/// signature the provider rejects — structurally or cryptographically —
/// is reported as `false`; only an unparseable key is an error.
pub fn verify(digest: Digest, key: &[u8], input: &[u8], der: &[u8]) -> JwaResult<bool> {
    match digest {
        Digest::Sha256 => verify_p256(key, input, der),
        Digest::Sha384 => verify_p384(key, input, der),
        Digest::Sha512 => verify_p521(key, input, der),
    }
}

fn key_parse<E: std::fmt::Display>(e: E) -> JwaError {
    JwaError::KeyParse(e.to_string())
}

fn sign_p256(key: &[u8], input: &[u8]) -> JwaResult<Vec<u8>> {
    let signing_key = p256::ecdsa::SigningKey::from_pkcs8_der(key)
        .map_err(key_parse)
        .or_else(|_| {
            p256::SecretKey::from_sec1_der(key)
                .map(Into::into)
                .map_err(key_parse)
        })?;
    let signature: p256::ecdsa::Signature = signing_key
        .try_sign(input)
        .map_err(|e| JwaError::Signing(e.to_string()))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

fn verify_p256(key: &[u8], input: &[u8], der: &[u8]) -> JwaResult<bool> {
    let verifying_key = p256::ecdsa::VerifyingKey::from_public_key_der(key)
        .map_err(key_parse)
        .or_else(|_| {
            p256::ecdsa::VerifyingKey::from_sec1_bytes(key).map_err(key_parse)
        })?;
    let Ok(signature) = p256::ecdsa::Signature::from_der(der) else {
        return Ok(false);
    };
    Ok(verifying_key.verify(input, &signature).is_ok())
}

fn sign_p384(key: &[u8], input: &[u8]) -> JwaResult<Vec<u8>> {
    let signing_key = p384::ecdsa::SigningKey::from_pkcs8_der(key)
        .map_err(key_parse)
        .or_else(|_| {
            p384::SecretKey::from_sec1_der(key)
                .map(Into::into)
                .map_err(key_parse)
        })?;
    let signature: p384::ecdsa::Signature = signing_key
        .try_sign(input)
        .map_err(|e| JwaError::Signing(e.to_string()))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

fn verify_p384(key: &[u8], input: &[u8], der: &[u8]) -> JwaResult<bool> {
    let verifying_key = p384::ecdsa::VerifyingKey::from_public_key_der(key)
        .map_err(key_parse)
        .or_else(|_| {
            p384::ecdsa::VerifyingKey::from_sec1_bytes(key).map_err(key_parse)
        })?;
    let Ok(signature) = p384::ecdsa::Signature::from_der(der) else {
        return Ok(false);
    };
    Ok(verifying_key.verify(input, &signature).is_ok())
}

// Unlike p256/p384, the p521 crate wraps its ECDSA keys in newtypes that
// implement no pkcs8 decoding traits. Keys are parsed as
// `p521::SecretKey`/`p521::PublicKey` and converted through the generic
// `ecdsa` crate types into the newtypes.
fn sign_p521(key: &[u8], input: &[u8]) -> JwaResult<Vec<u8>> {
    let secret = p521::SecretKey::from_pkcs8_der(key)
        .map_err(key_parse)
        .or_else(|_| p521::SecretKey::from_sec1_der(key).map_err(key_parse))?;
    let signing_key = p521::ecdsa::SigningKey::from(::ecdsa::SigningKey::from(secret));
    let signature: p521::ecdsa::Signature = signing_key
        .try_sign(input)
        .map_err(|e| JwaError::Signing(e.to_string()))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

fn verify_p521(key: &[u8], input: &[u8], der: &[u8]) -> JwaResult<bool> {
    let public = p521::PublicKey::from_public_key_der(key)
        .map_err(key_parse)
        .or_else(|_| p521::PublicKey::from_sec1_bytes(key).map_err(key_parse))?;
    let verifying_key = p521::ecdsa::VerifyingKey::from(::ecdsa::VerifyingKey::from(public));
    let Ok(signature) = p521::ecdsa::Signature::from_der(der) else {
        return Ok(false);
    };
    Ok(verifying_key.verify(input, &signature).is_ok())
}
