use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::Digest;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the raw HMAC tag of `input` under `key` for the given digest.
pub fn sign(digest: Digest, key: &[u8], input: &[u8]) -> Vec<u8> {
    match digest {
        Digest::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.finalize().into_bytes().to_vec()
        }
        Digest::Sha384 => {
            let mut mac =
                HmacSha384::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.finalize().into_bytes().to_vec()
        }
        Digest::Sha512 => {
            let mut mac =
                HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Verify an HMAC tag in constant time. Any byte or length mismatch is
/// reported as `false`.
pub fn verify(digest: Digest, key: &[u8], input: &[u8], signature: &[u8]) -> bool {
    match digest {
        Digest::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.verify_slice(signature).is_ok()
        }
        Digest::Sha384 => {
            let mut mac =
                HmacSha384::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.verify_slice(signature).is_ok()
        }
        Digest::Sha512 => {
            let mut mac =
                HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(input);
            mac.verify_slice(signature).is_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_matches_rfc4231_test_case_2() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
        let tag = sign(Digest::Sha256, b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            tag,
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
    }

    #[test]
    fn sha384_and_sha512_match_rfc4231_test_case_2() {
        let tag384 = sign(Digest::Sha384, b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            tag384,
            hex!(
                "af45d2e376484031617f78d2b58a6b1b"
                "9c7ef464f5a01b47e42ec3736322445e"
                "8e2240ca5e69e2c78b3239ecfab21649"
            )
        );
        let tag512 = sign(Digest::Sha512, b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            tag512,
            hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a3"
                "87bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fd"
                "caeab1a34d4a6b4b636e070a38bce737"
            )
        );
    }

    #[test]
    fn tag_lengths_match_digest_widths() {
        let key = b"key";
        assert_eq!(sign(Digest::Sha256, key, b"msg").len(), 32);
        assert_eq!(sign(Digest::Sha384, key, b"msg").len(), 48);
        assert_eq!(sign(Digest::Sha512, key, b"msg").len(), 64);
    }

    #[test]
    fn verify_accepts_own_tag() {
        for digest in [Digest::Sha256, Digest::Sha384, Digest::Sha512] {
            let tag = sign(digest, b"secret", b"payload");
            assert!(verify(digest, b"secret", b"payload", &tag));
        }
    }

    #[test]
    fn verify_rejects_wrong_key_input_or_length() {
        let tag = sign(Digest::Sha256, b"secret", b"payload");
        assert!(!verify(Digest::Sha256, b"other", b"payload", &tag));
        assert!(!verify(Digest::Sha256, b"secret", b"tampered", &tag));
        assert!(!verify(Digest::Sha256, b"secret", b"payload", &tag[..31]));
        assert!(!verify(Digest::Sha256, b"secret", b"payload", &[]));
    }
}
