//! ECDSA signature format conversion.
//!
//! The crypto provider produces and consumes DER-encoded `(r, s)` pairs,
//! while the token format mandates a fixed-width raw encoding. Both
//! directions are pure functions over bytes.
//!
//! DER layout of an ECDSA signature:
//!   0x30 <seq_len>           SEQUENCE
//!     0x02 <r_len> <r bytes> INTEGER, minimal big-endian two's-complement
//!     0x02 <s_len> <s bytes> INTEGER
//!
//! Raw layout: `r ‖ s`, each the unsigned big-endian magnitude left-padded
//! with zero bytes to exactly `field_width` bytes. A P-521 signature body
//! can exceed 127 bytes, so the SEQUENCE length may use the long form.

use crate::error::{JwaError, JwaResult};

/// Convert a DER-encoded signature to the raw fixed-width form.
///
/// Fails with [`JwaError::MalformedSignature`] if `der` is not a
/// well-formed SEQUENCE of exactly two INTEGERs, or if either magnitude
/// does not fit in `field_width` bytes.
pub fn der_to_raw(der: &[u8], field_width: usize) -> JwaResult<Vec<u8>> {
    let (&tag, rest) = der.split_first().ok_or(malformed("empty input"))?;
    if tag != 0x30 {
        return Err(malformed("not a DER SEQUENCE"));
    }
    let (seq_len, body) = read_length(rest)?;
    if body.len() != seq_len {
        return Err(malformed("SEQUENCE length does not match input"));
    }

    let (r, body) = read_integer(body)?;
    let (s, body) = read_integer(body)?;
    if !body.is_empty() {
        return Err(malformed("trailing bytes after second INTEGER"));
    }

    let mut raw = vec![0u8; 2 * field_width];
    write_padded(&mut raw[..field_width], r, field_width)?;
    write_padded(&mut raw[field_width..], s, field_width)?;
    Ok(raw)
}

/// Convert a raw fixed-width signature to its DER encoding.
///
/// `raw` must be exactly `2 × field_width` bytes; the verify path checks
/// the length before calling. Total: every input encodes successfully.
pub fn raw_to_der(raw: &[u8], field_width: usize) -> Vec<u8> {
    debug_assert_eq!(raw.len(), 2 * field_width);

    let mut body = Vec::with_capacity(2 * (field_width + 3));
    write_integer(&mut body, &raw[..field_width]);
    write_integer(&mut body, &raw[field_width..]);

    let mut der = Vec::with_capacity(body.len() + 4);
    der.push(0x30);
    write_length(&mut der, body.len());
    der.extend_from_slice(&body);
    der
}

fn malformed(reason: &'static str) -> JwaError {
    JwaError::MalformedSignature(reason)
}

/// Read a DER length octet (short form, or long form up to two bytes —
/// signature lengths never need more). Returns (length, rest).
fn read_length(buf: &[u8]) -> JwaResult<(usize, &[u8])> {
    let (&first, rest) = buf.split_first().ok_or(malformed("missing length"))?;
    match first {
        0x00..=0x7f => Ok((first as usize, rest)),
        0x81 => {
            let (&len, rest) = rest.split_first().ok_or(malformed("truncated length"))?;
            if len < 0x80 {
                return Err(malformed("non-minimal long-form length"));
            }
            Ok((len as usize, rest))
        }
        0x82 => match rest {
            [hi, lo, rest @ ..] => {
                let len = usize::from(*hi) << 8 | usize::from(*lo);
                if len < 0x100 {
                    return Err(malformed("non-minimal long-form length"));
                }
                Ok((len, rest))
            }
            _ => Err(malformed("truncated length")),
        },
        _ => Err(malformed("unsupported length encoding")),
    }
}

/// Read one INTEGER and return its unsigned magnitude (leading zero bytes
/// stripped) plus the remaining input.
fn read_integer(buf: &[u8]) -> JwaResult<(&[u8], &[u8])> {
    let (&tag, rest) = buf.split_first().ok_or(malformed("missing INTEGER"))?;
    if tag != 0x02 {
        return Err(malformed("expected INTEGER tag"));
    }
    let (len, rest) = read_length(rest)?;
    if len == 0 || len > rest.len() {
        return Err(malformed("bad INTEGER length"));
    }
    let (value, rest) = rest.split_at(len);
    if value[0] & 0x80 != 0 {
        return Err(malformed("negative INTEGER"));
    }
    let mut magnitude = value;
    while magnitude.len() > 1 && magnitude[0] == 0 {
        magnitude = &magnitude[1..];
    }
    Ok((magnitude, rest))
}

/// Left-pad `magnitude` with zeros into `out` (which is `width` bytes).
fn write_padded(out: &mut [u8], magnitude: &[u8], width: usize) -> JwaResult<()> {
    if magnitude.len() > width {
        return Err(malformed("INTEGER exceeds field width"));
    }
    out[width - magnitude.len()..].copy_from_slice(magnitude);
    Ok(())
}

/// Append one INTEGER for the given zero-padded half. Zero encodes as the
/// single byte 00; a set top bit gets the ASN.1 leading zero so the value
/// stays non-negative in two's-complement.
fn write_integer(out: &mut Vec<u8>, half: &[u8]) {
    let mut magnitude = half;
    while magnitude.len() > 1 && magnitude[0] == 0 {
        magnitude = &magnitude[1..];
    }
    let pad = magnitude[0] & 0x80 != 0;
    out.push(0x02);
    out.push((magnitude.len() + usize::from(pad)) as u8);
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(magnitude);
}

/// Append a DER length (short form below 128, else long form).
fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else if len < 0x100 {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
}
