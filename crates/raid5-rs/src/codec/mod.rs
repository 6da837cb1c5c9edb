//! Two-digit-per-byte hex framing for input streams and disk images.

#[cfg(test)]
mod codec_tests;

use std::io::{self, Write};

use crate::error::{RaidError, Result};
use crate::layout::block::zeroed;

/// Bytes converted per `write_all` call in [`encode_to`].
const ENCODE_CHUNK: usize = 4096;

/// `decode` reads exactly `len` bytes worth of hex digits from `text`.
///
/// Digits are case-insensitive and paired big-endian. Trailing ASCII whitespace after
/// the `2 * len` digits is accepted; anything else is rejected.
///
/// # Errors
/// Returns [`RaidError::MalformedInput`] naming the first byte that could not be
/// decoded, and [`RaidError::AllocationFailure`] if the output cannot be reserved.
pub fn decode(text: &[u8], len: usize) -> Result<Vec<u8>> {
    let digits = len
        .checked_mul(2)
        .ok_or_else(|| RaidError::malformed(0, format!("input length {len} is too large")))?;

    if text.len() < digits {
        return Err(RaidError::malformed(
            text.len() / 2,
            format!("expected {digits} hex digits, found {}", text.len()),
        ));
    }

    let (body, rest) = text.split_at(digits);
    if let Some(pos) = rest.iter().position(|b| !b.is_ascii_whitespace()) {
        return Err(RaidError::malformed(
            len + pos / 2,
            format!("unexpected trailing data after {digits} hex digits"),
        ));
    }

    let mut out = zeroed(len)?;
    hex::decode_to_slice(body, &mut out).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            RaidError::malformed(index / 2, format!("invalid hex digit {c:?}"))
        }
        other => RaidError::malformed(0, other),
    })?;
    Ok(out)
}

/// `encode` renders `bytes` as lowercase hex, two digits per byte.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// `encode_to` streams the [`encode`] rendering of `bytes` into `w`.
///
/// # Errors
/// Returns [`RaidError::Io`] with any error raised by the writer.
pub fn encode_to<W: Write>(w: &mut W, bytes: &[u8]) -> Result<()> {
    let mut buf = [0u8; 2 * ENCODE_CHUNK];
    for chunk in bytes.chunks(ENCODE_CHUNK) {
        let out = &mut buf[..2 * chunk.len()];
        hex::encode_to_slice(chunk, out).map_err(|e| RaidError::Io(io::Error::other(e)))?;
        w.write_all(out)?;
    }
    Ok(())
}
