//! Nginx `\xHH` escape decoding.
//!
//! nginx escapes control and special bytes in log fields as four-character
//! `\xHH` sequences. [`decode`] reverses that, one field at a time, into a
//! call-local buffer — the decoder holds no state, so concurrent calls on
//! different lines are safe.

use crate::error::TransformError;

/// Decode `\xHH` escapes in `field`, passing all other bytes through.
///
/// Scans left to right, consuming four input bytes per escape and one
/// otherwise. A trailing `\` with nothing after it (or a `\` not followed by
/// `x`) is kept as a literal backslash. A `\x` followed by anything other
/// than two hex digits aborts with [`TransformError::InvalidEscape`]; the
/// whole line is then dropped by the caller rather than passed through
/// half-decoded.
///
/// Decoded bytes may recombine into multi-byte UTF-8 sequences (nginx
/// escapes them byte by byte); the final buffer is converted lossily, so
/// stray invalid sequences become U+FFFD instead of failing.
pub fn decode(field: &str) -> Result<String, TransformError> {
    if !field.contains('\\') {
        return Ok(field.to_string());
    }

    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'x') {
            let hi = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
            let lo = bytes.get(i + 3).and_then(|b| (*b as char).to_digit(16));
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push((hi * 16 + lo) as u8);
                    i += 4;
                }
                _ => {
                    return Err(TransformError::InvalidEscape {
                        offset: i,
                        raw: field.to_string(),
                    })
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}
