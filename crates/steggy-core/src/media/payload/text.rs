//! Percent-encoding of payload text.
//!
//! Payload bytes are read as UTF-8, invalid sequences are dropped, and the text is
//! escaped so that only `A-Z a-z 0-9 - _ . ~ /` stay literal. Everything else becomes
//! `%XX` with upper-case hex digits. This is the escaping existing secret images carry.

use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// characters that stay as they are, all others are escaped
const PAYLOAD_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// decodes `raw` as UTF-8, silently dropping invalid byte sequences
pub fn utf8_dropping_invalid(raw: &[u8]) -> String {
    raw.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// percent-encodes the UTF-8 text found in `raw`
pub fn percent_encode_payload(raw: &[u8]) -> String {
    utf8_percent_encode(&utf8_dropping_invalid(raw), PAYLOAD_ESCAPE).to_string()
}

/// reverses [`percent_encode_payload`], invalid UTF-8 after decoding is replaced lossily
pub fn percent_decode_payload(encoded: &[u8]) -> String {
    percent_decode(encoded).decode_utf8_lossy().into_owned()
}
