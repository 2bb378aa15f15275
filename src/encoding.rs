//! Character encoding detection and transcoding.
//!
//! Fetched bodies are bytes in whatever charset the server used. The
//! charset is taken from the first of: a byte-order mark, the
//! `Content-Type` header, a `<meta>` declaration in the first kilobyte.
//! UTF-8 is assumed otherwise.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How much of the body is searched for a `<meta>` charset declaration.
const META_SNIFF_LIMIT: usize = 1024;

/// `charset=` parameter of a `Content-Type` value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Charset named by a `Content-Type` header value, if encoding_rs knows it.
#[must_use]
pub fn header_encoding(content_type: &str) -> Option<&'static Encoding> {
    capture(&HEADER_CHARSET_RE, content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
}

/// Charset declared by a `<meta>` tag near the start of the body.
///
/// Covers both `<meta charset>` and the `http-equiv="Content-Type"` form,
/// whose `content` attribute carries a `charset=` parameter.
#[must_use]
pub fn meta_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_LIMIT)]);
    capture(&META_CHARSET_RE, &head).and_then(|label| Encoding::for_label(label.as_bytes()))
}

/// Pick the encoding of a response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    content_type
        .and_then(header_encoding)
        .or_else(|| meta_encoding(body))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing.
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    // `decode` strips a BOM and switches encoding if one is present.
    let (decoded, _used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
