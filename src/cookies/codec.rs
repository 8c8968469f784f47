//! Escaping and `Set-Cookie` serialization.
//!
//! All functions here are pure: they read a [`CookieRecord`] snapshot and
//! return freshly allocated text. Nothing is cached between calls.

use crate::cookies::cookie_record::{CookieRecord, VERSION_RFC2109};
use crate::cookies::httpdate;
use crate::cookies::options::CodecOptions;
use percent_encoding::{percent_decode, percent_encode, AsciiSet, CONTROLS};
use time::Duration;

/// Bytes percent-escaped in a cookie value, on top of every non-ASCII byte.
///
/// This is the legacy (Netscape-era) reserved set and is deliberately wider
/// than RFC 6265's cookie-octet rules.
pub const LEGACY_RESERVED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'(')
    .add(b')')
    .add(b'/')
    .add(b'|')
    .add(b'\\')
    .add(b'"')
    .add(b'\'')
    .add(b'^')
    .add(b'`')
    .add(b',')
    .add(b';');

/// Serializes cookies according to a set of [`CodecOptions`].
#[derive(Debug, Clone, Default)]
pub struct CookieCodec {
    options: CodecOptions,
}

impl CookieCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Returns the `Set-Cookie` header value for `cookie`.
    ///
    /// Segments appear in a fixed order and absent attributes are omitted:
    /// `name=value`, `Version`, `Comment`, `Domain`, `Path`, `Priority`,
    /// `Secure`, `HttpOnly`, `Max-Age`, `Expires`, `SameSite`.
    ///
    /// The value is emitted as-is; escape it first if it holds reserved bytes.
    /// Version 1 cookies carry the RFC 2109 `Version="1"` attribute, not the
    /// request-side `$Version` marker.
    pub fn serialize(&self, cookie: &CookieRecord) -> String {
        let rfc2109 = cookie.version() == VERSION_RFC2109;
        let mut segments: Vec<String> = Vec::with_capacity(11);

        segments.push(format!("{}={}", cookie.name(), cookie.value()));

        if rfc2109 {
            segments.push("Version=\"1\"".to_string());
            if !cookie.comment().is_empty() {
                segments.push(format!("Comment={}", cookie.comment()));
            }
        }
        if !cookie.domain().is_empty() {
            segments.push(format!("Domain={}", cookie.domain()));
        }
        if !cookie.path().is_empty() {
            segments.push(format!("Path={}", cookie.path()));
        }
        if !cookie.priority().is_empty() {
            segments.push(format!("Priority={}", cookie.priority()));
        }
        if cookie.secure() {
            segments.push("Secure".to_string());
        }
        if cookie.http_only() {
            segments.push("HttpOnly".to_string());
        }
        if cookie.max_age() >= 0 {
            segments.push(format!("Max-Age={}", cookie.max_age()));
            if self.options.emit_expires {
                if let Some(expires) = self.expires_for(cookie.max_age()) {
                    segments.push(format!("Expires={}", expires));
                }
            }
        }
        if let Some(same_site) = cookie.same_site().as_str() {
            segments.push(format!("SameSite={}", same_site));
        }

        segments.join("; ")
    }

    fn expires_for(&self, max_age: i32) -> Option<String> {
        let now = self.options.clock.now();
        let expires = now
            .checked_add(Duration::seconds(i64::from(max_age)))
            .and_then(httpdate::format_http_date);
        if expires.is_none() {
            tracing::warn!(max_age, "cannot express expiry as an HTTP-date, omitting Expires");
        }
        expires
    }
}

/// Serialize `cookie` with the default options (system clock, `Expires` on).
pub fn serialize(cookie: &CookieRecord) -> String {
    CookieCodec::default().serialize(cookie)
}

/// Percent-escape `text` so it can be used as a cookie value.
///
/// Every reserved byte becomes `%XX` with uppercase hex digits; everything
/// else passes through.
pub fn escape(text: &str) -> String {
    escape_bytes(text.as_bytes())
}

/// Byte-level [`escape`]. The output is always plain ASCII.
pub fn escape_bytes(bytes: &[u8]) -> String {
    percent_encode(bytes, LEGACY_RESERVED).to_string()
}

/// Decode `%XX` escape sequences in `text`.
///
/// A `%` that is not followed by two hex digits is copied literally and
/// scanning resumes at the next character, so malformed input never fails.
/// Decoded bytes that do not form valid UTF-8 are replaced with U+FFFD; use
/// [`unescape_bytes`] to get them untouched.
pub fn unescape(text: &str) -> String {
    match String::from_utf8(unescape_bytes(text)) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(error = %e, "unescaped cookie text is not UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Byte-level [`unescape`].
pub fn unescape_bytes(text: &str) -> Vec<u8> {
    percent_decode(text.as_bytes()).collect()
}
