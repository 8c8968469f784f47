//! Bridges between [`CookieRecord`] and raw header text.
//!
//! Grammar parsing is left to the `cookie` crate. This module only maps its
//! output onto records and hands serialized records back as
//! [`http::HeaderValue`]s for the transport layer.

use crate::base::cookieerror::CookieError;
use crate::cookies::codec::CookieCodec;
use crate::cookies::cookie_record::{CookieRecord, SameSite};
use http::HeaderValue;
use time::OffsetDateTime;

/// Attributes the `cookie` crate does not model but legacy producers send.
const LEGACY_ATTRIBUTES: [&str; 3] = ["version", "comment", "priority"];

impl CookieCodec {
    /// Serialize `cookie` into a `Set-Cookie` header value.
    pub fn header_value(&self, cookie: &CookieRecord) -> Result<HeaderValue, CookieError> {
        Ok(HeaderValue::from_str(&self.serialize(cookie))?)
    }
}

/// Serialize `cookie` into a `Set-Cookie` header value with default options.
///
/// Fails with [`CookieError::InvalidHeaderValue`] when the cookie holds bytes
/// that cannot appear in a header (e.g. an unescaped newline in the value).
pub fn to_header_value(cookie: &CookieRecord) -> Result<HeaderValue, CookieError> {
    CookieCodec::default().header_value(cookie)
}

/// Build a `Cookie` request header from `name=value` pairs.
pub fn request_header(cookies: &[CookieRecord]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name(), c.value()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Populate a record from a `Set-Cookie` header line.
pub fn parse_set_cookie(line: &str) -> Result<CookieRecord, CookieError> {
    parse_set_cookie_at(line, OffsetDateTime::now_utc())
}

/// Same as [`parse_set_cookie`], resolving `Expires` against `now`.
pub fn parse_set_cookie_at(line: &str, now: OffsetDateTime) -> Result<CookieRecord, CookieError> {
    let parsed = cookie::Cookie::parse(line)?;
    let mut record = CookieRecord::with_name_value(parsed.name(), parsed.value());

    if let Some(domain) = parsed.domain() {
        record.set_domain(domain);
    }
    if let Some(path) = parsed.path() {
        record.set_path(path);
    }
    record.set_secure(parsed.secure().unwrap_or(false));
    record.set_http_only(parsed.http_only().unwrap_or(false));

    record.set_same_site(match parsed.same_site() {
        Some(cookie::SameSite::Lax) => SameSite::Lax,
        Some(cookie::SameSite::Strict) => SameSite::Strict,
        Some(cookie::SameSite::None) => SameSite::None,
        None => SameSite::NotSpecified,
    });

    // Max-Age takes precedence over Expires
    if let Some(max_age) = parsed.max_age() {
        record.set_max_age(clamp_seconds(max_age.whole_seconds()));
    } else if let Some(expires) = parsed.expires().and_then(|e| e.datetime()) {
        record.set_max_age(clamp_seconds((expires - now).whole_seconds()));
    }

    let legacy = line.split(';').skip(1).filter_map(|segment| {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        let key = key.trim();
        LEGACY_ATTRIBUTES
            .iter()
            .any(|known| key.eq_ignore_ascii_case(known))
            .then(|| (key.to_string(), value.trim().trim_matches('"').to_string()))
    });
    record.apply_attributes(legacy, now);

    Ok(record)
}

/// Populate a record from a `Set-Cookie` [`HeaderValue`].
pub fn parse_set_cookie_value(value: &HeaderValue) -> Result<CookieRecord, CookieError> {
    parse_set_cookie(value.to_str()?)
}

/// Split a `Cookie` request header into records.
///
/// Pairs the `cookie` crate rejects are skipped.
pub fn parse_cookie_header(header: &str) -> Vec<CookieRecord> {
    cookie::Cookie::split_parse(header)
        .filter_map(|result| match result {
            Ok(c) => Some(CookieRecord::with_name_value(c.name(), c.value())),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed cookie pair");
                None
            }
        })
        .collect()
}

fn clamp_seconds(secs: i64) -> i32 {
    secs.clamp(0, i64::from(i32::MAX)) as i32
}
