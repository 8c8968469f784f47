use crate::base::cookieerror::CookieError;
use crate::cookies::httpdate;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Netscape cookie dialect.
pub const VERSION_NETSCAPE: i32 = 0;
/// RFC 2109 cookie dialect.
pub const VERSION_RFC2109: i32 = 1;

/// Max-Age value marking a session cookie.
pub const SESSION_MAX_AGE: i32 = -1;

/// The `SameSite` attribute of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SameSite {
    /// No `SameSite` attribute is emitted.
    #[default]
    NotSpecified,
    None,
    Lax,
    Strict,
}

impl SameSite {
    /// The literal emitted after `SameSite=`, if any.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            SameSite::NotSpecified => None,
            SameSite::None => Some("None"),
            SameSite::Lax => Some("Lax"),
            SameSite::Strict => Some("Strict"),
        }
    }

    /// Case-insensitive lookup; unknown text maps to `NotSpecified`.
    pub fn from_attribute(value: &str) -> Self {
        if value.eq_ignore_ascii_case("none") {
            SameSite::None
        } else if value.eq_ignore_ascii_case("lax") {
            SameSite::Lax
        } else if value.eq_ignore_ascii_case("strict") {
            SameSite::Strict
        } else {
            SameSite::NotSpecified
        }
    }
}

/// A single HTTP cookie.
///
/// Supports both the Version 0 (Netscape) and Version 1 (RFC 2109) cookie
/// specifications. Records are created as Version 0 for the best
/// interoperability; the version only decides which optional attributes are
/// emitted by [`serialize`](crate::cookies::codec::serialize).
///
/// Values are stored as given. If a value contains whitespace or
/// non-alphanumeric characters it should be passed through
/// [`escape`](crate::cookies::codec::escape) before being assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieRecord {
    #[serde(deserialize_with = "deserialize_version")]
    version: i32,
    name: String,
    value: String,
    comment: String,
    domain: String,
    path: String,
    priority: String,
    secure: bool,
    max_age: i32,
    http_only: bool,
    same_site: SameSite,
}

impl Default for CookieRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieRecord {
    /// Creates an empty session cookie.
    pub fn new() -> Self {
        Self {
            version: VERSION_NETSCAPE,
            name: String::new(),
            value: String::new(),
            comment: String::new(),
            domain: String::new(),
            path: String::new(),
            priority: String::new(),
            secure: false,
            max_age: SESSION_MAX_AGE,
            http_only: false,
            same_site: SameSite::NotSpecified,
        }
    }

    /// Creates a session cookie with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Creates a session cookie with the given name and value.
    pub fn with_name_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::new()
        }
    }

    /// Seeds a cookie from attribute-style key/value pairs.
    ///
    /// This is a best-effort, field-by-field assignment and not a grammar.
    /// Keys are matched case-insensitively against `version`, `name`,
    /// `value`, `comment`, `domain`, `path`, `priority`, `secure`,
    /// `max-age` (or `maxage`), `httponly`, `samesite` and `expires`.
    /// Unrecognized keys and unparseable numbers are ignored.
    ///
    /// `Max-Age` wins over `Expires` no matter which pair comes first.
    pub fn from_attributes<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_attributes_at(pairs, OffsetDateTime::now_utc())
    }

    /// Same as [`from_attributes`](Self::from_attributes), resolving
    /// `expires` against `now` instead of the system clock.
    pub fn from_attributes_at<I, K, V>(pairs: I, now: OffsetDateTime) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cookie = Self::new();
        cookie.apply_attributes(pairs, now);
        cookie
    }

    pub(crate) fn apply_attributes<I, K, V>(&mut self, pairs: I, now: OffsetDateTime)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut saw_max_age = false;
        let mut expires: Option<OffsetDateTime> = None;

        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let value = value.as_ref();

            match key.to_ascii_lowercase().as_str() {
                "version" => match value.trim().parse::<i32>() {
                    Ok(v) => {
                        if let Err(e) = self.set_version(v) {
                            tracing::debug!(error = %e, "ignoring cookie version");
                        }
                    }
                    Err(_) => tracing::debug!(value = %value, "ignoring non-numeric version"),
                },
                "name" => self.set_name(value),
                "value" => self.set_value(value),
                "comment" => self.set_comment(value),
                "domain" => self.set_domain(value),
                "path" => self.set_path(value),
                "priority" => self.set_priority(value),
                "secure" => self.set_secure(flag_value(value)),
                "httponly" => self.set_http_only(flag_value(value)),
                "samesite" => self.set_same_site(SameSite::from_attribute(value.trim())),
                "max-age" | "maxage" => match value.trim().parse::<i32>() {
                    Ok(secs) => {
                        self.set_max_age(secs);
                        saw_max_age = true;
                    }
                    Err(_) => tracing::debug!(value = %value, "ignoring non-numeric max-age"),
                },
                "expires" => match httpdate::parse_http_date(value.trim()) {
                    Some(when) => expires = Some(when),
                    None => tracing::debug!(value = %value, "ignoring unparseable expires"),
                },
                _ => tracing::trace!(key = %key, "ignoring unrecognized cookie attribute"),
            }
        }

        if let (false, Some(when)) = (saw_max_age, expires) {
            let remaining = (when - now).whole_seconds().clamp(0, i32::MAX as i64);
            self.set_max_age(remaining as i32);
        }
    }

    /// Sets the version: 0 for a Netscape cookie, 1 for an RFC 2109 cookie.
    /// Any other value is rejected and the record is left unchanged.
    pub fn set_version(&mut self, version: i32) -> Result<(), CookieError> {
        if version != VERSION_NETSCAPE && version != VERSION_RFC2109 {
            return Err(CookieError::InvalidVersion(version));
        }
        self.version = version;
        Ok(())
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the value. Browsers cap a cookie around 4 KiB; that limit is
    /// not enforced here.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Comments are only emitted for version 1 cookies.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_priority(&mut self, priority: impl Into<String>) {
        self.priority = priority.into();
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Sets the maximum age in seconds.
    ///
    /// `-1` makes this a session cookie, dropped when the browser closes.
    /// `0` tells the client to delete the cookie immediately.
    pub fn set_max_age(&mut self, max_age: i32) {
        self.max_age = max_age;
    }

    pub fn max_age(&self) -> i32 {
        self.max_age
    }

    pub fn is_session(&self) -> bool {
        self.max_age < 0
    }

    pub fn set_http_only(&mut self, http_only: bool) {
        self.http_only = http_only;
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn set_same_site(&mut self, same_site: SameSite) {
        self.same_site = same_site;
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }
}

impl fmt::Display for CookieRecord {
    /// Formats the cookie as a `Set-Cookie` header value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::cookies::codec::serialize(self))
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let version = i32::deserialize(deserializer)?;
    if version != VERSION_NETSCAPE && version != VERSION_RFC2109 {
        return Err(D::Error::custom(CookieError::InvalidVersion(version)));
    }
    Ok(version)
}

fn flag_value(value: &str) -> bool {
    let value = value.trim();
    !(value.eq_ignore_ascii_case("false") || value == "0")
}
