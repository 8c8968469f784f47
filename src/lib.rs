//! # netcookie
//!
//! A single HTTP cookie and its conversion to and from wire-safe text.
//!
//! `netcookie` supports both historical cookie dialects (Netscape "version 0"
//! and RFC 2109 "version 1") together with the modern `HttpOnly`, `SameSite`
//! and `Priority` attributes. Transport, TLS and cookie jars are left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use netcookie::cookies::codec::serialize;
//! use netcookie::cookies::cookie_record::{CookieRecord, SameSite};
//!
//! let mut cookie = CookieRecord::with_name_value("sid", "abc123");
//! cookie.set_secure(true);
//! cookie.set_http_only(true);
//! cookie.set_same_site(SameSite::Lax);
//!
//! assert_eq!(serialize(&cookie), "sid=abc123; Secure; HttpOnly; SameSite=Lax");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Cookie model, escaping, serialization, and header adapters

pub mod base;
pub mod cookies;

pub use base::cookieerror::CookieError;
pub use cookies::codec::{escape, serialize, unescape, CookieCodec};
pub use cookies::cookie_record::{CookieRecord, SameSite};
pub use cookies::options::{Clock, CodecOptions, CodecOptionsBuilder};
