//! Cookie model, escaping, and `Set-Cookie` serialization.
//!
//! - **Model**: [`CookieRecord`](cookie_record::CookieRecord), one cookie with
//!   its Netscape (version 0) or RFC 2109 (version 1) attributes
//! - **Codec**: [`escape`](codec::escape), [`unescape`](codec::unescape) and
//!   [`serialize`](codec::serialize), all pure functions
//! - **Headers**: [`header`] adapters to and from raw `Set-Cookie` / `Cookie`
//!   text, with grammar parsing delegated to the `cookie` crate
//!
//! # Example
//!
//! ```rust
//! use netcookie::cookies::codec::{escape, serialize};
//! use netcookie::cookies::cookie_record::{CookieRecord, SameSite};
//!
//! let mut cookie = CookieRecord::with_name_value("sid", escape("a b;c"));
//! cookie.set_secure(true);
//! cookie.set_same_site(SameSite::Lax);
//! assert_eq!(serialize(&cookie), "sid=a%20b%3Bc; Secure; SameSite=Lax");
//! ```
//!
//! # Attribute order
//!
//! | # | Segment | Emitted when |
//! |---|---------|--------------|
//! | 1 | `name=value` | always |
//! | 2 | `Version="1"` | version 1 |
//! | 3 | `Comment=` | version 1, non-empty |
//! | 4 | `Domain=` | non-empty |
//! | 5 | `Path=` | non-empty |
//! | 6 | `Priority=` | non-empty |
//! | 7 | `Secure` | flag set |
//! | 8 | `HttpOnly` | flag set |
//! | 9 | `Max-Age=`, `Expires=` | max-age >= 0 |
//! | 10 | `SameSite=` | not `NotSpecified` |

pub mod codec;
pub mod cookie_record;
pub mod header;
pub mod httpdate;
pub mod options;
