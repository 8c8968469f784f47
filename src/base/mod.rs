//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): the crate-wide error type

pub mod cookieerror;
