//! Fixed-format HTTP-date used by the `Expires` attribute.
//!
//! The format is `Www, dd Mon yyyy hh:mm:ss GMT`, always in UTC with English
//! weekday and month abbreviations.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format `when` as an HTTP-date. Returns `None` only if the date falls
/// outside what the format can express (e.g. a year beyond 9999).
pub fn format_http_date(when: OffsetDateTime) -> Option<String> {
    let utc = when.to_offset(UtcOffset::UTC);
    if !(0..=9999).contains(&utc.year()) {
        return None;
    }
    utc.format(HTTP_DATE).ok()
}

/// Parse an HTTP-date in the fixed format above.
pub fn parse_http_date(text: &str) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(text, HTTP_DATE)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
