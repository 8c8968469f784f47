use netcookie::cookies::header::{parse_set_cookie, request_header};
use netcookie::{escape, serialize, unescape, CodecOptions, CookieCodec, CookieError, CookieRecord, SameSite};
use time::macros::datetime;

fn all_attributes() -> CookieRecord {
    let mut cookie = CookieRecord::with_name_value("sid", "abc123");
    cookie.set_version(1).unwrap();
    cookie.set_comment("c");
    cookie.set_domain("example.com");
    cookie.set_path("/");
    cookie.set_priority("Medium");
    cookie.set_secure(true);
    cookie.set_http_only(true);
    cookie.set_max_age(10);
    cookie.set_same_site(SameSite::None);
    cookie
}

#[test]
fn test_secure_lax_scenario() {
    let mut cookie = CookieRecord::with_name_value("sid", "abc123");
    cookie.set_secure(true);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    assert_eq!(serialize(&cookie), "sid=abc123; Secure; HttpOnly; SameSite=Lax");
}

#[test]
fn test_escape_scenarios() {
    assert_eq!(escape("a b;c"), "a%20b%3Bc");
    assert_eq!(unescape("a%20b%3Bc"), "a b;c");
    assert_eq!(unescape("100%"), "100%");
}

#[test]
fn test_escape_leaves_no_reserved_character() {
    let input = "<script>alert('x'); [1,2] {a|b} \\ \"q\" ^`/</script>";
    let escaped = escape(input);
    for reserved in "<>{}[]()/|\\\"'^`,; ".chars() {
        assert!(!escaped.contains(reserved), "{reserved:?} survived in {escaped}");
    }
    assert_eq!(unescape(&escaped), input);
}

#[test]
fn test_no_duplicate_attribute_keys() {
    let out = CookieCodec::new(
        CodecOptions::builder()
            .fixed_time(datetime!(2020-01-01 00:00:00 UTC))
            .build(),
    )
    .serialize(&all_attributes());

    let mut keys: Vec<&str> = out
        .split("; ")
        .map(|segment| segment.split('=').next().unwrap_or(segment))
        .collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total, "duplicate key in {out}");
    assert_eq!(total, 11);
}

#[test]
fn test_max_age_zero_expires_now_or_earlier() {
    let mut cookie = CookieRecord::with_name_value("gone", "");
    cookie.set_max_age(0);

    let before = time::OffsetDateTime::now_utc().replace_nanosecond(0).unwrap();
    let out = serialize(&cookie);
    assert!(out.contains("Max-Age=0"));

    let expires = out
        .split("; ")
        .find_map(|segment| segment.strip_prefix("Expires="))
        .expect("Expires segment");
    let parsed = netcookie::cookies::httpdate::parse_http_date(expires).unwrap();
    assert!(parsed >= before);
    assert!(parsed <= time::OffsetDateTime::now_utc());
}

#[test]
fn test_version_0_omits_comment() {
    let mut cookie = all_attributes();
    cookie.set_version(0).unwrap();
    let out = serialize(&cookie);
    assert!(!out.contains("Comment="));
    assert!(!out.contains("Version="));
    assert!(out.contains("Priority=Medium"));
}

#[test]
fn test_invalid_version_is_reported() {
    let mut cookie = CookieRecord::new();
    let err = cookie.set_version(3).unwrap_err();
    assert_eq!(err, CookieError::InvalidVersion(3));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_mapping_seed_then_serialize() {
    let cookie = CookieRecord::from_attributes([
        ("name", "theme"),
        ("value", "dark"),
        ("path", "/"),
        ("samesite", "Strict"),
        ("x-tracking", "ignored"),
    ]);
    assert_eq!(serialize(&cookie), "theme=dark; Path=/; SameSite=Strict");
}

#[test]
fn test_set_cookie_through_record() {
    let record = parse_set_cookie("lang=en%2DUS; Path=/; HttpOnly").unwrap();
    assert_eq!(unescape(record.value()), "en-US");
    assert_eq!(request_header(&[record]), "lang=en%2DUS");
}

#[test]
fn test_serde_round_trip() {
    let cookie = all_attributes();
    let json = serde_json::to_string(&cookie).unwrap();
    let back: CookieRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cookie);

    let partial: CookieRecord = serde_json::from_str(r#"{"name":"a","value":"b"}"#).unwrap();
    assert_eq!(partial, CookieRecord::with_name_value("a", "b"));

    assert!(serde_json::from_str::<CookieRecord>(r#"{"version":2}"#).is_err());
}

#[test]
fn test_records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CookieRecord>();
    assert_send_sync::<CookieCodec>();
}
