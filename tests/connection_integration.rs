//! Integration tests for connection URL parsing and driver option building.

use pretty_assertions::assert_eq;
use quarry::driver::{ConnectionDescriptor, MalformedReason};
use quarry::prelude::*;

#[test]
fn test_parse_full_url() {
    let parsed = parse_connection_url("scheme://u:p@h:123/db").unwrap();
    assert_eq!(parsed.host, "h");
    assert_eq!(parsed.username, "u");
    assert_eq!(parsed.password.as_deref(), Some("p"));
    assert_eq!(parsed.port, Some(123));
    assert_eq!(parsed.database.as_deref(), Some("db"));
}

#[test]
fn test_parse_without_password() {
    let parsed = parse_connection_url("scheme://u@h/db").unwrap();
    assert_eq!(
        parsed,
        ConnectionDescriptor {
            scheme: "scheme".into(),
            host: "h".into(),
            username: "u".into(),
            password: None,
            port: None,
            database: Some("db".into()),
        }
    );
}

#[test]
fn test_parse_without_database() {
    let parsed = parse_connection_url("scheme://u:p@h").unwrap();
    assert_eq!(parsed.database, None);
}

#[test]
fn test_trailing_slash_has_no_database() {
    let parsed = parse_connection_url("scheme://u:p@h:123/").unwrap();
    assert_eq!(parsed.database, None);
}

#[test]
fn test_malformed_urls() {
    let cases = [
        ("scheme:u:p@h:123/db", MalformedReason::MissingSchemeSeparator),
        ("scheme://h:123/db", MalformedReason::MissingCredentialSeparator),
        (
            "scheme://u:p@h:port/db",
            MalformedReason::InvalidPort {
                port: "port".into(),
            },
        ),
    ];

    for (url, expected) in cases {
        let err = parse_connection_url(url).unwrap_err();
        assert!(matches!(err, ConnectionError::MalformedConnectionString(_)));
        assert_eq!(err.reason(), &expected, "{}", url);
    }
}

#[test]
fn test_build_merges_url_fields() {
    let options = DriverOptions::new().with("url", "pg://a:b@x:5/mydb");
    let built = options.build(BuildOptions::new().use_sid(false)).unwrap();

    let expected = DriverOptions::new()
        .with("type", "pg")
        .with("host", "x")
        .with("username", "a")
        .with("password", "b")
        .with("port", 5i64)
        .with("database", "mydb")
        .with("url", "pg://a:b@x:5/mydb");
    assert_eq!(built, expected);
}

#[test]
fn test_build_explicit_option_wins() {
    let options = DriverOptions::new()
        .with("url", "pg://a:b@x:5/mydb")
        .with("database", "override");
    let built = options.build(BuildOptions::default()).unwrap();
    assert_eq!(built.get_str("database"), Some("override"));
}

#[test]
fn test_build_use_sid() {
    let options = DriverOptions::new().with("url", "pg://a:b@x:5/mydb");
    let built = options.build(BuildOptions::new().use_sid(true)).unwrap();
    assert_eq!(built.get_str("sid"), Some("mydb"));
    assert_eq!(built.get_str("database"), Some("mydb"));
}

#[test]
fn test_build_without_url_is_independent_copy() {
    let options = DriverOptions::new().with("host", "x");
    let mut built = build_driver_options_copy(&options);
    assert_eq!(built, options);

    built.insert("host", "changed");
    built.remove("host");
    assert_eq!(options.get_str("host"), Some("x"));
}

fn build_driver_options_copy(options: &DriverOptions) -> DriverOptions {
    quarry::driver::build_driver_options(options, BuildOptions::default()).unwrap()
}

#[test]
fn test_build_propagates_parse_error() {
    let options = DriverOptions::new().with("url", "pg://nohost/db");
    let err = options.build(BuildOptions::default()).unwrap_err();
    assert_eq!(err.reason(), &MalformedReason::MissingCredentialSeparator);
}

#[test]
fn test_builds_are_thread_safe() {
    let options = DriverOptions::new()
        .with("url", "oracle://scott:tiger@db:1521/ORCL")
        .with("pool_size", 4i64);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| options.build(BuildOptions::new().use_sid(true)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().get_str("sid"), Some("ORCL"));
        }
    });
}

#[test]
fn test_options_json_keeps_order_and_types() {
    let options: DriverOptions = serde_json::from_str(
        r#"{"url":"pg://a:b@x:5/mydb","pool_size":4,"ssl":true,"schema":"public"}"#,
    )
    .unwrap();
    assert_eq!(options.get("pool_size"), Some(&OptionValue::Integer(4)));
    assert_eq!(options.get("ssl"), Some(&OptionValue::Boolean(true)));

    let built = options.build(BuildOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&built).unwrap(),
        r#"{"type":"pg","host":"x","username":"a","password":"b","port":5,"database":"mydb","url":"pg://a:b@x:5/mydb","pool_size":4,"ssl":true,"schema":"public"}"#
    );
}
