#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wfglue_runtime::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
copy:
  buffer_unseekabel: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.logging.filter, "info");
    assert!(!cfg.copy.buffer_unseekable);
    assert_eq!(cfg.copy.max_buffer_bytes, 64 * 1024 * 1024);
    assert_eq!(cfg.copy.metrics_scope, "storage");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
logging:
  filter: "wfglue_runtime=debug"
  ansi: false
copy:
  buffer_unseekable: true
  max_buffer_bytes: 1024
  metrics_scope: "blob"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.logging.filter, "wfglue_runtime=debug");
    assert!(!cfg.logging.ansi);
    assert!(cfg.copy.buffer_unseekable);
    assert_eq!(cfg.copy.max_buffer_bytes, 1024);
    assert_eq!(cfg.copy.metrics_scope, "blob");
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn semantic_checks() {
    let zero_buffer = "version: 1\ncopy:\n  max_buffer_bytes: 0\n";
    let err = config::load_from_str(zero_buffer).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");

    let bad_scope = "version: 1\ncopy:\n  metrics_scope: \"my-store\"\n";
    let err = config::load_from_str(bad_scope).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");

    let empty_filter = "version: 1\nlogging:\n  filter: \"  \"\n";
    let err = config::load_from_str(empty_filter).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_bad_config() {
    let err = config::load_from_file("/nonexistent/wfglue.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
    assert!(err
        .to_string()
        .starts_with("bad config: cannot read wfglue config /nonexistent/wfglue.yaml: "));
}
