use toolbelt::tools::{case, epoch, json, status};

#[test]
fn json_format_with_custom_indent() {
    let input = r#"{"b":[1,2],"a":"x"}"#;
    let formatted = json::format(input, 4).unwrap();
    assert!(formatted.contains("\n    \"a\": \"x\""));
    assert!(formatted.contains("\n        1,"));

    // Indent 0 means compact.
    assert_eq!(json::format("[1, 2]", 0).unwrap(), "[1,2]");
}

#[test]
fn json_minify_strips_whitespace() {
    let input = "{\n  \"a\": 1,\n  \"b\": [1, 2]\n}";
    assert_eq!(json::minify(input).unwrap(), r#"{"a":1,"b":[1,2]}"#);
}

#[test]
fn json_validate_reports_line_and_column() {
    assert!(json::validate(r#"{"ok": true}"#).is_ok());

    let message = json::validate("{\n  \"a\": ,\n}").unwrap_err();
    assert!(message.contains("line 2"), "got: {}", message);
}

#[test]
fn json_format_rejects_garbage() {
    let err = json::format("not json", 2).unwrap_err();
    assert!(format!("{:#}", err).contains("parse JSON"));
}

#[test]
fn case_conversions_cover_every_style() {
    let c = case::convert_all("Hello worldWide web");
    assert_eq!(c.camel, "helloWorldWideWeb");
    assert_eq!(c.pascal, "HelloWorldWideWeb");
    assert_eq!(c.snake, "hello_world_wide_web");
    assert_eq!(c.kebab, "hello-world-wide-web");
    assert_eq!(c.constant, "HELLO_WORLD_WIDE_WEB");
    assert_eq!(c.title, "Hello Worldwide Web");
    assert_eq!(c.sentence, "Hello worldwide web");
    assert_eq!(c.lower, "hello worldwide web");
    assert_eq!(c.upper, "HELLO WORLDWIDE WEB");
}

#[test]
fn epoch_report_is_consistent_both_directions() {
    let from_epoch = epoch::epoch_to_date(1_700_000_000).unwrap();
    let from_date = epoch::date_to_epoch(&from_epoch.rfc3339).unwrap();
    assert_eq!(from_date.unix_seconds, 1_700_000_000);
    assert_eq!(from_date.utc, from_epoch.utc);
}

#[test]
fn status_table_is_grouped_and_sorted() {
    assert!(!status::STATUS_TABLE.is_empty());
    assert!(
        status::STATUS_TABLE
            .windows(2)
            .all(|pair| pair[0].code <= pair[1].code)
    );
    for entry in status::STATUS_TABLE {
        let expected = match entry.code {
            100..=199 => status::StatusCategory::Informational,
            200..=299 => status::StatusCategory::Success,
            300..=399 => status::StatusCategory::Redirection,
            400..=499 => status::StatusCategory::ClientError,
            _ => status::StatusCategory::ServerError,
        };
        assert_eq!(entry.category, expected, "code {}", entry.code);
    }
}
