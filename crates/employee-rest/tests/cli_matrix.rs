//! Pack/unpack stream conversions used by the command line tools.

use employee_cbor::{decode, Date, Employee, JsonFieldError, RecordError};
use employee_rest::cli::{pack, unpack, CliError};

const JOHN_JSON: &str =
    r#"{"name":"John Doe","salary":1200.5,"birthdate":{"day":1,"month":1,"year":2000}}"#;
const JANE_JSON: &str =
    r#"{"name":"Jane Roe","salary":99,"birthdate":{"day":-3,"month":4,"year":1999}}"#;

fn packed(json: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let written = pack(json.as_bytes(), &mut out).unwrap();
    assert_eq!(written, out.len());
    out
}

#[test]
fn pack_writes_cbor_record() {
    let bytes = packed(JOHN_JSON);
    assert_eq!(
        decode(&bytes),
        Ok(Employee::try_new("John Doe", 1200.5, Date::new(1, 1, 2000)).unwrap())
    );
}

#[test]
fn pack_then_unpack_prints_one_line_per_record() {
    let mut blob = packed(JOHN_JSON);
    blob.extend(packed(JANE_JSON));

    let mut out = Vec::new();
    assert_eq!(unpack(blob.as_slice(), &mut out).unwrap(), 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            r#"{"name":"John Doe","salary":1200.50,"birthdate":{"day":1,"month":1,"year":2000}}"#,
            "\n",
            r#"{"name":"Jane Roe","salary":99.00,"birthdate":{"day":-3,"month":4,"year":1999}}"#,
            "\n",
        )
    );
}

#[test]
fn truncated_second_record_fails_after_first_line() {
    let mut blob = packed(JOHN_JSON);
    let second = packed(JANE_JSON);
    blob.extend_from_slice(&second[..second.len() - 1]);

    let mut out = Vec::new();
    let err = unpack(blob.as_slice(), &mut out).unwrap_err();
    assert!(matches!(err, CliError::Record(RecordError::Malformed)), "{err:?}");
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with(r#"{"name":"John Doe""#));
}

#[test]
fn unpack_of_empty_input_prints_nothing() {
    let mut out = Vec::new();
    assert_eq!(unpack(&b""[..], &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn pack_rejects_invalid_json() {
    let cases = [
        ("not json", JsonFieldError::InvalidDocument),
        (r#"{"name":"A","salary":"high"}"#, JsonFieldError::Salary),
    ];
    for (input, expected) in cases {
        let mut out = Vec::new();
        match pack(input.as_bytes(), &mut out) {
            Err(CliError::Json(err)) => assert_eq!(err, expected, "{input}"),
            other => panic!("{input}: unexpected {other:?}"),
        }
        assert!(out.is_empty(), "{input}");
    }
}

#[test]
fn cli_error_messages_name_the_format() {
    let err = CliError::from(JsonFieldError::InvalidDocument);
    assert_eq!(err.to_string(), "invalid employee JSON: Wrong format");
    let err = CliError::from(RecordError::NotAMap);
    assert_eq!(err.to_string(), "invalid employee CBOR: expected a cbor map");
}
