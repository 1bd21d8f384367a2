//! Every built-in validator rule, exercised through a schema: install the
//! rule on a `content` field, assign each example and validate.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use valid8_schema::prelude::*;

fn schema(kind: FieldKind, rule: &str) -> Schema {
    Schema::builder()
        .field(Field::new("content", kind).with_option(rule, true))
        .build()
        .unwrap()
}

fn assert_rule(kind: FieldKind, rule: &str, valid: &[Value], invalid: &[Value]) {
    let schema = schema(kind, rule);

    for value in valid {
        let doc = schema.document(json!({ "content": value })).unwrap();
        assert!(schema.validate(&doc).is_ok(), "{rule}: {value} should pass");
    }

    for value in invalid {
        let doc = schema.document(json!({ "content": value })).unwrap();
        let err = schema
            .validate(&doc)
            .expect_err(&format!("{rule}: {value} should fail"));
        let violation = err.get("content").unwrap();

        assert!(
            violation.tag == rule || violation.tag == kind.name(),
            "{rule}: unexpected tag {}",
            violation.tag
        );
        assert_eq!(&violation.value, value, "{rule}");
    }
}

fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| json!(v)).collect()
}

#[rstest]
#[case::email(
    "email",
    &[
        "foo@bar.com",
        "x@x.au",
        "foo@bar.com.au",
        "foo+bar@bar.com",
        "hans.m端ller@test.com",
        "hans@m端ller.com",
        "test|123@m端ller.com",
        "test123+ext@gmail.com",
    ],
    &[
        "invalidemail@",
        "invalid.com",
        "@invalid.com",
        "foo@bar.com.",
        "somename@ｇｍａｉｌ.com",
        "foo@bar.co.uk.",
        "z@co.c",
    ],
)]
#[case::macaddress(
    "macaddress",
    &["ab:ab:ab:ab:ab:ab", "FF:FF:FF:FF:FF:FF", "01:02:03:04:05:ab", "01:AB:03:04:05:06"],
    &["abc", "01:02:03:04:05", "01:02:03:04::ab", "1:2:3:4:5:6", "AB:CD:EF:GH:01:02"],
)]
#[case::ip(
    "ip",
    &[
        "127.0.0.1",
        "0.0.0.0",
        "255.255.255.255",
        "1.2.3.4",
        "::1",
        "2001:db8:0000:1:1:1:1:1",
        "2001:41d0:2:a141::1",
        "::ffff:127.0.0.1",
        "::0000",
        "0000::",
        "1::",
        "1111:1:1:1:1:1:1:1",
        "fe80::a6db:30ff:fe98:e946",
        "::",
        "0:0:0:0:0:ffff:127.0.0.1",
    ],
    &[
        "abc",
        "256.0.0.0",
        "0.0.0.256",
        "26.0.0.256",
        "0200.200.200.200",
        "200.0200.200.200",
        "200.200.0200.200",
        "200.200.200.0200",
        "::banana",
        "banana::",
        "::1banana",
        "::1::",
        "1:",
        ":1",
        ":1:1:1::2",
        "1:1:1:1:1:1:1:1:1:1:1:1:1:1:1:1",
        "::11111",
        "11111:1:1:1:1:1:1:1",
        "2001:db8:0000:1:1:1:1::1",
        "0:0:0:0:0:0:ffff:127.0.0.1",
        "0:0:0:0:ffff:127.0.0.1",
    ],
)]
#[case::fqdn(
    "fqdn",
    &["domain.com", "dom.plato", "a.domain.co", "foo--bar.com", "xn--froschgrn-x9a.com", "rebecca.blackfriday"],
    &["abc", "256.0.0.0", "_.com", "*.some.com", "s!ome.com", "domain.com/", "/more.com"],
)]
#[case::alpha(
    "alpha",
    &["abc", "ABC", "FoObar"],
    &["abc1", "  foo  ", "", "ÄBC", "FÜübar", "Jön", "Heiß"],
)]
#[case::alphanumeric(
    "alphanumeric",
    &["abc123", "ABC11"],
    &["abc ", "foo!!", "ÄBC", "FÜübar", "Jön"],
)]
#[case::md5(
    "md5",
    &[
        "d94f3f016ae679c3008de268209132f2",
        "751adbc511ccbe8edf23d486fa4581cd",
        "88dae00e614d8f24cfd5a8b3f8002e93",
        "0bf1c35032a71a14c2f719e5a14c1e96",
    ],
    &["KYT0bf1c35032a71a14c2f719e5a14c1", "q94375dj93458w34", "39485729348", "%&FHKJFvk"],
)]
#[case::uuid(
    "uuid",
    &[
        "A987FBC9-4BED-3078-CF07-9141BA07C9F3",
        "A987FBC9-4BED-4078-8F07-9141BA07C9F3",
        "A987FBC9-4BED-5078-AF07-9141BA07C9F3",
    ],
    &[
        "",
        "xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3",
        "A987FBC9-4BED-3078-CF07-9141BA07C9F3xxx",
        "A987FBC94BED3078CF079141BA07C9F3",
        "934859",
        "987FBC9-4BED-3078-CF07A-9141BA07C9F3",
        "AAAAAAAA-1111-1111-AAAG-111111111111",
    ],
)]
#[case::creditcard(
    "creditcard",
    &[
        "375556917985515",
        "36050234196908",
        "4716461583322103",
        "4716-2210-5188-5662",
        "4929 7226 5379 7141",
        "5398228707871527",
        "6283875070985593",
        "6263892624162870",
        "6234917882863855",
        "6234698580215388",
        "6226050967750613",
        "6246281879460688",
        "2222155765072228",
        "2225855203075256",
        "2720428011723762",
        "2718760626256570",
        "6765780016990268",
    ],
    &[
        "foo",
        "5398228707871528",
        "2718760626256571",
        "2721465526338453",
        "2220175103860763",
        "375556917985515999999993",
        "899999996234917882863855",
        "prefix6234917882863855",
        "623491788middle2863855",
        "6234917882863855suffix",
    ],
)]
#[case::base64(
    "base64",
    &[
        "Zg==",
        "Zm8=",
        "Zm9v",
        "Zm9vYg==",
        "Zm9vYmE=",
        "Zm9vYmFy",
        "TG9yZW0gaXBzdW0gZG9sb3Igc2l0IGFtZXQsIGNvbnNlY3RldHVyIGFkaXBpc2NpbmcgZWxpdC4=",
        "Vml2YW11cyBmZXJtZW50dW0gc2VtcGVyIHBvcnRhLg==",
        "U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw==",
    ],
    &["12345", "", "Vml2YW11cyBmZXJtZtesting123", "Zg=", "Z===", "Zm=8", "=m9vYg==", "Zm9vYmFy===="],
)]
#[case::mobile(
    "mobile",
    &[
        "+971502674453",
        "+971521247658",
        "+971541255684",
        "+971555454458",
        "+971561498855",
        "+971585215778",
        "971585215778",
        "0585215778",
        "585215778",
        "255714080898",
    ],
    &[""],
)]
#[case::mimetype(
    "mimetype",
    &[
        "application/json",
        "application/xhtml+xml",
        "audio/mp4",
        "image/bmp",
        "font/woff2",
        "message/http",
        "model/vnd.gtw",
        "multipart/form-data",
        "multipart/form-data; boundary=something",
        "multipart/form-data; charset=utf-8; boundary=something",
        "multipart/form-data; boundary=something; charset=utf-8",
        "multipart/form-data; boundary=something; charset=\"utf-8\"",
        "multipart/form-data; boundary=\"something\"; charset=utf-8",
        "multipart/form-data; boundary=\"something\"; charset=\"utf-8\"",
        "text/css",
        "text/plain; charset=utf8",
        "Text/HTML;Charset=\"utf-8\"",
        "text/html;charset=UTF-8",
        "Text/html;charset=UTF-8",
        "text/html; charset=us-ascii",
        "text/html; charset=us-ascii (Plain text)",
        "text/html; charset=\"us-ascii\"",
        "video/mp4",
    ],
    &[
        "",
        " ",
        "/",
        "f/b",
        "application",
        "application\\json",
        "application/json/text",
        "application/json; charset=utf-8",
        "audio/mp4; charset=utf-8",
        "image/bmp; charset=utf-8",
        "font/woff2; charset=utf-8",
        "message/http; charset=utf-8",
        "model/vnd.gtw; charset=utf-8",
        "video/mp4; charset=utf-8",
    ],
)]
fn string_rules(#[case] rule: &str, #[case] valid: &[&str], #[case] invalid: &[&str]) {
    assert_rule(FieldKind::String, rule, &strings(valid), &strings(invalid));
}

#[test]
fn numeric() {
    let valid = [json!(123), json!("123"), json!("00123"), json!("0"), json!("123.123")];
    let more = strings(&["+123", "-0", "-00123"]);
    assert_rule(FieldKind::Number, "numeric", &[&valid[..], &more[..]].concat(), &[]);
}

#[test]
fn integer() {
    let valid = strings(&["13", "123", "0", "-0", "+1", "01", "-01", "000"]);
    assert_rule(FieldKind::Number, "integer", &valid, &[json!(123.123)]);
}

#[test]
fn float() {
    let valid = strings(&[
        "123",
        "123.",
        "123.123",
        "-123.123",
        "-0.123",
        "+0.123",
        "0.123",
        ".0",
        "-.123",
        "+.123",
        "01.123",
        "-0.22250738585072011e-307",
    ]);
    assert_rule(FieldKind::Number, "float", &valid, &strings(&["+", "-", ".", "foo"]));
}

#[test]
fn uncastable_numbers_report_the_kind() {
    let schema = schema(FieldKind::Number, "float");
    let doc = schema.document(json!({"content": "foo"})).unwrap();
    let err = schema.validate(&doc).unwrap_err();
    assert_eq!(err.get("content").unwrap().tag, "Number");
}

#[rstest]
#[case(json!([]), false)]
#[case(json!(["x"]), true)]
#[case(json!(null), false)]
fn empty_rejects_empty_arrays(#[case] value: Value, #[case] ok: bool) {
    let schema = Schema::builder()
        .field(Field::new("content", FieldKind::Array).with_option("empty", false))
        .build()
        .unwrap();
    let doc = schema.document(json!({ "content": value })).unwrap();
    assert_eq!(schema.validate(&doc).is_ok(), ok);
}

#[test]
fn absent_values_skip_validators() {
    let schema = schema(FieldKind::String, "email");
    let doc = schema.document(json!({})).unwrap();
    assert!(schema.validate(&doc).is_ok());
}

#[rstest]
#[case(FieldKind::String, "email", "`null` is not a valid email address for path `content`.")]
#[case(FieldKind::Number, "numeric", "`null` is not a valid numeric value for path `content`.")]
fn null_values_are_validated(#[case] kind: FieldKind, #[case] rule: &str, #[case] message: &str) {
    let schema = schema(kind, rule);
    let doc = schema.document(json!({"content": null})).unwrap();
    let violation = schema.validate(&doc).unwrap_err().get("content").cloned().unwrap();
    assert_eq!(violation.tag, rule);
    assert_eq!(violation.value, Value::Null);
    assert_eq!(violation.message, message);
}
