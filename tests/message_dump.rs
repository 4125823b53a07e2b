#![allow(missing_docs)]

use http::{header, HeaderMap};
use multipart_codec::{CodecError, Header, Message, Part};

fn message() -> Message {
    Message::new(
        HeaderMap::new(),
        "X",
        vec![
            Part::new(
                vec![Header::new("Content-Disposition", "form-data")
                    .with_param("name", "f")
                    .with_param("filename", "a.txt")],
                "hello",
            ),
            Part::new(vec![Header::new("Content-Type", "text/plain")], "world"),
        ],
    )
}

#[test]
fn dump_frames_every_part() {
    assert_eq!(
        message().dump(),
        concat!(
            "--X\r\n",
            "Content-Disposition: form-data; name=\"f\"; filename=\"a.txt\"\r\n",
            "\r\n",
            "hello\r\n",
            "--X\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "world\r\n",
            "--X--\r\n"
        )
        .as_bytes()
    );
}

#[test]
fn dump_part_returns_single_part_text() {
    let part = message().dump_part(1).expect("part 1 exists");
    assert_eq!(part, "Content-Type: text/plain\r\n\r\nworld\r\n".as_bytes());
}

#[test]
fn dump_part_out_of_range_is_an_error() {
    let err = message().dump_part(5).expect_err("index 5 is out of range");
    assert!(matches!(err, CodecError::PartIndexOutOfRange { index: 5, len: 2 }));
    assert_err_contains(&err.to_string(), "out of range");
}

#[test]
fn empty_message_dumps_terminal_delimiter_only() {
    let message = Message::new(HeaderMap::new(), "X", Vec::new());
    assert!(message.is_empty());
    assert_eq!(message.dump(), "--X--\r\n".as_bytes());
}

#[test]
fn message_headers_are_not_serialized() {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, "test".parse().expect("valid header value"));
    let message = Message::new(headers, "X", Vec::new());
    assert_eq!(message.get_header_value(header::USER_AGENT), Some("test"));
    assert_eq!(message.dump(), "--X--\r\n".as_bytes());
}

#[test]
fn content_type_names_the_boundary() {
    assert_eq!(message().content_type(), "multipart/form-data; boundary=X");
}

#[test]
fn into_response_sets_content_type() {
    let response = message().into_response().expect("response should build");
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("multipart/form-data; boundary=X")
    );
    assert_eq!(response.body(), &message().dump());
}

fn assert_err_contains(actual: &str, expected_fragment: &str) {
    assert!(
        actual.contains(expected_fragment),
        "expected `{actual}` to contain `{expected_fragment}`"
    );
}
