#![allow(missing_docs)]

use multipart_codec::parser::{parse_header_block, parse_header_line, trim_quotes};

#[test]
fn parses_primary_pair_and_parameters() {
    let header = parse_header_line(
        "Content-Disposition: form-data; name=\"avatar\"; filename=\"face.png\"",
    )
    .expect("header should parse");

    assert_eq!(header.name, "Content-Disposition");
    assert_eq!(header.value, "form-data");
    assert_eq!(header.params.len(), 2);
    assert_eq!(header.param("name"), Some("avatar"));
    assert_eq!(header.param("filename"), Some("face.png"));
}

#[test]
fn unquoted_and_quoted_values_parse_alike() {
    let quoted = parse_header_line("Content-Type: text/plain; charset=\"utf-8\"").expect("quoted");
    let bare = parse_header_line("Content-Type: text/plain; charset=utf-8").expect("bare");
    assert_eq!(quoted, bare);
}

#[test]
fn parameter_count_is_independent_of_order() {
    let a = parse_header_line("X: v; a=1; b=2; c=3").expect("a");
    let b = parse_header_line("X: v; c=3; a=1; b=2").expect("b");
    assert_eq!(a.params.len(), 3);
    assert_eq!(a, b);
}

#[test]
fn line_without_name_separator_yields_no_header() {
    assert!(parse_header_line("garbage line").is_none());
    assert!(parse_header_line("Content-Type:text/plain").is_none());
}

#[test]
fn value_may_be_empty() {
    let header = parse_header_line("X-Empty: ").expect("header should parse");
    assert_eq!(header.name, "X-Empty");
    assert_eq!(header.value, "");
}

#[test]
fn block_keeps_order_and_duplicates() {
    let headers = parse_header_block(
        "Content-Disposition: form-data; name=\"f\"\r\nX-Tag: one\r\nbroken\r\nX-Tag: two\r\n",
    );
    let names: Vec<_> = headers.iter().map(|h| (h.name.as_str(), h.value.as_str())).collect();
    assert_eq!(
        names,
        vec![
            ("Content-Disposition", "form-data"),
            ("X-Tag", "one"),
            ("X-Tag", "two"),
        ]
    );
}

#[test]
fn blank_line_is_not_a_header() {
    let headers = parse_header_block("A: 1\r\n\r\nB: 2\r\n");
    assert_eq!(headers.len(), 1);
    assert!(parse_header_block("").is_empty());
}

#[test]
fn quote_trimming_is_one_layer() {
    assert_eq!(trim_quotes("\"\"x\"\""), "\"x\"");
    assert_eq!(trim_quotes("plain"), "plain");
}
