use http::{header, HeaderMap};

use crate::{config::BoundaryScan, error::ParseError};

const BOUNDARY_PARAM: &[u8] = b"boundary=";

/// Finds the `boundary=` parameter of a `Content-Type` value using the default scan mode.
///
/// Returns `None` when the parameter is absent or empty.
///
/// ```
/// use multipart_codec::parser::discover_boundary;
///
/// assert_eq!(discover_boundary("multipart/form-data; boundary=\"abc\""), Some("abc"));
/// assert_eq!(discover_boundary("boundary=abc"), Some("abc"));
/// assert_eq!(discover_boundary("text/plain"), None);
/// ```
pub fn discover_boundary(content_type: &str) -> Option<&str> {
    discover_boundary_with(content_type, BoundaryScan::default())
}

/// Finds the `boundary=` parameter of a `Content-Type` value.
///
/// The parameter name matches ASCII case-insensitively. Quoted values lose exactly
/// one layer of double quotes.
pub fn discover_boundary_with(content_type: &str, scan: BoundaryScan) -> Option<&str> {
    let start = find_boundary_param(content_type)? + BOUNDARY_PARAM.len();
    let rest = &content_type[start..];

    let token = match scan {
        BoundaryScan::Parameter => match rest.strip_prefix('"') {
            Some(quoted) => quoted.split_once('"').map_or(quoted, |(inner, _)| inner),
            None => rest.split_once(';').map_or(rest, |(token, _)| token).trim_end(),
        },
        BoundaryScan::Remainder => match rest.strip_prefix('"') {
            Some(quoted) => quoted.strip_suffix('"').unwrap_or(quoted),
            None => rest,
        },
    };

    (!token.is_empty()).then_some(token)
}

/// Generates a random boundary suitable for outgoing messages.
pub fn generate_boundary() -> String {
    format!("----MultipartCodec{}", uuid::Uuid::new_v4().simple())
}

/// Renders a `multipart/form-data` `Content-Type` value for `boundary`.
///
/// The boundary is quoted when it is not an RFC 2045 token.
pub fn format_content_type(boundary: &str) -> String {
    let essence = mime::MULTIPART_FORM_DATA.essence_str();
    if is_token(boundary) {
        format!("{essence}; boundary={boundary}")
    } else {
        format!("{essence}; boundary=\"{boundary}\"")
    }
}

/// Extracts the raw `Content-Type` value from message headers.
pub fn content_type_from_headers(headers: &HeaderMap) -> Result<&str, ParseError> {
    let value = headers
        .get(header::CONTENT_TYPE)
        .ok_or(ParseError::MissingContentType)?;
    value.to_str().map_err(|_| ParseError::InvalidContentType {
        reason: "Content-Type header must be ASCII",
    })
}

/// Offset of a `boundary=` parameter name, skipping quoted strings and names that
/// merely end in `boundary`.
fn find_boundary_param(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let mut at_param_start = true;
    let mut in_quotes = false;
    let mut escaped = false;

    for (index, &byte) in bytes.iter().enumerate() {
        if in_quotes {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_quotes = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b';' => at_param_start = true,
            b' ' | b'\t' => {}
            b'"' => {
                in_quotes = true;
                at_param_start = false;
            }
            _ => {
                let candidate = bytes.get(index..index + BOUNDARY_PARAM.len());
                if at_param_start
                    && candidate.is_some_and(|name| name.eq_ignore_ascii_case(BOUNDARY_PARAM))
                {
                    return Some(index);
                }
                at_param_start = false;
            }
        }
    }

    None
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(is_token_byte)
}

fn is_token_byte(byte: u8) -> bool {
    byte > b' '
        && byte < 0x7f
        && !matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'['
                | b']' | b'?' | b'='
        )
}
