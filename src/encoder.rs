use bytes::{BufMut, BytesMut};

use crate::{header::Header, part::Part};

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";

/// Writes a full multipart body: every part behind `--boundary`, then `--boundary--`.
pub fn encode_message(boundary: &str, parts: &[Part], out: &mut BytesMut) {
    for part in parts {
        put_delimiter(boundary, out);
        out.put_slice(CRLF);
        encode_part(part, out);
    }
    put_delimiter(boundary, out);
    out.put_slice(DASHES);
    out.put_slice(CRLF);
}

/// Writes one part: header lines, a blank line, the body and a line ending.
///
/// Parameter values are always written quoted.
pub fn encode_part(part: &Part, out: &mut BytesMut) {
    for header in &part.headers {
        encode_header(header, out);
    }
    out.put_slice(CRLF);
    out.put_slice(&part.body);
    out.put_slice(CRLF);
}

fn encode_header(header: &Header, out: &mut BytesMut) {
    out.put_slice(header.name.as_bytes());
    out.put_slice(b": ");
    out.put_slice(header.value.as_bytes());
    for (name, value) in header.params.iter() {
        out.put_slice(b"; ");
        out.put_slice(name.as_bytes());
        out.put_slice(b"=\"");
        out.put_slice(value.as_bytes());
        out.put_u8(b'"');
    }
    out.put_slice(CRLF);
}

fn put_delimiter(boundary: &str, out: &mut BytesMut) {
    out.put_slice(DASHES);
    out.put_slice(boundary.as_bytes());
}

/// Exact encoded size of `part`.
pub(crate) fn part_len(part: &Part) -> usize {
    let headers: usize = part
        .headers
        .iter()
        .map(|header| {
            let params: usize = header
                .params
                .iter()
                .map(|(name, value)| name.len() + value.len() + 5)
                .sum();
            header.name.len() + header.value.len() + params + 4
        })
        .sum();
    headers + part.body.len() + 4
}

/// Exact encoded size of a message with `boundary` and `parts`.
pub(crate) fn message_len(boundary: &str, parts: &[Part]) -> usize {
    let delimiter = boundary.len() + 2;
    let parts: usize = parts.iter().map(|part| delimiter + 2 + part_len(part)).sum();
    parts + delimiter + 4
}
