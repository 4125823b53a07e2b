use bytes::Bytes;

use crate::{encoder, header::Header};

const CONTENT_DISPOSITION: &str = "Content-Disposition";
const CONTENT_TYPE: &str = "Content-Type";

/// One part of a multipart message.
///
/// Headers keep their source order and duplicates are preserved; lookups by name
/// are queries over that sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    /// Part headers in wire order.
    pub headers: Vec<Header>,
    /// Raw part body bytes.
    pub body: Bytes,
}

impl Part {
    /// Creates a part from headers and a body.
    pub fn new(headers: Vec<Header>, body: impl Into<Bytes>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    /// Returns the first header called `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|header| header.is_named(name))
    }

    /// Returns every header called `name`, ignoring ASCII case, in wire order.
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Header> + 'a {
        self.headers.iter().filter(move |header| header.is_named(name))
    }

    /// Returns the `name` parameter of the `Content-Disposition` header.
    pub fn field_name(&self) -> Option<&str> {
        self.header(CONTENT_DISPOSITION)?.param("name")
    }

    /// Returns the `filename` parameter of the `Content-Disposition` header.
    pub fn file_name(&self) -> Option<&str> {
        self.header(CONTENT_DISPOSITION)?.param("filename")
    }

    /// Returns the primary value of the `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE).map(|header| header.value.as_str())
    }

    /// Returns the body as UTF-8 text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Serializes this part (headers, blank line, body, line ending).
    pub fn dump(&self) -> Bytes {
        let mut out = bytes::BytesMut::with_capacity(encoder::part_len(self));
        encoder::encode_part(self, &mut out);
        out.freeze()
    }
}
