use bytes::{Bytes, BytesMut};
use http::{header, header::AsHeaderName, HeaderMap, Request, Response};

use crate::{
    encoder,
    error::CodecError,
    parser::{format_content_type, generate_boundary},
    part::Part,
    Codec,
};

/// A parsed or caller-built multipart message.
///
/// Message-level headers belong to the surrounding HTTP message and are not part of
/// the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Request or response headers.
    pub headers: HeaderMap,
    /// Boundary token without quotes or leading `--`.
    pub boundary: String,
    /// Parts in wire order.
    pub parts: Vec<Part>,
}

impl Message {
    /// Creates a message from caller-supplied headers, boundary and parts.
    ///
    /// An empty boundary is accepted; it is a degenerate message that parses back to
    /// zero parts.
    pub fn new(headers: HeaderMap, boundary: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            headers,
            boundary: boundary.into(),
            parts,
        }
    }

    /// Creates a message with a freshly generated random boundary.
    pub fn with_generated_boundary(headers: HeaderMap, parts: Vec<Part>) -> Self {
        Self::new(headers, generate_boundary(), parts)
    }

    /// Parses a request with the default [`Codec`] configuration.
    pub fn from_request<B>(request: Request<B>) -> Result<Self, CodecError>
    where
        B: Into<Bytes>,
    {
        Codec::new().parse_request(request)
    }

    /// Returns a message-level header value, if present and visible ASCII.
    pub fn get_header_value<K: AsHeaderName>(&self, key: K) -> Option<&str> {
        self.headers.get(key).and_then(|value| value.to_str().ok())
    }

    /// Returns the `Content-Type` value describing this message's body.
    pub fn content_type(&self) -> String {
        format_content_type(&self.boundary)
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` when the message has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the part at `index`.
    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Returns the first part whose `Content-Disposition` carries `name=<field>`.
    pub fn part_by_name(&self, field: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.field_name() == Some(field))
    }

    /// Serializes every part into wire text, ending with the terminal delimiter.
    ///
    /// Message-level headers are not included.
    pub fn dump(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(encoder::message_len(&self.boundary, &self.parts));
        encoder::encode_message(&self.boundary, &self.parts, &mut out);
        out.freeze()
    }

    /// Serializes the part at `index` without any delimiter.
    pub fn dump_part(&self, index: usize) -> Result<Bytes, CodecError> {
        self.parts
            .get(index)
            .map(Part::dump)
            .ok_or(CodecError::PartIndexOutOfRange {
                index,
                len: self.parts.len(),
            })
    }

    /// Builds an HTTP response carrying this message as its body.
    pub fn into_response(self) -> Result<Response<Bytes>, http::Error> {
        Response::builder()
            .header(header::CONTENT_TYPE, self.content_type())
            .body(self.dump())
    }
}
