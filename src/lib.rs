#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! In-memory parser and serializer for `multipart/*` message bodies.
//!
//! A body is split on its boundary into [`Part`]s, each holding an ordered list of
//! [`Header`]s (with parameters) and a raw body. [`Message::dump`] turns the
//! structure back into wire text.
//!
//! ```
//! use http::HeaderMap;
//! use multipart_codec::Codec;
//!
//! let body = "--X\r\nContent-Disposition: form-data; name=\"f\"\r\n\r\nhello\r\n--X--\r\n";
//! let message = Codec::new()
//!     .parse_with_boundary(HeaderMap::new(), "X", body)
//!     .unwrap();
//!
//! assert_eq!(message.parts[0].field_name(), Some("f"));
//! assert_eq!(message.dump(), body.as_bytes());
//! ```

use bytes::Bytes;
use http::{HeaderMap, Request};

/// Fluent builder API.
pub mod builder;
/// Codec configuration.
pub mod config;
/// Wire-text serialization.
pub mod encoder;
/// Error types exposed by this crate.
pub mod error;
/// Part header model.
pub mod header;
/// Parsing limits.
pub mod limits;
/// Multipart message model.
pub mod message;
/// Low-level parser components.
pub mod parser;
/// Multipart part model.
pub mod part;

#[cfg(feature = "actix")]
pub mod actix;
#[cfg(feature = "axum")]
pub mod axum;
#[cfg(feature = "hyper")]
pub mod hyper;

pub use builder::CodecBuilder;
pub use config::{BoundaryScan, CodecConfig, UnterminatedPolicy};
pub use error::{CodecError, ConfigError, ParseError};
pub use header::{Header, Params};
pub use limits::Limits;
pub use message::Message;
pub use parser::{discover_boundary, split_into_sections};
pub use part::Part;

/// Main `multipart-codec` entry point.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with explicit validated configuration.
    pub fn with_config(config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a fluent builder with permissive defaults.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    /// Returns an immutable reference to the active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Resolves the boundary declared by a `Content-Type` value.
    pub fn boundary<'a>(&self, content_type: &'a str) -> Result<&'a str, ParseError> {
        if self.config.require_multipart {
            let media_type = content_type
                .parse::<mime::Mime>()
                .map_err(|_| ParseError::InvalidContentType {
                    reason: "not a valid media type",
                })?;
            if media_type.type_() != mime::MULTIPART {
                return Err(ParseError::InvalidContentType {
                    reason: "top-level media type must be multipart",
                });
            }
        }

        let boundary = parser::discover_boundary_with(content_type, self.config.boundary_scan);

        #[cfg(feature = "tracing")]
        if boundary.is_none() {
            tracing::debug!(content_type, "codec: no boundary parameter in Content-Type");
        }

        boundary.ok_or(ParseError::MissingBoundary)
    }

    /// Parses a multipart body, taking the boundary from the headers' `Content-Type`.
    ///
    /// Part bodies may hold arbitrary bytes, but every part header block must be
    /// UTF-8. A single part with non-UTF-8 headers (for example a Latin-1
    /// `filename`) fails the whole message with [`ParseError::HeaderNotUtf8`]; no
    /// parts are returned.
    pub fn parse(
        &self,
        headers: HeaderMap,
        body: impl Into<Bytes>,
    ) -> Result<Message, CodecError> {
        let content_type = parser::content_type_from_headers(&headers)?;
        let boundary = self.boundary(content_type)?.to_owned();
        self.parse_with_boundary(headers, boundary, body)
    }

    /// Parses an HTTP request carrying a multipart body.
    pub fn parse_request<B>(&self, request: Request<B>) -> Result<Message, CodecError>
    where
        B: Into<Bytes>,
    {
        let (parts, body) = request.into_parts();
        self.parse(parts.headers, body)
    }

    /// Parses a multipart body with an already known boundary.
    pub fn parse_with_boundary(
        &self,
        headers: HeaderMap,
        boundary: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Result<Message, CodecError> {
        let boundary = boundary.into();
        if boundary.is_empty() {
            return Err(ParseError::MissingBoundary.into());
        }

        let parts = self.parse_parts(&boundary, &body.into())?;
        Ok(Message::new(headers, boundary, parts))
    }

    /// Parses the parts of `body`; part bodies share `body`'s buffer.
    ///
    /// Fails as described on [`Codec::parse`] when a header block is not UTF-8.
    pub fn parse_parts(&self, boundary: &str, body: &Bytes) -> Result<Vec<Part>, CodecError> {
        let limits = &self.config.limits;
        limits.check_body_size(body.len())?;

        let mut sections = split_into_sections(body, boundary);
        let mut parts = Vec::new();
        for section in sections.by_ref() {
            let index = parts.len();
            limits.check_parts(index + 1)?;

            parts.push(parser::sections::parse_section(body, section, index, limits)?);
        }

        if !sections.is_terminated() {
            match self.config.unterminated {
                UnterminatedPolicy::Reject => {
                    return Err(ParseError::DelimiterNotFound {
                        parsed: parts.len(),
                    }
                    .into());
                }
                UnterminatedPolicy::Truncate => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        parsed = parts.len(),
                        "codec: body ended without terminal boundary, keeping parsed parts"
                    );
                }
            }
        }

        Ok(parts)
    }
}
