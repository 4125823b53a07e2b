use thiserror::Error;

/// Configuration-time validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configured numeric limit must be strictly greater than zero.
    #[error("limit `{limit}` must be greater than 0")]
    InvalidLimitValue {
        /// Name of the limit.
        limit: &'static str,
    },
}

/// Parser-level multipart failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The message headers carry no `Content-Type` value.
    #[error("missing Content-Type header")]
    MissingContentType,
    /// The `Content-Type` value could not be used.
    #[error("invalid Content-Type header: {reason}")]
    InvalidContentType {
        /// What was wrong with the value.
        reason: &'static str,
    },
    /// The `Content-Type` value has no usable `boundary=` parameter.
    #[error("missing multipart boundary parameter")]
    MissingBoundary,
    /// The body ended before the terminal delimiter.
    #[error("multipart body ended without a terminal boundary after {parsed} part(s)")]
    DelimiterNotFound {
        /// Number of parts parsed before the body ran out.
        parsed: usize,
    },
    /// A part header block is not valid UTF-8.
    #[error("headers of part {part} are not valid UTF-8")]
    HeaderNotUtf8 {
        /// Zero-based index of the offending part.
        part: usize,
    },
}

/// Runtime error type used by `multipart-codec`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// Configuration error surfaced at runtime.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Multipart parser failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A part index passed to a single-part operation does not exist.
    #[error("part index {index} is out of range for a message with {len} part(s)")]
    PartIndexOutOfRange {
        /// Requested part index.
        index: usize,
        /// Number of parts in the message.
        len: usize,
    },
    /// The request body could not be read from the surrounding framework.
    #[error("failed to read request body: {0}")]
    Body(String),
    /// The request body exceeded the configured body-size limit.
    #[error("multipart body exceeded max body size of {max_body_size} bytes")]
    BodySizeLimitExceeded {
        /// Maximum allowed body size in bytes.
        max_body_size: u64,
    },
    /// The number of parts exceeded the configured limit.
    #[error("multipart body exceeded max parts limit of {max_parts}")]
    PartsLimitExceeded {
        /// Maximum allowed number of parts.
        max_parts: usize,
    },
    /// A part carried more header lines than allowed.
    #[error("part {part} exceeded max headers limit of {max_headers}")]
    HeadersLimitExceeded {
        /// Zero-based index of the offending part.
        part: usize,
        /// Maximum allowed headers per part.
        max_headers: usize,
    },
}
