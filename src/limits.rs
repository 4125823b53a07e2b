use crate::error::{CodecError, ConfigError};

/// Size and count limits enforced while parsing a multipart body.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Limits {
    /// Maximum accepted body size in bytes.
    pub max_body_size: Option<u64>,
    /// Maximum number of parts in one message.
    pub max_parts: Option<usize>,
    /// Maximum number of header lines in a single part, counting lines that carry
    /// no parsable header.
    pub max_headers_per_part: Option<usize>,
}

impl Limits {
    /// Creates a permissive limits configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates that every configured limit is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_size == Some(0) {
            return Err(ConfigError::InvalidLimitValue {
                limit: "max_body_size",
            });
        }
        if self.max_parts == Some(0) {
            return Err(ConfigError::InvalidLimitValue { limit: "max_parts" });
        }
        if self.max_headers_per_part == Some(0) {
            return Err(ConfigError::InvalidLimitValue {
                limit: "max_headers_per_part",
            });
        }
        Ok(())
    }

    pub(crate) fn check_body_size(&self, len: usize) -> Result<(), CodecError> {
        match self.max_body_size {
            Some(max_body_size) if len as u64 > max_body_size => {
                Err(CodecError::BodySizeLimitExceeded { max_body_size })
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn check_parts(&self, count: usize) -> Result<(), CodecError> {
        match self.max_parts {
            Some(max_parts) if count > max_parts => {
                Err(CodecError::PartsLimitExceeded { max_parts })
            }
            _ => Ok(()),
        }
    }

    /// Counts raw header lines, stopping one past the limit.
    pub(crate) fn check_header_lines<'a>(
        &self,
        part: usize,
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<(), CodecError> {
        match self.max_headers_per_part {
            Some(max_headers) if lines.take(max_headers + 1).count() > max_headers => {
                Err(CodecError::HeadersLimitExceeded { part, max_headers })
            }
            _ => Ok(()),
        }
    }
}
