use crate::{error::ConfigError, limits::Limits};

/// How far an unquoted `boundary=` value extends inside a `Content-Type` value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryScan {
    /// Stop at the next `;` and trim trailing whitespace.
    #[default]
    Parameter,
    /// Take everything after `boundary=` verbatim, stripping one quote from each end.
    Remainder,
}

/// What to do when the body ends before the terminal delimiter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedPolicy {
    /// Keep the parts parsed so far and drop the unterminated tail.
    #[default]
    Truncate,
    /// Fail with [`ParseError::DelimiterNotFound`](crate::ParseError::DelimiterNotFound).
    Reject,
}

/// Top-level codec configuration model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Boundary value scanning mode.
    pub boundary_scan: BoundaryScan,
    /// Handling of bodies missing their terminal delimiter.
    pub unterminated: UnterminatedPolicy,
    /// Reject `Content-Type` values whose top-level type is not `multipart`.
    pub require_multipart: bool,
    /// Size and count limits.
    pub limits: Limits,
}

impl CodecConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }
}
