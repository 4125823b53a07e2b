use crate::{
    config::{BoundaryScan, CodecConfig, UnterminatedPolicy},
    error::ConfigError,
    limits::Limits,
    Codec,
};

/// Builder for configuring a [`Codec`] instance.
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
}

impl CodecBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current builder configuration snapshot.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Replaces the full builder configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how unquoted boundary values are scanned.
    pub fn boundary_scan(mut self, scan: BoundaryScan) -> Self {
        self.config.boundary_scan = scan;
        self
    }

    /// Sets how bodies without a terminal delimiter are handled.
    pub fn unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.config.unterminated = policy;
        self
    }

    /// Requires the `Content-Type` value to name a `multipart/*` type.
    pub fn require_multipart(mut self, require: bool) -> Self {
        self.config.require_multipart = require;
        self
    }

    /// Sets parsing limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Sets the maximum accepted body size in bytes.
    pub fn max_body_size(mut self, max_body_size: u64) -> Self {
        self.config.limits.max_body_size = Some(max_body_size);
        self
    }

    /// Sets the maximum number of parts.
    pub fn max_parts(mut self, max_parts: usize) -> Self {
        self.config.limits.max_parts = Some(max_parts);
        self
    }

    /// Sets the maximum number of header lines per part.
    pub fn max_headers_per_part(mut self, max_headers: usize) -> Self {
        self.config.limits.max_headers_per_part = Some(max_headers);
        self
    }

    /// Validates builder configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()
    }

    /// Finalizes and returns validated configuration.
    pub fn build_config(self) -> Result<CodecConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Finalizes into a ready-to-use [`Codec`].
    pub fn build(self) -> Result<Codec, ConfigError> {
        Codec::with_config(self.config)
    }
}
