#![allow(missing_docs)]

use multipart_codec::{
    BoundaryScan, Codec, CodecBuilder, CodecConfig, ConfigError, Limits, UnterminatedPolicy,
};

#[test]
fn builder_collects_every_setting() {
    let config = Codec::builder()
        .boundary_scan(BoundaryScan::Remainder)
        .unterminated(UnterminatedPolicy::Reject)
        .require_multipart(true)
        .max_body_size(2048)
        .max_parts(10)
        .max_headers_per_part(5)
        .build_config()
        .expect("config should validate");

    assert_eq!(config.boundary_scan, BoundaryScan::Remainder);
    assert_eq!(config.unterminated, UnterminatedPolicy::Reject);
    assert!(config.require_multipart);
    assert_eq!(config.limits.max_body_size, Some(2048));
    assert_eq!(config.limits.max_parts, Some(10));
    assert_eq!(config.limits.max_headers_per_part, Some(5));
}

#[test]
fn limits_replace_previous_limit_settings() {
    let limits = Limits {
        max_parts: Some(3),
        ..Limits::default()
    };
    let builder = CodecBuilder::new().max_body_size(10).limits(limits.clone());

    assert_eq!(builder.config().limits, limits);
}

#[test]
fn with_config_replaces_snapshot() {
    let config = CodecConfig {
        require_multipart: true,
        ..CodecConfig::default()
    };
    let builder = CodecBuilder::new().with_config(config.clone());

    assert_eq!(builder.config(), &config);
}

#[test]
fn build_surfaces_validation_errors() {
    let builder = Codec::builder().max_headers_per_part(0);
    assert!(builder.validate().is_err());

    let err = builder.build().expect_err("zero limit must fail");
    assert_eq!(
        err,
        ConfigError::InvalidLimitValue {
            limit: "max_headers_per_part"
        }
    );
}

#[test]
fn built_codec_uses_builder_config() {
    let codec = Codec::builder()
        .max_parts(1)
        .build()
        .expect("config should validate");

    assert_eq!(codec.config().limits.max_parts, Some(1));
}
