//! Axum integration helpers.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{Codec, CodecError, Message};

/// Rejection type returned by Axum integration extractors.
#[derive(Debug)]
pub struct AxumCodecRejection(pub CodecError);

impl IntoResponse for AxumCodecRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Trait implemented by Axum state types that carry a configured [`Codec`].
pub trait CodecState {
    /// Returns the codec used to parse request bodies.
    fn codec(&self) -> &Codec;
}

impl CodecState for Codec {
    fn codec(&self) -> &Codec {
        self
    }
}

impl CodecState for Arc<Codec> {
    fn codec(&self) -> &Codec {
        self.as_ref()
    }
}

/// Extractor that buffers the request body and parses it into a [`Message`].
#[derive(Debug)]
pub struct MessageExtractor(pub Message);

#[async_trait::async_trait]
impl<AppState> FromRequest<AppState> for MessageExtractor
where
    AppState: CodecState + Send + Sync,
{
    type Rejection = AxumCodecRejection;

    async fn from_request(request: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let codec = state.codec();
        let (parts, body) = request.into_parts();

        let limit = codec
            .config()
            .limits
            .max_body_size
            .map_or(usize::MAX, |max| usize::try_from(max).unwrap_or(usize::MAX));
        let bytes = axum::body::to_bytes(body, limit)
            .await
            .map_err(|err| {
                AxumCodecRejection(CodecError::Body(format!("axum body error: {err}")))
            })?;

        codec
            .parse(parts.headers, bytes)
            .map(Self)
            .map_err(AxumCodecRejection)
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> Response {
        let content_type = self.content_type();
        let body: Bytes = self.dump();
        ([(header::CONTENT_TYPE, content_type)], Body::from(body)).into_response()
    }
}
