//! Hyper integration helpers.

use std::{future::Future, pin::Pin, sync::Arc};

use bytes::Bytes;
use http_body_util::{BodyExt, Full, Limited};
use hyper::{service::Service, Request, Response};

use crate::{Codec, CodecError, Message};

/// Boxed error type used by [`CodecService`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collects a Hyper request body and parses it into a [`Message`].
///
/// The codec's `max_body_size` limit bounds how much of the body is buffered.
pub async fn collect_request<B>(codec: &Codec, request: Request<B>) -> Result<Message, CodecError>
where
    B: hyper::body::Body<Data = Bytes>,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let (parts, body) = request.into_parts();
    let body = match codec.config().limits.max_body_size {
        Some(max) => Limited::new(body, usize::try_from(max).unwrap_or(usize::MAX))
            .collect()
            .await
            .map_err(|err| CodecError::Body(format!("hyper body error: {err}")))?
            .to_bytes(),
        None => body
            .collect()
            .await
            .map_err(|err| CodecError::Body(format!("hyper body error: {err}")))?
            .to_bytes(),
    };

    codec.parse(parts.headers, body)
}

/// Converts a message into a Hyper response with a buffered body.
pub fn message_response(message: Message) -> Result<Response<Full<Bytes>>, http::Error> {
    Ok(message.into_response()?.map(Full::new))
}

/// Service wrapper that parses multipart requests and forwards the message to a handler.
#[derive(Clone)]
pub struct CodecService<H> {
    codec: Arc<Codec>,
    handler: H,
}

impl<H> std::fmt::Debug for CodecService<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecService")
            .field("codec", &self.codec)
            .field("handler", &"<fn>")
            .finish()
    }
}

impl<H> CodecService<H> {
    /// Creates a new Hyper service wrapper around a configured codec.
    pub fn new(codec: Arc<Codec>, handler: H) -> Self {
        Self { codec, handler }
    }
}

impl<H, ReqBody, ResBody, Fut, E> Service<Request<ReqBody>> for CodecService<H>
where
    ReqBody: hyper::body::Body<Data = Bytes> + Send + 'static,
    ReqBody::Error: std::error::Error + Send + Sync + 'static,
    H: Fn(Message) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<ResBody>, E>> + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    type Response = Response<ResBody>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, request: Request<ReqBody>) -> Self::Future {
        let codec = Arc::clone(&self.codec);
        let handler = self.handler.clone();

        Box::pin(async move {
            let message = collect_request(&codec, request).await.map_err(into_box_error)?;
            handler(message).await.map_err(into_box_error)
        })
    }
}

fn into_box_error<E>(err: E) -> BoxError
where
    E: std::error::Error + Send + Sync + 'static,
{
    Box::new(err)
}
