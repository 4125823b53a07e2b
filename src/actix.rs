//! Actix integration helpers.

use std::{future::Future, pin::Pin};

use actix_web::{
    body::BoxBody,
    dev::Payload,
    http::header as actix_header,
    web::{self, Bytes},
    FromRequest, HttpRequest, HttpResponse, Responder, ResponseError,
};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::{Codec, CodecError, Message};

/// Error wrapper that renders every codec failure as `400 Bad Request`.
#[derive(Debug)]
pub struct ActixCodecError(pub CodecError);

impl std::fmt::Display for ActixCodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ActixCodecError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::BAD_REQUEST
    }
}

/// Copies Actix request headers into an [`http::HeaderMap`].
pub fn headers_from_request(request: &HttpRequest) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(request.headers().len());
    for (name, value) in request.headers() {
        let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_str().as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        ) else {
            continue;
        };
        headers.append(name, value);
    }
    headers
}

impl Codec {
    /// Parses a buffered Actix request body into a [`Message`].
    pub fn parse_actix(&self, request: &HttpRequest, body: Bytes) -> Result<Message, CodecError> {
        self.parse(headers_from_request(request), body)
    }
}

impl FromRequest for Message {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let request = req.clone();
        let body = Bytes::from_request(req, payload);
        Box::pin(async move {
            let body = body.await?;
            let codec = request
                .app_data::<web::Data<Codec>>()
                .map(|data| data.get_ref().clone())
                .unwrap_or_default();
            codec
                .parse_actix(&request, body)
                .map_err(|err| ActixCodecError(err).into())
        })
    }
}

impl Responder for Message {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .insert_header((actix_header::CONTENT_TYPE, self.content_type()))
            .body(self.dump())
    }
}
