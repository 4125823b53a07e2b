#![allow(missing_docs)]

#[cfg(feature = "hyper")]
use std::sync::Arc;

#[cfg(feature = "hyper")]
use bytes::Bytes;
#[cfg(feature = "hyper")]
use http_body_util::{BodyExt, Full};
#[cfg(feature = "hyper")]
use hyper::{header, service::Service, Request, Response};
#[cfg(feature = "hyper")]
use multipart_codec::{
    hyper::{collect_request, message_response, CodecService},
    Codec, CodecError, Header, Message, Part,
};

#[cfg(feature = "hyper")]
const BODY: &str = concat!(
    "--BOUND\r\n",
    "Content-Disposition: form-data; name=\"field\"\r\n",
    "\r\n",
    "value\r\n",
    "--BOUND\r\n",
    "Content-Disposition: form-data; name=\"file\"; filename=\"a.txt\"\r\n",
    "\r\n",
    "contents\r\n",
    "--BOUND--\r\n"
);

#[cfg(feature = "hyper")]
fn request() -> Request<Full<Bytes>> {
    Request::builder()
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUND")
        .body(Full::new(Bytes::from_static(BODY.as_bytes())))
        .expect("request should build")
}

#[cfg(feature = "hyper")]
#[tokio::test]
async fn collect_request_parses_hyper_body() {
    let message = collect_request(&Codec::new(), request())
        .await
        .expect("request should parse");

    assert_eq!(message.len(), 2);
    assert_eq!(message.parts[1].file_name(), Some("a.txt"));
    assert_eq!(message.parts[1].text(), Some("contents"));
}

#[cfg(feature = "hyper")]
#[tokio::test]
async fn collect_request_enforces_body_limit() {
    let codec = Codec::builder()
        .max_body_size(10)
        .build()
        .expect("config should validate");

    let err = collect_request(&codec, request())
        .await
        .expect_err("body exceeds limit");
    assert!(matches!(err, CodecError::Body(_)));
}

#[cfg(feature = "hyper")]
#[tokio::test]
async fn codec_service_parses_and_calls_handler() {
    let codec = Arc::new(Codec::new());
    let service = CodecService::new(codec, |message: Message| async move {
        Ok::<_, std::io::Error>(Response::new(Full::new(Bytes::from(format!(
            "{}",
            message.len()
        )))))
    });

    let response = service.call(request()).await.expect("service should succeed");
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    assert_eq!(body, Bytes::from_static(b"2"));
}

#[cfg(feature = "hyper")]
#[tokio::test]
async fn message_response_carries_dumped_body() {
    let message = Message::new(
        Default::default(),
        "OUT",
        vec![Part::new(vec![Header::new("Content-Type", "text/plain")], "hi")],
    );
    let expected = message.dump();

    let response = message_response(message).expect("response should build");
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("multipart/form-data; boundary=OUT")
    );
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    assert_eq!(body, expected);
}
