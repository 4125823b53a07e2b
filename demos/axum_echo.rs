#![allow(missing_docs)]

use std::sync::Arc;

use axum::{routing::post, Router};
use multipart_codec::{axum::MessageExtractor, Codec, Message};

async fn echo(MessageExtractor(message): MessageExtractor) -> Message {
    message
}

fn main() {
    let codec = Codec::builder()
        .max_body_size(8 * 1024 * 1024)
        .max_parts(32)
        .build()
        .expect("codec should build");

    let _app: Router = Router::new()
        .route("/echo", post(echo))
        .with_state(Arc::new(codec));
}
