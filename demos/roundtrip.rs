#![allow(missing_docs)]

use http::{header, HeaderMap, HeaderValue};
use multipart_codec::{Codec, Header, Message, Part};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let outgoing = Message::with_generated_boundary(
        HeaderMap::new(),
        vec![
            Part::new(
                vec![Header::new("Content-Disposition", "form-data").with_param("name", "title")],
                "Quarterly report",
            ),
            Part::new(
                vec![
                    Header::new("Content-Disposition", "form-data")
                        .with_param("name", "attachment")
                        .with_param("filename", "report.csv"),
                    Header::new("Content-Type", "text/csv"),
                ],
                "region,total\r\nnorth,12\r\nsouth,9\r\n",
            ),
        ],
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&outgoing.content_type())?,
    );
    let wire = outgoing.dump();
    println!("{}", String::from_utf8_lossy(&wire));

    let incoming = Codec::builder().max_parts(16).build()?.parse(headers, wire)?;
    for part in &incoming.parts {
        println!(
            "field={:?} file={:?} type={:?} bytes={}",
            part.field_name(),
            part.file_name(),
            part.content_type(),
            part.body.len()
        );
    }
    assert_eq!(incoming.parts, outgoing.parts);

    Ok(())
}
