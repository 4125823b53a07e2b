/// Boundary discovery and `Content-Type` helpers.
pub mod boundary;
/// Part header line and parameter tokenizer.
pub mod headers;
/// Body splitting into raw sections.
pub mod sections;

pub use boundary::{
    content_type_from_headers, discover_boundary, discover_boundary_with, format_content_type,
    generate_boundary,
};
pub use headers::{header_lines, parse_header_block, parse_header_line, parse_params, trim_quotes};
pub use sections::{split_header_and_body, split_into_sections, Sections};
