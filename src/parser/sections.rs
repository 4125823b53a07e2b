use bytes::Bytes;
use memchr::memmem;

use crate::{
    error::{CodecError, ParseError},
    limits::Limits,
    parser::headers::{header_lines, parse_header_block},
    part::Part,
};

const CRLF: &[u8] = b"\r\n";
const CRLFCRLF: &[u8] = b"\r\n\r\n";
const DASHES: &[u8] = b"--";

/// Splits a multipart body into raw sections (header block plus body, undivided).
///
/// ```
/// use multipart_codec::parser::split_into_sections;
///
/// let body = b"--X\r\nA: 1\r\n\r\none\r\n--X\r\n\r\ntwo\r\n--X--\r\n";
/// let mut sections = split_into_sections(body, "X");
/// assert_eq!(sections.next(), Some(&b"A: 1\r\n\r\none\r\n"[..]));
/// assert_eq!(sections.next(), Some(&b"\r\ntwo\r\n"[..]));
/// assert_eq!(sections.next(), None);
/// assert!(sections.is_terminated());
/// ```
pub fn split_into_sections<'a>(body: &'a [u8], boundary: &str) -> Sections<'a> {
    Sections::new(body, boundary)
}

/// Iterator over the raw sections of a multipart body.
///
/// Scanning is non-destructive: the body is never copied, and the iterator can be
/// cloned to restart from its current position.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    body: &'a [u8],
    delimiter: Vec<u8>,
    line_delimiter: memmem::Finder<'static>,
    cursor: usize,
    state: SplitState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Preamble,
    Open,
    Terminated,
    Unterminated,
}

#[derive(Debug, Clone, Copy)]
struct Delimiter {
    start: usize,
    end: usize,
    terminal: bool,
}

impl<'a> Sections<'a> {
    /// Creates a section iterator for `boundary` (without the leading `--`).
    pub fn new(body: &'a [u8], boundary: &str) -> Self {
        let delimiter = [DASHES, boundary.as_bytes()].concat();
        let line_delimiter = memmem::Finder::new(&[CRLF, &delimiter[..]].concat()).into_owned();
        let state = if boundary.is_empty() {
            SplitState::Unterminated
        } else {
            SplitState::Preamble
        };

        Self {
            body,
            delimiter,
            line_delimiter,
            cursor: 0,
            state,
        }
    }

    /// Returns `true` once the terminal delimiter (`--boundary--`) has been consumed.
    ///
    /// A drained iterator that reports `false` ran out of input before the terminal
    /// delimiter.
    pub fn is_terminated(&self) -> bool {
        self.state == SplitState::Terminated
    }

    fn next_delimiter(&self, from: usize) -> Option<Delimiter> {
        let rest = &self.body[from..];
        let mut start = if rest.starts_with(&self.delimiter) {
            from
        } else {
            from + self.line_delimiter.find(rest)? + CRLF.len()
        };

        loop {
            let after = start + self.delimiter.len();
            let tail = &self.body[after..];

            if tail.starts_with(DASHES) {
                return Some(Delimiter {
                    start,
                    end: after + DASHES.len(),
                    terminal: true,
                });
            }

            let trimmed = skip_lwsp(tail);
            let padding = tail.len() - trimmed.len();
            if trimmed.is_empty() {
                return Some(Delimiter {
                    start,
                    end: self.body.len(),
                    terminal: false,
                });
            }
            if trimmed.starts_with(CRLF) {
                return Some(Delimiter {
                    start,
                    end: after + padding + CRLF.len(),
                    terminal: false,
                });
            }

            // `--boundary` followed by other text is a longer token, not a delimiter line.
            start = start + self.line_delimiter.find(&self.body[start..])? + CRLF.len();
        }
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delimiter = match self.state {
                SplitState::Terminated | SplitState::Unterminated => return None,
                SplitState::Preamble | SplitState::Open => self.next_delimiter(self.cursor),
            };

            let Some(delimiter) = delimiter else {
                self.state = SplitState::Unterminated;
                return None;
            };

            let in_body = self.state == SplitState::Open;
            let section = if in_body {
                &self.body[self.cursor..delimiter.start]
            } else {
                &[][..]
            };

            if delimiter.terminal {
                self.state = SplitState::Terminated;
            } else {
                self.state = SplitState::Open;
                self.cursor = delimiter.end;
            }

            if !section.is_empty() {
                return Some(section);
            }

            #[cfg(feature = "tracing")]
            if in_body {
                tracing::debug!(offset = delimiter.start, "sections: skipping empty section");
            }
        }
    }
}

/// Splits a raw section into its header block and body.
///
/// The header block keeps the CRLF ending its last line. One CRLF is stripped from
/// the end of the body. A section without a blank-line marker is all body.
pub fn split_header_and_body(section: &[u8]) -> (&[u8], &[u8]) {
    let (head, body) = if let Some(body) = section.strip_prefix(CRLF) {
        (&section[..0], body)
    } else if let Some(split) = memmem::find(section, CRLFCRLF) {
        (&section[..split + CRLF.len()], &section[split + CRLFCRLF.len()..])
    } else {
        (&section[..0], section)
    };

    (head, body.strip_suffix(CRLF).unwrap_or(body))
}

/// Parses one raw section of `source` into a [`Part`], sharing the body buffer.
///
/// The header line limit is checked before any header is parsed.
pub(crate) fn parse_section(
    source: &Bytes,
    section: &[u8],
    index: usize,
    limits: &Limits,
) -> Result<Part, CodecError> {
    let (head, body) = split_header_and_body(section);
    let head = std::str::from_utf8(head).map_err(|_| ParseError::HeaderNotUtf8 { part: index })?;
    limits.check_header_lines(index, header_lines(head))?;

    Ok(Part {
        headers: parse_header_block(head),
        body: source.slice_ref(body),
    })
}

fn skip_lwsp(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&byte| byte != b' ' && byte != b'\t')
        .unwrap_or(bytes.len());
    &bytes[start..]
}
