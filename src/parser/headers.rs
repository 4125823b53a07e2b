use crate::header::{Header, Params};

const LINE_END: &str = "\r\n";
const NAME_SEPARATOR: &str = ": ";
const PARAM_SEPARATOR: &str = "; ";

/// Iterates the lines of a part header block, stopping at the first blank line.
pub fn header_lines(block: &str) -> impl Iterator<Item = &str> {
    block.split(LINE_END).take_while(|line| !line.is_empty())
}

/// Parses every header line of a part header block, in source order.
///
/// Lines without a `: ` separator contribute no header.
pub fn parse_header_block(block: &str) -> Vec<Header> {
    header_lines(block)
        .filter_map(|line| {
            let parsed = parse_header_line(line);
            #[cfg(feature = "tracing")]
            if parsed.is_none() {
                tracing::debug!(line, "headers: skipping line without `: ` separator");
            }
            parsed
        })
        .collect()
}

/// Parses a single header line into its primary pair and parameters.
///
/// ```
/// use multipart_codec::parser::parse_header_line;
///
/// let header = parse_header_line("Content-Disposition: form-data; name=\"f\"").unwrap();
/// assert_eq!(header.name, "Content-Disposition");
/// assert_eq!(header.value, "form-data");
/// assert_eq!(header.param("name"), Some("f"));
/// ```
pub fn parse_header_line(line: &str) -> Option<Header> {
    let (main, params) = match line.split_once(PARAM_SEPARATOR) {
        Some((main, params)) => (main, Some(params)),
        None => (line, None),
    };

    let (name, value) = main.split_once(NAME_SEPARATOR)?;
    let mut header = Header::new(name, value);
    if let Some(params) = params {
        parse_params(params, &mut header.params);
    }
    Some(header)
}

/// Parses a `name=value; name2="value2"` segment into `params`.
///
/// Tokens without `=` get an empty value. When a name repeats, the first value wins.
pub fn parse_params(segment: &str, params: &mut Params) {
    for token in segment.split(PARAM_SEPARATOR) {
        if token.is_empty() {
            continue;
        }

        let (name, value) = token.split_once('=').unwrap_or((token, ""));
        if params.contains_key(name) {
            continue;
        }
        params.insert(name, trim_quotes(value));
    }
}

/// Strips one layer of surrounding double quotes, if both are present.
pub fn trim_quotes(value: &str) -> &str {
    if value.len() > 1 {
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_ends_the_block() {
        let lines: Vec<_> = header_lines("A: 1\r\nB: 2\r\n\r\nC: 3\r\n").collect();
        assert_eq!(lines, vec!["A: 1", "B: 2"]);
    }

    #[test]
    fn lone_quote_is_not_trimmed() {
        assert_eq!(trim_quotes("\""), "\"");
        assert_eq!(trim_quotes("\"\""), "");
        assert_eq!(trim_quotes("\"a"), "\"a");
    }

    #[test]
    fn token_without_equals_gets_empty_value() {
        let mut params = Params::new();
        parse_params("flag; name=\"x\"", &mut params);
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("name"), Some("x"));
    }

    #[test]
    fn first_duplicate_parameter_wins() {
        let mut params = Params::new();
        parse_params("name=a; name=b", &mut params);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some("a"));
    }

    #[test]
    fn value_split_uses_first_equals() {
        let header = parse_header_line("X-Token: t; sig=a=b==").expect("header");
        assert_eq!(header.param("sig"), Some("a=b=="));
    }
}
