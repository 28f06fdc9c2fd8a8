use crate::error::ConvertError;
use crate::models::Position;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

// Whitespace as the classifier's log tooling understands it: Unicode White_Space
// without NEL (U+0085), plus the byte order mark (U+FEFF).
const LOG_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| marker_regex("point:", &format!("0-9:{}-", LOG_WHITESPACE)));
static MODE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("Mode:", "A-Za-z0-9_"));
static ICCID_RE: Lazy<Regex> = Lazy::new(|| marker_regex("ICCID:", "0-9"));
static LATITUDE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("Latitude:", "0-9."));
static LONGITUDE_RE: Lazy<Regex> = Lazy::new(|| marker_regex("Longitude:", "0-9."));

/// `<marker>` + one whitespace char + a captured run of `value_class` characters
fn marker_regex(marker: &str, value_class: &str) -> Regex {
    let pattern = format!(
        "{}[{}]([{}]+)",
        regex::escape(marker),
        LOG_WHITESPACE,
        value_class
    );
    Regex::new(&pattern).expect("marker pattern")
}

fn is_log_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trim leading and trailing log whitespace, byte order marks included.
pub fn trim_log_whitespace(s: &str) -> &str {
    s.trim_matches(is_log_whitespace)
}

// Trait for consuming parsed lines one at a time
pub trait LineProcessor {
    type Output;

    fn process_line(&mut self, line: ParsedLine, line_number: usize);
    fn finalize(self) -> Self::Output;
}

/// Fields extracted from a single log line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Grouping key; never copied into the position
    pub iccid: Option<String>,
    pub position: Position,
}

pub struct LineParser;

impl LineParser {
    /// Extract every recognised field from `line`. Each marker is looked up
    /// independently and only its first occurrence counts.
    pub fn parse_line(line: &str) -> ParsedLine {
        let position = Position {
            timestamp: capture(&TIMESTAMP_RE, line)
                .map(|ts| trim_log_whitespace(ts).to_string()),
            transmission: capture(&MODE_RE, line).map(str::to_string),
            lat: capture(&LATITUDE_RE, line).map(parse_float_prefix),
            lon: capture(&LONGITUDE_RE, line).map(parse_float_prefix),
            ..Position::default()
        };

        ParsedLine {
            iccid: capture(&ICCID_RE, line).map(str::to_string),
            position,
        }
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the longest leading decimal number in a run of digits and dots.
///
/// `"45.1.2"` reads as `45.1`; a run with no digits before or after the first
/// dot reads as NaN.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (idx, ch) in raw.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return f64::NAN;
    }

    raw[..end]
        .trim_end_matches('.')
        .parse()
        .unwrap_or(f64::NAN)
}

pub struct FileParser {}

impl Default for FileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FileParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Read the whole file, then feed every non-blank line to `processor`.
    pub fn process_file<P: LineProcessor>(
        &self,
        file_path: &Path,
        processor: P,
    ) -> Result<P::Output, ConvertError> {
        let bytes = fs::read(file_path).map_err(|source| ConvertError::InputUnavailable {
            path: file_path.to_path_buf(),
            source,
        })?;

        // Invalid UTF-8 becomes U+FFFD; a stray Latin-1 byte never loses the file
        let content = String::from_utf8_lossy(&bytes);

        tracing::debug!(
            path = %file_path.display(),
            bytes = bytes.len(),
            lossy = matches!(content, std::borrow::Cow::Owned(_)),
            "Read input file"
        );

        Ok(self.process_str(&content, processor))
    }

    /// Feed every non-blank line of `content` to `processor`. Line numbers are
    /// 1-based and count blank lines.
    pub fn process_str<P: LineProcessor>(&self, content: &str, mut processor: P) -> P::Output {
        for (idx, line) in content.split('\n').enumerate() {
            if trim_log_whitespace(line).is_empty() {
                continue;
            }

            processor.process_line(LineParser::parse_line(line), idx + 1);
        }

        processor.finalize()
    }
}
