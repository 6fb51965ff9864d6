//! Option text parsing
//!
//! Text without any quote character is split on commas (`minimum=3, maximum=50`).
//! Text with quotes is read with a cursor so that commas, parentheses and
//! `=` inside quoted values stay part of the value.
//!
//! Quoted values end at the first unescaped matching quote. `\'` and `\"`
//! are the only escapes; every other backslash is kept literally, so regular
//! expressions like `'^\d+$'` need no doubling.
//!
//! As a consequence a quoted value cannot end in a backslash: `path='C:\'`
//! reads `\'` as an escaped quote and the value runs on to the next quote.

use crate::annotation::{AnnotationDiagnostic, DiagnosticKind};
use ouroboros_validators::ValidatorOptions;

/// Parse option text, dropping diagnostics
///
/// ```
/// use ouroboros_validator_resolver::parse_options;
///
/// let options = parse_options("key='a,b', limit=3");
/// assert_eq!(options.get("key"), Some("a,b"));
/// assert_eq!(options.get("limit"), Some("3"));
/// ```
pub fn parse_options(raw: &str) -> ValidatorOptions {
    parse_options_with_diagnostics(raw).0
}

/// Parse option text; diagnostic offsets are relative to `raw`
pub fn parse_options_with_diagnostics(raw: &str) -> (ValidatorOptions, Vec<AnnotationDiagnostic>) {
    if has_quote(raw) {
        parse_complex(raw)
    } else {
        (parse_simple(raw), Vec::new())
    }
}

fn has_quote(text: &str) -> bool {
    text.contains(['\'', '"'])
}

/// Comma-separated `name=value` pairs; segments without `=` are dropped
fn parse_simple(raw: &str) -> ValidatorOptions {
    raw.split(',')
        .filter_map(|segment| segment.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
        .collect()
}

fn parse_complex(raw: &str) -> (ValidatorOptions, Vec<AnnotationDiagnostic>) {
    let mut options = ValidatorOptions::new();
    let mut diagnostics = Vec::new();
    let mut pos = 0;

    loop {
        pos += raw[pos..]
            .find(|c: char| !(c.is_whitespace() || c == ','))
            .unwrap_or(raw.len() - pos);
        let rest = &raw[pos..];
        if rest.is_empty() {
            break;
        }
        if !has_quote(rest) {
            options.merge(parse_simple(rest));
            break;
        }

        let Some(eq) = rest.find('=') else {
            // only quoted text without any option name left
            diagnostics.push(AnnotationDiagnostic::new(
                DiagnosticKind::MissingOptionName,
                pos,
                "Quoted text is not assigned to an option",
            ));
            break;
        };

        // Segments before the last comma have no '=' and are dropped,
        // as in the unquoted dialect.
        let name_segment = &rest[..eq];
        let name = name_segment
            .rsplit_once(',')
            .map_or(name_segment, |(_, last)| last)
            .trim();

        let (value, next) = read_value(raw, pos + eq + 1, &mut diagnostics);
        if let Some(quote) = name_segment.rfind(['\'', '"']).filter(|_| has_quote(name)) {
            // `'a=b'`: the '=' sits inside a quoted run, so there is no name
            diagnostics.push(AnnotationDiagnostic::new(
                DiagnosticKind::UnexpectedCharacter,
                pos + quote,
                format!("Quote in option name '{}'", name),
            ));
        } else if name.is_empty() {
            diagnostics.push(AnnotationDiagnostic::new(
                DiagnosticKind::MissingOptionName,
                pos + eq,
                format!("Value '{}' has no option name", value),
            ));
        } else {
            options.insert(name, value);
        }
        pos = next;
    }

    (options, diagnostics)
}

/// Read one option value starting at `start`
///
/// Returns the value and the position just past its trailing comma.
fn read_value(
    raw: &str,
    start: usize,
    diagnostics: &mut Vec<AnnotationDiagnostic>,
) -> (String, usize) {
    let start = start
        + raw[start..]
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(raw.len() - start);
    let rest = &raw[start..];

    let quote = match rest.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        _ => {
            // bare scalar up to the next comma
            return match rest.find(',') {
                Some(comma) => (rest[..comma].trim().to_string(), start + comma + 1),
                None => (rest.trim().to_string(), raw.len()),
            };
        }
    };

    let mut value = String::new();
    let mut chars = rest.char_indices().skip(1).peekable();
    let mut close = None;
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some((_, '\'' | '"'))) => {
                if let Some((_, escaped)) = chars.next() {
                    value.push(escaped);
                }
            }
            c if c == quote => {
                close = Some(i);
                break;
            }
            c => value.push(c),
        }
    }

    let Some(close) = close else {
        diagnostics.push(AnnotationDiagnostic::new(
            DiagnosticKind::UnterminatedQuote,
            start,
            format!("Quoted value starting with {} is never closed", quote),
        ));
        return (value, raw.len());
    };

    let after = start + close + 1;
    let trailing = &raw[after..];
    let trimmed = trailing.trim_start();
    if trimmed.is_empty() {
        return (value, raw.len());
    }
    let trailing_start = after + (trailing.len() - trimmed.len());
    if trimmed.starts_with(',') {
        return (value, trailing_start + 1);
    }

    diagnostics.push(AnnotationDiagnostic::new(
        DiagnosticKind::UnexpectedCharacter,
        trailing_start,
        "Unexpected text after quoted value",
    ));
    match trimmed.find(',') {
        Some(comma) => (value, trailing_start + comma + 1),
        None => (value, raw.len()),
    }
}
