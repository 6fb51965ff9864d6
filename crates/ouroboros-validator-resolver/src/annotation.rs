//! `validate` annotation grammar
//!
//! ```text
//! annotation    := [ '$' argumentName whitespace ] validatorList
//! validatorList := validatorItem ( ',' validatorItem )*
//! validatorItem := validatorName [ '(' optionText ')' ]
//! validatorName := [A-Za-z0-9\\]+
//! ```
//!
//! The parser never fails. Whatever it cannot interpret is reported as an
//! [`AnnotationDiagnostic`] and skipped, and the caller decides whether a
//! diagnostic is fatal.

use crate::options::parse_options_with_diagnostics;
use ouroboros_validators::ValidatorOptions;
use std::fmt;

// ============================================================================
// Parsed Model
// ============================================================================

/// One validator named in an annotation, with its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSpec {
    pub name: String,
    pub options: ValidatorOptions,
}

/// Result of parsing one annotation value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAnnotation {
    /// Set when the annotation starts with `$name`
    pub argument_name: Option<String>,
    /// Validators in declaration order
    pub validators: Vec<ValidatorSpec>,
    /// Problems found while parsing; empty for well-formed input
    pub diagnostics: Vec<AnnotationDiagnostic>,
}

impl ParsedAnnotation {
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// What went wrong at a diagnostic position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `$` not followed by a name
    EmptyArgumentName,
    /// A validator name was expected
    InvalidValidatorName,
    /// `(` without a matching `)`
    UnbalancedParentheses,
    /// Quoted option value without a closing quote
    UnterminatedQuote,
    /// Option text with a value but no name
    MissingOptionName,
    /// Stray text between items
    UnexpectedCharacter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArgumentName => write!(f, "empty_argument_name"),
            Self::InvalidValidatorName => write!(f, "invalid_validator_name"),
            Self::UnbalancedParentheses => write!(f, "unbalanced_parentheses"),
            Self::UnterminatedQuote => write!(f, "unterminated_quote"),
            Self::MissingOptionName => write!(f, "missing_option_name"),
            Self::UnexpectedCharacter => write!(f, "unexpected_character"),
        }
    }
}

/// A parse problem, positioned by byte offset into the trimmed annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDiagnostic {
    pub kind: DiagnosticKind,
    pub offset: usize,
    pub message: String,
}

impl AnnotationDiagnostic {
    pub(crate) fn new(kind: DiagnosticKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn shifted(mut self, by: usize) -> Self {
        self.offset += by;
        self
    }
}

impl fmt::Display for AnnotationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.offset, self.message)
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Parse one raw `validate` annotation value
///
/// # Example
///
/// ```
/// use ouroboros_validator_resolver::parse_annotation;
///
/// let parsed = parse_annotation("$email NotEmpty, StringLength(minimum=3, maximum=50)");
/// assert_eq!(parsed.argument_name.as_deref(), Some("email"));
/// assert_eq!(parsed.validators.len(), 2);
/// assert_eq!(parsed.validators[1].options.get("maximum"), Some("50"));
/// ```
pub fn parse_annotation(raw: &str) -> ParsedAnnotation {
    let text = raw.trim();
    let mut parsed = ParsedAnnotation::default();

    let (list, list_offset) = match text.strip_prefix('$') {
        Some(marked) => {
            let name_end = marked.find(char::is_whitespace).unwrap_or(marked.len());
            let name = &marked[..name_end];
            if name.is_empty() {
                parsed.diagnostics.push(AnnotationDiagnostic::new(
                    DiagnosticKind::EmptyArgumentName,
                    0,
                    "Argument marker '$' is not followed by a name",
                ));
            } else {
                parsed.argument_name = Some(name.to_string());
            }
            (&marked[name_end..], 1 + name_end)
        }
        None => (text, 0),
    };

    parse_validator_list(list, list_offset, &mut parsed);
    parsed
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\\'
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    text[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |i| pos + i)
}

fn parse_validator_list(list: &str, base: usize, parsed: &mut ParsedAnnotation) {
    let mut pos = 0;

    loop {
        pos = skip_whitespace(list, pos);
        if pos >= list.len() {
            break;
        }

        let name_len = list[pos..]
            .find(|c: char| !is_name_char(c))
            .unwrap_or(list.len() - pos);
        if name_len == 0 {
            let found = list[pos..].chars().next().unwrap_or_default();
            parsed.diagnostics.push(AnnotationDiagnostic::new(
                DiagnosticKind::InvalidValidatorName,
                base + pos,
                format!("Expected a validator name, found '{}'", found),
            ));
            pos = skip_past_item(list, pos);
            continue;
        }

        let name = &list[pos..pos + name_len];
        pos = skip_whitespace(list, pos + name_len);

        let mut options = ValidatorOptions::new();
        if list[pos..].starts_with('(') {
            let Some(close) = find_closing_paren(list, pos) else {
                parsed.diagnostics.push(AnnotationDiagnostic::new(
                    DiagnosticKind::UnbalancedParentheses,
                    base + pos,
                    format!("Options of validator '{}' are never closed", name),
                ));
                break;
            };
            let (parsed_options, diagnostics) =
                parse_options_with_diagnostics(&list[pos + 1..close]);
            options = parsed_options;
            parsed
                .diagnostics
                .extend(diagnostics.into_iter().map(|d| d.shifted(base + pos + 1)));
            pos = close + 1;
        }

        parsed.validators.push(ValidatorSpec {
            name: name.to_string(),
            options,
        });

        pos = skip_whitespace(list, pos);
        if pos >= list.len() {
            break;
        }
        if list[pos..].starts_with(',') {
            pos += 1;
            continue;
        }

        let found = list[pos..].chars().next().unwrap_or_default();
        parsed.diagnostics.push(AnnotationDiagnostic::new(
            DiagnosticKind::UnexpectedCharacter,
            base + pos,
            format!("Expected ',' after validator '{}', found '{}'", name, found),
        ));
        pos = skip_past_item(list, pos);
    }
}

/// Quote and nesting state while scanning option text
#[derive(Default)]
struct Scanner {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl Scanner {
    /// Feed one character; returns true when it is structural (outside quotes)
    fn feed(&mut self, c: char) -> bool {
        if let Some(q) = self.quote {
            // `\'` and `\"` never close a quoted value
            let escaped = std::mem::replace(&mut self.escaped, c == '\\');
            if c == q && !escaped {
                self.quote = None;
            }
            return false;
        }
        match c {
            '\'' | '"' => {
                self.quote = Some(c);
                false
            }
            '(' => {
                self.depth += 1;
                true
            }
            ')' => {
                self.depth = self.depth.saturating_sub(1);
                true
            }
            _ => true,
        }
    }
}

/// Byte index of the `)` closing the `(` at `open`
fn find_closing_paren(text: &str, open: usize) -> Option<usize> {
    let mut scanner = Scanner::default();
    for (i, c) in text[open..].char_indices() {
        if scanner.feed(c) && c == ')' && scanner.depth == 0 {
            return Some(open + i);
        }
    }
    None
}

/// Index just past the next top-level `,`, or the end of `text`
fn skip_past_item(text: &str, from: usize) -> usize {
    let mut scanner = Scanner::default();
    for (i, c) in text[from..].char_indices() {
        if scanner.feed(c) && c == ',' && scanner.depth == 0 {
            return from + i + 1;
        }
    }
    text.len()
}
