//! Element span lexing.
//!
//! A raw element span is one or more physical lines collected by the
//! scanner. Lexing splits it into attribute text, key, and raw content
//! at the first two `>` delimiters after the leading marker. Attribute
//! values are always quoted and never contain `>`; that constraint of
//! the notation is what keeps the two-delimiter split sound, and the
//! lexer does not attempt a fuller tokenization.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::section::{ELEMENT_MARKER, TERMINATOR};
use crate::{ElementErrorKind, LexerError};

/// `name="value"` pairs in the attribute text. Compiled once and shared
/// by every parse call; never mutated after initialization.
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\w+)="([^"]+)""#).unwrap());

/// An element span as collected from the source, before lexing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    /// Span text, physical lines joined with `\n`.
    pub text: String,
    /// Leading whitespace width of the first physical line.
    pub indent: usize,
    /// 1-based line number of the first physical line.
    pub line: usize,
}

/// A lexed element: attributes, key, and still-raw content.
#[derive(Debug, Clone, PartialEq)]
pub struct LexedElement {
    pub attributes: BTreeMap<String, String>,
    pub key: String,
    /// Content exactly as it appeared in the span. Normalization and
    /// environment substitution happen downstream.
    pub content: String,
    pub indent: usize,
    pub line: usize,
}

impl RawElement {
    /// Split the span into attributes, key, and raw content.
    pub fn lex(&self) -> Result<LexedElement, LexerError> {
        let span = self.text.trim();
        let span = span.strip_prefix(ELEMENT_MARKER).unwrap_or(span);
        let span = span.strip_suffix(TERMINATOR).unwrap_or(span);

        let attr_end = span
            .find(ELEMENT_MARKER)
            .ok_or_else(|| self.malformed(ElementErrorKind::MissingSeparator))?;
        let attr_text = &span[..attr_end];
        let rest = &span[attr_end + 1..];

        let key_end = rest
            .find(ELEMENT_MARKER)
            .ok_or_else(|| self.malformed(ElementErrorKind::MissingSeparator))?;
        let key = rest[..key_end].trim();
        let content = &rest[key_end + 1..];

        if key.is_empty() {
            return Err(self.malformed(ElementErrorKind::EmptyKey));
        }

        // Duplicate attribute names: the last occurrence wins.
        let mut attributes = BTreeMap::new();
        for caps in ATTRIBUTE.captures_iter(attr_text) {
            attributes.insert(caps[1].to_string(), caps[2].to_string());
        }
        if attributes.is_empty() {
            return Err(self.malformed(ElementErrorKind::NoAttributes));
        }

        Ok(LexedElement {
            attributes,
            key: key.to_string(),
            content: content.to_string(),
            indent: self.indent,
            line: self.line,
        })
    }

    fn malformed(&self, kind: ElementErrorKind) -> LexerError {
        LexerError::MalformedElement {
            kind,
            line: self.line,
        }
    }
}
