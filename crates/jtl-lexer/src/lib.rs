//! JTL Lexer
//!
//! Splits `.jtl` source text into directives: preamble declarations,
//! environment declaration lines, and raw element spans. Handles the
//! section state machine, comment and blank-line skipping, multi-line
//! element spans with bracket-aware termination, and the
//! attribute/key/content split of a single span.
//!
//! # Example
//!
//! ```
//! use jtl_lexer::Scanner;
//!
//! let directives = Scanner::scan(">>>DOCTYPE=JTL;").unwrap();
//! assert!(directives.is_empty()); // Just the doctype line
//! ```

pub mod element;
pub mod scanner;
pub mod section;

pub use element::{LexedElement, RawElement};
pub use scanner::{Directive, ScanMode, Scanner};
pub use section::Section;

use std::fmt;

/// The ways a single element span can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementErrorKind {
    /// No `>` delimiter after the attribute text, or none after the key.
    MissingSeparator,
    /// The key between the second and third delimiter is empty.
    EmptyKey,
    /// The attribute text holds no `name="value"` pair.
    NoAttributes,
    /// Normalized content is empty. Only raised under the strict
    /// content policy; permissive parsing accepts empty content.
    EmptyContent,
}

impl fmt::Display for ElementErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ElementErrorKind::MissingSeparator => "missing separator",
            ElementErrorKind::EmptyKey => "empty key",
            ElementErrorKind::NoAttributes => "no attributes",
            ElementErrorKind::EmptyContent => "empty content",
        };
        f.write_str(text)
    }
}

/// Lexer error carrying the 1-based source line it refers to.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("invalid document at line {line}: missing DOCTYPE")]
    MissingDoctype { line: usize },
    #[error("invalid element format at line {line}: {kind}")]
    MalformedElement { kind: ElementErrorKind, line: usize },
}
