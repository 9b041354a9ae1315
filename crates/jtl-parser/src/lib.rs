//! JTL Parser
//!
//! Parses JTL source text into a forest of elements. The lexer supplies
//! directives and raw element spans; this crate builds the environment
//! table, normalizes and substitutes content, and resolves indentation
//! into nesting.
//!
//! # Example
//!
//! ```
//! let forest = jtl_parser::parse(
//!     ">>>DOCTYPE=JTL;\n>>>BEGIN;\n>class=\"main\" tag=\"p\">greeting>hi;\n>>>END;",
//! )
//! .unwrap();
//! assert_eq!(forest.elements[0].key, "greeting");
//! assert_eq!(forest.elements[0].content, "hi");
//! ```

pub mod ast;
pub mod content;
pub mod env;
pub mod parser;
pub mod tree;

pub use ast::{Element, EnvTable, Forest};
pub use parser::Parser;

pub use jtl_lexer::ElementErrorKind;

use jtl_lexer::LexerError;

/// Whether empty element content is accepted.
///
/// The notation historically disagreed with itself here; permissive is
/// the canonical behavior and strict rejection is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPolicy {
    /// Empty normalized content produces an element with empty content.
    #[default]
    Permissive,
    /// Empty normalized content is an element format error.
    Strict,
}

/// Parse error carrying the 1-based source line it refers to.
///
/// Every error is fatal to the parse call; there are no partial
/// results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The first significant line lacks the DOCTYPE marker.
    #[error("invalid document at line {line}: missing DOCTYPE")]
    DocumentFormat { line: usize },
    /// A malformed element span.
    #[error("invalid element format at line {line}: {kind}")]
    ElementFormat {
        kind: ElementErrorKind,
        line: usize,
    },
}

impl From<LexerError> for ParseError {
    fn from(error: LexerError) -> Self {
        match error {
            LexerError::MissingDoctype { line } => ParseError::DocumentFormat { line },
            LexerError::MalformedElement { kind, line } => {
                ParseError::ElementFormat { kind, line }
            }
        }
    }
}

/// Parse a JTL document into its forest.
pub fn parse(source: &str) -> Result<Forest, ParseError> {
    Parser::parse(source)
}

/// Parse with an explicit content policy.
pub fn parse_with_policy(source: &str, policy: ContentPolicy) -> Result<Forest, ParseError> {
    Parser::with_policy(policy).parse_document(source)
}

/// Extract the environment table, stopping at the body marker.
pub fn parse_environment(source: &str) -> Result<EnvTable, ParseError> {
    Parser::parse_environment(source)
}
