//! Document parser for JTL.
//!
//! Drives the lexer's directive stream through environment building,
//! content normalization, environment substitution, and nesting
//! resolution into the output forest. One pass, no partial results: any
//! error aborts the whole parse.

use jtl_lexer::{Directive, ElementErrorKind, RawElement, Scanner};

use crate::ast::{Element, EnvTable, Forest};
use crate::content;
use crate::env;
use crate::tree::NestingResolver;
use crate::{ContentPolicy, ParseError};

/// JTL document parser.
///
/// Carries the content policy; everything else is per-call state, so a
/// single parser may serve any number of documents.
pub struct Parser {
    policy: ContentPolicy,
}

impl Parser {
    /// Create a parser with the default (permissive) policy.
    pub fn new() -> Self {
        Self {
            policy: ContentPolicy::Permissive,
        }
    }

    /// Create a parser with a specific content policy.
    pub fn with_policy(policy: ContentPolicy) -> Self {
        Self { policy }
    }

    /// Parse source text into a forest with the default policy.
    pub fn parse(source: &str) -> Result<Forest, ParseError> {
        Parser::new().parse_document(source)
    }

    /// Extract the environment table without reading the body.
    pub fn parse_environment(source: &str) -> Result<EnvTable, ParseError> {
        let directives = Scanner::scan_env(source)?;

        let mut table = EnvTable::new();
        for directive in &directives {
            if let Directive::EnvDecl(line) = directive {
                env::apply_declaration(&mut table, line);
            }
        }
        Ok(table)
    }

    /// Parse a full document.
    pub fn parse_document(&self, source: &str) -> Result<Forest, ParseError> {
        let directives = Scanner::scan(source)?;

        let mut table = EnvTable::new();
        let mut resolver = NestingResolver::new();

        for directive in directives {
            match directive {
                Directive::Version(_) => {}
                Directive::EnvDecl(line) => env::apply_declaration(&mut table, &line),
                Directive::Element(raw) => {
                    let element = self.finish_element(&raw, &table)?;
                    resolver.place(element, raw.indent);
                }
            }
        }

        Ok(resolver.finish())
    }

    /// Lex, normalize, and substitute one raw element span.
    fn finish_element(&self, raw: &RawElement, table: &EnvTable) -> Result<Element, ParseError> {
        let lexed = raw.lex()?;

        let normalized = content::normalize(&lexed.content);
        if self.policy == ContentPolicy::Strict && normalized.is_empty() {
            return Err(ParseError::ElementFormat {
                kind: ElementErrorKind::EmptyContent,
                line: raw.line,
            });
        }

        Ok(Element {
            attributes: lexed.attributes,
            key: lexed.key,
            content: env::substitute(normalized, table),
            children: Vec::new(),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
