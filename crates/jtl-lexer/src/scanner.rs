//! Line scanner for JTL documents.
//!
//! Walks physical lines, drives the section state machine, and emits
//! directives: preamble version declarations, raw environment
//! declaration lines, and raw element spans. An element span may cover
//! several physical lines; it ends at a line whose trimmed form ends
//! with `;`, unless a `[[ ... ]]` bracket span is still open, in which
//! case termination is suspended until the span closes.

use crate::element::RawElement;
use crate::section::{self, Section};
use crate::LexerError;

/// Scan mode determines how far the scanner reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Read the whole document.
    Full,
    /// Stop at `>>>BEGIN;` — enough for environment extraction.
    EnvOnly,
}

/// One significant unit of a JTL document.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `>>>VERSION=...;` from the preamble. Informational only.
    Version(String),
    /// A raw declaration line from the environment section.
    EnvDecl(String),
    /// A raw element span from the body.
    Element(RawElement),
}

/// JTL line scanner.
///
/// Holds the section state while walking lines; the output is a flat
/// directive list in document order.
pub struct Scanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    section: Section,
    directives: Vec<Directive>,
    mode: ScanMode,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            section: Section::AwaitingDoctype,
            directives: Vec::new(),
            mode: ScanMode::Full,
        }
    }

    /// Create a scanner with a specific mode.
    pub fn with_mode(source: &'a str, mode: ScanMode) -> Self {
        let mut scanner = Self::new(source);
        scanner.mode = mode;
        scanner
    }

    /// Scan a whole document into its directive list.
    pub fn scan(source: &str) -> Result<Vec<Directive>, LexerError> {
        let mut scanner = Scanner::new(source);
        scanner.scan_lines()?;
        Ok(scanner.directives)
    }

    /// Scan the preamble and environment section only, stopping at the
    /// body marker.
    pub fn scan_env(source: &str) -> Result<Vec<Directive>, LexerError> {
        let mut scanner = Scanner::with_mode(source, ScanMode::EnvOnly);
        scanner.scan_lines()?;
        Ok(scanner.directives)
    }

    fn scan_lines(&mut self) -> Result<(), LexerError> {
        while self.pos < self.lines.len() {
            self.scan_line()?;
        }

        // A document with no significant line never saw its DOCTYPE.
        if self.section == Section::AwaitingDoctype {
            return Err(LexerError::MissingDoctype { line: 1 });
        }

        Ok(())
    }

    /// Classify the current line and advance past it (an element span
    /// advances past all the lines it covers).
    fn scan_line(&mut self) -> Result<(), LexerError> {
        let line = self.lines[self.pos];
        let trimmed = line.trim();

        // Blank and comment lines are skipped in every section, and
        // nothing after `>>>END;` is read at all.
        if section::is_ignorable(trimmed) || self.section == Section::Done {
            self.pos += 1;
            return Ok(());
        }

        if self.section == Section::AwaitingDoctype {
            if trimmed.contains(section::DOCTYPE_MARKER) {
                self.section = Section::Preamble;
                self.pos += 1;
                return Ok(());
            }
            return Err(LexerError::MissingDoctype { line: self.pos + 1 });
        }

        match trimmed {
            section::ENV_MARKER => {
                self.section = Section::Env;
                self.pos += 1;
            }
            section::BEGIN_MARKER => {
                if self.mode == ScanMode::EnvOnly {
                    // Environment extraction never reads the body.
                    self.pos = self.lines.len();
                } else {
                    self.section = Section::Body;
                    self.pos += 1;
                }
            }
            section::END_MARKER => {
                self.section = Section::Done;
                self.pos += 1;
            }
            _ => self.scan_payload(trimmed),
        }

        Ok(())
    }

    /// Handle a non-marker line according to the active section.
    fn scan_payload(&mut self, trimmed: &str) {
        match self.section {
            Section::Preamble => {
                if let Some(value) = trimmed.strip_prefix(section::VERSION_PREFIX) {
                    let value = value.trim_end_matches(section::TERMINATOR).trim();
                    self.directives.push(Directive::Version(value.to_string()));
                }
                // Other preamble declarations are recognized but unused.
                self.pos += 1;
            }
            Section::Env => {
                if trimmed.starts_with(section::DECL_PREFIX) {
                    self.directives.push(Directive::EnvDecl(trimmed.to_string()));
                }
                self.pos += 1;
            }
            Section::Body => {
                // An element candidate starts with a single `>`, not the
                // triple declaration prefix.
                if trimmed.starts_with(section::ELEMENT_MARKER)
                    && !trimmed.starts_with(section::DECL_PREFIX)
                {
                    let raw = self.collect_element();
                    self.directives.push(Directive::Element(raw));
                } else {
                    self.pos += 1;
                }
            }
            Section::AwaitingDoctype | Section::Done => self.pos += 1,
        }
    }

    /// Collect a full element span starting at the current line.
    ///
    /// Lines accumulate until one ends with the terminator while no
    /// bracket span is open. A span still open at end of input closes
    /// there.
    fn collect_element(&mut self) -> RawElement {
        let first = self.lines[self.pos];
        let line = self.pos + 1;
        let indent = leading_width(first);

        let mut text = String::from(first);
        let mut open = track_brackets(false, first);
        let mut terminated = !open && ends_with_terminator(first);
        self.pos += 1;

        while !terminated && self.pos < self.lines.len() {
            let next = self.lines[self.pos];
            text.push('\n');
            text.push_str(next);
            open = track_brackets(open, next);
            terminated = !open && ends_with_terminator(next);
            self.pos += 1;
        }

        RawElement { text, indent, line }
    }
}

/// Width of a line's leading whitespace run.
fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn ends_with_terminator(line: &str) -> bool {
    line.trim_end().ends_with(section::TERMINATOR)
}

/// Advance the bracket flag over one line, left to right. A single
/// open/close flag, not a nesting counter: `]]` closes no matter how
/// many `[[` came before it.
fn track_brackets(mut open: bool, line: &str) -> bool {
    let mut rest = line;
    loop {
        let marker = if open {
            section::BRACKET_CLOSE
        } else {
            section::BRACKET_OPEN
        };
        match rest.find(marker) {
            Some(at) => {
                open = !open;
                rest = &rest[at + marker.len()..];
            }
            None => return open,
        }
    }
}
