//! Indentation-driven nesting.
//!
//! Elements arrive in document order, each with the indentation of its
//! first source line. A stack of open elements turns indentation into
//! the forest shape: deeper indentation nests, equal-or-shallower
//! indentation closes the levels above it.

use crate::ast::{Element, Forest};

/// Builds the forest from a stream of (element, indent) placements.
///
/// Children attach when their level closes, so a parent is never
/// aliased while its subtree is still open; the resulting shape is the
/// same as appending at placement time.
#[derive(Debug, Default)]
pub struct NestingResolver {
    stack: Vec<(Element, usize)>,
    roots: Vec<Element>,
}

impl NestingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the next element at the given source indentation.
    ///
    /// Every open level at indent ≥ `indent` closes first; the new
    /// element then opens its own level.
    pub fn place(&mut self, element: Element, indent: usize) {
        while self.stack.last().is_some_and(|(_, open)| *open >= indent) {
            self.close_top();
        }
        self.stack.push((element, indent));
    }

    /// Close all open levels and return the finished forest.
    pub fn finish(mut self) -> Forest {
        while !self.stack.is_empty() {
            self.close_top();
        }
        Forest {
            elements: self.roots,
        }
    }

    /// Pop the top open element and attach it to the level below, or to
    /// the root sequence when none remains.
    fn close_top(&mut self) {
        if let Some((element, _)) = self.stack.pop() {
            match self.stack.last_mut() {
                Some((parent, _)) => parent.children.push(element),
                None => self.roots.push(element),
            }
        }
    }
}
