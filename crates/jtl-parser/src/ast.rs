//! Document model for parsed JTL.
//!
//! A parsed document is a forest of elements whose nesting mirrors the
//! source indentation. The model is frozen output: the parser builds
//! it, the interchange layer encodes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Environment table: name → value. Built once per document in
/// declaration order; the last declaration for a repeated name wins.
pub type EnvTable = BTreeMap<String, String>;

/// One tagged unit: attributes, key, content, and nested children.
///
/// Every element carries a non-empty key and at least one attribute;
/// both are hard contracts of the notation, enforced at parse time.
///
/// In the interchange encoding the attributes flatten into the element
/// object next to `key` and `content`. An attribute named like one of
/// the reserved fields loses to the reserved field. `children` is
/// omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
    pub key: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

/// Ordered sequence of root-level elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    pub elements: Vec<Element>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl IntoIterator for Forest {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
