//! Flattened document shapes.
//!
//! The forest is the canonical shape; the two older output forms are
//! derived from it by post-processing instead of being parsed
//! separately.

use std::collections::BTreeMap;

use jtl_parser::{Element, Forest};

/// Depth-first list of every element in document order.
///
/// Children are emptied; each entry keeps its own `key` field, so only
/// the nesting is lost.
pub fn flat_list(forest: &Forest) -> Vec<Element> {
    let mut list = Vec::new();
    for element in forest.iter() {
        push_subtree(element, &mut list);
    }
    list
}

/// Key-uniqueness map over the same traversal.
///
/// The last element for a repeated key wins, matching the environment
/// table semantics elsewhere in the notation.
pub fn key_map(forest: &Forest) -> BTreeMap<String, Element> {
    let mut map = BTreeMap::new();
    for element in flat_list(forest) {
        map.insert(element.key.clone(), element);
    }
    map
}

fn push_subtree(element: &Element, list: &mut Vec<Element>) {
    let mut flat = element.clone();
    flat.children = Vec::new();
    list.push(flat);
    for child in &element.children {
        push_subtree(child, list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested_forest() -> Forest {
        let source = concat!(
            ">>>DOCTYPE=JTL;\n",
            ">>>BEGIN;\n",
            ">tag=\"div\">root1>a;\n",
            "    >tag=\"span\">child1>b;\n",
            "        >tag=\"b\">grandchild>c;\n",
            ">tag=\"div\">root2>d;\n",
            ">>>END;",
        );
        jtl_parser::parse(source).unwrap()
    }

    #[test]
    fn test_flat_list_document_order() {
        let list = flat_list(&nested_forest());
        let keys: Vec<&str> = list.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["root1", "child1", "grandchild", "root2"]);
    }

    #[test]
    fn test_flat_list_empties_children() {
        assert!(flat_list(&nested_forest()).iter().all(|e| e.children.is_empty()));
    }

    #[test]
    fn test_flat_list_keeps_fields() {
        let list = flat_list(&nested_forest());
        assert_eq!(list[2].attributes["tag"], "b");
        assert_eq!(list[2].content, "c");
    }

    #[test]
    fn test_key_map_indexes_by_key() {
        let map = key_map(&nested_forest());
        assert_eq!(map.len(), 4);
        assert_eq!(map["grandchild"].content, "c");
    }

    #[test]
    fn test_key_map_last_occurrence_wins() {
        let source = concat!(
            ">>>DOCTYPE=JTL;\n",
            ">>>BEGIN;\n",
            ">tag=\"p\">dup>first;\n",
            ">tag=\"p\">dup>second;\n",
            ">>>END;",
        );
        let map = key_map(&jtl_parser::parse(source).unwrap());
        assert_eq!(map.len(), 1);
        assert_eq!(map["dup"].content, "second");
    }

    #[test]
    fn test_empty_forest_flattens_empty() {
        let forest = Forest::new();
        assert!(flat_list(&forest).is_empty());
        assert!(key_map(&forest).is_empty());
    }
}
