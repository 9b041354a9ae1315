//! Environment declarations and substitution.
//!
//! The environment section is a flat name→value table, built in
//! document order. Substitution replaces an element's content only when
//! the whole normalized content is a single `$env:NAME` token; table
//! values are plain strings and are never re-resolved.

use jtl_lexer::section::DECL_PREFIX;

use crate::ast::EnvTable;

/// Prefix of a whole-content substitution token.
pub const SUBSTITUTION_PREFIX: &str = "$env:";

/// Fold one environment declaration line into the table.
///
/// A physical line may carry several `;`-separated declarations. Each
/// segment needs the `>>>` prefix and an `=`; segments without either
/// are dropped, not errors. A repeated name overwrites its prior value.
pub fn apply_declaration(table: &mut EnvTable, line: &str) {
    for segment in line.split(';') {
        let segment = segment.trim();
        let Some(decl) = segment.strip_prefix(DECL_PREFIX) else {
            continue;
        };
        if let Some((name, value)) = decl.split_once('=') {
            table.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
}

/// Resolve a whole-content `$env:NAME` token against the table.
///
/// A hit replaces the content with the table value; a miss keeps the
/// literal token. Partial matches never substitute.
pub fn substitute(content: String, table: &EnvTable) -> String {
    if let Some(name) = content.strip_prefix(SUBSTITUTION_PREFIX) {
        if let Some(value) = table.get(name.trim()) {
            return value.clone();
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table_from(lines: &[&str]) -> EnvTable {
        let mut table = EnvTable::new();
        for line in lines {
            apply_declaration(&mut table, line);
        }
        table
    }

    // =========================================================================
    // Table building
    // =========================================================================

    #[test]
    fn test_single_declaration() {
        let table = table_from(&[">>>NAME=dev;"]);
        assert_eq!(table["NAME"], "dev");
    }

    #[test]
    fn test_multiple_declarations_per_line() {
        let table = table_from(&[">>>USER=james; >>>APP=myapp; >>>ENV=prod"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table["USER"], "james");
        assert_eq!(table["APP"], "myapp");
        assert_eq!(table["ENV"], "prod");
    }

    #[test]
    fn test_name_and_value_trimmed() {
        let table = table_from(&[">>> NAME = dev ;"]);
        assert_eq!(table["NAME"], "dev");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let table = table_from(&[">>>QUERY=a=b;"]);
        assert_eq!(table["QUERY"], "a=b");
    }

    #[test]
    fn test_segment_without_equals_dropped() {
        let table = table_from(&[">>>NOVALUE;", ">>>NAME=dev;"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_segment_without_prefix_dropped() {
        let table = table_from(&[">>>A=1; B=2"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table["A"], "1");
    }

    #[test]
    fn test_repeated_name_last_wins() {
        let table = table_from(&[">>>NAME=first;", ">>>NAME=second;"]);
        assert_eq!(table["NAME"], "second");
    }

    // =========================================================================
    // Substitution
    // =========================================================================

    #[test]
    fn test_substitute_hit() {
        let table = table_from(&[">>>NAME=dev;"]);
        assert_eq!(substitute("$env:NAME".into(), &table), "dev");
    }

    #[test]
    fn test_substitute_miss_keeps_literal() {
        let table = EnvTable::new();
        assert_eq!(substitute("$env:MISSING".into(), &table), "$env:MISSING");
    }

    #[test]
    fn test_no_partial_substitution() {
        let table = table_from(&[">>>NAME=dev;"]);
        assert_eq!(
            substitute("hello $env:NAME".into(), &table),
            "hello $env:NAME"
        );
    }

    #[test]
    fn test_token_with_trailing_text_is_a_miss() {
        let table = table_from(&[">>>NAME=dev;"]);
        assert_eq!(
            substitute("$env:NAME extra".into(), &table),
            "$env:NAME extra"
        );
    }

    #[test]
    fn test_values_never_re_resolved() {
        let table = table_from(&[">>>A=$env:B;", ">>>B=deep;"]);
        assert_eq!(substitute("$env:A".into(), &table), "$env:B");
    }
}
