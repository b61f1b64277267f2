//! Lexical extraction of table and column names from Scheme source text.
//!
//! Scheme files are never parsed. Two independent regex scans pick out:
//! - column assignments: `$table->column_name = ColumnType::INT;`
//! - table constructions: `new Table('table_name')`
//!
//! Anything that does not match is ignored.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Column-level option names that share the assignment syntax of columns.
pub const EXCLUDED_KEYWORDS: &[&str] = &[
    "autoIncrement",
    "length",
    "nullable",
    "unique",
    "default",
    "foreignKey",
    "onDelete",
    "onUpdate",
];

static COLUMN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\w+->([a-zA-Z_][a-zA-Z0-9_]*)\s*=").unwrap());

static TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:\bnew\s+)?\bTable\s*\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap()
});

/// Names collected from one Scheme source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub columns: BTreeSet<String>,
    pub tables: BTreeSet<String>,
    /// Excluded keywords that matched the column pattern and were dropped.
    pub skipped: BTreeSet<String>,
}

pub fn is_excluded_keyword(name: &str) -> bool {
    EXCLUDED_KEYWORDS.contains(&name)
}

/// All column-pattern captures in source order, excluded keywords included.
pub fn column_matches(content: &str) -> Vec<&str> {
    COLUMN_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// All table-pattern captures in source order.
pub fn table_matches(content: &str) -> Vec<&str> {
    TABLE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn extract_columns(content: &str) -> BTreeSet<String> {
    column_matches(content)
        .into_iter()
        .filter(|name| !is_excluded_keyword(name))
        .map(String::from)
        .collect()
}

pub fn extract_tables(content: &str) -> BTreeSet<String> {
    table_matches(content).into_iter().map(String::from).collect()
}

/// Run both scans over `content`.
pub fn extract(content: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for name in column_matches(content) {
        if is_excluded_keyword(name) {
            extraction.skipped.insert(name.to_string());
        } else {
            extraction.columns.insert(name.to_string());
        }
    }
    extraction.tables = extract_tables(content);

    extraction
}
