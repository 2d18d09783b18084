//! Column rename mapping built from an `old:new,old2:new2` specification string.
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Table;

/// Old (trimmed, lowercased) column name to new name (trimmed, case kept).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMapping {
    pairs: BTreeMap<String, String>,
}

/// One rename that actually matched a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRename {
    pub from: String,
    pub to: String,
}

impl RenameMapping {
    /// Parse a rename specification.
    ///
    /// A blank spec, including one that is only whitespace (`"  "`), yields an
    /// empty mapping rather than a format error. Every comma-separated pair must
    /// contain exactly one `:`, otherwise the whole spec is rejected with
    /// [`Error::Format`]. Later pairs override earlier ones with the same key.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut pairs = BTreeMap::new();
        if spec.trim().is_empty() {
            return Ok(Self { pairs });
        }

        for pair in spec.split(',') {
            let mut parts = pair.split(':');
            let (old, new) = match (parts.next(), parts.next(), parts.next()) {
                (Some(old), Some(new), None) => (old, new),
                _ => {
                    return Err(Error::Format {
                        pair: pair.to_string(),
                    });
                }
            };
            pairs.insert(old.trim().to_lowercase(), new.trim().to_string());
        }

        Ok(Self { pairs })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// New name for `column`, matched case-insensitively on the trimmed name.
    pub fn lookup(&self, column: &str) -> Option<&str> {
        self.pairs
            .get(&column.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Rename matching columns; unmatched columns keep their names.
    pub fn apply(&self, table: Table) -> (Table, Vec<AppliedRename>) {
        let mut applied = Vec::new();
        let table = table.map_columns(|mut col| {
            if let Some(new) = self.lookup(&col.name) {
                debug!("Renaming column `{}` -> `{}`", col.name, new);
                applied.push(AppliedRename {
                    from: col.name.clone(),
                    to: new.to_string(),
                });
                col.name = new.to_string();
            }
            col
        });
        (table, applied)
    }
}

impl std::fmt::Display for RenameMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .pairs
            .iter()
            .map(|(old, new)| format!("{}:{}", old, new))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Column};

    fn cols(names: &[&str]) -> Table {
        Table::from_columns(
            names
                .iter()
                .map(|n| Column::new(*n, vec![Cell::text("v")]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn parses_pairs_trimming_and_lowercasing_keys() {
        let m = RenameMapping::parse(" Full_Name : Name ,dob:date_of_birth").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.lookup("full_name"), Some("Name"));
        assert_eq!(m.lookup("dob"), Some("date_of_birth"));
    }

    #[test]
    fn blank_spec_is_empty_mapping() {
        assert!(RenameMapping::parse("").unwrap().is_empty());
        assert!(RenameMapping::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn pair_without_single_colon_is_format_error() {
        for spec in ["a-b,c:d", "a:b:c", "a:b,", "nocolon"] {
            match RenameMapping::parse(spec) {
                Err(Error::Format { .. }) => {}
                other => panic!("{spec:?}: expected format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn apply_is_case_insensitive_and_keeps_replacement_case() {
        let m = RenameMapping::parse("Full_Name:Name").unwrap();
        let (t, applied) = m.apply(cols(&["full_name", "dob"]));
        assert_eq!(t.column_names(), vec!["Name", "dob"]);
        assert_eq!(
            applied,
            vec![AppliedRename {
                from: "full_name".into(),
                to: "Name".into()
            }]
        );
    }

    #[test]
    fn unmatched_keys_are_ignored() {
        let m = RenameMapping::parse("missing:whatever").unwrap();
        let (t, applied) = m.apply(cols(&["a", "b"]));
        assert_eq!(t.column_names(), vec!["a", "b"]);
        assert!(applied.is_empty());
    }

    #[test]
    fn last_duplicate_key_wins() {
        let m = RenameMapping::parse("a:x,A:y").unwrap();
        assert_eq!(m.lookup("a"), Some("y"));
    }
}
