//! Table normalization: column-name cleanup, missing-value fill and
//! all-or-nothing per-column date coercion.
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::core::dates::parse_datetime;
use crate::types::{Cell, Column, Table};

/// Output of [`normalize`].
#[derive(Debug, Clone)]
pub struct Normalized {
    pub table: Table,
    /// Names (post-clean) of the columns coerced to date-time, in column order
    pub date_columns: Vec<String>,
    /// Cleaned names shared by more than one column
    pub collisions: Vec<String>,
}

/// Trim, lowercase, then replace every `' '` with `_`.
pub fn clean_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Make `names` unique in place: the Nth repeat of `x` becomes `x.N`,
/// skipping any suffixed name that is already taken.
///
/// Returns the names that were repeated, in first-seen order.
pub fn dedupe_names(names: &mut [String]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut repeated: Vec<String> = Vec::new();

    for name in names.iter_mut() {
        let original = name.clone();
        let mut candidate = original.clone();
        let mut count = counts.get(&candidate).copied().unwrap_or(0);
        if count > 0 && !repeated.contains(&original) {
            repeated.push(original);
        }
        while count > 0 {
            counts.insert(candidate.clone(), count + 1);
            candidate = format!("{}.{}", candidate, count);
            count = counts.get(&candidate).copied().unwrap_or(0);
        }
        counts.insert(candidate.clone(), count + 1);
        *name = candidate;
    }

    repeated
}

/// Clean every column name, preserving order.
///
/// Names that collide after cleaning are made unique with a `.N` suffix
/// (`name`, `name.1`); the colliding names are returned so callers can
/// report them.
pub fn clean_column_names(table: Table) -> (Table, Vec<String>) {
    let mut names: Vec<String> = table
        .columns()
        .iter()
        .map(|c| clean_column_name(&c.name))
        .collect();
    let collisions = dedupe_names(&mut names);
    for name in &collisions {
        warn!(
            "Column name `{}` appears more than once after cleaning, repeats get a numeric suffix",
            name
        );
    }

    let mut names = names.into_iter();
    let table = table.map_columns(|mut col| {
        if let Some(name) = names.next() {
            col.name = name;
        }
        col
    });

    (table, collisions)
}

/// Replace every missing cell with an empty string.
pub fn fill_missing(table: Table) -> Table {
    table.map_columns(|mut col| {
        for cell in col.cells.iter_mut() {
            if cell.is_missing() {
                *cell = Cell::text("");
            }
        }
        col
    })
}

/// Parse a whole column as dates.
///
/// Returns the coerced cells only if every non-empty cell is a date and at
/// least one such cell exists; otherwise `None` and the caller keeps the
/// column as it was. Empty cells stay empty text.
pub fn try_parse_column(cells: &[Cell]) -> Option<Vec<Cell>> {
    let mut parsed = Vec::with_capacity(cells.len());
    let mut any_date = false;

    for cell in cells {
        match cell {
            Cell::DateTime(dt) => {
                any_date = true;
                parsed.push(Cell::DateTime(*dt));
            }
            Cell::Text(s) if s.is_empty() => parsed.push(Cell::text("")),
            Cell::Text(s) => {
                let dt = parse_datetime(s)?;
                any_date = true;
                parsed.push(Cell::DateTime(dt));
            }
            Cell::Missing => parsed.push(Cell::Missing),
        }
    }

    if any_date { Some(parsed) } else { None }
}

/// Coerce every column that parses entirely as dates; leave the rest untouched.
pub fn coerce_dates(table: Table) -> (Table, Vec<String>) {
    let mut coerced = Vec::new();
    let table = table.map_columns(|col| match try_parse_column(&col.cells) {
        Some(cells) => {
            debug!("Column `{}` parsed as dates", col.name);
            coerced.push(col.name.clone());
            Column::new(col.name, cells)
        }
        None => {
            debug!("Column `{}` left as text", col.name);
            col
        }
    });
    (table, coerced)
}

/// Run the cleaning stages in order: names, missing values, then dates.
pub fn normalize(table: Table, parse_dates: bool) -> Normalized {
    info!("Cleaning column names...");
    let (table, collisions) = clean_column_names(table);

    info!("Handling missing values...");
    let table = fill_missing(table);

    let (table, date_columns) = if parse_dates {
        info!("Attempting date parsing...");
        coerce_dates(table)
    } else {
        info!("Date parsing disabled, skipping");
        (table, Vec::new())
    };

    Normalized {
        table,
        date_columns,
        collisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnKind;

    fn table(cols: &[(&str, &[&str])]) -> Table {
        let columns = cols
            .iter()
            .map(|(name, cells)| {
                let cells = cells
                    .iter()
                    .map(|c| match *c {
                        "<missing>" => Cell::Missing,
                        other => Cell::text(other),
                    })
                    .collect();
                Column::new(*name, cells)
            })
            .collect();
        Table::from_columns(columns).unwrap()
    }

    #[test]
    fn clean_trims_then_lowercases_then_replaces_spaces() {
        assert_eq!(clean_column_name("  Full Name "), "full_name");
        assert_eq!(clean_column_name(" DOB"), "dob");
        assert_eq!(clean_column_name("First  Middle Name"), "first__middle_name");
        assert_eq!(clean_column_name("tab\there"), "tab\there");
    }

    #[test]
    fn cleaning_is_idempotent() {
        for raw in ["  Full Name ", "A B C", "already_clean", "MiXeD case ", "\tLead"] {
            let once = clean_column_name(raw);
            assert_eq!(clean_column_name(&once), once);
        }
    }

    #[test]
    fn collisions_get_numeric_suffix() {
        let t = table(&[("Name", &["a"]), ("name ", &["b"]), ("Age", &["1"])]);
        let (t, collisions) = clean_column_names(t);
        assert_eq!(t.column_names(), vec!["name", "name.1", "age"]);
        assert_eq!(collisions, vec!["name"]);
        assert_eq!(t.columns()[1].cells, vec![Cell::text("b")]);
    }

    #[test]
    fn dedupe_skips_names_already_taken() {
        let mut names: Vec<String> = ["a", "a", "a.1", "b", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let repeated = dedupe_names(&mut names);
        assert_eq!(names, vec!["a", "a.1", "a.1.1", "b", "a.2"]);
        assert_eq!(repeated, vec!["a", "a.1"]);

        let mut seen = std::collections::HashSet::new();
        assert!(names.iter().all(|n| seen.insert(n.clone())));
    }

    #[test]
    fn unique_names_are_left_alone() {
        let mut names = vec!["x".to_string(), "y".to_string()];
        assert!(dedupe_names(&mut names).is_empty());
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn fill_leaves_no_missing_cells() {
        let t = table(&[("a", &["<missing>", "x"]), ("b", &["<missing>", "<missing>"])]);
        let t = fill_missing(t);
        assert!(t.columns().iter().flat_map(|c| &c.cells).all(|c| !c.is_missing()));
        assert_eq!(t.columns()[0].cells, vec![Cell::text(""), Cell::text("x")]);
    }

    #[test]
    fn date_column_is_coerced_whole() {
        let cells = [Cell::text("2020-01-01"), Cell::text("2020-02-02")];
        let parsed = try_parse_column(&cells).unwrap();
        assert!(parsed.iter().all(|c| matches!(c, Cell::DateTime(_))));
    }

    #[test]
    fn one_bad_cell_leaves_column_unchanged() {
        let t = table(&[("when", &["2020-01-01", "not a date", "2020-03-03"])]);
        let before = t.clone();
        let (after, coerced) = coerce_dates(t);
        assert!(coerced.is_empty());
        assert_eq!(after, before);
    }

    #[test]
    fn empty_cells_do_not_block_coercion() {
        let t = fill_missing(table(&[("d", &["2020-01-01", "<missing>"])]));
        let (t, coerced) = coerce_dates(t);
        assert_eq!(coerced, vec!["d"]);
        assert_eq!(t.columns()[0].kind(), ColumnKind::DateTime);
        assert_eq!(t.columns()[0].cells[1], Cell::text(""));
    }

    #[test]
    fn all_empty_and_numeric_columns_stay_text() {
        let t = fill_missing(table(&[("blank", &["<missing>", ""]), ("n", &["1", "2"])]));
        let before = t.clone();
        let (t, coerced) = coerce_dates(t);
        assert!(coerced.is_empty());
        assert_eq!(t, before);
    }

    #[test]
    fn normalize_runs_all_stages() {
        let t = table(&[
            ("Name", &["Alice", "Bob"]),
            (" DOB", &["2020-01-01", "2020-02-02"]),
            ("Note", &["<missing>", "hi"]),
        ]);
        let out = normalize(t, true);
        assert_eq!(out.table.column_names(), vec!["name", "dob", "note"]);
        assert_eq!(out.date_columns, vec!["dob"]);
        assert!(out.collisions.is_empty());
        assert_eq!(out.table.columns()[2].cells[0], Cell::text(""));
    }

    #[test]
    fn normalize_can_skip_dates() {
        let t = table(&[("d", &["2020-01-01"])]);
        let out = normalize(t, false);
        assert!(out.date_columns.is_empty());
        assert_eq!(out.table.columns()[0].cells[0], Cell::text("2020-01-01"));
    }
}
