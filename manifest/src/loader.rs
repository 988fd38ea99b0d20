//! Loads `manifest.csv` into [`Test`] records.
//!
//! The header row is matched against a fixed [`SCHEMA`]; every column it
//! names must be present, in any order. Columns outside the schema are
//! ignored. Empty cells load as `None`, carriage returns are normalized to
//! `\n` and backslashes are stored doubled, as they appear in both the
//! JSON-LD and Turtle manifests.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::LoadError;
use crate::model::{Test, VariantKind};

/// A record field fed by one manifest column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `test`
    Id,
    /// `name`
    Name,
    /// `comment`
    Comment,
    /// `complexity`
    Complexity,
    /// `approval`
    Approval,
    /// `hashAlgorithm`
    HashAlgorithm,
    /// `rdfc10`
    Rdfc10,
    /// `rdfc10map`
    Rdfc10Map,
}

/// Column names and the fields they populate.
pub const SCHEMA: [(&str, Field); 8] = [
    ("test", Field::Id),
    ("name", Field::Name),
    ("comment", Field::Comment),
    ("complexity", Field::Complexity),
    ("approval", Field::Approval),
    ("hashAlgorithm", Field::HashAlgorithm),
    ("rdfc10", Field::Rdfc10),
    ("rdfc10map", Field::Rdfc10Map),
];

/// Column index of every schema field, resolved from the header row.
struct ColumnMap([usize; SCHEMA.len()]);

impl ColumnMap {
    fn resolve(header: &csv::StringRecord) -> Result<Self, LoadError> {
        let mut indices = [0; SCHEMA.len()];
        for (slot, (column, _)) in indices.iter_mut().zip(SCHEMA.iter()) {
            *slot = header
                .iter()
                .position(|h| h.trim() == *column)
                .ok_or(LoadError::MissingColumn(*column))?;
        }
        for extra in header
            .iter()
            .filter(|h| !SCHEMA.iter().any(|(c, _)| c == &h.trim()))
        {
            debug!("ignoring manifest column `{extra}`");
        }
        Ok(Self(indices))
    }

    fn cell(&self, record: &csv::StringRecord, field: Field) -> Option<String> {
        let position = SCHEMA.iter().position(|(_, f)| *f == field)?;
        record
            .get(self.0[position])
            .filter(|v| !v.is_empty())
            .map(normalize_cell)
    }
}

/// Normalizes carriage returns (`\r\n` and lone `\r`) to `\n` and doubles
/// every backslash.
#[must_use]
pub fn normalize_cell(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\\', "\\\\")
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened, or any error
/// reported by [`parse_tests`].
pub fn load_tests(path: &Path) -> Result<Vec<Test>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tests(file)
}

/// Parses manifest rows from `input`, preserving row order.
///
/// # Errors
///
/// Returns an error if the header row is absent or lacks a schema column,
/// if a record is malformed, or if a row lacks an id or name or repeats an id.
pub fn parse_tests<R: Read>(input: R) -> Result<Vec<Test>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header = reader
        .headers()
        .map_err(|source| LoadError::Csv { record: 0, source })?
        .clone();
    if header.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let columns = ColumnMap::resolve(&header)?;

    let mut seen = HashSet::new();
    let mut tests = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            record: idx,
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let id = columns
            .cell(&record, Field::Id)
            .ok_or(LoadError::MissingId { row: idx + 1 })?;
        if !seen.insert(id.clone()) {
            return Err(LoadError::DuplicateId(id));
        }
        let name = columns
            .cell(&record, Field::Name)
            .ok_or_else(|| LoadError::MissingName { id: id.clone() })?;

        tests.push(Test {
            action: Test::action_path(&id),
            name,
            comment: columns.cell(&record, Field::Comment),
            complexity: columns.cell(&record, Field::Complexity),
            approval: columns.cell(&record, Field::Approval),
            hash_algorithm: columns.cell(&record, Field::HashAlgorithm),
            rdfc10: VariantKind::from_cell(columns.cell(&record, Field::Rdfc10).as_deref()),
            rdfc10map: VariantKind::from_cell(columns.cell(&record, Field::Rdfc10Map).as_deref()),
            id,
        });
    }

    debug!("loaded {} tests", tests.len());
    Ok(tests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "test,name,comment,complexity,approval,hashAlgorithm,rdfc10,rdfc10map\n";

    fn parse(body: &str) -> Result<Vec<Test>, LoadError> {
        parse_tests(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn loads_rows_in_order() {
        let tests = parse(
            "test002,Second,,1,,,TRUE,FALSE\n\
             test001,First,A comment,0,Approved,SHA384,TRUE,TRUE\n",
        )
        .expect("parse");
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0].id, "test002");
        assert_eq!(tests[1].id, "test001");
        assert_eq!(tests[1].comment.as_deref(), Some("A comment"));
        assert_eq!(tests[1].approval.as_deref(), Some("Approved"));
        assert_eq!(tests[1].hash_algorithm.as_deref(), Some("SHA384"));
        assert_eq!(tests[1].action, "rdfc10/test001-in.nq");
        assert_eq!(tests[1].rdfc10map, VariantKind::Standard);
    }

    #[test]
    fn empty_cells_are_absent() {
        let tests = parse("test001,First,,,,,TRUE,FALSE\n").expect("parse");
        let test = &tests[0];
        assert_eq!(test.comment, None);
        assert_eq!(test.complexity, None);
        assert_eq!(test.approval, None);
        assert_eq!(test.hash_algorithm, None);
    }

    #[test]
    fn carriage_returns_become_newlines() {
        let tests = parse("test001,First,\"line one\r\nline two\rline three\",0,,,TRUE,FALSE\n")
            .expect("parse");
        assert_eq!(
            tests[0].comment.as_deref(),
            Some("line one\nline two\nline three")
        );
    }

    #[test]
    fn backslashes_are_doubled() {
        let tests = parse("test001,First,a\\b,0,,,TRUE,FALSE\n").expect("parse");
        assert_eq!(tests[0].comment.as_deref(), Some("a\\\\b"));
        assert_eq!(normalize_cell("\\\\"), "\\\\\\\\");
    }

    #[test]
    fn columns_may_appear_in_any_order_with_extras() {
        let input = "rdfc10map,rdfc10,notes,hashAlgorithm,approval,complexity,comment,name,test\n\
                     FALSE,TRUE,ignored,,,3,,Reordered,t9\n";
        let tests = parse_tests(input.as_bytes()).expect("parse");
        assert_eq!(tests[0].id, "t9");
        assert_eq!(tests[0].name, "Reordered");
        assert_eq!(tests[0].rdfc10, VariantKind::Standard);
        assert_eq!(tests[0].rdfc10map, VariantKind::Disabled);
    }

    #[test]
    fn missing_header_is_an_error() {
        let err = parse_tests("".as_bytes()).expect_err("empty input");
        assert!(matches!(err, LoadError::MissingHeader), "{err:?}");
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_tests("test,name\nt1,One\n".as_bytes()).expect_err("short header");
        assert!(matches!(err, LoadError::MissingColumn("comment")), "{err:?}");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse("t1,One,,0,,,TRUE,FALSE\nt1,Again,,0,,,TRUE,FALSE\n")
            .expect_err("duplicate");
        assert!(matches!(err, LoadError::DuplicateId(ref id) if id == "t1"), "{err:?}");
    }

    #[test]
    fn row_without_id_is_rejected() {
        let err = parse(",Nameless,,0,,,TRUE,FALSE\n").expect_err("no id");
        assert!(matches!(err, LoadError::MissingId { row: 1 }), "{err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_tests(Path::new("/nonexistent/manifest.csv")).expect_err("missing");
        assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
    }
}
