use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::aliases::AliasTable;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Load the alias file. A missing file yields an empty table.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_aliases_file(path: &Path) -> Result<AliasTable, ParseError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "alias file not found, using no aliases");
            return Ok(AliasTable::new());
        }
        Err(e) => return Err(e.into()),
    };

    let table = parse_aliases_text(&content)?;
    debug!(
        path = %path.display(),
        names = table.len(),
        aliases = table.alias_count(),
        "loaded alias table"
    );
    Ok(table)
}

/// Parse alias declarations of the form `Canonical: alias1, alias2`.
///
/// Blank lines and `#` comments are ignored. Lines without a `:` are skipped
/// with a warning; declarations with an empty side are skipped silently.
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the number of declarations exceeds the maximum.
pub fn parse_aliases_text(text: &str) -> Result<AliasTable, ParseError> {
    let mut table = AliasTable::new();
    let mut declarations = 0;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((canonical, aliases)) = line.split_once(':') else {
            warn!("skipping malformed alias line {}: {line}", i + 1);
            continue;
        };

        let canonical = canonical.trim();
        let aliases = aliases.trim();
        if canonical.is_empty() || aliases.is_empty() {
            continue;
        }

        if check_record_limit(declarations).is_some() {
            return Err(ParseError::TooManyRecords(declarations + 1));
        }

        table.declare(canonical, aliases.split(','));
        declarations += 1;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases_text() {
        let text = r"# Guild name: sign-up names
xSarge: Sarge, Sergeant

Alice:Ally,  , Al
not an alias line
: Orphan
Empty:
";

        let table = parse_aliases_text(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.aliases_of("xSarge"), ["Sarge", "Sergeant"]);
        assert_eq!(table.aliases_of("Alice"), ["Ally", "Al"]);
        assert_eq!(table.canonical_of("sergeant"), Some("xSarge"));
        assert_eq!(table.canonical_of("Orphan"), None);
        assert!(table.aliases_of("Empty").is_empty());
    }

    #[test]
    fn test_only_first_colon_splits() {
        let table = parse_aliases_text("Main: Alt:One").unwrap();
        assert_eq!(table.aliases_of("Main"), ["Alt:One"]);
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = parse_aliases_file(&dir.path().join("sheet-names.txt")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_aliases_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet-names.txt");
        std::fs::write(&path, "xSarge: Sarge\n").unwrap();

        let table = parse_aliases_file(&path).unwrap();
        assert_eq!(table.canonical_of("SARGE"), Some("xSarge"));
    }
}
