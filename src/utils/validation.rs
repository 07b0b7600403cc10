//! Centralized validation and helper functions.

/// Maximum number of records allowed in a single input file
pub const MAX_RECORDS: usize = 100_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Strip the surrounding double quotes from a roster field.
///
/// # Examples
///
/// ```
/// use roster_check::utils::validation::extract_quoted_field;
///
/// assert_eq!(extract_quoted_field(" \"Alice\" "), Some("Alice"));
/// assert_eq!(extract_quoted_field("\"\""), Some(""));
/// assert_eq!(extract_quoted_field("Alice"), None);
/// assert_eq!(extract_quoted_field("\""), None);
/// ```
#[must_use]
pub fn extract_quoted_field(field: &str) -> Option<&str> {
    let field = field.trim();
    if field.len() < 2 {
        return None;
    }
    field.strip_prefix('"')?.strip_suffix('"')
}

/// Split a `;`-separated role list into trimmed, non-empty labels
#[must_use]
pub fn split_roles(roles: &str) -> Vec<String> {
    roles
        .split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_extract_quoted_field_requires_both_quotes() {
        assert_eq!(extract_quoted_field("\"Online"), None);
        assert_eq!(extract_quoted_field("Online\""), None);
        assert_eq!(extract_quoted_field("\"Guild Master\""), Some("Guild Master"));
    }

    #[test]
    fn test_split_roles() {
        assert_eq!(split_roles("Bomber; Officer ;;"), ["Bomber", "Officer"]);
        assert!(split_roles("").is_empty());
    }
}
