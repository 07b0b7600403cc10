use std::path::Path;

use tracing::{debug, warn};

use crate::core::member::{MemberRecord, MemberStatus};
use crate::parsing::ParseError;
use crate::utils::validation::{check_record_limit, extract_quoted_field, split_roles};

/// Parse a member roster export
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_members_file(path: &Path) -> Result<Vec<MemberRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let members = parse_members_text(&content)?;
    debug!(path = %path.display(), count = members.len(), "parsed member roster");
    Ok(members)
}

/// Parse roster text. The first line is always treated as a header.
///
/// Lines that are not three quoted, tab-separated fields are skipped with a warning.
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the number of members exceeds the maximum.
pub fn parse_members_text(text: &str) -> Result<Vec<MemberRecord>, ParseError> {
    let mut members = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if i == 0 || line.is_empty() {
            continue;
        }

        // Line numbers in warnings are 1-based for user friendliness
        let line_num = i + 1;

        let member = match parse_member_line(line) {
            Ok(member) => member,
            Err(reason) => {
                warn!("skipping malformed roster line {line_num}: {reason}");
                continue;
            }
        };

        if check_record_limit(members.len()).is_some() {
            return Err(ParseError::TooManyRecords(members.len() + 1));
        }

        members.push(member);
    }

    Ok(members)
}

fn parse_member_line(line: &str) -> Result<MemberRecord, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return Err(format!(
            "expected 3 tab-separated fields, got {}",
            fields.len()
        ));
    }

    let name = extract_quoted_field(fields[0]).ok_or("name field is not properly quoted")?;
    let status = extract_quoted_field(fields[1]).ok_or("status field is not properly quoted")?;
    let roles = extract_quoted_field(fields[2]).ok_or("roles field is not properly quoted")?;

    let name = name.trim();
    if name.is_empty() {
        return Err("name field is empty".to_string());
    }

    Ok(MemberRecord::new(name, MemberStatus::parse(status)).with_roles(split_roles(roles)))
}
