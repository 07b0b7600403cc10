//! Parsers for the three input files of a reconciliation run.
//!
//! This module provides parsers for:
//!
//! - **Member roster**: Tab-separated, quoted `name`, `status`, `roles` columns
//!   with a header line
//! - **Sign-up list**: One free-text name per line
//! - **Alias file**: `Canonical: alias1, alias2` declarations
//!
//! Malformed lines are logged and skipped rather than failing the whole run;
//! only I/O failures and oversized inputs are errors.
//!
//! ## Example
//!
//! ```rust
//! use roster_check::parsing::members::parse_members_text;
//!
//! let text = "\"Name\"\t\"Status\"\t\"Roles\"\n\"Alice\"\t\"Online\"\t\"Officer;Bomber\"\n";
//! let members = parse_members_text(text).unwrap();
//!
//! assert_eq!(members[0].name, "Alice");
//! assert_eq!(members[0].roles, ["Officer", "Bomber"]);
//! ```
//!
//! ## Member Roster Columns
//!
//! | Column | Description | Example |
//! |--------|-------------|---------|
//! | 1 | Display name | `"xSarge"` |
//! | 2 | Status | `"Online"` |
//! | 3 | `;`-separated roles | `"Officer;Bomber"` |

use thiserror::Error;

use crate::utils::validation::MAX_RECORDS;

pub mod aliases;
pub mod members;
pub mod signups;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = MAX_RECORDS)]
    TooManyRecords(usize),
}
