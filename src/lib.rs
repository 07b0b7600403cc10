//! # roster-check
//!
//! A library for reconciling a membership roster against a sign-up list.
//!
//! The two lists come from different places and rarely spell names the same
//! way. A member called "xSarge" on the roster may sign up as "Sarge", and
//! casing is never reliable. `roster-check` matches names across the two lists
//! with a small set of explicit rules so that spelling differences do not show
//! up as false discrepancies.
//!
//! ## Features
//!
//! - **Case-insensitive matching**: "Alice" and "ALICE" are the same name
//! - **Alias table**: Declared alternative names, looked up in both directions
//! - **Pattern fallback**: Legacy name fragments that count as a match on both sides
//! - **Role exclusions**: Unmatched members with certain roles are reported separately
//! - **Bidirectional report**: Missing members and unknown sign-up names
//!
//! ## Example
//!
//! ```rust
//! use roster_check::{AliasTable, ExclusionPolicy, MemberRecord, MemberStatus, ReconciliationEngine};
//!
//! let members = vec![
//!     MemberRecord::new("xSarge", MemberStatus::Online),
//!     MemberRecord::new("Carol", MemberStatus::Online),
//! ];
//! let signups = vec!["Sarge".to_string()];
//! let aliases = AliasTable::from_declarations([("xSarge", vec!["Sarge"])]);
//!
//! let policy = ExclusionPolicy::none();
//! let result = ReconciliationEngine::new(&aliases, &policy).reconcile(&members, &signups);
//!
//! assert_eq!(result.missing, ["Carol"]);
//! assert_eq!(result.member_matches[0].matched, "Sarge");
//! ```
//!
//! ## Modules
//!
//! - [`aliases`]: Bidirectional alias table
//! - [`core`]: Member records and match results
//! - [`matching`]: Name matcher and reconciliation engine
//! - [`parsing`]: Parsers for the roster, sign-up and alias files
//! - [`config`]: JSON run configuration
//! - [`cli`]: Command-line interface implementation

pub mod aliases;
pub mod cli;
pub mod config;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::aliases::AliasTable;
pub use crate::core::member::{MemberRecord, MemberStatus};
pub use crate::core::types::{MatchKind, NameMatch};
pub use crate::matching::engine::{Reconciliation, ReconciliationEngine};
pub use crate::matching::policy::ExclusionPolicy;
