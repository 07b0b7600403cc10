//! Name matching and roster reconciliation.
//!
//! This module provides the core matching functionality:
//!
//! - [`NameMatcher`]: Decides whether and how one name matches a candidate set
//! - [`ReconciliationEngine`]: Runs the matcher over both rosters and classifies the results
//! - [`ExclusionPolicy`]: Excluded roles and ignored name fragments
//!
//! ## Matching Rules
//!
//! Rules are evaluated in strict order; the first match wins:
//!
//! 1. **Direct**: Case-insensitive equality
//! 2. **Alias**: The alias table links the two names. From the authoritative
//!    side every declared alias is tried against the sign-up names. From the
//!    sign-up side the declared canonical name must itself be on the roster.
//! 3. **Pattern**: Both names contain the same ignored fragment. This is a
//!    loose legacy fallback, not exact matching.
//!
//! ## Classification
//!
//! | Side | Matched | Unmatched |
//! |------|---------|-----------|
//! | Online member | `member_matches` | `excluded` if any excluded role, else `missing` |
//! | Offline member | not classified | not classified |
//! | Sign-up name | `signup_matches` | `extra_in_signup` |
//!
//! ## Example
//!
//! ```rust
//! use roster_check::aliases::AliasTable;
//! use roster_check::core::member::{MemberRecord, MemberStatus};
//! use roster_check::matching::{ExclusionPolicy, ReconciliationEngine};
//!
//! let members = vec![
//!     MemberRecord::new("Alice", MemberStatus::Online),
//!     MemberRecord::new("Bob", MemberStatus::Online).with_roles(["Bomber"]),
//! ];
//! let signups = vec!["alice".to_string()];
//!
//! let aliases = AliasTable::new();
//! let policy = ExclusionPolicy::default();
//! let result = ReconciliationEngine::new(&aliases, &policy).reconcile(&members, &signups);
//!
//! assert!(result.missing.is_empty());
//! assert_eq!(result.excluded, ["Bob"]);
//! ```

pub mod engine;
pub mod matcher;
pub mod policy;

pub use engine::{MatchCounts, Reconciliation, ReconciliationEngine, RosterSummary};
pub use matcher::{CandidateSet, Direction, NameMatcher};
pub use policy::ExclusionPolicy;
