//! Core data types for roster reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`MemberRecord`]: A single entry from the authoritative membership roster
//! - [`MemberStatus`]: Online/offline presence of a member
//! - [`NameMatch`], [`MatchKind`]: How a name was matched against the other roster
//!
//! ## Name Comparison
//!
//! Names keep their original casing for display, but every comparison in the
//! matcher is case-insensitive:
//!
//! | Authoritative | Sign-up  | Matches? |
//! |---------------|----------|----------|
//! | Alice         | alice    | yes (direct) |
//! | xSarge        | Sarge    | only via an alias or an ignored fragment |
//! | Bob           | Bobby    | no |
//!
//! There is no fuzzy matching. Name equivalence beyond casing is defined only
//! through explicit aliases and the ignored-fragment list.

pub mod member;
pub mod types;
