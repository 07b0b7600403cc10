//! Alias table mapping authoritative names to their declared alternatives.
//!
//! The table holds a single many-to-one relation viewed from both sides:
//!
//! - **canonical → aliases**: declaration order preserved, duplicates kept
//! - **alias → canonical**: keyed by the lowercased alias, last declaration wins
//!
//! Both maps are filled in lockstep while the table is built, and the table is
//! read-only afterwards. Aliases are not transitive: an alias of an alias is not
//! an alias of the canonical name.
//!
//! ## Example
//!
//! ```rust
//! use roster_check::aliases::AliasTable;
//!
//! let table = AliasTable::from_declarations([
//!     ("xSarge", vec!["Sarge", "SargeAlt"]),
//! ]);
//!
//! assert_eq!(table.aliases_of("xSarge"), ["Sarge", "SargeAlt"]);
//! assert_eq!(table.canonical_of("sarge"), Some("xSarge"));
//! ```

pub mod table;

pub use table::{AliasCollision, AliasTable};
