use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

/// A lowercased alias that was re-declared for a different canonical name.
/// The later declaration replaced the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasCollision {
    pub alias: String,
    pub previous: String,
    pub current: String,
}

/// Bidirectional alias lookup shared by both matching directions
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// Lowercased canonical name -> aliases in declaration order
    canonical_to_aliases: HashMap<String, Vec<String>>,

    /// Lowercased alias -> canonical name
    alias_to_canonical: HashMap<String, String>,

    /// Canonical names as first spelled, in first-declaration order
    order: Vec<String>,

    collisions: Vec<AliasCollision>,
}

impl AliasTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(canonical, aliases)` declarations.
    ///
    /// Declarations with an empty canonical name or an empty alias list are
    /// skipped, as are individual empty aliases.
    pub fn from_declarations<I, C, A, S>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (C, A)>,
        C: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (canonical, aliases) in declarations {
            table.declare(canonical, aliases);
        }
        table
    }

    /// Add one declaration. Only used while the table is being built.
    pub fn declare<C, A, S>(&mut self, canonical: C, aliases: A)
    where
        C: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let canonical = canonical.into().trim().to_string();
        if canonical.is_empty() {
            return;
        }
        let canonical_key = canonical.to_lowercase();

        for alias in aliases {
            let alias = alias.into().trim().to_string();
            if alias.is_empty() {
                continue;
            }

            let key = alias.to_lowercase();
            if let Some(previous) = self.alias_to_canonical.get(&key) {
                if previous.to_lowercase() != canonical_key {
                    warn!(
                        alias = %alias,
                        previous = %previous,
                        current = %canonical,
                        "alias re-declared for a different name, keeping the later one"
                    );
                    self.collisions.push(AliasCollision {
                        alias: alias.clone(),
                        previous: previous.clone(),
                        current: canonical.clone(),
                    });
                }
            }
            self.alias_to_canonical.insert(key, canonical.clone());

            let list = self
                .canonical_to_aliases
                .entry(canonical_key.clone())
                .or_insert_with(|| {
                    self.order.push(canonical.clone());
                    Vec::new()
                });
            list.push(alias);
        }
    }

    /// Aliases declared for `canonical`, in declaration order (empty if none).
    /// The canonical lookup is case-insensitive.
    pub fn aliases_of(&self, canonical: &str) -> &[String] {
        self.canonical_to_aliases
            .get(&canonical.to_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Canonical name an alias maps to (case-insensitive)
    pub fn canonical_of(&self, alias: &str) -> Option<&str> {
        self.alias_to_canonical
            .get(&alias.to_lowercase())
            .map(String::as_str)
    }

    /// Iterate `(canonical, aliases)` in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|c| (c.as_str(), self.aliases_of(c)))
    }

    /// Alias re-declarations that overwrote an earlier mapping
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    /// Number of canonical names with at least one alias
    pub fn len(&self) -> usize {
        self.canonical_to_aliases.len()
    }

    /// Number of distinct lowercased aliases
    pub fn alias_count(&self) -> usize {
        self.alias_to_canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical_to_aliases.is_empty()
    }
}
