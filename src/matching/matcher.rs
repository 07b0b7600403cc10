use std::collections::HashMap;

use crate::aliases::AliasTable;
use crate::core::types::{MatchKind, NameMatch};

/// Ordered candidate names with a precomputed lowercase index
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    names: Vec<String>,

    /// Lowercased names, parallel to `names`
    lowered: Vec<String>,

    /// Lowercased name -> index of its first occurrence
    index: HashMap<String, usize>,
}

impl CandidateSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

        let mut index = HashMap::with_capacity(lowered.len());
        for (i, lower) in lowered.iter().enumerate() {
            index.entry(lower.clone()).or_insert(i);
        }

        Self {
            names,
            lowered,
            index,
        }
    }

    /// First candidate equal to `name`, ignoring case
    pub fn find(&self, name: &str) -> Option<&str> {
        self.find_lowered(&name.to_lowercase())
    }

    fn find_lowered(&self, lowered: &str) -> Option<&str> {
        self.index.get(lowered).map(|&i| self.names[i].as_str())
    }

    fn iter_with_lowered(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .zip(&self.lowered)
            .map(|(n, l)| (n.as_str(), l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Which side of the reconciliation the query name comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Query is an authoritative name, candidates are sign-up names
    MemberToSignup,
    /// Query is a sign-up name, candidates are authoritative names
    SignupToMember,
}

/// Matches a single name against a candidate set.
///
/// Rules are tried in a fixed order and the first one that matches wins:
///
/// 1. **Direct**: case-insensitive equality
/// 2. **Alias**: a declared alias links the query to a candidate
/// 3. **Pattern**: query and candidate share an ignored fragment
///
/// The pattern rule is an approximate legacy fallback. A single shared fragment
/// is enough, whatever the rest of either name looks like.
pub struct NameMatcher<'a> {
    aliases: &'a AliasTable,

    /// Lowercased non-empty ignored fragments, paired with their original text
    fragments: Vec<(String, &'a str)>,
}

impl<'a> NameMatcher<'a> {
    pub fn new(aliases: &'a AliasTable, ignored_fragments: &'a [String]) -> Self {
        let fragments = ignored_fragments
            .iter()
            .filter(|f| !f.trim().is_empty())
            .map(|f| (f.to_lowercase(), f.as_str()))
            .collect();

        Self { aliases, fragments }
    }

    /// Find how `query` matches `candidates`, or `None` if no rule applies
    pub fn find_match(
        &self,
        query: &str,
        candidates: &CandidateSet,
        direction: Direction,
    ) -> Option<NameMatch> {
        let lowered = query.to_lowercase();

        direct_match(query, &lowered, candidates, direction)
            .or_else(|| self.alias_match(query, candidates, direction))
            .or_else(|| self.pattern_match(query, &lowered, candidates, direction))
    }

    fn alias_match(
        &self,
        query: &str,
        candidates: &CandidateSet,
        direction: Direction,
    ) -> Option<NameMatch> {
        match direction {
            Direction::MemberToSignup => self
                .aliases
                .aliases_of(query)
                .iter()
                .find_map(|alias| candidates.find(alias))
                .map(|found| NameMatch::new(MatchKind::Alias, query, found)),
            Direction::SignupToMember => {
                // Guard against aliases that point at someone no longer on the roster
                let canonical = self.aliases.canonical_of(query)?;
                candidates
                    .find(canonical)
                    .map(|found| NameMatch::new(MatchKind::Alias, found, query))
            }
        }
    }

    fn pattern_match(
        &self,
        query: &str,
        lowered: &str,
        candidates: &CandidateSet,
        direction: Direction,
    ) -> Option<NameMatch> {
        if self.fragments.is_empty() {
            return None;
        }

        let shared: Vec<&(String, &str)> = self
            .fragments
            .iter()
            .filter(|(f, _)| lowered.contains(f.as_str()))
            .collect();
        if shared.is_empty() {
            return None;
        }

        candidates
            .iter_with_lowered()
            .find_map(|(candidate, candidate_lower)| {
                shared
                    .iter()
                    .find(|(f, _)| candidate_lower.contains(f.as_str()))
                    .map(|(_, fragment)| {
                        oriented(MatchKind::Pattern, query, candidate, direction)
                            .with_fragment(*fragment)
                    })
            })
    }
}

fn direct_match(
    query: &str,
    lowered: &str,
    candidates: &CandidateSet,
    direction: Direction,
) -> Option<NameMatch> {
    candidates
        .find_lowered(lowered)
        .map(|found| oriented(MatchKind::Direct, query, found, direction))
}

/// Build a match with the authoritative name as `canonical` and the sign-up
/// name as `matched`, whichever side the query came from
fn oriented(kind: MatchKind, query: &str, candidate: &str, direction: Direction) -> NameMatch {
    match direction {
        Direction::MemberToSignup => NameMatch::new(kind, query, candidate),
        Direction::SignupToMember => NameMatch::new(kind, candidate, query),
    }
}
