use serde::Serialize;
use tracing::debug;

use crate::aliases::AliasTable;
use crate::core::member::MemberRecord;
use crate::core::types::{MatchKind, NameMatch};
use crate::matching::matcher::{CandidateSet, Direction, NameMatcher};
use crate::matching::policy::ExclusionPolicy;

/// Result of reconciling the authoritative roster against the sign-up list.
///
/// Every collection keeps the order of its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Online members with no sign-up match and no excluded role
    pub missing: Vec<String>,

    /// Online members with no sign-up match that hold an excluded role
    pub excluded: Vec<String>,

    /// Sign-up names with no match on the authoritative roster
    pub extra_in_signup: Vec<String>,

    /// Matches found for online members
    pub member_matches: Vec<NameMatch>,

    /// Matches found for sign-up names
    pub signup_matches: Vec<NameMatch>,
}

/// Tally of matches per rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub direct: usize,
    pub alias: usize,
    pub pattern: usize,
}

impl MatchCounts {
    pub fn from_matches(matches: &[NameMatch]) -> Self {
        let mut counts = Self::default();
        for m in matches {
            match m.kind {
                MatchKind::Direct => counts.direct += 1,
                MatchKind::Alias => counts.alias += 1,
                MatchKind::Pattern => counts.pattern += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.direct + self.alias + self.pattern
    }
}

impl Reconciliation {
    /// Per-rule tally of the member-side matches
    pub fn member_match_counts(&self) -> MatchCounts {
        MatchCounts::from_matches(&self.member_matches)
    }

    /// Matches recorded in both directions
    pub fn total_matches(&self) -> usize {
        self.member_matches.len() + self.signup_matches.len()
    }

    /// True when nobody is missing and no sign-up name is unknown
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra_in_signup.is_empty()
    }
}

/// Headline numbers for a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total_members: usize,
    pub online_members: usize,
    pub signup_names: usize,
    pub successful_matches: usize,
    pub missing: usize,
    pub excluded: usize,
    pub extra_in_signup: usize,
}

impl RosterSummary {
    pub fn new(members: &[MemberRecord], signups: &[String], result: &Reconciliation) -> Self {
        Self {
            total_members: members.len(),
            online_members: members.iter().filter(|m| m.is_online()).count(),
            signup_names: signups.len(),
            successful_matches: result.total_matches(),
            missing: result.missing.len(),
            excluded: result.excluded.len(),
            extra_in_signup: result.extra_in_signup.len(),
        }
    }
}

/// Drives the name matcher over both rosters
pub struct ReconciliationEngine<'a> {
    aliases: &'a AliasTable,
    policy: &'a ExclusionPolicy,
}

impl<'a> ReconciliationEngine<'a> {
    pub fn new(aliases: &'a AliasTable, policy: &'a ExclusionPolicy) -> Self {
        Self { aliases, policy }
    }

    /// Classify every online member and every sign-up name.
    ///
    /// Online members are matched against all sign-up names. Sign-up names are
    /// matched against every member regardless of status, so offline members
    /// still count as known names.
    pub fn reconcile(&self, members: &[MemberRecord], signups: &[String]) -> Reconciliation {
        let matcher = NameMatcher::new(self.aliases, &self.policy.ignored_fragments);
        let signup_set = CandidateSet::new(signups.iter().map(String::as_str));
        let member_set = CandidateSet::new(members.iter().map(|m| m.name.as_str()));

        let mut result = Reconciliation::default();

        for member in members.iter().filter(|m| m.is_online()) {
            match matcher.find_match(&member.name, &signup_set, Direction::MemberToSignup) {
                Some(found) => {
                    debug!(
                        member = %member.name,
                        signup = %found.matched,
                        kind = %found.kind,
                        "member matched"
                    );
                    result.member_matches.push(found);
                }
                None if member.has_any_role(&self.policy.excluded_roles) => {
                    debug!(member = %member.name, "unmatched member has an excluded role");
                    result.excluded.push(member.name.clone());
                }
                None => result.missing.push(member.name.clone()),
            }
        }

        for name in signups {
            match matcher.find_match(name, &member_set, Direction::SignupToMember) {
                Some(found) => result.signup_matches.push(found),
                None => {
                    debug!(signup = %name, "sign-up name not on roster");
                    result.extra_in_signup.push(name.clone());
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::member::MemberStatus;

    fn member(name: &str, status: &str, roles: &[&str]) -> MemberRecord {
        MemberRecord::new(name, MemberStatus::parse(status)).with_roles(roles.iter().copied())
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_basic_scenario() {
        let members = vec![
            member("Alice", "Online", &[]),
            member("Bob", "Online", &["Bomber"]),
            member("Carol", "Offline", &[]),
        ];
        let signups = names(&["alice"]);
        let table = AliasTable::new();
        let policy = ExclusionPolicy::default();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert!(result.missing.is_empty());
        assert_eq!(result.excluded, ["Bob"]);
        assert!(result.extra_in_signup.is_empty());
        assert_eq!(result.member_matches.len(), 1);
        assert_eq!(result.member_matches[0].kind, MatchKind::Direct);
        assert_eq!(result.member_matches[0].canonical, "Alice");
        assert_eq!(result.signup_matches.len(), 1);
    }

    #[test]
    fn test_alias_scenario() {
        let members = vec![member("xSarge", "Online", &[])];
        let signups = names(&["Sarge"]);
        let table = AliasTable::from_declarations([("xSarge", vec!["Sarge"])]);
        let policy = ExclusionPolicy::none();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert!(result.missing.is_empty());
        assert!(result.extra_in_signup.is_empty());
        let m = &result.member_matches[0];
        assert_eq!(m.kind, MatchKind::Alias);
        assert_eq!(m.canonical, "xSarge");
        assert_eq!(m.matched, "Sarge");
        assert_eq!(result.signup_matches[0].kind, MatchKind::Alias);
    }

    #[test]
    fn test_alias_canonical_casing_agrees_in_both_directions() {
        let members = vec![member("xSarge", "Online", &[])];
        let signups = names(&["Sarge"]);
        let table = AliasTable::from_declarations([("xsarge", vec!["Sarge"])]);
        let policy = ExclusionPolicy::none();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert!(result.missing.is_empty());
        assert!(result.extra_in_signup.is_empty());
        assert_eq!(result.member_matches.len(), 1);
        assert_eq!(result.member_matches[0].kind, MatchKind::Alias);
        assert_eq!(result.member_matches[0].canonical, "xSarge");
        assert_eq!(result.member_matches[0].matched, "Sarge");
        assert_eq!(result.signup_matches.len(), 1);
        assert_eq!(result.signup_matches[0].kind, MatchKind::Alias);
        assert_eq!(result.signup_matches[0].canonical, "xSarge");
    }

    #[test]
    fn test_excluded_role_beats_missing() {
        let members = vec![
            member("Dave", "Online", &["Officer", "bomber"]),
            member("Eve", "Online", &["GUILD MASTER"]),
            member("Frank", "Online", &["Officer"]),
        ];
        let table = AliasTable::new();
        let policy = ExclusionPolicy::default();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &[]);

        assert_eq!(result.excluded, ["Dave", "Eve"]);
        assert_eq!(result.missing, ["Frank"]);
    }

    #[test]
    fn test_offline_members_not_reported_but_matchable() {
        let members = vec![
            member("Carol", "Offline", &[]),
            member("Gina", "Away", &[]),
        ];
        let signups = names(&["CAROL", "gina"]);
        let table = AliasTable::new();
        let policy = ExclusionPolicy::default();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert!(result.missing.is_empty());
        assert!(result.excluded.is_empty());
        assert!(result.member_matches.is_empty());
        assert!(result.extra_in_signup.is_empty());
        assert_eq!(result.signup_matches.len(), 2);
    }

    #[test]
    fn test_stale_alias_is_extra() {
        let members = vec![member("Alice", "Online", &[])];
        let signups = names(&["alice", "OldMain"]);
        let table = AliasTable::from_declarations([("Departed", vec!["OldMain"])]);
        let policy = ExclusionPolicy::none();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert_eq!(result.extra_in_signup, ["OldMain"]);
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let members = vec![
            member("Zed", "Online", &[]),
            member("Amy", "Online", &[]),
            member("Max", "Online", &[]),
        ];
        let signups = names(&["Yan", "Bea"]);
        let table = AliasTable::new();
        let policy = ExclusionPolicy::none();
        let engine = ReconciliationEngine::new(&table, &policy);

        let first = engine.reconcile(&members, &signups);
        let second = engine.reconcile(&members, &signups);

        assert_eq!(first.missing, ["Zed", "Amy", "Max"]);
        assert_eq!(first.extra_in_signup, ["Yan", "Bea"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicates_processed_independently() {
        let members = vec![member("Ann", "Online", &[]), member("Ann", "Online", &[])];
        let signups = names(&["Kim", "Kim"]);
        let table = AliasTable::new();
        let policy = ExclusionPolicy::none();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        assert_eq!(result.missing, ["Ann", "Ann"]);
        assert_eq!(result.extra_in_signup, ["Kim", "Kim"]);
    }

    #[test]
    fn test_empty_inputs() {
        let table = AliasTable::new();
        let policy = ExclusionPolicy::default();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&[], &[]);

        assert_eq!(result, Reconciliation::default());
        assert!(result.is_clean());
    }

    #[test]
    fn test_counts_and_summary() {
        let members = vec![
            member("Alice", "Online", &[]),
            member("xSarge", "Online", &[]),
            member("MegaSargent", "Online", &[]),
            member("Nobody", "Offline", &[]),
        ];
        let signups = names(&["alice", "Sarge", "sarge-alt"]);
        let table = AliasTable::from_declarations([("xSarge", vec!["Sarge"])]);
        let policy = ExclusionPolicy::default();

        let result = ReconciliationEngine::new(&table, &policy).reconcile(&members, &signups);

        let counts = result.member_match_counts();
        assert_eq!(counts.direct, 1);
        assert_eq!(counts.alias, 1);
        assert_eq!(counts.pattern, 1);
        assert_eq!(counts.total(), 3);

        let summary = RosterSummary::new(&members, &signups, &result);
        assert_eq!(summary.total_members, 4);
        assert_eq!(summary.online_members, 3);
        assert_eq!(summary.signup_names, 3);
        assert_eq!(summary.successful_matches, 6);
        assert_eq!(summary.missing, 0);
    }
}
