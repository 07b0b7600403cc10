//! Command-line interface for roster-check.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Compare the member roster with the sign-up list
//! - **aliases**: List the alias table and any conflicting declarations
//! - **lookup**: Explain how a single name matches the other roster
//!
//! ## Usage
//!
//! ```text
//! # Reconcile using the default data/ files
//! roster-check reconcile
//!
//! # Explicit inputs, JSON output for scripting
//! roster-check reconcile --members guild.txt --signups sheet.txt --format json
//!
//! # Why is this sign-up name reported as unknown?
//! roster-check lookup "Sarge" --side signups
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::aliases::AliasTable;
use crate::config::RosterConfig;
use crate::core::member::MemberRecord;
use crate::parsing;
use crate::parsing::signups::SignupCleaner;

pub mod aliases;
pub mod lookup;
pub mod reconcile;

#[derive(Parser)]
#[command(name = "roster-check")]
#[command(version)]
#[command(about = "Reconcile a member roster against a sign-up list")]
#[command(
    long_about = "roster-check compares an authoritative member roster with a sign-up list and reports:\n- Online members who have not signed up\n- Members left out of the report because of their roles\n- Sign-up names that match nobody on the roster\n\nNames match case-insensitively, through a declared alias table, or through a short list of legacy name fragments."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report discrepancies between the roster and the sign-up list
    Reconcile(reconcile::ReconcileArgs),

    /// Show the alias table
    Aliases(aliases::AliasesArgs),

    /// Explain how one name matches the other roster
    Lookup(lookup::LookupArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Input files and policy overrides shared by commands that need both rosters
#[derive(clap::Args)]
pub struct RosterArgs {
    /// Member roster export (tab-separated, quoted fields, header line)
    #[arg(short, long, default_value = "data/guild.txt")]
    pub members: PathBuf,

    /// Sign-up list, one name per line
    #[arg(short, long, default_value = "data/sheet.txt")]
    pub signups: PathBuf,

    /// Alias declarations (`Name: alias1, alias2`); optional
    #[arg(short, long, default_value = "data/sheet-names.txt")]
    pub aliases: PathBuf,

    /// JSON config with excluded roles, ignored fragments and junk markers
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Role excluded from the missing report (repeatable, replaces the configured list)
    #[arg(long = "exclude-role", value_name = "ROLE")]
    pub exclude_roles: Vec<String>,

    /// Name fragment accepted as a pattern match (repeatable, replaces the configured list)
    #[arg(long = "ignore-fragment", value_name = "FRAGMENT")]
    pub ignore_fragments: Vec<String>,
}

/// Everything a reconciliation needs, loaded from disk
pub struct LoadedRosters {
    pub config: RosterConfig,
    pub aliases: AliasTable,
    pub members: Vec<MemberRecord>,
    pub signups: Vec<String>,
}

impl RosterArgs {
    /// Resolve the config file and command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> anyhow::Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::load_from_file(path)?,
            None => RosterConfig::default(),
        };

        if !self.exclude_roles.is_empty() {
            config.policy = config
                .policy
                .with_excluded_roles(self.exclude_roles.iter().cloned());
        }
        if !self.ignore_fragments.is_empty() {
            config.policy = config
                .policy
                .with_ignored_fragments(self.ignore_fragments.iter().cloned());
        }

        Ok(config)
    }

    /// Load config, aliases and both rosters
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be read or exceeds the record limit.
    pub fn load(&self, verbose: bool) -> anyhow::Result<LoadedRosters> {
        let config = self.resolve_config()?;

        let aliases = parsing::aliases::parse_aliases_file(&self.aliases)?;
        if verbose {
            eprintln!("Loaded {} alias mappings", aliases.len());
        }

        let members = parsing::members::parse_members_file(&self.members).map_err(|e| {
            anyhow::anyhow!("Failed to read roster {}: {e}", self.members.display())
        })?;
        if verbose {
            eprintln!(
                "Processed {} members ({} online)",
                members.len(),
                members.iter().filter(|m| m.is_online()).count()
            );
        }

        let cleaner = SignupCleaner::new(&config.junk_markers);
        let signups = parsing::signups::parse_signups_file(&self.signups, &cleaner).map_err(|e| {
            anyhow::anyhow!("Failed to read sign-ups {}: {e}", self.signups.display())
        })?;
        if verbose {
            eprintln!("Processed {} sign-up names", signups.len());
        }

        info!(
            members = members.len(),
            signups = signups.len(),
            aliases = aliases.len(),
            "inputs loaded"
        );

        Ok(LoadedRosters {
            config,
            aliases,
            members,
            signups,
        })
    }
}

/// Print an indented name list, one per line, commas after all but the last
pub(crate) fn print_name_list(names: &[String]) {
    if names.is_empty() {
        println!("  (none)");
        return;
    }
    for (i, name) in names.iter().enumerate() {
        if i + 1 == names.len() {
            println!("  {name}");
        } else {
            println!("  {name},");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_args(config: Option<PathBuf>) -> RosterArgs {
        RosterArgs {
            members: PathBuf::from("guild.txt"),
            signups: PathBuf::from("sheet.txt"),
            aliases: PathBuf::from("sheet-names.txt"),
            config,
            exclude_roles: Vec::new(),
            ignore_fragments: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = roster_args(None).resolve_config().unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_resolve_config_flags_replace_lists() {
        let mut args = roster_args(None);
        args.exclude_roles = vec!["Healer".to_string()];
        args.ignore_fragments = vec!["tank".to_string(), "alt".to_string()];

        let config = args.resolve_config().unwrap();
        assert_eq!(config.policy.excluded_roles, ["Healer"]);
        assert_eq!(config.policy.ignored_fragments, ["tank", "alt"]);
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{ "policy": { "excluded_roles": ["Bomber"], "ignored_fragments": ["sarge"] } }"#,
        )
        .unwrap();

        let mut args = roster_args(Some(path));
        args.ignore_fragments = vec!["alt".to_string()];

        let config = args.resolve_config().unwrap();
        // Lists without a flag keep the file's value
        assert_eq!(config.policy.excluded_roles, ["Bomber"]);
        assert_eq!(config.policy.ignored_fragments, ["alt"]);
    }
}
