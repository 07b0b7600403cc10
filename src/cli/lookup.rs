use clap::Args;

use crate::cli::{OutputFormat, RosterArgs};
use crate::core::types::{MatchKind, NameMatch};
use crate::matching::matcher::{CandidateSet, Direction, NameMatcher};

/// Which roster the looked-up name belongs to
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Side {
    /// The name is a roster member; search the sign-up list
    Members,
    /// The name is a sign-up entry; search the roster
    Signups,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Name to look up
    #[arg(required = true)]
    pub name: String,

    /// Roster the name comes from
    #[arg(long, value_enum, default_value = "members")]
    pub side: Side,

    #[command(flatten)]
    pub inputs: RosterArgs,
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rosters = args.inputs.load(verbose)?;
    let matcher = NameMatcher::new(&rosters.aliases, &rosters.config.policy.ignored_fragments);

    let (candidates, direction) = match args.side {
        Side::Members => (
            CandidateSet::new(rosters.signups.iter().map(String::as_str)),
            Direction::MemberToSignup,
        ),
        Side::Signups => (
            CandidateSet::new(rosters.members.iter().map(|m| m.name.as_str())),
            Direction::SignupToMember,
        ),
    };

    let found = matcher.find_match(&args.name, &candidates, direction);

    match format {
        OutputFormat::Text => print_text_lookup(&args, found.as_ref(), candidates.len()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": args.name,
                "found": found.is_some(),
                "match": found,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tkind\tcanonical\tmatched\tfragment");
            match &found {
                Some(m) => println!(
                    "{}\t{}\t{}\t{}\t{}",
                    args.name,
                    m.kind,
                    m.canonical,
                    m.matched,
                    m.fragment.as_deref().unwrap_or("")
                ),
                None => println!("{}\tnone\t\t\t", args.name),
            }
        }
    }

    Ok(())
}

fn print_text_lookup(args: &LookupArgs, found: Option<&NameMatch>, searched: usize) {
    let other = match args.side {
        Side::Members => "sign-up list",
        Side::Signups => "member roster",
    };

    let Some(m) = found else {
        println!(
            "'{}' does not match anyone on the {other} ({searched} names searched)",
            args.name
        );
        return;
    };

    let counterpart = match args.side {
        Side::Members => &m.matched,
        Side::Signups => &m.canonical,
    };

    match m.kind {
        MatchKind::Direct => println!("'{}' matches '{counterpart}' directly", args.name),
        MatchKind::Alias => println!(
            "'{}' matches '{counterpart}' through the alias table",
            args.name
        ),
        MatchKind::Pattern => println!(
            "'{}' matches '{counterpart}' by sharing the fragment '{}' (approximate)",
            args.name,
            m.fragment.as_deref().unwrap_or("")
        ),
    }
}
