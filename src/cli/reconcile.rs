use clap::Args;

use crate::cli::{print_name_list, LoadedRosters, OutputFormat, RosterArgs};
use crate::core::types::MatchKind;
use crate::matching::engine::{Reconciliation, ReconciliationEngine, RosterSummary};

#[derive(Args)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub inputs: RosterArgs,

    /// Also list alias and pattern matches found for sign-up names
    #[arg(long)]
    pub show_signup_matches: bool,

    /// Exit with an error when anyone is missing or unknown
    #[arg(long)]
    pub strict: bool,
}

/// Execute reconcile subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be loaded, or with `--strict` when
/// discrepancies are found.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rosters = args.inputs.load(verbose)?;

    if verbose {
        eprintln!("Analyzing data...");
    }

    let engine = ReconciliationEngine::new(&rosters.aliases, &rosters.config.policy);
    let result = engine.reconcile(&rosters.members, &rosters.signups);
    let summary = RosterSummary::new(&rosters.members, &rosters.signups, &result);

    match format {
        OutputFormat::Text => print_text_report(&args, &result, &summary),
        OutputFormat::Json => print_json_report(&rosters, &result, &summary)?,
        OutputFormat::Tsv => print_tsv_report(&result),
    }

    if args.strict && !result.is_clean() {
        anyhow::bail!(
            "{} missing member(s), {} unknown sign-up name(s)",
            result.missing.len(),
            result.extra_in_signup.len()
        );
    }

    Ok(())
}

fn print_text_report(args: &ReconcileArgs, result: &Reconciliation, summary: &RosterSummary) {
    if !result.member_matches.is_empty() {
        println!("\n=== SUCCESSFUL MATCHES ===");
        for m in &result.member_matches {
            match m.kind {
                MatchKind::Direct => {}
                MatchKind::Alias => {
                    println!("Matched: {} (found as '{}' in sign-ups)", m.canonical, m.matched);
                }
                MatchKind::Pattern => println!(
                    "Matched: {} (pattern match with '{}' in sign-ups)",
                    m.canonical, m.matched
                ),
            }
        }

        let counts = result.member_match_counts();
        println!("- Direct matches: {}", counts.direct);
        println!("- Alias matches: {}", counts.alias);
        if counts.pattern > 0 {
            println!("- Pattern matches: {}", counts.pattern);
        }
    }

    println!("\n=== RESULTS ===");
    println!(
        "Members online but not signed up ({}):",
        result.missing.len()
    );
    print_name_list(&result.missing);

    if !result.excluded.is_empty() {
        println!(
            "\nExcluded members (have excluded roles) ({}):",
            result.excluded.len()
        );
        print_name_list(&result.excluded);
    }

    if !result.extra_in_signup.is_empty() {
        println!(
            "\nSigned up but not on roster ({}):",
            result.extra_in_signup.len()
        );
        print_name_list(&result.extra_in_signup);
    }

    if args.show_signup_matches {
        let indirect: Vec<_> = result
            .signup_matches
            .iter()
            .filter(|m| m.kind != MatchKind::Direct)
            .collect();
        if !indirect.is_empty() {
            println!("\nSign-up name matches ({}):", indirect.len());
            for m in indirect {
                println!("  '{}' in sign-ups -> {} ({})", m.matched, m.canonical, m.kind);
            }
        }
    }

    println!("\nSummary:");
    println!("- Total members: {}", summary.total_members);
    println!("- Online members: {}", summary.online_members);
    println!("- Names in sign-ups: {}", summary.signup_names);
    println!("- Successful matches: {}", summary.successful_matches);
    println!("- Online members missing from sign-ups: {}", summary.missing);
    println!("- Excluded members (special roles): {}", summary.excluded);
    println!("- Sign-up names not on roster: {}", summary.extra_in_signup);
}

fn print_json_report(
    rosters: &LoadedRosters,
    result: &Reconciliation,
    summary: &RosterSummary,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "policy": rosters.config.policy,
        "summary": summary,
        "match_counts": result.member_match_counts(),
        "missing": result.missing,
        "excluded": result.excluded,
        "extra_in_signup": result.extra_in_signup,
        "member_matches": result.member_matches,
        "signup_matches": result.signup_matches,
        "alias_collisions": rosters.aliases.collisions(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(result: &Reconciliation) {
    println!("category\tname\tdetail");
    for name in &result.missing {
        println!("missing\t{name}\t");
    }
    for name in &result.excluded {
        println!("excluded\t{name}\t");
    }
    for name in &result.extra_in_signup {
        println!("extra_in_signup\t{name}\t");
    }
    for m in &result.member_matches {
        println!("{}_match\t{}\t{}", m.kind, m.canonical, m.matched);
    }
    for m in &result.signup_matches {
        println!("signup_{}_match\t{}\t{}", m.kind, m.canonical, m.matched);
    }
}
