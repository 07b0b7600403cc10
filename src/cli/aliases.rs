use std::path::PathBuf;

use clap::Args;

use crate::aliases::AliasTable;
use crate::cli::OutputFormat;
use crate::parsing;

#[derive(Args)]
pub struct AliasesArgs {
    /// Alias declarations (`Name: alias1, alias2`)
    #[arg(short, long, default_value = "data/sheet-names.txt")]
    pub aliases: PathBuf,
}

/// Execute aliases subcommand
///
/// # Errors
///
/// Returns an error if the alias file exists but cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AliasesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = parsing::aliases::parse_aliases_file(&args.aliases)?;

    if verbose {
        eprintln!(
            "Loaded {} names with {} distinct aliases from {}",
            table.len(),
            table.alias_count(),
            args.aliases.display()
        );
    }

    match format {
        OutputFormat::Text => print_text_aliases(&table),
        OutputFormat::Json => print_json_aliases(&table)?,
        OutputFormat::Tsv => print_tsv_aliases(&table),
    }

    Ok(())
}

fn print_text_aliases(table: &AliasTable) {
    if table.is_empty() {
        println!("No aliases declared.");
        return;
    }

    println!("Alias Table ({} names)", table.len());
    println!("{}", "=".repeat(60));
    for (canonical, aliases) in table.iter() {
        println!("{canonical}: {}", aliases.join(", "));
    }

    let collisions = table.collisions();
    if !collisions.is_empty() {
        println!("\nConflicting declarations ({}):", collisions.len());
        for c in collisions {
            println!(
                "  '{}' declared for {} and {} (using {})",
                c.alias, c.previous, c.current, c.current
            );
        }
    }
}

fn print_json_aliases(table: &AliasTable) -> anyhow::Result<()> {
    let names: Vec<_> = table
        .iter()
        .map(|(canonical, aliases)| {
            serde_json::json!({
                "name": canonical,
                "aliases": aliases,
            })
        })
        .collect();

    let output = serde_json::json!({
        "names": names,
        "collisions": table.collisions(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_aliases(table: &AliasTable) {
    println!("name\talias");
    for (canonical, aliases) in table.iter() {
        for alias in aliases {
            println!("{canonical}\t{alias}");
        }
    }
}
