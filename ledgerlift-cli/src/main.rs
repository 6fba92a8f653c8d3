use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledgerlift_core::Transaction;
use ledgerlift_ingest::{collect_transaction_pages, finalize, parse_statement_text};
use ledgerlift_rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "ledgerlift",
    version,
    about = "Convert extracted bank-statement text into categorized transaction JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a statement text dump (pages separated by form feeds, as
    /// produced by pdftotext) into categorized records
    Convert {
        /// Extracted statement text file
        input: PathBuf,

        /// Categorization rules JSON
        #[arg(long, default_value = "rules.json")]
        rules: PathBuf,

        /// Output JSON path
        #[arg(long, default_value = "financial_data.json")]
        output: PathBuf,

        /// Also write the records as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Config file overriding the scan markers (default: ./ledgerlift.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Rules-file commands
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },

    /// Write a default ledgerlift.toml in the working directory
    Init,
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Load a rules file and report what compiled
    Check {
        /// Rules JSON path
        #[arg(default_value = "rules.json")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input,
            rules,
            output,
            csv,
            config,
        } => convert(&input, &rules, &output, csv.as_deref(), config.as_deref()),

        Command::Rules { command } => match command {
            RulesCommand::Check { path } => check_rules(&path),
        },

        Command::Init => config::init_config(),
    }
}

fn convert(
    input: &Path,
    rules_path: &Path,
    output: &Path,
    csv_out: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let opts = cfg.scan_options();

    let rules = match RuleSet::load(rules_path) {
        Ok(r) => {
            println!(
                "Loaded {} income rules and {} expense rules from {}",
                r.income_count(),
                r.expense_count(),
                rules_path.display()
            );
            r
        }
        Err(e) => {
            eprintln!("WARNING: {e:#}; continuing with no rules");
            RuleSet::default()
        }
    };

    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let pages: Vec<String> = text.split('\u{0c}').map(str::to_string).collect();

    let Some(section_text) = collect_transaction_pages(&pages, &opts) else {
        eprintln!(
            "No pages with transaction data found in {}; nothing to convert",
            input.display()
        );
        return Ok(());
    };

    let drafts = parse_statement_text(&section_text, &opts)?;
    let records = finalize(drafts, &rules)?;

    println!(
        "Processed {} transactions from {}",
        records.len(),
        input.display()
    );

    let json = serde_json::to_string_pretty(&records).context("serialize records")?;
    fs::write(output, json).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {}", output.display());

    if let Some(csv_path) = csv_out {
        write_csv(csv_path, &records)?;
        println!("Wrote {}", csv_path.display());
    }

    Ok(())
}

fn write_csv(path: &Path, records: &[Transaction]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("writing {}", path.display()))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn check_rules(path: &Path) -> Result<()> {
    let rules = RuleSet::load(path).with_context(|| format!("loading {}", path.display()))?;
    println!(
        "{}: {} income rules, {} expense rules, all patterns compiled",
        path.display(),
        rules.income_count(),
        rules.expense_count()
    );
    Ok(())
}
