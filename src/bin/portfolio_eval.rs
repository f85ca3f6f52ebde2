// Copyright 2025 Cowboy AI, LLC.

//! Command line front end for the portfolio classifier.
//!
//! Usage:
//!   portfolio-eval evaluate --years 10 --description "Stable demand ..."
//!   portfolio-eval evaluate --years 3 --file unit.txt --format json
//!   portfolio-eval portfolio
//!   portfolio-eval lexicon > lexicon.toml
//!   portfolio-eval schema
//!
//! Logs go to stderr; set RUST_LOG to change verbosity.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_domain::{
    builtin_profiles, ClassificationResult, Evaluator, Lexicon, PortfolioReport,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portfolio-eval")]
#[command(about = "Classify business units into strategic tiers", long_about = None)]
struct Cli {
    /// Lexicon TOML to use instead of the built-in keyword lists
    #[arg(long, global = true, env = "PORTFOLIO_LEXICON")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify one description
    Evaluate {
        /// Years the unit has been active
        #[arg(long, allow_negative_numbers = true)]
        years: i64,
        /// Description text
        #[arg(long, conflicts_with = "file")]
        description: Option<String>,
        /// Read the description from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Classify the built-in reference units
    Portfolio {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the active lexicon as TOML
    Lexicon,
    /// Print the JSON schema of an evaluation result
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_domain=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let loaded;
    let lexicon = match &cli.lexicon {
        Some(path) => {
            loaded = Lexicon::from_path(path)
                .with_context(|| format!("loading lexicon {}", path.display()))?;
            &loaded
        }
        None => Lexicon::standard(),
    };
    let evaluator = Evaluator::new(lexicon);

    match cli.command {
        Commands::Evaluate {
            years,
            description,
            file,
            format,
        } => {
            let text = read_description(description, file)?;
            let result = evaluator.evaluate(&text, years)?;
            match format {
                Format::Text => print_result(out, None, &result)?,
                Format::Json => writeln!(out, "{}", result.to_json()?)?,
            }
        }
        Commands::Portfolio { format } => {
            let report = PortfolioReport::evaluate(&evaluator, builtin_profiles());
            match format {
                Format::Text => {
                    for row in &report.rows {
                        print_result(out, Some(&row.name), &row.result)?;
                    }
                    for (tier, count) in report.tier_counts() {
                        writeln!(out, "{tier}: {count}")?;
                    }
                }
                Format::Json => writeln!(out, "{}", report.to_json()?)?,
            }
        }
        Commands::Lexicon => write!(out, "{}", lexicon.to_toml_string()?)?,
        Commands::Schema => {
            let schema = schemars::schema_for!(ClassificationResult);
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        }
    }

    Ok(())
}

fn read_description(description: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = description {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading description from {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading description from stdin")?;
    Ok(text)
}

fn print_result(
    out: &mut impl Write,
    name: Option<&str>,
    result: &ClassificationResult,
) -> std::io::Result<()> {
    let b = &result.breakdown;
    if let Some(name) = name {
        writeln!(out, "\n{name}")?;
    }
    writeln!(out, "Detected Unit: {}", result.detected_unit)?;
    writeln!(out, "Maturity Score ({} yrs): {}", b.years_active, b.maturity)?;
    writeln!(
        out,
        "Disruption Risk: {} -> Score: {}",
        b.disruption_label, b.disruption
    )?;
    writeln!(
        out,
        "Innovation Capability: {} -> Score: {}",
        b.innovation_label, b.innovation
    )?;
    writeln!(out, "Total Score: {}", b.total)?;
    writeln!(out, "Classification: {}", result.classification)?;
    writeln!(out, "Investment Mix: {}", result.investment_mix)?;
    writeln!(out, "{}", "-".repeat(50))
}
