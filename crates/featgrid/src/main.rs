//! The `featgrid` binary: render a feature table from a JSON record file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use featgrid::{build_table, definition, render_term, sort_features, ColumnKey, Feature,
    RouterLocation};

#[derive(Parser)]
#[command(name = "featgrid", version, about = "Comparative web-platform feature table")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the table for a feature record file.
    Render {
        /// Path to a JSON array of feature records.
        #[arg(long)]
        features: PathBuf,
        /// Query string carrying columns, column_options, and sort.
        #[arg(long, default_value = "")]
        query: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Term)]
        format: Format,
        /// Disable terminal styling.
        #[arg(long)]
        no_color: bool,
    },
    /// List the available columns and their query tokens.
    Columns,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Term,
    Json,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Render {
            features,
            query,
            format,
            no_color,
        } => render(&features, &query, format, no_color),
        Command::Columns => {
            columns();
            Ok(())
        }
    }
}

fn render(path: &PathBuf, query: &str, format: Format, no_color: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading feature records from {}", path.display()))?;
    let mut features: Vec<Feature> =
        serde_json::from_str(&raw).context("parsing feature records")?;

    let location = RouterLocation::new(query);
    sort_features(&mut features, location.sort());
    let view = build_table(&features, &location);

    match format {
        Format::Term => println!("{}", render_term(&view, !no_color)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

fn columns() {
    let width = ColumnKey::ALL
        .iter()
        .map(|key| key.as_str().len())
        .max()
        .unwrap_or(0);
    for key in ColumnKey::ALL {
        println!("{:width$}  {}", key.as_str(), definition(key).dialog_label);
    }
}
