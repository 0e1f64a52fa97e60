use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use stripe_constants::domain::fee_constant::{FeeConstant, SemanticRole};
use stripe_constants::domain::table;
use stripe_constants::interfaces::csv::table_writer::TableWriter;
use stripe_constants::interfaces::json::write_json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print only the constant with this exact name (e.g. AchMaxFee)
    name: Option<String>,

    /// Only print constants with this role (fee-rate, fixed-fee, fee-cap,
    /// transaction-limit, pagination-limit, metadata-key)
    #[arg(long)]
    role: Option<SemanticRole>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let selected: Vec<FeeConstant> = match &cli.name {
        Some(name) => {
            let constant = table::get(name).into_diagnostic()?;
            if cli.role.is_some_and(|role| role != constant.role) {
                Vec::new()
            } else {
                vec![*constant]
            }
        }
        None => match cli.role {
            Some(role) => table::by_role(role).copied().collect(),
            None => table::all().to_vec(),
        },
    };
    info!(count = selected.len(), "selected fee constants");

    match cli.output {
        Some(path) => {
            let file = File::create(path).into_diagnostic()?;
            render(file, cli.format, &selected)
        }
        None => {
            let stdout = io::stdout();
            render(stdout.lock(), cli.format, &selected)
        }
    }
}

fn render<W: Write>(sink: W, format: Format, constants: &[FeeConstant]) -> Result<()> {
    match format {
        Format::Csv => TableWriter::new(sink)
            .write_constants(constants)
            .into_diagnostic(),
        Format::Json => write_json(sink, constants).into_diagnostic(),
    }
}
