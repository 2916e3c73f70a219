use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use argseam::config::KeywordSpec;
use argseam::partition::{resolve, ArityTable, PartitionOutcome};

/// Split a catenated pair of tool invocations at the keyword boundary.
#[derive(Debug, Parser)]
#[command(name = "argseam", version, about)]
struct Cli {
    /// Comma-separated nullary keywords (take no value).
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    mono: Option<String>,

    /// Comma-separated unary keywords (require exactly one value).
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pair: Option<String>,

    /// Load the keyword lists from an explicit spec file instead of the
    /// default location.
    #[arg(long, value_name = "PATH")]
    spec: Option<PathBuf>,

    /// Emit the partition as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// The already-split token sequence, after `--` so that keyword-shaped
    /// tokens are not read as argseam's own flags.
    #[arg(last = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("argseam: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let spec = match &cli.spec {
        Some(path) => KeywordSpec::load_from(path)?,
        None => KeywordSpec::load()?,
    };
    let (mono, pair) = merge_lists(cli.mono, cli.pair, spec);
    let table = ArityTable::from_lists(&mono, &pair).context("building arity table")?;

    let outcome = resolve(&table, &cli.tokens);
    match &outcome {
        PartitionOutcome::Success { .. } => {
            if cli.json {
                println!("{}", render_json(&outcome));
            } else {
                print!("{}", render_text(&outcome));
            }
            Ok(ExitCode::SUCCESS)
        }
        PartitionOutcome::Failure(failure) => {
            if cli.json {
                println!("{}", render_json(&outcome));
            }
            eprintln!("argseam: {}", failure.message);
            Ok(ExitCode::from(1))
        }
    }
}

/// Command-line lists override the spec file's, list by list.
fn merge_lists(mono: Option<String>, pair: Option<String>, spec: KeywordSpec) -> (String, String) {
    (
        mono.unwrap_or(spec.mono),
        pair.unwrap_or(spec.pair),
    )
}

fn render_text(outcome: &PartitionOutcome) -> String {
    let boundary = outcome
        .boundary()
        .expect("render_text is only called on resolved outcomes");
    format!(
        "boundary: {}\nouter: {}\ninner: {}\n",
        boundary,
        outcome.segment(0).join(" "),
        outcome.segment(1).join(" "),
    )
}

fn render_json(outcome: &PartitionOutcome) -> String {
    let body = match outcome {
        PartitionOutcome::Success { .. } => serde_json::json!({
            "boundary": outcome.boundary(),
            "outer": outcome.segment(0),
            "inner": outcome.segment(1),
        }),
        PartitionOutcome::Failure(failure) => serde_json::json!({
            "error": {
                "kind": failure.kind.as_str(),
                "position": failure.position,
                "message": failure.message,
            }
        }),
    };
    body.to_string()
}

/// Logging goes to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
