//! Word Squares - CLI
//!
//! Lists every word that can be traced on a letter grid, grouped by length.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::time::Duration;
use word_squares::{
    commands::solve_grid,
    core::Grid,
    dictionary::{Dictionary, loader::load_from_file},
    output::{log, print_solve_report},
    search::{DEFAULT_MAX_DEPTH, MIN_WORD_LEN, Mode, SearchConfig},
    validator::{
        OfflineValidator, RemoteConfig, RemoteValidator, ValidatorType, WordValidator, remote,
    },
};

#[derive(Parser)]
#[command(
    name = "squares",
    about = "Find every word traceable on a letter grid through adjacent, unused cells",
    version,
    author
)]
struct Cli {
    /// Grid rows, e.g. `eipa quen escs hseh`
    rows: Vec<String>,

    /// Read the grid from a file, one row per line
    #[arg(short, long, conflicts_with = "rows")]
    file: Option<String>,

    /// Maximum word length
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    max: usize,

    /// Minimum word length
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    min: usize,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Validation mode: inline (default offline) or batch (default remote)
    #[arg(long)]
    mode: Option<String>,

    /// Max char width of the output
    #[arg(short, long, default_value_t = 80)]
    width: usize,

    /// Print every checked candidate and every added word
    #[arg(short, long)]
    verbose: bool,

    /// Show every path of every word
    #[arg(short, long)]
    detailed: bool,

    /// Word list file replacing the embedded dictionary
    #[arg(long)]
    dictionary: Option<String>,

    /// Validate words against the remote dictionary service
    #[arg(long)]
    remote: bool,

    /// Remote lookup URL prefix
    #[arg(long, default_value = remote::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Remote lookup timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,
}

fn load_grid(cli: &Cli) -> Result<Grid> {
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read grid file {path}"))?;
        return Ok(Grid::parse(&text)?);
    }
    if cli.rows.is_empty() {
        bail!("no grid given: pass rows as arguments or use --file");
    }
    Ok(Grid::new(&cli.rows)?)
}

/// Build the validator selected by `--remote` / `--dictionary`
fn load_validator(cli: &Cli) -> Result<ValidatorType> {
    if cli.remote {
        let config = RemoteConfig::default()
            .with_endpoint(cli.endpoint.clone())
            .with_timeout(Duration::from_millis(cli.timeout_ms));
        return Ok(ValidatorType::Remote(RemoteValidator::new(config)));
    }

    let dictionary = match &cli.dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary {path}"))?,
        None => Dictionary::embedded(),
    };
    if dictionary.is_empty() {
        log::warn("dictionary is empty, no words can be found");
    }
    Ok(ValidatorType::Offline(OfflineValidator::new(dictionary)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let grid = load_grid(&cli)?;

    // Remote lookups are slow, so deduplicate before validating by default
    let mode = cli.mode.as_deref().map_or(
        if cli.remote { Mode::Batch } else { Mode::Inline },
        Mode::from_name,
    );

    let config = SearchConfig::new(cli.max)
        .with_min_word_len(cli.min)
        .with_threads(cli.threads)
        .with_mode(mode)
        .with_verbose(cli.verbose)
        .with_progress(cli.remote && !cli.verbose);

    for warning in config.warnings() {
        log::warn(&warning.to_string());
    }

    let validator = load_validator(&cli)?;
    if cli.verbose {
        log::info(&format!(
            "{}x{} grid, {mode} mode, {} validator, {} thread(s)",
            grid.rows(),
            grid.cols(),
            validator.name(),
            config.threads()
        ));
    }

    let report = solve_grid(&grid, &config, &validator)?;
    print_solve_report(&report, cli.detailed, cli.width);
    Ok(())
}
