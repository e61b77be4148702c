//! vibestats library root.
//! Exposes the CLI parsers, the high-level `run()`/`run_clean()` entry points
//! and the report/cleaning modules they are built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{CleanCli, Cli, Mode};
use crate::config::Config;
use crate::core::Loader;
use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::ui::{ConsoleSink, ReportSink};
use crate::utils::path::expand_home;
use std::path::PathBuf;

/// Run exactly one report over already loaded records.
pub fn dispatch(mode: &Mode, records: &[SessionRecord], cfg: &Config, out: &mut dyn ReportSink) {
    match mode {
        Mode::Search(term) => crate::cli::commands::search::handle(records, term, out),
        Mode::BlockersOnly => crate::cli::commands::blockers::handle(records, cfg, out),
        Mode::SummaryOnly => crate::cli::commands::summary::handle(records, out),
        Mode::Full => crate::cli::commands::full::handle(records, cfg, out),
    }
}

/// Input path: `--csv` wins over the configured `csv_path`.
pub fn resolve_csv_path(cli: &Cli, cfg: &Config) -> PathBuf {
    expand_home(cli.csv.as_deref().unwrap_or(&cfg.csv_path))
}

/// Entry point used by the `vibestats` binary
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ load every record before any analysis
    let records = Loader::load_sessions(&resolve_csv_path(&cli, &cfg))?;

    // 4️⃣ one mode per invocation
    dispatch(&cli.mode(), &records, &cfg, &mut ConsoleSink);
    Ok(())
}

/// Entry point used by the `csvclean` binary
pub fn run_clean() -> AppResult<()> {
    let cli = CleanCli::parse();
    let cfg = Config::load()?;
    crate::cli::commands::clean::handle(&cli, &cfg)
}
