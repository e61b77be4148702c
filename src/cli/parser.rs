use clap::Parser;

/// Command-line interface definition for vibestats
/// CLI application to analyze a CSV log of development sessions
#[derive(Parser, Debug)]
#[command(
    name = "vibestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze development sessions: summary, blocker analysis and full-text search over a sessions CSV",
    long_about = None
)]
pub struct Cli {
    /// Path to sessions CSV file (default: `csv_path` from config, else ../sessions.csv)
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<String>,

    /// Search for a specific term across sessions (case-insensitive)
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Show only blocker analysis
    #[arg(long = "blockers-only")]
    pub blockers_only: bool,

    /// Show only summary
    #[arg(long = "summary-only")]
    pub summary_only: bool,
}

/// The single report executed by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Search(String),
    BlockersOnly,
    SummaryOnly,
    Full,
}

impl Cli {
    /// Pick the mode: search > blockers-only > summary-only > full.
    /// An empty search term counts as no search.
    pub fn mode(&self) -> Mode {
        match &self.search {
            Some(term) if !term.is_empty() => Mode::Search(term.clone()),
            _ if self.blockers_only => Mode::BlockersOnly,
            _ if self.summary_only => Mode::SummaryOnly,
            _ => Mode::Full,
        }
    }
}

/// Command-line interface for the CSV cleaner
#[derive(Parser, Debug)]
#[command(
    name = "csvclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean a CSV file: drop duplicate rows and fill empty cells",
    long_about = None
)]
pub struct CleanCli {
    /// Input CSV file (first row is the header)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output CSV file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: String,

    /// Placeholder for empty text cells (default: `fill_text` from config, else "unknown")
    #[arg(long = "fill", value_name = "TEXT")]
    pub fill: Option<String>,

    /// Overwrite output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}
