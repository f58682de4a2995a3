use clap::{Parser, Subcommand, ValueEnum};

use crate::scanner::category::CacheCategory;

/// CacheSweep — a progress-reporting cache, log, and trash cleaner for macOS
#[derive(Parser, Debug)]
#[command(
    name = "cachesweep",
    version,
    about = "Measure and remove caches, logs, trash, and Xcode DerivedData",
    long_about = "CacheSweep sizes the well-known cache locations on your Mac by\n\
                  category, then deletes them with live progress. Unreadable or\n\
                  locked items are skipped, never fatal.",
    after_help = "EXAMPLES:\n  \
        cachesweep analyze                     Size all six categories\n  \
        cachesweep analyze logs --detailed     Per-item breakdown of ~/Library/Logs\n  \
        cachesweep analyze --format json       Machine-readable results\n  \
        cachesweep clean derived-data          Clean one category (with prompt)\n  \
        cachesweep clean --yes                 Clean everything, no prompt\n  \
        cachesweep clean trash --dry-run       Show what would go, delete nothing\n  \
        cachesweep categories                  List categories and their roots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure cache categories without deleting anything
    Analyze {
        /// Category to analyze
        #[arg(value_enum, default_value = "all")]
        category: CategoryArg,

        /// Show individual items in results
        #[arg(long)]
        detailed: bool,
    },

    /// Delete the contents of a cache category
    Clean {
        /// Category to clean
        #[arg(value_enum, default_value = "all")]
        category: CategoryArg,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be cleaned without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// List known categories and the paths they cover
    Categories,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// CLI spelling of the cache categories.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    UserCache,
    SystemCache,
    BrowserCache,
    Logs,
    Trash,
    DerivedData,
    All,
}

impl From<CategoryArg> for CacheCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::UserCache => CacheCategory::UserCache,
            CategoryArg::SystemCache => CacheCategory::SystemCache,
            CategoryArg::BrowserCache => CacheCategory::BrowserCache,
            CategoryArg::Logs => CacheCategory::Logs,
            CategoryArg::Trash => CacheCategory::Trash,
            CategoryArg::DerivedData => CacheCategory::DerivedData,
            CategoryArg::All => CacheCategory::All,
        }
    }
}

#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
