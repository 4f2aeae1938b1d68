use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Inspect the published projects of the portfolio site.")]
#[command(version)]
pub struct CommandLine {
    /// TOML configuration file (defaults to ./folio.toml when present)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files; stderr when omitted
    #[arg(long, global = true, env = "FOLIO_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch published projects once and render their cards
    #[command(alias = "p")]
    Projects {
        /// Store backend; picks the first configured one when omitted
        #[arg(long, value_enum)]
        store: Option<StoreKind>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Screenshot to open in the enlarged viewer, e.g. images/home.png
        #[arg(long, value_name = "IMAGE")]
        select: Option<String>,
    },
    /// Print the effective configuration with secrets redacted
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Firestore,
    Sqlite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
