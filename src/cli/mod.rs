//! CLI argument parsing

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{defaults, env_vars};

/// Flatfile platform CLI
#[derive(Parser, Debug)]
#[command(name = "flatctl")]
#[command(version)]
#[command(about = "Explore Flatfile platform resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Flatfile API host (e.g. platform.flatfile.com)
    #[arg(short = 'H', long, env = env_vars::API_HOST)]
    pub host: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - disables the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,

    /// Omit headers in table and CSV output
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources from the Flatfile API
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

/// Resources that can be listed
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List workbooks in a space
    #[command(visible_alias = "workbooks")]
    Wb(WbArgs),
    /// List users
    #[command(visible_alias = "users")]
    User(ListArgs),
    /// List environments
    #[command(visible_alias = "environments")]
    Env(ListArgs),
    /// List spaces
    #[command(visible_alias = "spaces")]
    Space(ListArgs),
}

/// Arguments for the workbook listing command
#[derive(Args, Debug)]
pub struct WbArgs {
    /// Space ID to list workbooks from (e.g. dev_sp_dPDmdbu2)
    #[arg(short, long)]
    pub space: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

/// Arguments shared by the plain listing commands
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// ASCII table
    Table,
    /// Comma-separated values
    Csv,
    /// YAML document
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
