use clap::{Args, Parser, Subcommand, ValueEnum};

use locality_model::{StorageType, parse_storage_type};
use locality_observe::{LoggerFormat, LoggerLevel};

/// Inspect and build preferred task location tokens.
#[derive(Debug, Parser)]
#[command(name = "locality", version)]
pub struct Cli {
    /// Log filter expression.
    #[arg(long, global = true, env = "LOCALITY_LOG", default_value = "warn")]
    pub log_level: LoggerLevel,

    /// Log output format: text, json or journald.
    #[arg(long, global = true, env = "LOCALITY_LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode tokens and print one JSON object per location.
    Decode(DecodeArgs),
    /// Build a location from its parts and print the token.
    Encode(EncodeArgs),
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Skip tokens that fail to decode instead of exiting with an error.
    #[arg(long)]
    pub lenient: bool,

    #[arg(required = true)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    #[arg(long, value_enum, default_value_t = KindArg::Host)]
    pub kind: KindArg,

    #[arg(long)]
    pub host: String,

    /// Executor id, required for `--kind executor`.
    #[arg(long)]
    pub executor: Option<String>,

    /// Storage medium, e.g. DISK or RAM_DISK.
    #[arg(long, value_parser = parse_storage_type)]
    pub storage: Option<StorageType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Host,
    Executor,
    HdfsCache,
}
