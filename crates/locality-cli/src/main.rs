mod cli;
mod report;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;

use locality_model::{TaskLocation, decode_all, decode_lenient};
use locality_observe::{LoggerConfig, init_logger};

use crate::{
    cli::{Cli, Command, DecodeArgs, EncodeArgs, KindArg},
    report::DecodedHint,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    };
    init_logger(&cfg)?;
    debug!(format = %cfg.format, level = cfg.level.as_str(), "logger initialized");

    // 2) command
    match cli.command {
        Command::Decode(args) => {
            for line in run_decode(&args)? {
                println!("{line}");
            }
        }
        Command::Encode(args) => println!("{}", build_location(&args)?),
    }
    Ok(())
}

fn run_decode(args: &DecodeArgs) -> anyhow::Result<Vec<String>> {
    let locations = if args.lenient {
        decode_lenient(&args.tokens)
    } else {
        decode_all(&args.tokens).context("failed to decode location hints")?
    };
    debug!(
        given = args.tokens.len(),
        decoded = locations.len(),
        "decode finished"
    );

    locations
        .iter()
        .map(|loc| serde_json::to_string(&DecodedHint::from(loc)).map_err(Into::into))
        .collect()
}

fn build_location(args: &EncodeArgs) -> anyhow::Result<TaskLocation> {
    let host = args.host.as_str();
    if host.is_empty() {
        bail!("host must not be empty");
    }
    if args.kind != KindArg::Executor && args.executor.is_some() {
        bail!("--executor requires --kind executor");
    }

    let loc = match (args.kind, args.storage) {
        (KindArg::Host, None) => TaskLocation::host(host),
        (KindArg::Host, Some(st)) => TaskLocation::host_with_storage(host, st),
        (KindArg::HdfsCache, None) => TaskLocation::hdfs_cache(host),
        (KindArg::HdfsCache, Some(st)) => TaskLocation::hdfs_cache_with_storage(host, st),
        (KindArg::Executor, Some(_)) => {
            bail!("--storage cannot be combined with --kind executor")
        }
        (KindArg::Executor, None) => {
            let Some(executor) = args.executor.as_deref() else {
                bail!("--executor is required for --kind executor");
            };
            TaskLocation::executor(host, executor)
        }
    };
    loc.validate()?;
    Ok(loc)
}
