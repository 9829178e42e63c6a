use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vers::config::{self, VersConfig};
use vers::{SchemeRegistry, VersionRange};

#[derive(Parser)]
#[command(name = "vers")]
#[command(version, about = "Parse, validate and match vers version range specifiers")]
struct Cli {
    /// Configuration file [default: $XDG_CONFIG_HOME/vers/config.json]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check which versions are inside a range
    Check {
        range: String,
        #[arg(required = true)]
        versions: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical form of a range
    Canonical { range: String },
    /// Validate a range, exiting with status 1 when it is invalid
    Validate { range: String },
    /// List the registered versioning schemes
    Schemes,
}

#[derive(Serialize)]
struct CheckResult<'a> {
    version: &'a str,
    contained: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = VersConfig::load(&config_path)?;
    init_logging(&config);

    let installed = config.build_registry()?.install().is_ok();
    anyhow::ensure!(installed, "scheme registry was already installed");
    let registry = vers::registry();

    match cli.command {
        Command::Check {
            range,
            versions,
            json,
        } => check(&range, &versions, json),
        Command::Canonical { range } => {
            let range = parse_range(&range)?;
            println!("{}", range.canonical());
            Ok(())
        }
        Command::Validate { range } => match range.parse::<VersionRange>() {
            Ok(range) => {
                println!("{}", range.canonical());
                Ok(())
            }
            Err(e) => {
                eprintln!("invalid: {}", e);
                std::process::exit(1);
            }
        },
        Command::Schemes => {
            print_schemes(registry);
            Ok(())
        }
    }
}

fn init_logging(config: &VersConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn parse_range(input: &str) -> anyhow::Result<VersionRange> {
    input
        .parse()
        .with_context(|| format!("invalid range '{}'", input))
}

fn check(range: &str, versions: &[String], json: bool) -> anyhow::Result<()> {
    let range = parse_range(range)?;

    let results = versions
        .iter()
        .map(|version| {
            let contained = range
                .contains_raw(version)
                .with_context(|| format!("cannot check version '{}'", version))?;
            Ok(CheckResult { version, contained })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            let verdict = if result.contained { "IN" } else { "OUT" };
            println!("{}\t{}", verdict, result.version);
        }
    }
    Ok(())
}

fn print_schemes(registry: &SchemeRegistry) {
    for id in registry.scheme_ids() {
        println!("{}", id);
    }
}
