mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, extract, leads, regions, Context};
use crate::error::{exit_code_for, report_error};
use leadscan_config as config;
use leadscan_core::{ExtractMode, PhoneExtractor, RegionCode};

#[derive(Debug, Parser)]
#[command(name = "leadscan", version, about = "leadscan CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Region used for numbers written without a country calling code
    #[arg(long, global = true)]
    region: Option<String>,
    /// Only report numbers that normalize
    #[arg(long, global = true, conflicts_with = "lenient")]
    strict: bool,
    /// Report every candidate, normalized where possible
    #[arg(long, global = true)]
    lenient: bool,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a whole file for phone numbers
    Extract(extract::ExtractArgs),
    /// Take the first valid phone number from each line
    Leads(leads::LeadsArgs),
    /// List known numbering plans
    Regions(regions::RegionsArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        region,
        strict,
        lenient,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    if let Command::Regions(args) = command {
        return regions::list_regions(&app_config, json, args);
    }

    let region = match region {
        Some(raw) => RegionCode::new(&raw).with_context(|| "parse --region")?,
        None => app_config.default_region.clone(),
    };
    let mode = if strict {
        ExtractMode::Strict
    } else if lenient {
        ExtractMode::Lenient
    } else {
        app_config.mode
    };
    let extractor = PhoneExtractor::new(&region, mode, app_config.plans.clone())
        .with_context(|| format!("build extractor for region {}", region))?;
    debug!(region = %region, mode = %mode, "extractor ready");

    let ctx = Context {
        extractor: &extractor,
        json,
    };

    match command {
        Command::Extract(args) => extract::extract(&ctx, args),
        Command::Leads(args) => leads::parse_leads(&ctx, args),
        Command::Regions(_) => unreachable!("regions command handled before extractor setup"),
        Command::Completions(_) => {
            unreachable!("completions command handled before config load")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
