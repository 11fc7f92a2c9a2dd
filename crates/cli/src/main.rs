mod cmd;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use holidate_core::config::loader::ConfigLoader;
use holidate_core::config::types::LoggingConfig;
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(name = "hld", version, about = "Resolve holiday templates into calendar dates")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference date for YEAR/MONTH/DAY fields (YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_parser = parse_anchor)]
    anchor: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved off-duty times
    Doctor,

    /// List configured holidays sorted by date
    Holidays(HolidaysArgs),

    /// Resolve one or more holiday templates
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
pub struct HolidaysArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Templates such as "<YEAR>-12-25" or "2024-<MONTH-2>-01"
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_anchor(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // One reading of the clock per invocation; every template shares it.
    let anchor = cli.anchor.unwrap_or_else(|| Local::now().date_naive());

    let loaded = ConfigLoader::load(cli.config.as_deref(), anchor);
    let logging_cfg = match &loaded {
        Ok(rc) => rc.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };

    if let Err(e) = logging::init(&logging_cfg) {
        if !matches!(cli.command, Commands::Resolve(_)) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        warn!("{e}; logging to stderr only");
    }
    debug!(%anchor, "starting hld");

    let code = match cli.command {
        Commands::Doctor => cmd::doctor::run(loaded, cli.config.as_deref()),
        Commands::Holidays(args) => {
            cmd::holidays::run(loaded, cli.config.as_deref(), args.json)
        }
        Commands::Resolve(args) => {
            if let Err(e) = &loaded {
                debug!(error = %e, "config not loaded, resolving without it");
            }
            cmd::resolve::run(&args.templates, anchor, args.json)
        }
    };

    logging::flush();
    code
}
