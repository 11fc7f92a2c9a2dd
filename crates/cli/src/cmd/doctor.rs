use std::path::Path;
use std::process::ExitCode;

use holidate_core::config::loader::{default_config_path, ConfigError};
use holidate_core::config::types::ResolvedConfig;
use tracing::debug;

/// Validate the configuration and print what it resolved to.
pub fn run(loaded: Result<ResolvedConfig, ConfigError>, config: Option<&Path>) -> ExitCode {
    match loaded {
        Ok(rc) => {
            println!("OK   hld doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("anchor: {}", rc.anchor.format("%Y-%m-%d"));
            for (label, value) in rc.summary() {
                println!("{label}: {value}");
            }
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "config rejected");
            println!("FAIL hld doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            ExitCode::FAILURE
        }
    }
}
