use std::path::Path;
use std::process::ExitCode;

use holidate_core::config::loader::{default_config_path, ConfigError};
use holidate_core::config::types::ResolvedConfig;
use tracing::debug;

use super::output::{print_holidays_json, print_holidays_table};

/// List configured holidays sorted by date.
pub fn run(
    loaded: Result<ResolvedConfig, ConfigError>,
    config: Option<&Path>,
    json: bool,
) -> ExitCode {
    let rc = match loaded {
        Ok(rc) => rc,
        Err(e) => {
            debug!(error = ?e, "config rejected");
            println!("FAIL hld holidays");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            return ExitCode::FAILURE;
        }
    };

    let sorted = rc.holidays.sorted_by_date();
    if json {
        print_holidays_json(&sorted);
    } else {
        print_holidays_table(&sorted);
    }
    ExitCode::SUCCESS
}
