use std::process::ExitCode;

use chrono::NaiveDate;
use holidate_core::Holiday;
use tracing::debug;

use super::output::{print_holidays_json, print_holidays_plain};

/// Resolve each template against `anchor`; the first invalid one fails the command.
pub fn run(templates: &[String], anchor: NaiveDate, json: bool) -> ExitCode {
    let mut resolved = Vec::with_capacity(templates.len());
    for t in templates {
        match Holiday::resolve(t, anchor) {
            Ok(h) => resolved.push(h),
            Err(e) => {
                debug!(kind = ?e.kind, "template rejected");
                println!("FAIL hld resolve");
                println!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let refs: Vec<&Holiday> = resolved.iter().collect();
    if json {
        print_holidays_json(&refs);
    } else {
        print_holidays_plain(&refs);
    }
    ExitCode::SUCCESS
}
