use std::fmt;
use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::holidays::HolidaySet;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub off_duty: OffDutyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Days and dates on which no work is scheduled.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffDutyConfig {
    /// Working weekdays by name or three-letter abbreviation (default: Monday to Friday).
    #[serde(default = "default_work_days")]
    pub work_days: Vec<String>,
    /// Working hours of a work day as `"HH-HH"` intervals (default: 08-12 and 13-17).
    #[serde(default = "default_work_hours")]
    pub work_hours: Vec<String>,
    /// Holiday templates such as `"<YEAR>-12-25"`.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl Default for OffDutyConfig {
    fn default() -> Self {
        Self {
            work_days: default_work_days(),
            work_hours: default_work_hours(),
            holidays: Vec::new(),
        }
    }
}

fn default_work_days() -> Vec<String> {
    ["mon", "tue", "wed", "thu", "fri"].iter().map(|d| d.to_string()).collect()
}

fn default_work_hours() -> Vec<String> {
    vec!["08-12".to_string(), "13-17".to_string()]
}

/// Hours `start..end` of a day; `end` is exclusive and at most 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourInterval {
    pub start: u32,
    pub end: u32,
}

impl HourInterval {
    pub fn contains(&self, hour: u32) -> bool {
        (self.start..self.end).contains(&hour)
    }
}

impl fmt::Display for HourInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Date every holiday template was resolved against.
    pub anchor: NaiveDate,
    /// Working weekdays, Monday first, without duplicates.
    pub work_days: Vec<Weekday>,
    /// Working hours, ordered by start, without duplicates.
    pub work_hours: Vec<HourInterval>,
    pub holidays: HolidaySet,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Labelled values for display, in a fixed order.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let work_days: Vec<String> = self.work_days.iter().map(|d| d.to_string()).collect();
        let work_hours: Vec<String> = self.work_hours.iter().map(|h| h.to_string()).collect();
        let holidays: Vec<String> =
            self.holidays.dates().iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        vec![
            ("Work Days", format!("[{}]", work_days.join(", "))),
            ("Work Hours", format!("[{}]", work_hours.join(", "))),
            ("Holidays", format!("[{}]", holidays.join(", "))),
        ]
    }

    pub fn is_work_day(&self, weekday: Weekday) -> bool {
        self.work_days.contains(&weekday)
    }

    pub fn is_work_hour(&self, hour: u32) -> bool {
        self.work_hours.iter().any(|h| h.contains(hour))
    }
}
