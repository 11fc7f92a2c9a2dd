use std::path::{Path, PathBuf};
use std::{env, fs};

use chrono::{NaiveDate, Weekday};
use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;
use tracing::debug;

use crate::config::types::{ConfigFile, HourInterval, OffDutyConfig, ResolvedConfig};
use crate::holidays::{HolidayError, HolidaySet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("invalid work day '{0}'")]
    InvalidWorkDay(String),

    #[error("no work days defined in config")]
    NoWorkDays,

    #[error("invalid work hours '{0}' (expected HH-HH with start < end <= 24)")]
    InvalidWorkHours(String),

    #[error("no work hours defined in config")]
    NoWorkHours,

    #[error("invalid off_duty.holidays in {0}: {1}")]
    Holiday(String, #[source] HolidayError),

    #[error("cannot expand path '{0}': {1}")]
    ExpandPath(String, String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file and resolve its holidays against `anchor`.
    ///
    /// Any invalid holiday template aborts the whole load.
    pub fn load(
        config_path: Option<&Path>,
        anchor: NaiveDate,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        debug!(path = %path.display(), %anchor, "loading config");
        Self::resolve(&path, cf, anchor)
    }

    fn resolve(
        path: &Path,
        cf: ConfigFile,
        anchor: NaiveDate,
    ) -> Result<ResolvedConfig, ConfigError> {
        let OffDutyConfig { work_days, work_hours, holidays } = cf.off_duty;

        let work_days = parse_work_days(&work_days)?;
        let work_hours = parse_work_hours(&work_hours)?;
        let holidays = HolidaySet::resolve_all(&holidays, anchor)
            .map_err(|e| ConfigError::Holiday(path.display().to_string(), e))?;

        // Resolve log file path if present
        let mut logging = cf.logging;
        if let Some(file) = logging.file.take() {
            logging.file = Some(expand_path(&file.to_string_lossy())?);
        }

        Ok(ResolvedConfig { anchor, work_days, work_hours, holidays, logging })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("holidate").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("holidate").join("config.toml")
}

fn parse_work_days(names: &[String]) -> Result<Vec<Weekday>, ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::NoWorkDays);
    }
    let mut days = names
        .iter()
        .map(|n| parse_weekday(n).ok_or_else(|| ConfigError::InvalidWorkDay(n.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    days.sort_by_key(|d| d.num_days_from_monday());
    days.dedup();
    Ok(days)
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_work_hours(specs: &[String]) -> Result<Vec<HourInterval>, ConfigError> {
    if specs.is_empty() {
        return Err(ConfigError::NoWorkHours);
    }
    let mut hours = specs
        .iter()
        .map(|s| parse_hour_interval(s).ok_or_else(|| ConfigError::InvalidWorkHours(s.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    hours.sort();
    hours.dedup();
    Ok(hours)
}

fn parse_hour_interval(s: &str) -> Option<HourInterval> {
    let (start, end) = s.split_once('-')?;
    let start = parse_hour(start)?;
    let end = parse_hour(end)?;
    (start < end && end <= 24).then_some(HourInterval { start, end })
}

fn parse_hour(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded =
        full(input).map_err(|e| ConfigError::ExpandPath(input.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
