use super::traits::ConfigSection;
use crate::error::FibClockError;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Display preferences read at tick time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_format: TimeFormat,
    pub animation_enabled: bool,
    pub date_format: String,
    pub show_sequence: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    pub fn toggled(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "12-hour",
            TimeFormat::TwentyFourHour => "24-hour",
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::TwentyFourHour,
            animation_enabled: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_sequence: true,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), FibClockError> {
        if self.date_format.trim().is_empty() {
            return Err(FibClockError::Configuration(
                "Date format must not be empty".to_string()
            ));
        }
        if !is_renderable_date_format(&self.date_format) {
            return Err(FibClockError::Configuration(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Formats `now` with `pattern`, or returns `None` if the pattern is
/// malformed or needs data a local date-time lacks (e.g. `%z`).
pub fn try_format_date(now: &NaiveDateTime, pattern: &str) -> Option<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut text = String::new();
    write!(text, "{}", now.format(pattern)).ok()?;
    Some(text)
}

pub fn is_renderable_date_format(pattern: &str) -> bool {
    try_format_date(&NaiveDateTime::default(), pattern).is_some()
}
