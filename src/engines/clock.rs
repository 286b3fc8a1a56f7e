// src/engines/clock.rs
use crate::config::display::{try_format_date, DEFAULT_DATE_FORMAT};
use crate::config::{DisplayConfig, TimeFormat};
use crate::engines::compositor::compose;
use crate::engines::representation::represent;
use crate::engines::time_mapping::{hour_target, TimeTargets};
use crate::types::{ClockReading, FIBONACCI_SEQUENCE};
use chrono::{NaiveDateTime, Timelike};

/// Source of the current local date and time
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the same instant
pub struct FixedTimeSource(pub NaiveDateTime);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct ClockEngine<S: TimeSource> {
    source: S,
}

impl ClockEngine<SystemTimeSource> {
    pub fn system() -> Self {
        Self::new(SystemTimeSource)
    }
}

impl<S: TimeSource> ClockEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read the time source and compute the full clock state.
    pub fn tick(&self, display: &DisplayConfig) -> ClockReading {
        reading_at(self.source.now(), display)
    }
}

pub fn reading_at(now: NaiveDateTime, display: &DisplayConfig) -> ClockReading {
    let targets = TimeTargets::from_time(&now);

    let hour_squares = represent(targets.hour);
    let minute_squares = represent(targets.minute);
    let face = compose(&hour_squares, &minute_squares);

    log::debug!(
        "Time: {}:{:02} -> hour value {}, minute value {}",
        now.hour(),
        now.minute(),
        targets.hour,
        targets.minute
    );
    log::debug!("Hour squares: {}, minute squares: {}", hour_squares, minute_squares);
    for (index, state) in face.iter().enumerate() {
        log::debug!("Square {} (F{}): {}", index, FIBONACCI_SEQUENCE[index], state);
    }

    ClockReading {
        hour_target: targets.hour,
        minute_target: targets.minute,
        hour_squares,
        minute_squares,
        face,
        time_text: format_time(now.hour(), now.minute(), display.time_format),
        date_text: format_date(&now, &display.date_format),
    }
}

/// `HH:MM`, with the hour in the requested format
pub fn format_time(hours: u32, minutes: u32, format: TimeFormat) -> String {
    let display_hours = match format {
        TimeFormat::TwentyFourHour => hours,
        TimeFormat::TwelveHour => hour_target(hours),
    };
    format!("{:02}:{:02}", display_hours, minutes)
}

/// Formats with `pattern`, falling back to the default pattern if it cannot
/// be rendered.
pub fn format_date(now: &NaiveDateTime, pattern: &str) -> String {
    try_format_date(now, pattern).unwrap_or_else(|| {
        log::warn!("Invalid date format {:?}, using default", pattern);
        now.format(DEFAULT_DATE_FORMAT).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IndexSet, SquareState};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0, 5, TimeFormat::TwentyFourHour), "00:05");
        assert_eq!(format_time(0, 5, TimeFormat::TwelveHour), "12:05");
        assert_eq!(format_time(15, 30, TimeFormat::TwelveHour), "03:30");
        assert_eq!(format_time(15, 30, TimeFormat::TwentyFourHour), "15:30");
    }

    #[test]
    fn test_tick_uses_source() {
        let engine = ClockEngine::new(FixedTimeSource(at(15, 25)));
        let reading = engine.tick(&DisplayConfig::default());

        assert_eq!(reading.hour_target, 3);
        assert_eq!(reading.minute_target, 5);
        assert_eq!(reading.hour_squares, IndexSet::from_iter([3]));
        assert_eq!(reading.minute_squares, IndexSet::from_iter([4]));
        assert_eq!(reading.face[3], SquareState::HourOnly);
        assert_eq!(reading.face[4], SquareState::MinuteOnly);
        assert_eq!(reading.time_text, "15:25");
        assert_eq!(reading.date_text, "Monday, October 19, 2026");
    }

    #[test]
    fn test_format_does_not_change_squares() {
        let twelve = DisplayConfig {
            time_format: TimeFormat::TwelveHour,
            ..DisplayConfig::default()
        };
        let a = reading_at(at(20, 0), &twelve);
        let b = reading_at(at(20, 0), &DisplayConfig::default());

        assert_eq!(a.face, b.face);
        assert_eq!(a.time_text, "08:00");
        assert_eq!(b.time_text, "20:00");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        assert_eq!(format_date(&at(9, 0), "%Q"), "Monday, October 19, 2026");
        assert_eq!(format_date(&at(9, 0), "%Y-%m-%d"), "2026-10-19");
    }

    #[test]
    fn test_timezone_date_format_falls_back() {
        assert_eq!(format_date(&at(9, 0), "%Y %z"), "Monday, October 19, 2026");

        let display = DisplayConfig {
            date_format: "%Y %z".to_string(),
            ..DisplayConfig::default()
        };
        let reading = reading_at(at(9, 0), &display);
        assert_eq!(reading.date_text, "Monday, October 19, 2026");
    }
}
