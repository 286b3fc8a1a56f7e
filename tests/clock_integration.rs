use chrono::{NaiveDate, NaiveDateTime};
use fibclock::config::{DisplayConfig, TimeFormat};
use fibclock::engines::{ClockEngine, FixedTimeSource, TimeTargets};
use fibclock::ui::services::{ClockService, ConfigBridge};
use fibclock::ui::{AppState, UserAction};
use fibclock::{IndexSet, SquareState};
use std::time::{Duration, Instant};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, 30)
        .unwrap()
}

#[test]
fn test_midnight_shows_twelve() {
    let engine = ClockEngine::new(FixedTimeSource(at(0, 3)));
    let reading = engine.tick(&DisplayConfig::default());

    assert_eq!(reading.hour_target, 12);
    assert_eq!(reading.minute_target, 0);
    assert_eq!(reading.hour_squares, IndexSet::full());
    assert!(reading.minute_squares.is_empty());
    assert!(reading.face.iter().all(|s| *s == SquareState::HourOnly));
    assert_eq!(reading.time_text, "00:03");
}

#[test]
fn test_noon_in_twelve_hour_format() {
    let display = DisplayConfig {
        time_format: TimeFormat::TwelveHour,
        ..DisplayConfig::default()
    };
    let reading = ClockEngine::new(FixedTimeSource(at(12, 59))).tick(&display);

    assert_eq!(reading.time_text, "12:59");
    assert_eq!(reading.hour_target, 12);
    assert_eq!(reading.minute_target, 11);
    // 12 hours and 11 blocks share every square except index 0
    assert_eq!(reading.face[0], SquareState::HourOnly);
    assert!(reading.face[1..].iter().all(|s| *s == SquareState::Both));
}

#[test]
fn test_invalid_wall_clock_rejected_at_boundary() {
    assert!(TimeTargets::new(23, 59).is_ok());
    assert!(TimeTargets::new(24, 0).is_err());
    assert!(TimeTargets::new(0, 60).is_err());
}

#[test]
fn test_service_follows_state_preferences() {
    let mut service = ClockService::new(ClockEngine::new(FixedTimeSource(at(21, 45))));
    let mut state = AppState::new();
    let start = Instant::now();

    service.poll(start, &mut state);
    assert_eq!(state.reading.as_ref().unwrap().time_text, "21:45");

    state.time_format = state.time_format.toggled();
    state.force_refresh = true;
    service.poll(start + Duration::from_millis(1), &mut state);
    assert_eq!(state.reading.as_ref().unwrap().time_text, "09:45");

    let display = ConfigBridge::to_display_config(&state);
    assert_eq!(display.time_format, TimeFormat::TwelveHour);
}

#[test]
fn test_request_replaces_pending_action() {
    let mut state = AppState::new();
    state.request(UserAction::ToggleFormat);
    state.request(UserAction::Reset);
    assert_eq!(state.pending_action, Some(UserAction::Reset));
}
