use crate::config::display::DEFAULT_DATE_FORMAT;
use crate::config::TimeFormat;
use crate::types::ClockReading;
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    // Display Preferences
    pub time_format: TimeFormat,
    pub animation_enabled: bool,
    pub date_format: String,
    pub show_sequence: bool,

    // Clock Configuration
    pub tick_interval_ms: u64,

    // Palette
    pub hour_color: [u8; 3],
    pub minute_color: [u8; 3],
    pub both_color: [u8; 3],
    pub inactive_color: [u8; 3],

    // Clock State
    pub reading: Option<ClockReading>,
    pub force_refresh: bool,

    // Config File
    pub config_path: Option<PathBuf>,

    // Requests handled by the app after the panels are drawn
    pub pending_action: Option<UserAction>,
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            // Display Preferences
            time_format: TimeFormat::TwentyFourHour,
            animation_enabled: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_sequence: true,

            // Clock Configuration
            tick_interval_ms: 1000,

            // Palette
            hour_color: [255, 10, 10],
            minute_color: [10, 200, 10],
            both_color: [10, 100, 255],
            inactive_color: [255, 255, 255],

            // Clock State
            reading: None,
            force_refresh: true,

            // Config File
            config_path: None,

            pending_action: None,
            status_message: "Ready".to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: UserAction) {
        self.pending_action = Some(action);
    }
}

/// Discrete user events from the controls
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    ToggleFormat,
    ToggleAnimation,
    Reset,
    LoadConfig(PathBuf),
    SaveConfig(PathBuf),
}
