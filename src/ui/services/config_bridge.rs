use crate::config::clock::ClockConfig;
use crate::config::display::DisplayConfig;
use crate::config::palette::{format_hex_color, PaletteConfig};
use crate::config::AppConfig;
use crate::error::FibClockError;
use crate::types::SquareState;
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert AppState to DisplayConfig
    pub fn to_display_config(state: &AppState) -> DisplayConfig {
        DisplayConfig {
            time_format: state.time_format,
            animation_enabled: state.animation_enabled,
            date_format: state.date_format.clone(),
            show_sequence: state.show_sequence,
        }
    }

    /// Convert AppState to ClockConfig
    pub fn to_clock_config(state: &AppState) -> ClockConfig {
        ClockConfig {
            tick_interval_ms: state.tick_interval_ms,
        }
    }

    /// Convert AppState colors to PaletteConfig
    pub fn to_palette_config(state: &AppState) -> PaletteConfig {
        PaletteConfig {
            hour: format_hex_color(state.hour_color),
            minute: format_hex_color(state.minute_color),
            both: format_hex_color(state.both_color),
            inactive: format_hex_color(state.inactive_color),
        }
    }

    pub fn to_app_config(state: &AppState) -> AppConfig {
        AppConfig {
            display: Self::to_display_config(state),
            clock: Self::to_clock_config(state),
            palette: Self::to_palette_config(state),
        }
    }

    /// Copy a loaded configuration into the UI state and schedule a redraw.
    pub fn apply(state: &mut AppState, config: &AppConfig) -> Result<(), FibClockError> {
        let palette = &config.palette;
        let hour_color = palette.rgb_for(SquareState::HourOnly)?;
        let minute_color = palette.rgb_for(SquareState::MinuteOnly)?;
        let both_color = palette.rgb_for(SquareState::Both)?;
        let inactive_color = palette.rgb_for(SquareState::Inactive)?;

        state.time_format = config.display.time_format;
        state.animation_enabled = config.display.animation_enabled;
        state.date_format = config.display.date_format.clone();
        state.show_sequence = config.display.show_sequence;
        state.tick_interval_ms = config.clock.tick_interval_ms;
        state.hour_color = hour_color;
        state.minute_color = minute_color;
        state.both_color = both_color;
        state.inactive_color = inactive_color;
        state.force_refresh = true;
        Ok(())
    }
}
