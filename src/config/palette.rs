use super::traits::ConfigSection;
use crate::error::FibClockError;
use crate::types::SquareState;
use serde::{Deserialize, Serialize};

/// Square colors as `#rrggbb` strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub hour: String,
    pub minute: String,
    pub both: String,
    pub inactive: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            hour: "#ff0a0a".to_string(),
            minute: "#0ac80a".to_string(),
            both: "#0a64ff".to_string(),
            inactive: "#ffffff".to_string(),
        }
    }
}

impl PaletteConfig {
    pub fn hex_for(&self, state: SquareState) -> &str {
        match state {
            SquareState::Inactive => &self.inactive,
            SquareState::HourOnly => &self.hour,
            SquareState::MinuteOnly => &self.minute,
            SquareState::Both => &self.both,
        }
    }

    pub fn rgb_for(&self, state: SquareState) -> Result<[u8; 3], FibClockError> {
        parse_hex_color(self.hex_for(state))
    }
}

impl ConfigSection for PaletteConfig {
    fn section_name() -> &'static str {
        "palette"
    }

    fn validate(&self) -> Result<(), FibClockError> {
        for color in [&self.hour, &self.minute, &self.both, &self.inactive] {
            parse_hex_color(color)?;
        }
        Ok(())
    }
}

pub fn parse_hex_color(color: &str) -> Result<[u8; 3], FibClockError> {
    let invalid = || FibClockError::Configuration(format!("Invalid color: {}", color));

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(rgb)
}

pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
