use thiserror::Error;

#[derive(Error, Debug)]
pub enum FibClockError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid time: {hours:02}:{minutes:02}")]
    InvalidTime { hours: u32, minutes: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, FibClockError>;
