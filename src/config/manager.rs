use super::{
    clock::ClockConfig,
    display::DisplayConfig,
    palette::PaletteConfig,
    traits::ConfigSection,
};
use crate::error::FibClockError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `FIBCLOCK_CLOCK__TICK_INTERVAL_MS`
pub const ENV_PREFIX: &str = "FIBCLOCK";
pub const DEFAULT_CONFIG_FILE: &str = "fibclock.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub clock: ClockConfig,
    pub palette: PaletteConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FibClockError> {
        validate_section(&self.display)?;
        validate_section(&self.clock)?;
        validate_section(&self.palette)?;
        Ok(())
    }
}

/// Validates one section, tagging configuration errors with its name.
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), FibClockError> {
    section.validate().map_err(|e| match e {
        FibClockError::Configuration(msg) => {
            FibClockError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, layered under `FIBCLOCK_*` environment variables.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FibClockError> {
        self.load_layered(path, None)
    }

    /// Same as [`Self::load_from_file`], but reads overrides from `env`
    /// instead of the process environment when given.
    pub fn load_layered<P: AsRef<Path>>(
        &self,
        path: P,
        env: Option<config::Map<String, String>>,
    ) -> Result<(), FibClockError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FibClockError::Configuration(format!(
                "Failed to read config: {} does not exist",
                path.display()
            )));
        }

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;

        log::info!("Loaded configuration from {}", path.display());
        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FibClockError> {
        let toml_str = toml::to_string_pretty(&self.get())?;

        std::fs::write(path.as_ref(), toml_str)
            .map_err(|e| FibClockError::Configuration(format!("Failed to write config: {}", e)))?;

        log::info!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `f` and validate; the previous configuration is kept on error.
    pub fn update<F>(&self, f: F) -> Result<(), FibClockError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.write()? = candidate;
        Ok(())
    }

    pub fn replace(&self, config: AppConfig) -> Result<(), FibClockError> {
        config.validate()?;
        *self.write()? = config;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, FibClockError> {
        self.config
            .write()
            .map_err(|_| FibClockError::Configuration("Config lock poisoned".to_string()))
    }
}
