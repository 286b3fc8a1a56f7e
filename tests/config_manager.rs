use fibclock::config::{AppConfig, ConfigManager, TimeFormat};
use std::path::PathBuf;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fibclock-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn no_env() -> Option<config::Map<String, String>> {
    Some(config::Map::new())
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = temp_config(
        "partial.toml",
        r#"
[display]
time_format = "twelve_hour"
animation_enabled = false
"#,
    );

    let manager = ConfigManager::new();
    manager.load_layered(&path, no_env()).unwrap();
    let config = manager.get();

    assert_eq!(config.display.time_format, TimeFormat::TwelveHour);
    assert!(!config.display.animation_enabled);
    assert_eq!(config.clock.tick_interval_ms, 1000);
    assert_eq!(config.palette, AppConfig::default().palette);
}

#[test]
fn test_environment_overrides_file() {
    let path = temp_config(
        "env.toml",
        r#"
[clock]
tick_interval_ms = 2000
"#,
    );

    let mut env = config::Map::new();
    env.insert("FIBCLOCK_CLOCK__TICK_INTERVAL_MS".to_string(), "500".to_string());

    let manager = ConfigManager::new();
    manager.load_layered(&path, Some(env)).unwrap();

    assert_eq!(manager.get().clock.tick_interval_ms, 500);
}

#[test]
fn test_invalid_file_keeps_previous_config() {
    let path = temp_config(
        "invalid.toml",
        r##"
[palette]
hour = "red"
"##,
    );

    let manager = ConfigManager::new();
    assert!(manager.load_layered(&path, no_env()).is_err());
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let manager = ConfigManager::new();
    let path = std::env::temp_dir().join("fibclock-does-not-exist.toml");
    assert!(manager.load_from_file(path).is_err());
}

#[test]
fn test_save_and_reload() {
    let path = temp_config("saved.toml", "");

    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.display.time_format = TimeFormat::TwelveHour;
            c.palette.both = "#00ffee".to_string();
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_layered(&path, no_env()).unwrap();
    assert_eq!(reloaded.get(), manager.get());
}

#[test]
fn test_update_rejects_invalid_values() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.clock.tick_interval_ms = 5);

    assert!(result.is_err());
    assert_eq!(manager.get().clock.tick_interval_ms, 1000);
}

#[test]
fn test_errors_name_the_section() {
    let manager = ConfigManager::new();
    let err = manager
        .update(|c| c.palette.minute = "green".to_string())
        .unwrap_err();
    assert!(err.to_string().contains("[palette]"), "got {}", err);

    let err = manager
        .update(|c| c.display.date_format = "%Y %z".to_string())
        .unwrap_err();
    assert!(err.to_string().contains("[display]"), "got {}", err);
}
