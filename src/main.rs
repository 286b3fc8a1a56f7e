use anyhow::Context;
use eframe::NativeOptions;
use fibclock::config::manager::DEFAULT_CONFIG_FILE;
use fibclock::config::ConfigManager;
use fibclock::ui::FibClockApp;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ConfigManager::new();
    let config_path = match std::env::args().nth(1) {
        Some(arg) => Some(PathBuf::from(arg)),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    if let Some(path) = &config_path {
        config
            .load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
    } else {
        log::info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
    }

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 420.0])
            .with_title("Fibonacci Clock"),
        ..Default::default()
    };

    eframe::run_native(
        "Fibonacci Clock",
        native_options,
        Box::new(move |cc| Ok(Box::new(FibClockApp::new(cc, config, config_path.as_deref())))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
