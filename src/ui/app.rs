use super::panels::{ClockPanel, ControlsPanel};
use super::services::{ClockService, ConfigBridge};
use super::state::{AppState, UserAction};
use crate::config::ConfigManager;
use std::path::Path;
use std::time::Instant;

pub struct FibClockApp {
    state: AppState,
    config: ConfigManager,
    clock: ClockService,
    clock_panel: ClockPanel,
    controls_panel: ControlsPanel,
}

impl Default for FibClockApp {
    fn default() -> Self {
        Self::with_config(ConfigManager::new(), None)
    }
}

impl FibClockApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ConfigManager, config_path: Option<&Path>) -> Self {
        Self::with_config(config, config_path)
    }

    pub fn with_config(config: ConfigManager, config_path: Option<&Path>) -> Self {
        let mut app = Self {
            state: AppState::new(),
            config,
            clock: ClockService::system(),
            clock_panel: ClockPanel::new(),
            controls_panel: ControlsPanel::new(),
        };
        app.state.config_path = config_path.map(Path::to_path_buf);
        app.reset();
        app
    }

    /// Re-initialise the UI state from the active configuration.
    fn reset(&mut self) {
        let config_path = self.state.config_path.take();
        self.state = AppState::new();
        self.state.config_path = config_path;

        if let Err(e) = ConfigBridge::apply(&mut self.state, &self.config.get()) {
            log::error!("Failed to apply configuration: {}", e);
            self.state.status_message = format!("Error applying config: {}", e);
        }
        self.clock.reset();
        log::info!("Clock reset");
    }

    fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::ToggleFormat => {
                self.state.time_format = self.state.time_format.toggled();
                self.state.force_refresh = true;
                log::info!("Time format toggled: {}", self.state.time_format.label());
            }
            UserAction::ToggleAnimation => {
                self.state.animation_enabled = !self.state.animation_enabled;
                log::info!(
                    "Animation toggled: {}",
                    if self.state.animation_enabled { "Playing" } else { "Paused" }
                );
            }
            UserAction::Reset => {
                self.reset();
                self.state.status_message = "Clock reset".to_string();
            }
            UserAction::LoadConfig(path) => match self.config.load_from_file(&path) {
                Ok(()) => {
                    self.state.config_path = Some(path);
                    self.reset();
                    self.state.status_message = "Configuration loaded".to_string();
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", path.display(), e);
                    self.state.status_message = format!("Error loading config: {}", e);
                }
            },
            UserAction::SaveConfig(path) => {
                let result = self
                    .config
                    .replace(ConfigBridge::to_app_config(&self.state))
                    .and_then(|_| self.config.save_to_file(&path));
                match result {
                    Ok(()) => {
                        self.state.config_path = Some(path);
                        self.state.status_message = "Configuration saved".to_string();
                    }
                    Err(e) => {
                        log::error!("Failed to save {}: {}", path.display(), e);
                        self.state.status_message = format!("Error saving config: {}", e);
                    }
                }
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.state.animation_enabled
            && self
                .state
                .reading
                .as_ref()
                .is_some_and(|r| r.face.iter().any(|s| s.is_active()))
    }
}

impl eframe::App for FibClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clock.poll(Instant::now(), &mut self.state);

        // Top bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fibonacci Clock");
            });
        });

        // Left Panel - Controls
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.controls_panel.show(ui, &mut self.state);
                });
            });

        // Central Panel - Clock Face
        egui::CentralPanel::default().show(ctx, |ui| {
            self.clock_panel.show(ui, &self.state);
        });

        if let Some(action) = self.state.pending_action.take() {
            self.handle_action(action);
            ctx.request_repaint();
        }

        if self.is_animating() {
            ctx.request_repaint();
        } else {
            let interval = ConfigBridge::to_clock_config(&self.state).tick_interval();
            ctx.request_repaint_after(self.clock.until_next_tick(Instant::now(), interval));
        }
    }
}
