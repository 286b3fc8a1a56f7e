use crate::config::clock::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use crate::ui::state::{AppState, UserAction};

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Controls");
        ui.separator();

        // 1. Toggles
        Self::show_control_buttons(ui, state);

        ui.separator();

        // 2. Clock Settings
        ui.collapsing("Clock", |ui| {
            Self::show_clock_settings(ui, state);
        });

        ui.separator();

        // 3. Palette
        ui.collapsing("Colors", |ui| {
            Self::show_palette(ui, state);
        });

        ui.separator();

        // 4. Configuration File
        ui.collapsing("Configuration File", |ui| {
            Self::show_config_file(ui, state);
        });

        ui.separator();

        ui.label(&state.status_message);
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered_justified(|ui| {
            let format_label = format!("⇄ 12/24h ({})", state.time_format.label());
            if ui.button(format_label).clicked() {
                state.request(UserAction::ToggleFormat);
            }

            let animation_label = if state.animation_enabled {
                "⏸ Pause"
            } else {
                "▶ Play"
            };
            if ui.button(animation_label).clicked() {
                state.request(UserAction::ToggleAnimation);
            }

            if ui.button("⟲ Reset").clicked() {
                state.request(UserAction::Reset);
            }
        });
    }

    fn show_clock_settings(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Tick Interval:");
            ui.add(egui::DragValue::new(&mut state.tick_interval_ms)
                .suffix(" ms")
                .speed(10)
                .range(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS));
        });

        ui.checkbox(&mut state.show_sequence, "Show sequence");
    }

    fn show_palette(ui: &mut egui::Ui, state: &mut AppState) {
        egui::Grid::new("palette_grid").num_columns(2).show(ui, |ui| {
            ui.label("Hours:");
            ui.color_edit_button_srgb(&mut state.hour_color);
            ui.end_row();

            ui.label("Minutes:");
            ui.color_edit_button_srgb(&mut state.minute_color);
            ui.end_row();

            ui.label("Both:");
            ui.color_edit_button_srgb(&mut state.both_color);
            ui.end_row();

            ui.label("Inactive:");
            ui.color_edit_button_srgb(&mut state.inactive_color);
            ui.end_row();
        });
    }

    fn show_config_file(ui: &mut egui::Ui, state: &mut AppState) {
        match &state.config_path {
            Some(path) => {
                ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));
            }
            None => {
                ui.label("Using defaults");
            }
        }

        ui.horizontal(|ui| {
            if ui.button("Load...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("TOML Files", &["toml"])
                    .pick_file()
                {
                    state.request(UserAction::LoadConfig(path));
                }
            }

            if ui.button("Save...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("TOML Files", &["toml"])
                    .set_file_name(crate::config::manager::DEFAULT_CONFIG_FILE)
                    .save_file()
                {
                    state.request(UserAction::SaveConfig(path));
                }
            }
        });
    }
}
