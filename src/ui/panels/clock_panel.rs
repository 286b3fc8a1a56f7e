use crate::types::SquareState;
use crate::ui::layout::{cell_rect, square_layout, GRID_COLUMNS, GRID_ROWS};
use crate::ui::state::AppState;
use crate::ui::widgets::{FibSquare, Legend, Readout};

/// Space kept below the grid for the legend
const LEGEND_HEIGHT: f32 = 40.0;

pub struct ClockPanel;

impl ClockPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        Readout::show(ui, state);

        ui.separator();

        let available = ui.available_size();
        let cell_size = (available.x / GRID_COLUMNS as f32)
            .min((available.y - LEGEND_HEIGHT) / GRID_ROWS as f32)
            .max(8.0);
        let grid_size = egui::vec2(GRID_COLUMNS as f32, GRID_ROWS as f32) * cell_size;

        ui.vertical_centered(|ui| {
            let (grid_rect, _) = ui.allocate_exact_size(grid_size, egui::Sense::hover());

            let face = state
                .reading
                .as_ref()
                .map(|r| r.face)
                .unwrap_or([SquareState::Inactive; 5]);

            for (index, cell) in square_layout().into_iter().enumerate() {
                let rect = cell_rect(grid_rect.min, cell, cell_size);
                FibSquare::show(ui, rect, index, face[index], state);
            }
        });

        ui.add_space(8.0);
        Legend::show(ui, state);
    }
}
