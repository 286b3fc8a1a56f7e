use crate::types::SquareState;
use crate::ui::state::AppState;
use crate::ui::widgets::fib_square::{shade, FibSquare};

pub struct Legend;

impl Legend {
    pub fn show(ui: &mut egui::Ui, state: &AppState) {
        ui.horizontal_wrapped(|ui| {
            for square_state in [
                SquareState::HourOnly,
                SquareState::MinuteOnly,
                SquareState::Both,
                SquareState::Inactive,
            ] {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                let color = shade(FibSquare::base_color(square_state, state), 1.0);
                ui.painter().rect_filled(rect, egui::CornerRadius::same(2), color);
                ui.painter().rect_stroke(
                    rect,
                    egui::CornerRadius::same(2),
                    egui::Stroke::new(1.0, egui::Color32::from_gray(40)),
                    egui::StrokeKind::Inside,
                );
                ui.label(square_state.label());
                ui.add_space(8.0);
            }
        });
    }
}
