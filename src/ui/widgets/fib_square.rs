use crate::types::{SquareState, FIBONACCI_SEQUENCE};
use crate::ui::state::AppState;
use std::f64::consts::TAU;

/// Seconds per brightness cycle while animating
pub const PULSE_PERIOD_SECS: f64 = 2.0;

pub struct FibSquare;

impl FibSquare {
    pub fn show(
        ui: &mut egui::Ui,
        rect: egui::Rect,
        index: usize,
        square_state: SquareState,
        state: &AppState,
    ) {
        let time = ui.input(|i| i.time);
        let factor = if square_state.is_active() {
            pulse_factor(time, state.animation_enabled)
        } else {
            1.0
        };
        let rgb = Self::base_color(square_state, state);
        let fill = shade(rgb, factor);
        let value = FIBONACCI_SEQUENCE[index];
        let inner = rect.shrink(2.0);

        let painter = ui.painter();
        painter.rect_filled(inner, egui::CornerRadius::same(6), fill);
        painter.rect_stroke(
            inner,
            egui::CornerRadius::same(6),
            egui::Stroke::new(2.0, egui::Color32::from_gray(40)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            inner.center(),
            egui::Align2::CENTER_CENTER,
            format!("F{}", value),
            egui::FontId::proportional((inner.height() * 0.2).clamp(10.0, 32.0)),
            text_color(rgb),
        );

        ui.interact(rect, ui.id().with(("fib_square", index)), egui::Sense::hover())
            .on_hover_text(format!("Square {} (F{}): {}", index, value, square_state));
    }

    pub fn base_color(square_state: SquareState, state: &AppState) -> [u8; 3] {
        match square_state {
            SquareState::Inactive => state.inactive_color,
            SquareState::HourOnly => state.hour_color,
            SquareState::MinuteOnly => state.minute_color,
            SquareState::Both => state.both_color,
        }
    }
}

/// Brightness multiplier in `[0.75, 1.0]`; constant 1.0 when paused.
pub fn pulse_factor(time: f64, animating: bool) -> f32 {
    if !animating {
        return 1.0;
    }
    let phase = (time * TAU / PULSE_PERIOD_SECS).sin() * 0.5 + 0.5;
    (0.75 + 0.25 * phase) as f32
}

pub fn shade(rgb: [u8; 3], factor: f32) -> egui::Color32 {
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    egui::Color32::from_rgb(scale(rgb[0]), scale(rgb[1]), scale(rgb[2]))
}

/// Dark text on light fills, light text otherwise
pub fn text_color(rgb: [u8; 3]) -> egui::Color32 {
    let luma = 0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32;
    if luma > 150.0 {
        egui::Color32::from_gray(30)
    } else {
        egui::Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_paused_is_constant() {
        assert_eq!(pulse_factor(0.3, false), 1.0);
        assert_eq!(pulse_factor(1.7, false), 1.0);
    }

    #[test]
    fn test_pulse_range() {
        for step in 0..100 {
            let factor = pulse_factor(step as f64 * 0.05, true);
            assert!((0.75..=1.0).contains(&factor));
        }
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(text_color([255, 255, 255]), egui::Color32::from_gray(30));
        assert_eq!(text_color([10, 10, 255]), egui::Color32::WHITE);
    }
}
