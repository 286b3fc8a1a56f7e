use crate::types::FIBONACCI_SEQUENCE;
use crate::ui::state::AppState;

/// Text time and date, plus the optional sequence line
pub struct Readout;

impl Readout {
    pub fn show(ui: &mut egui::Ui, state: &AppState) {
        ui.vertical_centered(|ui| {
            match &state.reading {
                Some(reading) => {
                    ui.label(egui::RichText::new(&reading.time_text).size(40.0).strong());
                    ui.label(&reading.date_text);
                    ui.small(format!(
                        "Hours: {} = {}   Minutes: {} x 5 = {}",
                        reading.hour_target,
                        reading.hour_squares,
                        reading.minute_target,
                        reading.minute_squares
                    ));
                }
                None => {
                    ui.label("--:--");
                }
            }

            if state.show_sequence {
                let values: Vec<String> = FIBONACCI_SEQUENCE.iter().map(|v| v.to_string()).collect();
                ui.small(format!("Sequence: {}", values.join(", ")));
            }
        });
    }
}
