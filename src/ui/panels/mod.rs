pub mod clock_panel;
pub mod controls_panel;

pub use clock_panel::ClockPanel;
pub use controls_panel::ControlsPanel;
