mod app;
mod panels;
mod widgets;
pub mod layout;
pub mod services;
pub mod state;

pub use app::FibClockApp;
pub use state::{AppState, UserAction};
