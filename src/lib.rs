pub mod config;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;

pub use engines::{approximate, compose, represent};
pub use error::{FibClockError, Result};
pub use types::{ClockFace, ClockReading, IndexSet, SquareState, FIBONACCI_SEQUENCE};
