pub mod representation;
pub mod compositor;
pub mod time_mapping;
pub mod clock;

pub use representation::{approximate, represent};
pub use compositor::compose;
pub use time_mapping::TimeTargets;
pub use clock::{ClockEngine, FixedTimeSource, SystemTimeSource, TimeSource};
