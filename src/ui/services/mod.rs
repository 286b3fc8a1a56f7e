pub mod config_bridge;
pub mod clock_service;

pub use config_bridge::ConfigBridge;
pub use clock_service::ClockService;
