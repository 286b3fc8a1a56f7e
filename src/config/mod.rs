pub mod traits;
pub mod display;
pub mod clock;
pub mod palette;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use display::{DisplayConfig, TimeFormat};
pub use clock::ClockConfig;
pub use palette::PaletteConfig;
pub use traits::ConfigSection;
