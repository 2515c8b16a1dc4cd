//! Application services — thin use-case layer driven by the HTTP adapter.

pub mod sensor_service;
pub mod switch_service;

pub use sensor_service::SensorService;
pub use switch_service::SwitchService;
