//! # hivemind-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage ports** that adapters must implement:
//!   - [`ports::SensorStore`] — get-one / get-all / upsert for sensors
//!   - [`ports::SwitchStore`] — same contract for switches
//! - Provide thin application services ([`services::sensor_service::SensorService`],
//!   [`services::switch_service::SwitchService`]) that the HTTP adapter drives
//!
//! ## Dependency rule
//! Depends on `hivemind-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
