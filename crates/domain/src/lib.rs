//! # hivemind-domain
//!
//! Pure domain model for the hivemind home telemetry service.
//!
//! ## Responsibilities
//! - Define **Sensors** (named integer readings: temperature, humidity, …)
//! - Define **Switches** (named boolean actuators: relays, lights, …)
//! - Define the workspace error conventions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod sensor;
pub mod switch;
