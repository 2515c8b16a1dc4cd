//! # hivemind-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the legacy sensor/switch JSON API (`/api/sensor/…`,
//!   `/api/switch/…`) with its historical routing contract: `/` and
//!   `/api/` answer empty 200s, unknown paths under `/` answer 404,
//!   anything else under `/api/` answers 501
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `hivemind-app` (for port traits and services) and
//! `hivemind-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
