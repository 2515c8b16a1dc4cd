//! Shared application state for axum handlers.

use std::sync::Arc;

use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_app::services::sensor_service::SensorService;
use hivemind_app::services::switch_service::SwitchService;

/// Application state shared across all axum handlers.
///
/// Generic over the store types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the stores themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SS, WS> {
    /// Sensor lookup/upsert service.
    pub sensor_service: Arc<SensorService<SS>>,
    /// Switch lookup/upsert service.
    pub switch_service: Arc<SwitchService<WS>>,
}

impl<SS, WS> Clone for AppState<SS, WS> {
    fn clone(&self) -> Self {
        Self {
            sensor_service: Arc::clone(&self.sensor_service),
            switch_service: Arc::clone(&self.switch_service),
        }
    }
}

impl<SS, WS> AppState<SS, WS>
where
    SS: SensorStore + Send + Sync + 'static,
    WS: SwitchStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(sensor_service: SensorService<SS>, switch_service: SwitchService<WS>) -> Self {
        Self {
            sensor_service: Arc::new(sensor_service),
            switch_service: Arc::new(switch_service),
        }
    }
}
