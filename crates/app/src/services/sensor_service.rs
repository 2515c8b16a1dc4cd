//! Sensor service — use-cases for reading and upserting sensors.

use hivemind_domain::error::HivemindError;
use hivemind_domain::sensor::Sensor;

use crate::ports::SensorStore;

/// Application service for sensor lookups and upserts.
pub struct SensorService<S> {
    store: S,
}

impl<S: SensorStore> SensorService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a sensor by id, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, HivemindError> {
        self.store.get_sensor(id).await
    }

    /// List all sensors, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, HivemindError> {
        self.store.all_sensors().await
    }

    /// Upsert a sensor keyed by its own id field.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn store_sensor(&self, sensor: Sensor) -> Result<Sensor, HivemindError> {
        tracing::debug!(id = %sensor.id, value = sensor.value, "storing sensor");
        self.store.put_sensor(sensor).await
    }
}
