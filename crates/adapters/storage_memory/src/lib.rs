//! # hivemind-adapter-storage-memory
//!
//! In-memory implementation of the storage ports. State lives in process
//! memory and is lost on shutdown — useful for development, demos, and as
//! the reference implementation in tests.
//!
//! The store is `Clone` (backed by an `Arc`) so one instance can serve both
//! the sensor and switch services. Each map is guarded by its own mutex,
//! held only for the duration of a single map operation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_domain::error::HivemindError;
use hivemind_domain::sensor::Sensor;
use hivemind_domain::switch::Switch;

#[derive(Default)]
struct Inner {
    sensors: Mutex<HashMap<String, Sensor>>,
    switches: Mutex<HashMap<String, Switch>>,
}

/// Transient in-memory store keyed by entity id.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Inner>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sensors(&self) -> MutexGuard<'_, HashMap<String, Sensor>> {
        self.inner
            .sensors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn switches(&self) -> MutexGuard<'_, HashMap<String, Switch>> {
        self.inner
            .switches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SensorStore for InMemoryStore {
    async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, HivemindError> {
        Ok(self.sensors().get(id).cloned())
    }

    async fn all_sensors(&self) -> Result<Vec<Sensor>, HivemindError> {
        Ok(self.sensors().values().cloned().collect())
    }

    async fn put_sensor(&self, sensor: Sensor) -> Result<Sensor, HivemindError> {
        self.sensors().insert(sensor.id.clone(), sensor.clone());
        Ok(sensor)
    }
}

impl SwitchStore for InMemoryStore {
    async fn get_switch(&self, id: &str) -> Result<Option<Switch>, HivemindError> {
        Ok(self.switches().get(id).cloned())
    }

    async fn all_switches(&self) -> Result<Vec<Switch>, HivemindError> {
        Ok(self.switches().values().cloned().collect())
    }

    async fn put_switch(&self, switch: Switch) -> Result<Switch, HivemindError> {
        self.switches().insert(switch.id.clone(), switch.clone());
        Ok(switch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_when_sensor_absent() {
        let store = InMemoryStore::new();
        assert!(store.get_sensor("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_sensors_stored() {
        let store = InMemoryStore::new();
        assert!(store.all_sensors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_round_trip_sensor_through_put_and_get() {
        let store = InMemoryStore::new();
        let sensor = Sensor {
            id: "test".to_string(),
            value: 64,
            ..Sensor::default()
        };

        store.put_sensor(sensor.clone()).await.unwrap();

        assert_eq!(store.get_sensor("test").await.unwrap(), Some(sensor));
    }

    #[tokio::test]
    async fn should_overwrite_sensor_on_second_put() {
        let store = InMemoryStore::new();
        store
            .put_sensor(Sensor {
                id: "test".to_string(),
                value: 64,
                ..Sensor::default()
            })
            .await
            .unwrap();
        store
            .put_sensor(Sensor {
                id: "test".to_string(),
                value: 12,
                ..Sensor::default()
            })
            .await
            .unwrap();

        let fetched = store.get_sensor("test").await.unwrap().unwrap();
        assert_eq!(fetched.value, 12);
        assert_eq!(store.all_sensors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_sensor_and_switch_namespaces_separate() {
        let store = InMemoryStore::new();
        store
            .put_sensor(Sensor {
                id: "shared".to_string(),
                ..Sensor::default()
            })
            .await
            .unwrap();

        assert!(store.get_switch("shared").await.unwrap().is_none());
        assert!(store.all_switches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_round_trip_switch_through_put_and_get() {
        let store = InMemoryStore::new();
        let switch = Switch {
            id: "porch".to_string(),
            state: true,
            ..Switch::default()
        };

        store.put_switch(switch.clone()).await.unwrap();

        assert_eq!(store.get_switch("porch").await.unwrap(), Some(switch));
    }

    #[tokio::test]
    async fn should_share_state_between_clones() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        store
            .put_sensor(Sensor {
                id: "test".to_string(),
                value: 1,
                ..Sensor::default()
            })
            .await
            .unwrap();

        assert!(clone.get_sensor("test").await.unwrap().is_some());
    }
}
