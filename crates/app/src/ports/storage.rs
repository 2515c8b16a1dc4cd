//! Storage ports — the two-method-per-kind persistence contract.
//!
//! All operations are upsert-or-lookup; absence of a key is a valid state
//! and is reported as `None`, never as an error. The only error a store may
//! return is a genuine persistence failure (IO, serialization). Ordering of
//! `all_*` results is undefined.

use std::future::Future;

use hivemind_domain::error::HivemindError;
use hivemind_domain::sensor::Sensor;
use hivemind_domain::switch::Switch;

/// Persistence contract for sensors.
pub trait SensorStore {
    /// Look up a single sensor by id. `None` when absent.
    fn get_sensor(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Sensor>, HivemindError>> + Send;

    /// Fetch every stored sensor, in no particular order.
    fn all_sensors(&self) -> impl Future<Output = Result<Vec<Sensor>, HivemindError>> + Send;

    /// Upsert a sensor keyed by its own `id` field — creates if absent,
    /// overwrites if present. Returns the stored value.
    fn put_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<Sensor, HivemindError>> + Send;
}

/// Persistence contract for switches.
pub trait SwitchStore {
    /// Look up a single switch by id. `None` when absent.
    fn get_switch(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Switch>, HivemindError>> + Send;

    /// Fetch every stored switch, in no particular order.
    fn all_switches(&self) -> impl Future<Output = Result<Vec<Switch>, HivemindError>> + Send;

    /// Upsert a switch keyed by its own `id` field.
    fn put_switch(
        &self,
        switch: Switch,
    ) -> impl Future<Output = Result<Switch, HivemindError>> + Send;
}
