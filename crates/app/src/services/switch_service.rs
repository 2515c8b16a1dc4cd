//! Switch service — use-cases for reading and upserting switches.

use hivemind_domain::error::HivemindError;
use hivemind_domain::switch::Switch;

use crate::ports::SwitchStore;

/// Application service for switch lookups and upserts.
pub struct SwitchService<S> {
    store: S,
}

impl<S: SwitchStore> SwitchService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a switch by id, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_switch(&self, id: &str) -> Result<Option<Switch>, HivemindError> {
        self.store.get_switch(id).await
    }

    /// List all switches, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_switches(&self) -> Result<Vec<Switch>, HivemindError> {
        self.store.all_switches().await
    }

    /// Upsert a switch keyed by its own id field.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn store_switch(&self, switch: Switch) -> Result<Switch, HivemindError> {
        tracing::debug!(id = %switch.id, state = switch.state, "storing switch");
        self.store.put_switch(switch).await
    }
}
