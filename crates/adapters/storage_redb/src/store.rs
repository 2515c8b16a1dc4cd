//! redb implementation of the storage ports.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;

use hivemind_app::ports::{SensorStore, SwitchStore};
use hivemind_domain::error::HivemindError;
use hivemind_domain::sensor::Sensor;
use hivemind_domain::switch::Switch;

use crate::error::StorageError;

type EntityTable = TableDefinition<'static, &'static str, &'static [u8]>;

const SENSORS: EntityTable = TableDefinition::new("sensor");
const SWITCHES: EntityTable = TableDefinition::new("switch");

/// Durable store backed by a single redb database file.
///
/// All access goes through redb transactions: writes are serialized by the
/// database's single-writer lock, reads see a consistent snapshot.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open the database file at `path`, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] when the file cannot be opened
    /// or created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;
        Ok(Self { db: Arc::new(db) })
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        table: EntityTable,
        id: &str,
    ) -> Result<Option<T>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(table) {
            Ok(table) => table,
            // A kind that has never been written has no table yet.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match table.get(id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn fetch_all<T: DeserializeOwned>(&self, table: EntityTable) -> Result<Vec<T>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(table) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut entities = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            entities.push(serde_json::from_slice(value.value())?);
        }
        Ok(entities)
    }

    fn upsert<T: Serialize>(
        &self,
        table: EntityTable,
        id: &str,
        entity: &T,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec(entity)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(table)?;
            table.insert(id, encoded.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl SensorStore for RedbStore {
    async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, HivemindError> {
        Ok(self.fetch(SENSORS, id)?)
    }

    async fn all_sensors(&self) -> Result<Vec<Sensor>, HivemindError> {
        Ok(self.fetch_all(SENSORS)?)
    }

    async fn put_sensor(&self, sensor: Sensor) -> Result<Sensor, HivemindError> {
        self.upsert(SENSORS, &sensor.id, &sensor)?;
        Ok(sensor)
    }
}

impl SwitchStore for RedbStore {
    async fn get_switch(&self, id: &str) -> Result<Option<Switch>, HivemindError> {
        Ok(self.fetch(SWITCHES, id)?)
    }

    async fn all_switches(&self) -> Result<Vec<Switch>, HivemindError> {
        Ok(self.fetch_all(SWITCHES)?)
    }

    async fn put_switch(&self, switch: Switch) -> Result<Switch, HivemindError> {
        self.upsert(SWITCHES, &switch.id, &switch)?;
        Ok(switch)
    }
}
