//! Sensor — a named integer reading reported by some device.

use serde::{Deserialize, Serialize};

/// A sensor with an identifier and its current integer value.
///
/// The wire representation keeps the legacy PascalCase field names
/// (`ID`, `Name`, `Unit`, `Type`, `Value`). Fields missing from a JSON
/// body decode to their zero values, mirroring how clients have always
/// been allowed to send partial objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Sensor {
    /// Unique identifier within the sensor namespace.
    #[serde(rename = "ID")]
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Measurement unit (e.g. `C`, `%`).
    pub unit: String,
    /// Free-form type tag (e.g. `generic`, `temperature`).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Current reading.
    pub value: i64,
}
