//! Switch — a named boolean actuator.

use serde::{Deserialize, Serialize};

/// A switch with an identifier and its current on/off state.
///
/// Same lifecycle shape as [`Sensor`](crate::sensor::Sensor): created on
/// first write, mutated by later writes, never deleted through the API.
/// Wire field names stay PascalCase (`ID`, `Name`, `Type`, `State`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Switch {
    /// Unique identifier within the switch namespace.
    #[serde(rename = "ID")]
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Free-form type tag (e.g. `relay`, `light`).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Current on/off state.
    pub state: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_legacy_field_names() {
        let switch = Switch {
            id: "porch".to_string(),
            name: "Porch Light".to_string(),
            kind: "light".to_string(),
            state: true,
        };

        let json = serde_json::to_value(&switch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ID": "porch",
                "Name": "Porch Light",
                "Type": "light",
                "State": true,
            })
        );
    }

    #[test]
    fn should_default_missing_fields_on_decode() {
        let switch: Switch = serde_json::from_str(r#"{"ID": "porch"}"#).unwrap();
        assert_eq!(switch.id, "porch");
        assert!(!switch.state);
    }
}
