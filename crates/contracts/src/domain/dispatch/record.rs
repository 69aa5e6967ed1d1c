use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Wire types
// ============================================================================

/// Full payload submitted per save action.
///
/// Field names on the wire are fixed by the receiving sheet script; the serde
/// renames below are the contract, do not change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRecord {
    #[serde(rename = "dateTime")]
    pub date_time: String,

    pub store: String,

    pub technician: String,

    pub district: String,

    #[serde(rename = "totalSystems")]
    pub total_systems: u32,

    pub systems: Vec<SystemEntry>,
}

/// One configured system inside a dispatch record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemEntry {
    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "plantType")]
    pub plant_type: String,

    /// Presence flag per catalog component, keyed by display name. Every
    /// catalog name is present, `false` when unchecked.
    pub components: BTreeMap<String, bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs;

    fn sample_entry() -> SystemEntry {
        SystemEntry {
            customer_name: "Alice".to_string(),
            plant_type: "3 Kw".to_string(),
            components: catalogs::COMPONENT_NAMES
                .iter()
                .map(|name| (name.to_string(), *name == "Module"))
                .collect(),
        }
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = DispatchRecord {
            date_time: "2025-08-05T09:30".to_string(),
            store: "Ghazipur".to_string(),
            technician: "Upender".to_string(),
            district: "Ballia".to_string(),
            total_systems: 1,
            systems: vec![sample_entry()],
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["dateTime", "store", "technician", "district", "totalSystems", "systems"] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }

        let system = value["systems"][0].as_object().unwrap();
        for key in ["customerName", "plantType", "components"] {
            assert!(system.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(system["components"]["Module"], true);
        assert_eq!(system["components"]["Inverter"], false);
    }

    #[test]
    fn entry_components_cover_the_catalog() {
        let entry = sample_entry();
        assert_eq!(entry.components.len(), catalogs::COMPONENT_NAMES.len());
        for name in catalogs::COMPONENT_NAMES {
            assert!(entry.components.contains_key(*name));
        }
    }
}
