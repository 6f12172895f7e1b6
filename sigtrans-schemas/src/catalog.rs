//! Medium selection list export

use serde::{Deserialize, Serialize};

use sigtrans_core::{catalog, CatalogEntry, MediumClass};

use crate::SchemaError;

/// One entry of the medium drop-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumOption {
    pub id: String,
    pub name: String,
    pub class: MediumClass,
    /// dB/km
    pub loss_per_km: f64,
    /// MHz
    pub bandwidth: f64,
    /// Mbps
    pub max_capacity: f64,
}

impl From<CatalogEntry> for MediumOption {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            class: entry.class,
            loss_per_km: entry.loss_per_km,
            bandwidth: entry.bandwidth_mhz,
            max_capacity: entry.max_capacity_mbps,
        }
    }
}

/// Built-in media in catalog order
pub fn medium_options() -> Vec<MediumOption> {
    catalog().map(MediumOption::from).collect()
}

/// [`medium_options`] as a JSON array
pub fn catalog_json() -> Result<String, SchemaError> {
    serde_json::to_string(&medium_options()).map_err(|e| SchemaError::Encode(e.to_string()))
}
