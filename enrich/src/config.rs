use serde::{Deserialize, Serialize};

use shoreline::io::import::FeatureSelection;
use shoreline::util::IndexConfig;

/// Configuration of the enrichment run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnrichConfig {
    /// Configuration of the coastal distance index
    pub index_config: IndexConfig,
    /// Which features of the GeoJSON boundary file are part of the coastline
    pub feature_selection: FeatureSelection,
    pub lat_column: String,
    pub lng_column: String,
    /// Column the distance (in meters) is written to. Appended if it does not exist yet, overwritten otherwise.
    pub output_column: String,
    /// Column whose property type labels are replaced by their rank. If undefined, no ranking is done.
    pub property_type_column: Option<String>,
    /// Column with sale dates that are rewritten as `YYYY-MM-DD`. If undefined, dates are left untouched.
    pub date_column: Option<String>,
    /// strftime-like format of the dates in `date_column`
    pub date_format: String,
    /// Number of records read, evaluated and written at once
    pub chunk_size: usize,
    /// Wall-clock budget in seconds. Records not evaluated in time are written without a distance.
    pub time_limit_s: Option<u64>,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            index_config: IndexConfig::default(),
            feature_selection: FeatureSelection::All,
            lat_column: "Latitude".to_string(),
            lng_column: "Longitude".to_string(),
            output_column: "Distance_to_Coast".to_string(),
            property_type_column: Some("Property_Type".to_string()),
            date_column: Some("Date_Sold".to_string()),
            date_format: "%d/%m/%Y".to_string(),
            chunk_size: 5000,
            time_limit_s: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use shoreline::util::DistanceModel;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: EnrichConfig = serde_json::from_str(
            r#"{"chunk_size": 100, "index_config": {"model": "segment", "leaf_size": 8, "parallel": false, "parallel_threshold": 1}}"#,
        )
        .unwrap();
        assert_eq!(config.chunk_size, 100);
        assert_eq!(config.index_config.model, DistanceModel::Segment);
        assert_eq!(config.lat_column, "Latitude");
        assert_eq!(config.property_type_column.as_deref(), Some("Property_Type"));
        assert_eq!(config.date_format, "%d/%m/%Y");
    }
}
