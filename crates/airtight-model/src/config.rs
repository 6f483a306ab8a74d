//! Model configuration

use serde::Deserialize;

/// Data-directory layout and protocol constants
///
/// The serving layer may override the defaults from its own configuration
/// file; the model itself never writes configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Route description file name
    pub routes_file: String,
    /// Slot table file name
    pub slot_table_file: String,
    /// Extension of accepted log files
    pub log_extension: String,
    /// Advertised slot length, in protocol time units
    pub slot_length: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            routes_file: "routes.txt".to_string(),
            slot_table_file: "slot_table.txt".to_string(),
            log_extension: "log".to_string(),
            slot_length: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.routes_file, "routes.txt");
        assert_eq!(config.slot_table_file, "slot_table.txt");
        assert_eq!(config.log_extension, "log");
        assert_eq!(config.slot_length, 100);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: ModelConfig =
            serde_json::from_str(r#"{ "routes_file": "fixed_routes.txt" }"#).unwrap();
        assert_eq!(config.routes_file, "fixed_routes.txt");
        assert_eq!(config.slot_table_file, "slot_table.txt");
        assert_eq!(config.slot_length, 100);
    }
}
