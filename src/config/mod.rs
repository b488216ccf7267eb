use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub lineup_defaults: LineupDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: Option<u32>,
}

/// Device-descriptive values applied to newly created lineups
///
/// Media clients identify the emulated tuner by these strings, so the
/// defaults mirror a real HDHomeRun unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupDefaults {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_port")]
    pub port: i32,
    #[serde(default = "default_tuners")]
    pub tuners: i32,
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_model_number")]
    pub model_number: String,
    #[serde(default = "default_firmware_name")]
    pub firmware_name: String,
    #[serde(default = "default_firmware_version")]
    pub firmware_version: String,
    #[serde(default = "default_device_id")]
    pub device_id: String,
    #[serde(default = "default_device_auth")]
    pub device_auth: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for LineupDefaults {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            port: default_port(),
            tuners: default_tuners(),
            manufacturer: default_manufacturer(),
            model_name: default_model_name(),
            model_number: default_model_number(),
            firmware_name: default_firmware_name(),
            firmware_version: default_firmware_version(),
            device_id: default_device_id(),
            device_auth: default_device_auth(),
        }
    }
}

impl Config {
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let config = Config::load_from_file(path).unwrap();
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.lineup_defaults.port, DEFAULT_PORT);
        assert!(std::path::Path::new(path).exists());

        // The written file must load back to the same values
        let reloaded = Config::load_from_file(path).unwrap();
        assert_eq!(reloaded.lineup_defaults.model_number, DEFAULT_MODEL_NUMBER);
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [database]
            url = "sqlite::memory:"

            [lineup_defaults]
            tuners = 4
            manufacturer = "Acme"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, Some(DEFAULT_MAX_CONNECTIONS));
        assert_eq!(config.lineup_defaults.tuners, 4);
        assert_eq!(config.lineup_defaults.manufacturer, "Acme");
        assert_eq!(config.lineup_defaults.firmware_name, DEFAULT_FIRMWARE_NAME);
    }
}
