use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LineupDefaults;
use crate::entities::lineup;
use crate::errors::{LineupError, LineupResult};
use crate::models::LineupChannel;

/// A configured virtual tuner device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub id: i32,
    pub name: String,
    /// Advertised over SSDP when set
    pub ssdp: bool,
    pub listen_address: String,
    /// Address handed to clients in discovery responses (may differ from
    /// `listen_address` behind NAT)
    pub discovery_address: String,
    pub port: i32,
    pub tuners: i32,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub firmware_name: String,
    pub firmware_version: String,
    pub device_id: String,
    pub device_auth: String,
    pub device_uuid: String,
    pub created_at: Option<DateTime<Utc>>,
    /// `None` unless channels were requested on read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<LineupChannel>>,
}

impl From<lineup::Model> for Lineup {
    fn from(model: lineup::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ssdp: model.ssdp,
            listen_address: model.listen_address,
            discovery_address: model.discovery_address,
            port: model.port,
            tuners: model.tuners,
            manufacturer: model.manufacturer,
            model_name: model.model_name,
            model_number: model.model_number,
            firmware_name: model.firmware_name,
            firmware_version: model.firmware_version,
            device_id: model.device_id,
            device_auth: model.device_auth,
            device_uuid: model.device_uuid,
            created_at: model.created_at,
            channels: None,
        }
    }
}

/// Request for lineup creation
///
/// Carries every mutable field; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupCreateRequest {
    pub name: String,
    pub ssdp: bool,
    pub listen_address: String,
    pub discovery_address: String,
    pub port: i32,
    pub tuners: i32,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub firmware_name: String,
    pub firmware_version: String,
    pub device_id: String,
    pub device_auth: String,
    pub device_uuid: String,
}

impl LineupCreateRequest {
    /// Build a request from configured device defaults
    pub fn from_defaults(
        name: impl Into<String>,
        discovery_address: impl Into<String>,
        device_uuid: impl Into<String>,
        defaults: &LineupDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            ssdp: true,
            listen_address: defaults.listen_address.clone(),
            discovery_address: discovery_address.into(),
            port: defaults.port,
            tuners: defaults.tuners,
            manufacturer: defaults.manufacturer.clone(),
            model_name: defaults.model_name.clone(),
            model_number: defaults.model_number.clone(),
            firmware_name: defaults.firmware_name.clone(),
            firmware_version: defaults.firmware_version.clone(),
            device_id: defaults.device_id.clone(),
            device_auth: defaults.device_auth.clone(),
            device_uuid: device_uuid.into(),
        }
    }

    pub fn validate(&self) -> LineupResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("listen_address", &self.listen_address)?;
        require_non_empty("discovery_address", &self.discovery_address)?;
        require_non_empty("device_uuid", &self.device_uuid)?;
        validate_port(self.port)?;
        validate_tuners(self.tuners)
    }
}

/// Request for a partial lineup update
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupUpdateRequest {
    pub name: Option<String>,
    pub ssdp: Option<bool>,
    pub listen_address: Option<String>,
    pub discovery_address: Option<String>,
    pub port: Option<i32>,
    pub tuners: Option<i32>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub model_number: Option<String>,
    pub firmware_name: Option<String>,
    pub firmware_version: Option<String>,
    pub device_id: Option<String>,
    pub device_auth: Option<String>,
    pub device_uuid: Option<String>,
}

impl LineupUpdateRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> LineupResult<()> {
        let required = [
            ("name", &self.name),
            ("listen_address", &self.listen_address),
            ("discovery_address", &self.discovery_address),
            ("device_uuid", &self.device_uuid),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                require_non_empty(field, value)?;
            }
        }
        if let Some(port) = self.port {
            validate_port(port)?;
        }
        if let Some(tuners) = self.tuners {
            validate_tuners(tuners)?;
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> LineupResult<()> {
    if value.trim().is_empty() {
        return Err(LineupError::validation(field, "cannot be empty"));
    }
    Ok(())
}

fn validate_port(port: i32) -> LineupResult<()> {
    if !(1..=i32::from(u16::MAX)).contains(&port) {
        return Err(LineupError::validation(
            "port",
            format!("{port} is outside 1-65535"),
        ));
    }
    Ok(())
}

fn validate_tuners(tuners: i32) -> LineupResult<()> {
    if tuners < 1 {
        return Err(LineupError::validation("tuners", "at least one tuner is required"));
    }
    Ok(())
}
