//! Discovery documents for an emulated HDHomeRun tuner
//!
//! A stored [`Lineup`] is flattened into a [`DiscoveryDescriptor`] (the
//! `discover.json` view) and from there into a UPnP [`RootDevice`] (the
//! `device.xml` view). Both steps are pure and recomputed per request so the
//! advertised address and port always match what is stored.

use serde::{Deserialize, Serialize};

use crate::errors::DiscoveryError;
use crate::models::Lineup;

/// UPnP device type advertised for every lineup
pub const DEVICE_TYPE: &str = "urn:schemas-upnp-org:device:MediaServer:1";

/// Namespace of the UPnP device description root element
pub const DEVICE_NAMESPACE: &str = "urn:schemas-upnp-org:device-1-0";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Flattened discovery view of a lineup
///
/// Serializes to the key set HDHomeRun clients read from `discover.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscoveryDescriptor {
    pub friendly_name: String,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub firmware_name: String,
    pub tuner_count: i32,
    pub firmware_version: String,
    #[serde(rename = "DeviceID")]
    pub device_id: String,
    pub device_auth: String,
    #[serde(rename = "BaseURL")]
    pub base_url: String,
    #[serde(rename = "LineupURL")]
    pub lineup_url: String,
    #[serde(rename = "DeviceUUID")]
    pub device_uuid: String,
}

impl DiscoveryDescriptor {
    pub fn from_lineup(lineup: &Lineup) -> Self {
        let base_url = format!("http://{}:{}", lineup.discovery_address, lineup.port);
        let lineup_url = format!("{base_url}/lineup.json");

        Self {
            friendly_name: lineup.name.clone(),
            manufacturer: lineup.manufacturer.clone(),
            model_name: lineup.model_name.clone(),
            model_number: lineup.model_number.clone(),
            firmware_name: lineup.firmware_name.clone(),
            tuner_count: lineup.tuners,
            firmware_version: lineup.firmware_version.clone(),
            device_id: lineup.device_id.clone(),
            device_auth: lineup.device_auth.clone(),
            base_url,
            lineup_url,
            device_uuid: lineup.device_uuid.clone(),
        }
    }

    /// Build the UPnP device description for this descriptor
    pub fn to_document(&self) -> RootDevice {
        RootDevice {
            xmlns: DEVICE_NAMESPACE,
            spec_version: SpecVersion { major: 1, minor: 0 },
            url_base: self.base_url.clone(),
            device: Device {
                device_type: DEVICE_TYPE.to_string(),
                friendly_name: self.friendly_name.clone(),
                manufacturer: self.manufacturer.clone(),
                model_name: self.model_name.clone(),
                model_number: self.model_number.clone(),
                model_description: format!("{} {}", self.model_number, self.model_name),
                serial_number: self.device_id.clone(),
                udn: self.device_uuid.clone(),
                presentation_url: "/".to_string(),
            },
        }
    }

    /// Render the `discover.json` body
    pub fn to_discover_json(&self) -> Result<String, DiscoveryError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Lineup> for DiscoveryDescriptor {
    fn from(lineup: &Lineup) -> Self {
        Self::from_lineup(lineup)
    }
}

/// UPnP root device description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "root")]
pub struct RootDevice {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "specVersion")]
    pub spec_version: SpecVersion,
    #[serde(rename = "URLBase")]
    pub url_base: String,
    pub device: Device,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecVersion {
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_type: String,
    pub friendly_name: String,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub model_description: String,
    pub serial_number: String,
    #[serde(rename = "UDN")]
    pub udn: String,
    #[serde(rename = "presentationURL")]
    pub presentation_url: String,
}

impl RootDevice {
    /// Render the `device.xml` body
    ///
    /// Element order follows the struct definitions, so identical documents
    /// always render to identical bytes.
    pub fn to_xml(&self) -> Result<String, DiscoveryError> {
        let body = quick_xml::se::to_string(self)?;
        Ok(format!("{XML_DECLARATION}\n{body}"))
    }
}

impl From<&Lineup> for RootDevice {
    fn from(lineup: &Lineup) -> Self {
        DiscoveryDescriptor::from_lineup(lineup).to_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup() -> Lineup {
        Lineup {
            id: 1,
            name: "telly".to_string(),
            ssdp: true,
            listen_address: "0.0.0.0".to_string(),
            discovery_address: "10.0.0.5".to_string(),
            port: 6077,
            tuners: 2,
            manufacturer: "Silicondust".to_string(),
            model_name: "HDHomeRun EXPEND".to_string(),
            model_number: "HDTC-2US".to_string(),
            firmware_name: "hdhomeruntc_atsc".to_string(),
            firmware_version: "20150826".to_string(),
            device_id: "12345678".to_string(),
            device_auth: "telly123".to_string(),
            device_uuid: "12345678-AE2A-4E54-BBC9-33AF7D5D6A92".to_string(),
            created_at: None,
            channels: None,
        }
    }

    #[test]
    fn descriptor_builds_urls_from_discovery_address() {
        let descriptor = DiscoveryDescriptor::from_lineup(&lineup());

        assert_eq!(descriptor.base_url, "http://10.0.0.5:6077");
        assert_eq!(descriptor.lineup_url, "http://10.0.0.5:6077/lineup.json");
        assert_eq!(descriptor.friendly_name, "telly");
        assert_eq!(descriptor.tuner_count, 2);
    }

    #[test]
    fn descriptor_ignores_listen_address() {
        let mut source = lineup();
        source.listen_address = "192.168.0.2".to_string();

        let descriptor = DiscoveryDescriptor::from_lineup(&source);
        assert!(!descriptor.base_url.contains("192.168.0.2"));
    }

    #[test]
    fn document_fills_fixed_and_computed_fields() {
        let document = DiscoveryDescriptor::from_lineup(&lineup()).to_document();

        assert_eq!(document.spec_version, SpecVersion { major: 1, minor: 0 });
        assert_eq!(document.url_base, "http://10.0.0.5:6077");
        assert_eq!(document.device.device_type, DEVICE_TYPE);
        assert_eq!(document.device.model_description, "HDTC-2US HDHomeRun EXPEND");
        assert_eq!(document.device.serial_number, "12345678");
        assert_eq!(document.device.udn, "12345678-AE2A-4E54-BBC9-33AF7D5D6A92");
        assert_eq!(document.device.presentation_url, "/");
    }

    #[test]
    fn document_rendering_is_byte_stable() {
        let source = lineup();
        let first = RootDevice::from(&source).to_xml().unwrap();
        let second = RootDevice::from(&source).to_xml().unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(XML_DECLARATION));
        assert!(first.contains(r#"<root xmlns="urn:schemas-upnp-org:device-1-0">"#));
        assert!(first.contains("<specVersion><major>1</major><minor>0</minor></specVersion>"));
        assert!(first.contains("<URLBase>http://10.0.0.5:6077</URLBase>"));
        assert!(first.contains("<presentationURL>/</presentationURL>"));
        assert!(first.contains("<UDN>12345678-AE2A-4E54-BBC9-33AF7D5D6A92</UDN>"));
    }

    #[test]
    fn xml_escapes_device_strings() {
        let mut source = lineup();
        source.name = "Tom & Jerry <HD>".to_string();

        let xml = RootDevice::from(&source).to_xml().unwrap();
        assert!(xml.contains("Tom &amp; Jerry &lt;HD&gt;"));
    }

    #[test]
    fn discover_json_uses_hdhomerun_keys() {
        let json = DiscoveryDescriptor::from_lineup(&lineup())
            .to_discover_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["FriendlyName"], "telly");
        assert_eq!(value["DeviceID"], "12345678");
        assert_eq!(value["DeviceAuth"], "telly123");
        assert_eq!(value["TunerCount"], 2);
        assert_eq!(value["BaseURL"], "http://10.0.0.5:6077");
        assert_eq!(value["LineupURL"], "http://10.0.0.5:6077/lineup.json");
        assert_eq!(value["DeviceUUID"], "12345678-AE2A-4E54-BBC9-33AF7D5D6A92");
    }

    #[test]
    fn source_lineup_is_left_untouched() {
        let source = lineup();
        let snapshot = source.clone();
        let _ = DiscoveryDescriptor::from_lineup(&source).to_document();
        assert_eq!(source, snapshot);
    }
}
