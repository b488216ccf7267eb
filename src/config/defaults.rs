/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Database defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./tuner-lineup.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

// Emulated device defaults (an HDHomeRun CONNECT as Plex expects it)
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: i32 = 6077;
pub const DEFAULT_TUNERS: i32 = 2;
pub const DEFAULT_MANUFACTURER: &str = "Silicondust";
pub const DEFAULT_MODEL_NAME: &str = "HDHomeRun EXPEND";
pub const DEFAULT_MODEL_NUMBER: &str = "HDTC-2US";
pub const DEFAULT_FIRMWARE_NAME: &str = "hdhomeruntc_atsc";
pub const DEFAULT_FIRMWARE_VERSION: &str = "20150826";
pub const DEFAULT_DEVICE_ID: &str = "12345678";
pub const DEFAULT_DEVICE_AUTH: &str = "telly123";

pub fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

pub fn default_max_connections() -> Option<u32> {
    Some(DEFAULT_MAX_CONNECTIONS)
}

pub fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_string()
}

pub fn default_port() -> i32 {
    DEFAULT_PORT
}

pub fn default_tuners() -> i32 {
    DEFAULT_TUNERS
}

pub fn default_manufacturer() -> String {
    DEFAULT_MANUFACTURER.to_string()
}

pub fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

pub fn default_model_number() -> String {
    DEFAULT_MODEL_NUMBER.to_string()
}

pub fn default_firmware_name() -> String {
    DEFAULT_FIRMWARE_NAME.to_string()
}

pub fn default_firmware_version() -> String {
    DEFAULT_FIRMWARE_VERSION.to_string()
}

pub fn default_device_id() -> String {
    DEFAULT_DEVICE_ID.to_string()
}

pub fn default_device_auth() -> String {
    DEFAULT_DEVICE_AUTH.to_string()
}
