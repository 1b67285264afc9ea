//! Device configuration.

use crate::models::ScreenConfig;
use serde::Serialize;

/// Configuration for a single target device (a phone or tablet form factor).
///
/// Width and height are the exact pixel dimensions the screenshot capture
/// tooling expects for this device; `fastlane_keys` carries the external
/// export-tool identifiers the device maps to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    /// Unique device identifier (e.g., "iphone")
    pub key: String,
    /// External export-tool identifiers (e.g., "APP_IPHONE_67")
    pub fastlane_keys: Vec<String>,
    /// Device width in pixels
    pub width: u32,
    /// Device height in pixels
    pub height: u32,
    /// Screens defined for this device
    pub screens: Vec<ScreenConfig>,
}

impl DeviceConfig {
    /// Finds a screen by key.
    pub fn screen(&self, key: &str) -> Option<&ScreenConfig> {
        self.screens.iter().find(|s| s.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_device() -> DeviceConfig {
        DeviceConfig {
            key: "iphone".to_string(),
            fastlane_keys: vec!["APP_IPHONE_67".to_string()],
            width: 1290,
            height: 2796,
            screens: vec![ScreenConfig::unbound("features")],
        }
    }

    #[test]
    fn test_screen_lookup() {
        let device = test_device();
        assert!(device.screen("features").is_some());
        assert!(device.screen("missing").is_none());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(test_device()).unwrap();
        assert_eq!(json["fastlaneKeys"][0], "APP_IPHONE_67");
        assert_eq!(json["screens"][0], serde_json::json!({ "key": "features" }));
    }
}
