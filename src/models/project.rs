//! Root project configuration.

use crate::models::DeviceConfig;
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

/// Root configuration for a screenshot project.
///
/// Authored once by the consuming application and treated as immutable at
/// runtime. Device and screen lookups are linear scans; configs are small
/// and human-authored.
///
/// # Validation
///
/// - at least one language must be configured
/// - device keys must be unique within the config
/// - screen keys must be unique within each device
/// - device dimensions must be positive
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    /// Supported language codes, in display order. The first entry is the
    /// default language for the overview.
    pub languages: Vec<String>,
    /// Target devices, in display order.
    pub devices: Vec<DeviceConfig>,
}

impl ProjectConfig {
    /// Finds a device by key.
    pub fn device(&self, key: &str) -> Option<&DeviceConfig> {
        self.devices.iter().find(|d| d.key == key)
    }

    /// Returns the default language (the first configured one).
    pub fn default_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    /// Validates the structural invariants of the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            anyhow::bail!("Project config must declare at least one language");
        }

        let mut device_keys = HashSet::new();
        for device in &self.devices {
            if !device_keys.insert(device.key.as_str()) {
                anyhow::bail!("Duplicate device key '{}'", device.key);
            }

            if device.width == 0 || device.height == 0 {
                anyhow::bail!(
                    "Device '{}' has invalid dimensions {}x{}",
                    device.key,
                    device.width,
                    device.height
                );
            }

            let mut screen_keys = HashSet::new();
            for screen in &device.screens {
                if !screen_keys.insert(screen.key.as_str()) {
                    anyhow::bail!(
                        "Duplicate screen key '{}' in device '{}'",
                        screen.key,
                        device.key
                    );
                }
            }
        }

        Ok(())
    }

    /// Serializes the configuration to pretty JSON for inspection.
    ///
    /// Renderer references are not serializable and are excluded; screens
    /// appear as their key only.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
