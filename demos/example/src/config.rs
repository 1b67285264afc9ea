//! Screenshot project configuration for the example app.

use crate::screens::features::FeaturesScreen;
use screegen::models::{DeviceConfig, ProjectConfig, ScreenConfig};
use std::sync::Arc;

/// Builds the example project configuration: two devices, each with the
/// localized features screen.
pub fn project_config() -> ProjectConfig {
    ProjectConfig {
        languages: vec!["en-US".to_string(), "de-DE".to_string()],
        devices: vec![
            DeviceConfig {
                key: "iphone".to_string(),
                fastlane_keys: vec!["APP_IPHONE_67".to_string()],
                width: 1290,
                height: 2796,
                screens: vec![ScreenConfig::new("features", Arc::new(FeaturesScreen))],
            },
            DeviceConfig {
                key: "ipad".to_string(),
                fastlane_keys: vec!["APP_IPAD_PRO_129".to_string()],
                width: 2048,
                height: 2732,
                screens: vec![ScreenConfig::new("features", Arc::new(FeaturesScreen))],
            },
        ],
    }
}
