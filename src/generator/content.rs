//! Literal template bodies for scaffold files.
//!
//! These replace example sources wholesale: the example app carries extra
//! content that a fresh project should not start from, so the scaffold gets
//! a self-contained minimal version instead.

/// Scaffold `src/config.rs`: two devices, one screen each.
pub const CONFIG_TEMPLATE: &str = r##"//! Screenshot project configuration.
//!
//! Adjust languages, devices, and screens for your app.

use crate::screens::features::FeaturesScreen;
use screegen::models::{DeviceConfig, ProjectConfig, ScreenConfig};
use std::sync::Arc;

/// Builds the project configuration.
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
"##;

/// Scaffold `src/screens/features.rs`: a self-contained feature list screen.
pub const FEATURES_TEMPLATE: &str = r##"//! Feature list screen.

use crate::translations::t;
use screegen::models::{ScreenContext, ScreenRenderer};
use screegen::render::escape_html;

/// Renders a localized title, subtitle, and feature list.
pub struct FeaturesScreen;

impl ScreenRenderer for FeaturesScreen {
    fn render(&self, ctx: &ScreenContext) -> String {
        let features = [
            ("feature1", "feature1Desc"),
            ("feature2", "feature2Desc"),
        ];

        let mut items = String::new();
        for (title_key, description_key) in features {
            items.push_str(&format!(
                "<div style=\"background: rgba(255, 255, 255, 0.15); border-radius: 16px; padding: 32px; margin: 16px 0;\">\
                 <h3 style=\"font-size: 24px; margin: 0 0 8px 0;\">{}</h3>\
                 <p style=\"font-size: 18px; margin: 0;\">{}</p>\
                 </div>",
                escape_html(&t(&ctx.language, title_key)),
                escape_html(&t(&ctx.language, description_key)),
            ));
        }

        format!(
            "<div style=\"display: flex; flex-direction: column; align-items: center; justify-content: center; \
             width: 100%; height: 100%; padding: 60px 40px; \
             background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white;\">\
             <h1 style=\"font-size: 64px; margin: 0 0 16px 0;\">{}</h1>\
             <p style=\"font-size: 28px; margin: 0 0 60px 0;\">{}</p>\
             <div style=\"width: 100%; max-width: 800px;\">{}</div>\
             </div>",
            escape_html(&t(&ctx.language, "title")),
            escape_html(&t(&ctx.language, "subtitle")),
            items,
        )
    }
}
"##;

/// Scaffold `src/translations.rs`: a starter translation table.
pub const TRANSLATIONS_TEMPLATE: &str = r##"//! Translations for your app screenshots.
//!
//! Add your supported languages and translation keys here.

const DEFAULT_LANGUAGE: &str = "en-US";

const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("en-US", "title", "Your App Name"),
    ("en-US", "subtitle", "The best app for your needs"),
    ("en-US", "feature1", "Amazing Feature"),
    ("en-US", "feature1Desc", "Description of this amazing feature"),
    ("en-US", "feature2", "Another Feature"),
    ("en-US", "feature2Desc", "Description of another great feature"),
    ("de-DE", "title", "Deine App"),
    ("de-DE", "subtitle", "Die beste App für deine Bedürfnisse"),
    ("de-DE", "feature1", "Tolle Funktion"),
    ("de-DE", "feature1Desc", "Beschreibung dieser tollen Funktion"),
    ("de-DE", "feature2", "Weitere Funktion"),
    ("de-DE", "feature2Desc", "Beschreibung einer weiteren Funktion"),
];

/// Looks up a translation for a language and key.
///
/// Falls back to the default language key-by-key, then to the key itself.
pub fn t(language: &str, key: &str) -> String {
    lookup(language, key)
        .or_else(|| lookup(DEFAULT_LANGUAGE, key))
        .unwrap_or(key)
        .to_string()
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(lang, k, _)| *lang == language && *k == key)
        .map(|(_, _, value)| *value)
}
"##;
