//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use screegen::models::{DeviceConfig, ProjectConfig, ScreenConfig, ScreenContext, ScreenRenderer};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A renderer that echoes its full context, so tests can assert exactly
/// what the resolver passed in.
pub fn echo_renderer() -> Arc<dyn ScreenRenderer> {
    Arc::new(|ctx: &ScreenContext| {
        format!(
            "[{} {} {}x{}]",
            ctx.language, ctx.device_key, ctx.width, ctx.height
        )
    })
}

/// A two-device project config: iphone with a bound screen plus an unbound
/// one, ipad with a bound screen.
pub fn test_config() -> ProjectConfig {
    ProjectConfig {
        languages: vec!["en-US".to_string(), "de-DE".to_string()],
        devices: vec![
            DeviceConfig {
                key: "iphone".to_string(),
                fastlane_keys: vec!["APP_IPHONE_67".to_string()],
                width: 1290,
                height: 2796,
                screens: vec![
                    ScreenConfig::new("features", echo_renderer()),
                    ScreenConfig::unbound("pricing"),
                ],
            },
            DeviceConfig {
                key: "ipad".to_string(),
                fastlane_keys: vec!["APP_IPAD_PRO_129".to_string()],
                width: 2048,
                height: 2732,
                screens: vec![ScreenConfig::new("features", echo_renderer())],
            },
        ],
    }
}

/// Writes a minimal example project tree for template generation tests.
pub fn write_example_project(dir: &Path) {
    fs::create_dir_all(dir.join("src/screens")).expect("Failed to create example dirs");

    fs::write(
        dir.join("Cargo.toml"),
        r#"[package]
name = "screegen-example"
version = "0.1.0"
edition = "2021"
publish = false

[dependencies]
screegen = { version = "0.1.0", path = "../.." }
tokio = { version = "1", features = ["rt-multi-thread", "macros"] }
anyhow = "1.0"
"#,
    )
    .expect("Failed to write Cargo.toml");

    fs::write(
        dir.join("index.html"),
        "<!DOCTYPE html>\n<html><head><title>Screegen Example</title></head><body></body></html>\n",
    )
    .expect("Failed to write index.html");

    fs::write(dir.join("src/main.rs"), "fn main() {}\n").expect("Failed to write main.rs");
    fs::write(dir.join("src/config.rs"), "// example config\n").expect("Failed to write config.rs");
    fs::write(dir.join("src/screens/mod.rs"), "pub mod features;\n")
        .expect("Failed to write screens/mod.rs");
    fs::write(dir.join("src/screens/features.rs"), "// example screen\n")
        .expect("Failed to write features.rs");
    fs::write(dir.join("src/translations.rs"), "// example translations\n")
        .expect("Failed to write translations.rs");
}

/// Writes the manifest tree the version updater expects under a temp root.
pub fn write_manifest_tree(root: &Path) {
    fs::create_dir_all(root.join("demos/example")).expect("Failed to create demos dir");
    fs::create_dir_all(root.join("templates")).expect("Failed to create templates dir");

    fs::write(
        root.join("Cargo.toml"),
        r#"[package]
name = "screegen"
version = "0.1.0"

[dependencies]
anyhow = "1.0"
"#,
    )
    .expect("Failed to write root Cargo.toml");

    fs::write(
        root.join("demos/example/Cargo.toml"),
        r#"[package]
name = "screegen-example"
version = "0.1.0"

[dependencies]
screegen = { version = "0.1.0", path = "../.." }
"#,
    )
    .expect("Failed to write example Cargo.toml");

    fs::write(
        root.join("templates/Cargo.toml.template"),
        r#"[package]
name = "{{projectName}}"
version = "1.0.0"

[dependencies]
screegen = "0.1.0"
"#,
    )
    .expect("Failed to write template manifest");
}
