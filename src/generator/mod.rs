//! Template generator: turns the example project into reusable scaffolds.
//!
//! A fixed table of `(source, target, transform)` entries is read from the
//! example project directory, transformed, and written into the templates
//! directory. Failures on individual files are reported and skipped so one
//! missing source never aborts the rest of the batch.

pub mod content;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use toml::Value;

/// Dependencies copied from the example manifest into the scaffold manifest
/// as-is (the internal `screegen` dependency is reshaped separately).
const KEPT_DEPENDENCIES: &[&str] = &["tokio", "anyhow"];

/// A single source-to-template mapping.
#[derive(Debug, Clone, Copy)]
pub struct FileMapping {
    /// Path relative to the example project directory
    pub source: &'static str,
    /// Path relative to the templates directory
    pub target: &'static str,
    /// Optional text transform applied before writing
    pub transform: Option<Transform>,
}

/// Pure text-to-text transforms applied to mapped files.
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    /// Reshape the example Cargo manifest into a `{{projectName}}` scaffold
    Manifest,
    /// Replace the HTML `<title>` with a `{{projectName}}` placeholder
    HtmlTitle,
    /// Replace the whole file with a literal template body
    Replace(&'static str),
}

/// Files copied from the example project into the templates directory.
pub const FILE_MAPPINGS: &[FileMapping] = &[
    FileMapping {
        source: "Cargo.toml",
        target: "Cargo.toml.template",
        transform: Some(Transform::Manifest),
    },
    FileMapping {
        source: "index.html",
        target: "index.html.template",
        transform: Some(Transform::HtmlTitle),
    },
    FileMapping {
        source: "src/main.rs",
        target: "src/main.rs.template",
        transform: None,
    },
    FileMapping {
        source: "src/config.rs",
        target: "src/config.rs.template",
        transform: Some(Transform::Replace(content::CONFIG_TEMPLATE)),
    },
    FileMapping {
        source: "src/screens/mod.rs",
        target: "src/screens/mod.rs.template",
        transform: None,
    },
    FileMapping {
        source: "src/screens/features.rs",
        target: "src/screens/features.rs.template",
        transform: Some(Transform::Replace(content::FEATURES_TEMPLATE)),
    },
    FileMapping {
        source: "src/translations.rs",
        target: "src/translations.rs.template",
        transform: Some(Transform::Replace(content::TRANSLATIONS_TEMPLATE)),
    },
];

/// Outcome of a template generation run.
#[derive(Debug, Default, Serialize)]
pub struct GenerateReport {
    /// Successfully written `(source, target)` pairs, in mapping order
    pub written: Vec<(String, String)>,
    /// Failed `(source, error)` pairs; these did not abort the batch
    pub failed: Vec<(String, String)>,
}

/// Generates all scaffold templates from the example project.
///
/// Per-file failures (e.g., a missing source) are collected in the report
/// and processing continues with the remaining entries.
///
/// # Errors
///
/// Returns an error only when the templates directory itself cannot be
/// created.
pub fn generate_templates(example_dir: &Path, templates_dir: &Path) -> Result<GenerateReport> {
    fs::create_dir_all(templates_dir).with_context(|| {
        format!(
            "Failed to create templates directory: {}",
            templates_dir.display()
        )
    })?;

    let mut report = GenerateReport::default();

    for mapping in FILE_MAPPINGS {
        match process_mapping(mapping, example_dir, templates_dir) {
            Ok(()) => report
                .written
                .push((mapping.source.to_string(), mapping.target.to_string())),
            Err(e) => report.failed.push((mapping.source.to_string(), format!("{e:#}"))),
        }
    }

    Ok(report)
}

/// Reads, transforms, and writes a single mapping entry.
fn process_mapping(
    mapping: &FileMapping,
    example_dir: &Path,
    templates_dir: &Path,
) -> Result<()> {
    let source_path = example_dir.join(mapping.source);
    let mut text = fs::read_to_string(&source_path)
        .with_context(|| format!("Failed to read {}", source_path.display()))?;

    if let Some(transform) = &mapping.transform {
        text = apply_transform(transform, &text)?;
    }

    let target_path = templates_dir.join(mapping.target);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&target_path, text)
        .with_context(|| format!("Failed to write {}", target_path.display()))?;

    Ok(())
}

/// Applies one transform to a file's text.
pub fn apply_transform(transform: &Transform, text: &str) -> Result<String> {
    match transform {
        Transform::Manifest => manifest_template(text),
        Transform::HtmlTitle => html_title_template(text),
        Transform::Replace(body) => Ok((*body).to_string()),
    }
}

/// Reshapes the example Cargo manifest into a scaffold manifest.
///
/// The package name becomes the `{{projectName}}` placeholder, the version
/// resets to 1.0.0, and only the dependencies a fresh project needs are
/// carried over. The internal `screegen` dependency keeps the version the
/// example declares but loses its local path.
fn manifest_template(text: &str) -> Result<String> {
    let source: toml::Table =
        toml::from_str(text).context("Failed to parse example manifest")?;
    let source_package = source.get("package").and_then(Value::as_table);
    let source_deps = source.get("dependencies").and_then(Value::as_table);

    let mut package = toml::Table::new();
    package.insert(
        "name".to_string(),
        Value::String("{{projectName}}".to_string()),
    );
    package.insert("version".to_string(), Value::String("1.0.0".to_string()));
    package.insert(
        "edition".to_string(),
        source_package
            .and_then(|p| p.get("edition"))
            .cloned()
            .unwrap_or_else(|| Value::String("2021".to_string())),
    );
    package.insert("publish".to_string(), Value::Boolean(false));

    let mut dependencies = toml::Table::new();
    dependencies.insert(
        "screegen".to_string(),
        Value::String(internal_dependency_version(source_deps)),
    );
    for name in KEPT_DEPENDENCIES {
        if let Some(entry) = source_deps.and_then(|deps| deps.get(*name)) {
            dependencies.insert((*name).to_string(), entry.clone());
        }
    }

    let mut manifest = toml::Table::new();
    manifest.insert("package".to_string(), Value::Table(package));
    manifest.insert("dependencies".to_string(), Value::Table(dependencies));

    toml::to_string_pretty(&manifest).context("Failed to serialize scaffold manifest")
}

/// Extracts the version of the internal `screegen` dependency from the
/// example manifest (string form or the `version` key of a table form).
fn internal_dependency_version(deps: Option<&toml::Table>) -> String {
    deps.and_then(|d| d.get("screegen"))
        .and_then(|entry| match entry {
            Value::String(version) => Some(version.clone()),
            Value::Table(table) => table
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| "*".to_string())
}

/// Replaces the HTML document title with the `{{projectName}}` placeholder.
fn html_title_template(text: &str) -> Result<String> {
    let title_regex =
        Regex::new(r"<title>.*</title>").context("Failed to compile title pattern")?;
    Ok(title_regex
        .replace(text, "<title>{{projectName}}</title>")
        .into_owned())
}
