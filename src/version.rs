//! Version updater for the repository's Cargo manifests.
//!
//! Rewrites the package version and the internal dependency entries across
//! a fixed list of manifests, keeping the toolkit, the example project, and
//! the committed scaffold manifest in lockstep.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use toml::Value;

/// Internal packages whose dependency entries are rewritten on update.
pub const INTERNAL_PACKAGES: &[&str] = &["screegen"];

/// Manifest files to update, relative to the repository root.
pub const MANIFEST_FILES: &[&str] = &[
    "Cargo.toml",
    "demos/example/Cargo.toml",
    "templates/Cargo.toml.template",
];

/// Dependency sections scanned for internal package entries.
const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "dev-dependencies", "build-dependencies"];

/// Semver shape accepted by the updater: `major.minor.patch` with optional
/// `-prerelease` and `+build` suffixes.
const VERSION_PATTERN: &str = r"^\d+\.\d+\.\d+(-[\w.]+)?(\+[\w.]+)?$";

/// Checks a version argument against the accepted semver shape.
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    Regex::new(VERSION_PATTERN).is_ok_and(|re| re.is_match(version))
}

/// Changes applied to a single manifest.
#[derive(Debug, Serialize)]
pub struct ManifestUpdate {
    /// Manifest path relative to the repository root
    pub path: String,
    /// Human-readable field changes ("version: 0.1.0 → 1.2.3")
    pub changes: Vec<String>,
}

/// Outcome of an update run across all manifest files.
#[derive(Debug, Default, Serialize)]
pub struct UpdateSummary {
    /// Manifests that were rewritten
    pub updated: Vec<ManifestUpdate>,
    /// Manifests that were not found (warned about and skipped)
    pub missing: Vec<String>,
}

/// Updates every manifest in [`MANIFEST_FILES`] under `root`.
///
/// Missing files are collected and skipped. Files whose path contains
/// `.template` get caret-prefixed dependency versions.
///
/// # Errors
///
/// Propagates I/O failures and malformed TOML; a manifest that cannot be
/// parsed terminates the run.
pub fn update_manifests(root: &Path, version: &str) -> Result<UpdateSummary> {
    let mut summary = UpdateSummary::default();

    for rel_path in MANIFEST_FILES {
        let path = root.join(rel_path);
        if !path.exists() {
            summary.missing.push((*rel_path).to_string());
            continue;
        }

        let caret = rel_path.contains(".template");
        let changes = update_manifest(&path, version, caret)?;
        if !changes.is_empty() {
            summary.updated.push(ManifestUpdate {
                path: (*rel_path).to_string(),
                changes,
            });
        }
    }

    Ok(summary)
}

/// Rewrites one manifest's own version and internal dependency entries.
///
/// Returns the list of applied changes; the file is only rewritten when at
/// least one field changed. String-form dependencies are replaced whole,
/// table-form dependencies get their `version` key set (other keys, such
/// as a local `path`, are preserved).
pub fn update_manifest(path: &Path, version: &str, caret: bool) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: toml::Table = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut changes = Vec::new();

    // The package's own version
    if let Some(package) = manifest.get_mut("package").and_then(Value::as_table_mut) {
        if let Some(field) = package.get_mut("version") {
            let old = field.as_str().unwrap_or_default().to_string();
            *field = Value::String(version.to_string());
            changes.push(format!("version: {old} → {version}"));
        }
    }

    // Internal dependency entries
    let dep_version = if caret {
        format!("^{version}")
    } else {
        version.to_string()
    };

    for section in DEPENDENCY_SECTIONS {
        let Some(deps) = manifest.get_mut(*section).and_then(Value::as_table_mut) else {
            continue;
        };

        for name in INTERNAL_PACKAGES {
            let Some(entry) = deps.get_mut(*name) else {
                continue;
            };

            let old = describe_dependency(entry);
            match entry {
                Value::String(s) => *s = dep_version.clone(),
                Value::Table(table) => {
                    table.insert("version".to_string(), Value::String(dep_version.clone()));
                }
                _ => continue,
            }
            changes.push(format!("{section}.{name}: {old} → {dep_version}"));
        }
    }

    if !changes.is_empty() {
        let output = toml::to_string_pretty(&manifest)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(changes)
}

/// Renders a dependency entry's current version for change reporting.
fn describe_dependency(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Table(table) => table
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("*")
            .to_string(),
        _ => "*".to_string(),
    }
}
