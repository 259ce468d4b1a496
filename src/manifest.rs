use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};
use crate::version;

/// A package manifest (`package.json`) with a validated version field.
///
/// The full document is kept as-is so saving preserves every field other than
/// `version`.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Value,
    version: String,
}

impl Manifest {
    /// Loads and validates a manifest file.
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Parsed manifest with a valid semver version
    /// * `Err(BumpError::InvalidVersion)` - If the version field is missing or
    ///   does not parse as semver
    /// * `Err` - If the file is unreadable or not valid JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&raw)?;

        let raw_version = document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| BumpError::invalid_version("version field is missing"))?;
        let version = version::validate(raw_version)?;

        Ok(Manifest {
            path,
            document,
            version,
        })
    }

    /// The current (validated, normalized) version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Replaces the manifest's version in memory; `save` persists it.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Writes the manifest back to its file, pretty-printed with a trailing
    /// newline.
    pub fn save(&mut self) -> Result<()> {
        if let Some(object) = self.document.as_object_mut() {
            object.insert("version".to_string(), Value::String(self.version.clone()));
        }
        let serialized = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, format!("{}\n", serialized))?;
        Ok(())
    }
}
