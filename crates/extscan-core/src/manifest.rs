//! Parsing of Chrome extension `manifest.json` files.
//!
//! Only the keys the inventory reports on are read; everything else in the
//! manifest is ignored. Each installed version folder carries its own
//! manifest, and [`ManifestFields`] folds them together in processing order.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// The manifest filename inside each version folder.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Values starting with this prefix are localization keys, not real text.
pub const PLACEHOLDER_PREFIX: &str = "__MSG_";

/// Reported in place of a localized description.
pub const MISSING_DESCRIPTION: &str = "No description found.";

/// Errors reading a single manifest. These never abort a scan.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The subset of `manifest.json` the inventory cares about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtensionManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub update_url: Option<String>,
    /// Entries are usually strings but may be objects (e.g. `fileSystem`).
    #[serde(default)]
    pub permissions: Option<Vec<Value>>,
}

impl ExtensionManifest {
    /// Parse manifest JSON. A leading byte order mark is tolerated.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content.trim_start_matches('\u{feff}'))
    }

    /// Load the manifest from a version folder.
    pub fn load(version_dir: &Path) -> Result<Self, ManifestError> {
        let path = version_dir.join(MANIFEST_FILENAME);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound(path.clone())
            } else {
                ManifestError::Read {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        Self::parse(&content).map_err(|source| ManifestError::Parse { path, source })
    }
}

/// Whether a manifest string is an unresolved localization key.
pub fn is_placeholder(value: &str) -> bool {
    value.starts_with(PLACEHOLDER_PREFIX)
}

/// Manifest values accumulated across an extension's version folders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestFields {
    /// `None` until a manifest supplies a non-placeholder name
    pub name: Option<String>,
    pub description: String,
    pub version: String,
    pub update_url: String,
    pub permissions: Vec<Value>,
}

impl ManifestFields {
    /// Fold one manifest in. Keys present in `manifest` overwrite earlier
    /// values; absent keys leave them alone.
    pub fn apply(&mut self, manifest: ExtensionManifest) {
        if let Some(description) = manifest.description {
            self.description = if is_placeholder(&description) {
                MISSING_DESCRIPTION.to_string()
            } else {
                description
            };
        }
        if let Some(name) = manifest.name {
            if !is_placeholder(&name) {
                self.name = Some(name);
            }
        }
        if let Some(version) = manifest.version {
            self.version = version;
        }
        if let Some(update_url) = manifest.update_url {
            self.update_url = update_url;
        }
        if let Some(permissions) = manifest.permissions {
            self.permissions = permissions;
        }
    }

    /// Read the manifest of every version folder, in the given order.
    ///
    /// Folders without a readable manifest contribute nothing.
    pub fn collect(version_dirs: &[PathBuf]) -> Self {
        let mut fields = Self::default();
        for version_dir in version_dirs {
            match ExtensionManifest::load(version_dir) {
                Ok(manifest) => fields.apply(manifest),
                Err(error) => tracing::debug!("Skipping manifest: {}", error),
            }
        }
        fields
    }
}
