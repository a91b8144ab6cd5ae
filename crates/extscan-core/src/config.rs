//! Scan configuration.
//!
//! Configuration comes from built-in defaults, an optional TOML file, and
//! finally environment variables and command-line flags applied by the CLI.
//!
//! ```toml
//! users_root = "/Users"
//! show_defaults = false
//! show_permissions = true
//! computer = "audit-host"
//!
//! [store]
//! enabled = true
//! base_url = "https://chrome.google.com/webstore/detail/"
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{ChromeLayout, DEFAULT_USERS_ROOT};
use crate::resolver::ResolveOptions;
use crate::store::{DEFAULT_STORE_URL, DEFAULT_TIMEOUT_SECS, OfflineStore, StoreLookup, WebStore};

/// Everything a scan needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory containing one home directory per user
    pub users_root: PathBuf,
    /// Report extensions bundled with Chrome
    pub show_defaults: bool,
    /// Include manifest permissions in each record
    pub show_permissions: bool,
    /// Overrides the detected host name
    pub computer: Option<String>,
    /// Web store lookup settings
    pub store: StoreConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            users_root: PathBuf::from(DEFAULT_USERS_ROOT),
            show_defaults: false,
            show_permissions: false,
            computer: None,
            store: StoreConfig::default(),
        }
    }
}

/// Web store lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// When false every lookup reports "Not Found" without network access
    pub enabled: bool,
    /// Detail page prefix the identifier is appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_STORE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn layout(&self) -> ChromeLayout {
        ChromeLayout::new(self.users_root.clone())
    }

    pub fn options(&self) -> ResolveOptions {
        ResolveOptions {
            show_defaults: self.show_defaults,
            show_permissions: self.show_permissions,
        }
    }

    /// Build the store lookup this configuration asks for.
    pub fn store_lookup(&self) -> Result<Box<dyn StoreLookup>> {
        if !self.store.enabled {
            return Ok(Box::new(OfflineStore));
        }
        let store = WebStore::new(
            self.store.base_url.clone(),
            Duration::from_secs(self.store.timeout_secs),
        )?;
        Ok(Box::new(store))
    }
}
