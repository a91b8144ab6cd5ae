//! [`TestHost`] builder for scan scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Chrome's data directory relative to a home directory.
const CHROME_DATA_DIR: &str = "Library/Application Support/Google/Chrome";

/// A temporary users root with helpers to populate Chrome data.
///
/// # Example
///
/// ```rust,no_run
/// use extscan_test_utils::host::TestHost;
/// use serde_json::json;
///
/// let host = TestHost::new();
/// host.add_version(
///     "alice",
///     "Default",
///     "cjpalhdlnbpafiamejdnhcphjbkeiagm",
///     "1.58.0_0",
///     &json!({"name": "uBlock Origin", "version": "1.58.0"}),
/// );
/// host.add_profile("bob", "Profile 1");
/// ```
pub struct TestHost {
    temp_dir: TempDir,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// Create an empty users root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The directory to point a scan at.
    pub fn users_root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a home directory with no Chrome data.
    pub fn add_user(&self, user: &str) -> PathBuf {
        let dir = self.users_root().join(user);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn chrome_dir(&self, user: &str) -> PathBuf {
        self.users_root().join(user).join(CHROME_DATA_DIR)
    }

    /// Create a profile directory without an `Extensions` folder.
    pub fn add_profile(&self, user: &str, profile: &str) -> PathBuf {
        let dir = self.chrome_dir(user).join(profile);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn extensions_dir(&self, user: &str, profile: &str) -> PathBuf {
        self.chrome_dir(user).join(profile).join("Extensions")
    }

    /// Create an extension installation directory with no version folders.
    pub fn add_extension(&self, user: &str, profile: &str, identifier: &str) -> PathBuf {
        let dir = self.extensions_dir(user, profile).join(identifier);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a version folder and write `manifest` as its `manifest.json`.
    pub fn add_version(
        &self,
        user: &str,
        profile: &str,
        identifier: &str,
        version: &str,
        manifest: &Value,
    ) -> PathBuf {
        let content = serde_json::to_string_pretty(manifest).unwrap();
        self.add_raw_version(user, profile, identifier, version, &content)
    }

    /// Create a version folder whose `manifest.json` holds `content` verbatim.
    pub fn add_raw_version(
        &self,
        user: &str,
        profile: &str,
        identifier: &str,
        version: &str,
        content: &str,
    ) -> PathBuf {
        let dir = self.add_extension(user, profile, identifier).join(version);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.json"), content).unwrap();
        dir
    }

    /// Replace a user's Chrome data directory with a plain file so that
    /// listing it fails.
    pub fn corrupt_chrome_dir(&self, user: &str) {
        let chrome = self.chrome_dir(user);
        if chrome.is_dir() {
            fs::remove_dir_all(&chrome).unwrap();
        }
        fs::create_dir_all(chrome.parent().unwrap()).unwrap();
        fs::write(&chrome, "not a directory").unwrap();
    }
}
