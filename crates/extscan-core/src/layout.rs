//! Filesystem layout of Chrome user data on a multi-user workstation.
//!
//! ```text
//! <users-root>/<user>/Library/Application Support/Google/Chrome/
//!     Default/Extensions/<id>/<version>/manifest.json
//!     Profile 1/Extensions/<id>/<version>/manifest.json
//! ```

use std::path::{Path, PathBuf};

/// Directory holding one home directory per local account.
pub const DEFAULT_USERS_ROOT: &str = "/Users";

/// Chrome's user data directory, relative to a home directory.
pub const CHROME_DATA_DIR: [&str; 4] = ["Library", "Application Support", "Google", "Chrome"];

/// Name of the first browser profile.
pub const DEFAULT_PROFILE: &str = "Default";

/// Prefix shared by every additional browser profile ("Profile 1", ...).
pub const PROFILE_PREFIX: &str = "Profile";

/// Per-profile directory holding installed extensions.
pub const EXTENSIONS_DIR: &str = "Extensions";

/// Whether a directory directly under the Chrome data directory is a profile.
pub fn is_profile_dir_name(name: &str) -> bool {
    name == DEFAULT_PROFILE || name.starts_with(PROFILE_PREFIX)
}

/// Path resolution for Chrome data under a users root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeLayout {
    users_root: PathBuf,
}

impl Default for ChromeLayout {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_ROOT)
    }
}

impl ChromeLayout {
    pub fn new(users_root: impl Into<PathBuf>) -> Self {
        Self {
            users_root: users_root.into(),
        }
    }

    pub fn users_root(&self) -> &Path {
        &self.users_root
    }

    pub fn user_dir(&self, user: &str) -> PathBuf {
        self.users_root.join(user)
    }

    pub fn chrome_dir(&self, user: &str) -> PathBuf {
        CHROME_DATA_DIR
            .iter()
            .fold(self.user_dir(user), |path, part| path.join(part))
    }

    pub fn profile_dir(&self, user: &str, profile: &str) -> PathBuf {
        self.chrome_dir(user).join(profile)
    }

    pub fn extensions_dir(&self, user: &str, profile: &str) -> PathBuf {
        self.profile_dir(user, profile).join(EXTENSIONS_DIR)
    }

    /// Installation directory of one extension. Its name is the identifier.
    pub fn extension_dir(&self, user: &str, profile: &str, identifier: &str) -> PathBuf {
        self.extensions_dir(user, profile).join(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extension_dir_follows_chrome_layout() {
        let layout = ChromeLayout::new("/Users");
        assert_eq!(
            layout.extension_dir("alice", "Profile 2", "abc"),
            PathBuf::from(
                "/Users/alice/Library/Application Support/Google/Chrome/Profile 2/Extensions/abc"
            )
        );
    }

    #[test]
    fn default_layout_uses_users_root() {
        assert_eq!(ChromeLayout::default().users_root(), Path::new("/Users"));
    }

    #[rstest]
    #[case("Default", true)]
    #[case("Profile 1", true)]
    #[case("Profile", true)]
    #[case("System Profile", false)]
    #[case("Guest Profile", false)]
    #[case("default", false)]
    #[case("Crashpad", false)]
    fn profile_dir_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_profile_dir_name(name), expected);
    }
}
