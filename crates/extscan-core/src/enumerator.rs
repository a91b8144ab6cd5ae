//! Directory listing for users, profiles, extensions and version folders.
//!
//! Only directory names are inspected here. Listings are sorted so that a
//! scan of the same tree always produces the same report.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result, ScanError};
use crate::layout::{ChromeLayout, is_profile_dir_name};

/// Names of the directories directly inside `dir`, sorted.
fn list_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display()),
        }
    }
    names.sort();
    Ok(names)
}

/// All local accounts, one per directory under the users root.
///
/// This is the only listing whose failure aborts the scan.
pub fn list_users(layout: &ChromeLayout) -> Result<Vec<String>> {
    let root = layout.users_root();
    list_subdirs(root).map_err(|e| Error::io(root, e))
}

/// Chrome profiles of a user. A user without Chrome data has none.
pub fn list_profiles(layout: &ChromeLayout, user: &str) -> std::result::Result<Vec<String>, ScanError> {
    let chrome_dir = layout.chrome_dir(user);
    match list_subdirs(&chrome_dir) {
        Ok(names) => Ok(names
            .into_iter()
            .filter(|name| is_profile_dir_name(name))
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(ScanError::List {
            subject: user.to_string(),
            path: chrome_dir,
            source,
        }),
    }
}

/// Candidate extension identifiers of a profile.
///
/// Returns `None` when the profile has no readable `Extensions` directory;
/// such profiles are skipped without reporting an error.
pub fn list_extensions(layout: &ChromeLayout, user: &str, profile: &str) -> Option<Vec<String>> {
    let extensions_dir = layout.extensions_dir(user, profile);
    match list_subdirs(&extensions_dir) {
        Ok(names) => Some(names),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist", extensions_dir.display());
            None
        }
        Err(e) => {
            tracing::warn!("Skipping unreadable {}: {}", extensions_dir.display(), e);
            None
        }
    }
}

/// Installed version folders of an extension, oldest first.
pub fn list_version_dirs(extension_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut names = list_subdirs(extension_dir)?;
    names.sort_by(|a, b| compare_version_names(a, b));
    Ok(names
        .into_iter()
        .map(|name| extension_dir.join(name))
        .collect())
}

/// Numeric components of a version folder name such as `1.58.0_0`.
fn version_key(name: &str) -> Option<Vec<u64>> {
    name.split(['.', '_'])
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Order version folder names so that the newest version sorts last.
///
/// Dotted numeric names compare component-wise (`1.9.0_0` < `1.10.0_0`).
/// Names that are not numeric sort before numeric ones. Remaining ties fall
/// back to byte-wise comparison, which keeps the order total.
pub fn compare_version_names(a: &str, b: &str) -> Ordering {
    match (version_key(a), version_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// When an extension directory was created.
///
/// Falls back to the modification time on filesystems that do not record
/// a birth time.
pub fn creation_time(path: &Path) -> io::Result<SystemTime> {
    let metadata = std::fs::metadata(path)?;
    metadata.created().or_else(|_| metadata.modified())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn layout_with_user(user: &str) -> (TempDir, ChromeLayout) {
        let temp = TempDir::new().unwrap();
        let layout = ChromeLayout::new(temp.path());
        fs::create_dir_all(layout.user_dir(user)).unwrap();
        (temp, layout)
    }

    #[test]
    fn users_are_directories_sorted() {
        let temp = TempDir::new().unwrap();
        for user in ["zoe", "alice", "Shared"] {
            fs::create_dir(temp.path().join(user)).unwrap();
        }
        fs::write(temp.path().join(".localized"), "").unwrap();

        let users = list_users(&ChromeLayout::new(temp.path())).unwrap();
        assert_eq!(users, vec!["Shared", "alice", "zoe"]);
    }

    #[test]
    fn missing_users_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let layout = ChromeLayout::new(temp.path().join("nope"));
        assert!(matches!(list_users(&layout), Err(Error::Io { .. })));
    }

    #[test]
    fn profiles_filter_by_name_without_recursing() {
        let (_temp, layout) = layout_with_user("alice");
        let chrome = layout.chrome_dir("alice");
        for dir in ["Default", "Profile 1", "Profile 3", "System Profile", "Crashpad"] {
            fs::create_dir_all(chrome.join(dir)).unwrap();
        }
        fs::create_dir_all(chrome.join("Crashpad").join("Profile 9")).unwrap();
        fs::write(chrome.join("Profile 5"), "not a directory").unwrap();

        let profiles = list_profiles(&layout, "alice").unwrap();
        assert_eq!(profiles, vec!["Default", "Profile 1", "Profile 3"]);
    }

    #[test]
    fn user_without_chrome_has_no_profiles() {
        let (_temp, layout) = layout_with_user("bob");
        assert_eq!(list_profiles(&layout, "bob").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn unreadable_chrome_dir_is_a_user_error() {
        let (_temp, layout) = layout_with_user("carol");
        let chrome = layout.chrome_dir("carol");
        fs::create_dir_all(chrome.parent().unwrap()).unwrap();
        fs::write(&chrome, "corrupt").unwrap();

        let error = list_profiles(&layout, "carol").unwrap_err();
        assert_eq!(error.subject(), "carol");
    }

    #[test]
    fn missing_extensions_dir_yields_none() {
        let (_temp, layout) = layout_with_user("alice");
        fs::create_dir_all(layout.profile_dir("alice", "Default")).unwrap();
        assert_eq!(list_extensions(&layout, "alice", "Default"), None);
    }

    #[test]
    fn extensions_are_listed() {
        let (_temp, layout) = layout_with_user("alice");
        let extensions = layout.extensions_dir("alice", "Default");
        fs::create_dir_all(extensions.join("bbbb")).unwrap();
        fs::create_dir_all(extensions.join("aaaa")).unwrap();
        fs::write(extensions.join("stray.txt"), "").unwrap();

        assert_eq!(
            list_extensions(&layout, "alice", "Default"),
            Some(vec!["aaaa".to_string(), "bbbb".to_string()])
        );
    }

    #[test]
    fn version_dirs_sort_numerically() {
        let temp = TempDir::new().unwrap();
        for version in ["1.10.0_0", "1.9.2_0", "1.9.10_0", "notes"] {
            fs::create_dir(temp.path().join(version)).unwrap();
        }

        let dirs = list_version_dirs(temp.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notes", "1.9.2_0", "1.9.10_0", "1.10.0_0"]);
    }

    #[rstest]
    #[case("1.9.0_0", "1.10.0_0", Ordering::Less)]
    #[case("2.0_0", "2.0_0", Ordering::Equal)]
    #[case("2.0", "2.0_0", Ordering::Less)]
    #[case("01.0", "1.0", Ordering::Less)]
    #[case("Temp", "0.1", Ordering::Less)]
    #[case("beta", "alpha", Ordering::Greater)]
    fn version_ordering(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_version_names(a, b), expected);
        assert_eq!(compare_version_names(b, a), expected.reverse());
    }

    #[test]
    fn creation_time_of_new_dir_is_recent() {
        let temp = TempDir::new().unwrap();
        let created = creation_time(temp.path()).unwrap();
        let age = SystemTime::now()
            .duration_since(created)
            .unwrap_or_default();
        assert!(age.as_secs() < 3600);
    }
}
