//! Browser extension inventory for multi-user workstations.
//!
//! This crate walks every local user's Chrome profiles, discovers the
//! installed extensions and resolves a best-effort metadata record for each
//! one from its `manifest.json`, a table of Chrome's bundled extensions and,
//! as a last resort, the Chrome Web Store detail page.
//!
//! The pipeline is strictly sequential:
//!
//! - [`enumerator`] lists users, profiles, extensions and version folders
//! - [`resolver`] turns one installed extension into a [`ExtensionRecord`]
//!   or a skip decision
//! - [`report`] accumulates records and error records and renders JSON
//! - [`scanner`] drives the whole run

pub mod builtins;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod host;
pub mod layout;
pub mod manifest;
pub mod record;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod store;

pub use config::{ScanConfig, StoreConfig};
pub use error::{Error, Result, ScanError};
pub use layout::ChromeLayout;
pub use manifest::{ExtensionManifest, ManifestFields};
pub use record::{ErrorRecord, ExtensionRecord, ReportEntry, StoreStatus};
pub use report::Report;
pub use resolver::{Candidate, ProfileContext, Resolution, ResolveOptions, Resolver, SkipReason};
pub use scanner::Scanner;
pub use store::{OfflineStore, StoreError, StoreLookup, WebStore};
