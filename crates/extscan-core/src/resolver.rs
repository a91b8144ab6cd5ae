//! Metadata resolution for one installed extension.
//!
//! Resolution is a short decision table, evaluated in order:
//!
//! 1. fold the manifests of every version folder ([`ManifestFields`])
//! 2. bundled extensions are named from [`builtins`](crate::builtins) and
//!    hidden unless `show_defaults` is set
//! 3. identifiers that are not 32 characters long are not store extensions
//!    and are skipped
//! 4. everything else is looked up in the web store, falling back to the
//!    manifest name or `"Unknown"`
//!
//! Nothing in here fails: every outcome is a [`Resolution`].

use std::path::PathBuf;

use crate::builtins;
use crate::manifest::ManifestFields;
use crate::record::{ExtensionRecord, StoreStatus};
use crate::store::StoreLookup;

/// Length of a web store extension identifier.
pub const STORE_IDENTIFIER_LEN: usize = 32;

/// Name reported when neither the manifest nor the store supplied one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Options that change which records are emitted and what they contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Report extensions bundled with Chrome
    pub show_defaults: bool,
    /// Include manifest permissions in each record
    pub show_permissions: bool,
}

/// Who and where an extension was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileContext {
    pub user: String,
    pub profile: String,
    pub computer: String,
}

/// An installed extension awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identifier: String,
    pub creation_time_utc: String,
    /// Version folders in processing order; later manifests win
    pub version_dirs: Vec<PathBuf>,
}

/// Why an extension produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Bundled extension while `show_defaults` is off
    HiddenDefault,
    /// Directory name is not shaped like a store identifier
    NotStoreIdentifier,
}

/// Outcome of resolving one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ExtensionRecord),
    Skipped(SkipReason),
}

/// Resolves candidates against manifests, the built-in table and a store.
pub struct Resolver<'a> {
    store: &'a dyn StoreLookup,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn StoreLookup, options: ResolveOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    pub fn resolve(&self, context: &ProfileContext, candidate: &Candidate) -> Resolution {
        let fields = ManifestFields::collect(&candidate.version_dirs);
        self.resolve_fields(context, candidate, fields)
    }

    /// Resolve with manifest fields that were already collected.
    pub fn resolve_fields(
        &self,
        context: &ProfileContext,
        candidate: &Candidate,
        fields: ManifestFields,
    ) -> Resolution {
        let identifier = candidate.identifier.as_str();

        let (name, store_status) = if let Some(builtin) = builtins::builtin_name(identifier) {
            if !self.options.show_defaults {
                return Resolution::Skipped(SkipReason::HiddenDefault);
            }
            (builtin.to_string(), StoreStatus::Default)
        } else if identifier.chars().count() != STORE_IDENTIFIER_LEN {
            return Resolution::Skipped(SkipReason::NotStoreIdentifier);
        } else {
            match self.store.lookup_title(identifier) {
                Ok(title) => (title, StoreStatus::Found),
                Err(error) => {
                    tracing::debug!("Store lookup for {} failed: {}", identifier, error);
                    let name = fields
                        .name
                        .clone()
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
                    (name, StoreStatus::NotFound)
                }
            }
        };

        let permissions = self.options.show_permissions.then_some(fields.permissions);

        Resolution::Resolved(ExtensionRecord {
            creation_time_utc: candidate.creation_time_utc.clone(),
            name,
            description: fields.description,
            store_status,
            version: fields.version,
            identifier: candidate.identifier.clone(),
            user: context.user.clone(),
            profile: context.profile.clone(),
            computer: context.computer.clone(),
            update_url: fields.update_url,
            permissions,
        })
    }
}
