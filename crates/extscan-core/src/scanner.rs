//! The scan driver: users -> profiles -> extensions.

use crate::config::ScanConfig;
use crate::enumerator;
use crate::error::{Result, ScanError};
use crate::host;
use crate::layout::ChromeLayout;
use crate::record::{ErrorRecord, format_timestamp};
use crate::report::Report;
use crate::resolver::{Candidate, ProfileContext, Resolution, ResolveOptions, Resolver};
use crate::store::StoreLookup;

/// Walks every user on the host and resolves their installed extensions.
pub struct Scanner {
    layout: ChromeLayout,
    computer: String,
    options: ResolveOptions,
    store: Box<dyn StoreLookup>,
}

impl Scanner {
    pub fn new(
        layout: ChromeLayout,
        computer: impl Into<String>,
        options: ResolveOptions,
        store: Box<dyn StoreLookup>,
    ) -> Self {
        Self {
            layout,
            computer: computer.into(),
            options,
            store,
        }
    }

    /// Build a scanner from configuration, detecting the host name when
    /// none is configured.
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Ok(Self::new(
            config.layout(),
            host::computer_name(config.computer.as_deref()),
            config.options(),
            config.store_lookup()?,
        ))
    }

    pub fn layout(&self) -> &ChromeLayout {
        &self.layout
    }

    pub fn computer(&self) -> &str {
        &self.computer
    }

    /// Scan every user and return the finished report.
    pub fn run(&self) -> Result<Report> {
        let mut report = Report::new();
        self.scan_into(&mut report)?;
        Ok(report)
    }

    /// Scan every user, appending to `report`.
    ///
    /// A failure while scanning one user appends an error record naming the
    /// failing subject and moves on to the next user. Only an unreadable
    /// users root is returned as an error.
    pub fn scan_into(&self, report: &mut Report) -> Result<()> {
        let users = enumerator::list_users(&self.layout)?;
        tracing::debug!(
            "Scanning {} user(s) under {}",
            users.len(),
            self.layout.users_root().display()
        );

        for user in &users {
            if let Err(error) = self.scan_user(user, report) {
                tracing::warn!("Error scanning user {}: {}", user, error);
                report.push_error(ErrorRecord::for_subject(error.subject()));
            }
        }

        tracing::info!(
            "Scan complete: {} extension(s), {} error(s)",
            report.records().count(),
            report.errors().count()
        );
        Ok(())
    }

    /// Scan one user's profiles, appending records as they resolve.
    pub fn scan_user(&self, user: &str, report: &mut Report) -> std::result::Result<(), ScanError> {
        let resolver = Resolver::new(self.store.as_ref(), self.options);

        for profile in enumerator::list_profiles(&self.layout, user)? {
            let Some(identifiers) = enumerator::list_extensions(&self.layout, user, &profile) else {
                continue;
            };

            let context = ProfileContext {
                user: user.to_string(),
                profile,
                computer: self.computer.clone(),
            };

            for identifier in identifiers {
                self.scan_extension(&resolver, &context, identifier, report)?;
            }
        }

        Ok(())
    }

    fn scan_extension(
        &self,
        resolver: &Resolver<'_>,
        context: &ProfileContext,
        identifier: String,
        report: &mut Report,
    ) -> std::result::Result<(), ScanError> {
        let extension_dir = self
            .layout
            .extension_dir(&context.user, &context.profile, &identifier);

        let created = enumerator::creation_time(&extension_dir).map_err(|source| {
            ScanError::Metadata {
                subject: identifier.clone(),
                path: extension_dir.clone(),
                source,
            }
        })?;

        let version_dirs = match enumerator::list_version_dirs(&extension_dir) {
            Ok(dirs) => dirs,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", extension_dir.display(), e);
                return Ok(());
            }
        };

        let candidate = Candidate {
            identifier,
            creation_time_utc: format_timestamp(created),
            version_dirs,
        };

        match resolver.resolve(context, &candidate) {
            Resolution::Resolved(record) => report.push_record(record),
            Resolution::Skipped(reason) => {
                tracing::debug!("Skipping {} ({:?})", candidate.identifier, reason)
            }
        }

        Ok(())
    }
}
