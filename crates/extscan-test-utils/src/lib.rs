//! Shared test utilities for the extscan workspace.
//!
//! This crate lays out fake multi-user Chrome installations in temporary
//! directories. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`host`] - [`TestHost`](host::TestHost) builder for users, profiles,
//!   extensions and manifests

pub mod host;
