//! Report records.
//!
//! Field names and order match the JSON keys consumers of the inventory
//! already parse (`CreationTimeUTC`, `Chrome_Store`, `Code`, ...).

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Format of `CreationTimeUTC`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Render a filesystem timestamp as `MM/DD/YYYY HH:MM:SS` in UTC.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// How an extension's name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreStatus {
    /// Bundled with Chrome, named from the built-in table
    #[serde(rename = "Default")]
    Default,
    /// Named from the web store page
    #[serde(rename = "Yes")]
    Found,
    /// The web store lookup failed
    #[serde(rename = "Not Found")]
    NotFound,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Found => "Yes",
            Self::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One installed extension in one profile of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionRecord {
    #[serde(rename = "CreationTimeUTC")]
    pub creation_time_utc: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Chrome_Store")]
    pub store_status: StoreStatus,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Code")]
    pub identifier: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Profile")]
    pub profile: String,
    #[serde(rename = "Computer")]
    pub computer: String,
    /// Parsed from the manifest but never part of the report
    #[serde(skip)]
    pub update_url: String,
    /// Only set when permissions were requested
    #[serde(rename = "Permissions", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Value>>,
}

/// Placeholder for a user whose enumeration failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn for_subject(subject: &str) -> Self {
        Self {
            error: format!("There was an error on {subject}."),
        }
    }
}

/// An element of the report array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Extension(ExtensionRecord),
    Error(ErrorRecord),
}
