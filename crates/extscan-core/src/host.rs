//! Host identity for the `Computer` field.

use std::process::Command;

/// Reported when no host name can be determined.
pub const UNKNOWN_COMPUTER: &str = "unknown";

/// Environment variables that may carry the host name
const HOSTNAME_VARS: [&str; 2] = ["HOSTNAME", "COMPUTERNAME"];

/// Resolve the host name to report.
///
/// Tries the configured value, then the environment, then the `hostname`
/// command.
pub fn computer_name(configured: Option<&str>) -> String {
    if let Some(name) = non_empty(configured) {
        return name;
    }

    for var in HOSTNAME_VARS {
        if let Some(name) = non_empty(std::env::var(var).ok().as_deref()) {
            return name;
        }
    }

    hostname_command().unwrap_or_else(|| UNKNOWN_COMPUTER.to_string())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Run `hostname` and return its trimmed output
fn hostname_command() -> Option<String> {
    let output = Command::new("hostname").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    non_empty(Some(&*stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_name_wins() {
        assert_eq!(computer_name(Some("  audit-host ")), "audit-host");
    }

    #[test]
    fn blank_configured_name_is_ignored() {
        assert!(!computer_name(Some("   ")).trim().is_empty());
    }

    #[test]
    fn detected_name_is_never_empty() {
        assert!(!computer_name(None).is_empty());
    }
}
