//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;
use extscan_core::ScanConfig;

/// extscan - Inventory Chrome extensions for every user on this machine
///
/// Prints a JSON array with one object per installed extension.
#[derive(Parser, Debug)]
#[command(name = "extscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Also list extensions bundled with Chrome
    ///
    /// Accepts an optional value (`--showdefaults false`).
    #[arg(
        long = "showdefaults",
        visible_alias = "show-defaults",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_defaults: Option<bool>,

    /// Include each extension's manifest permissions
    #[arg(
        long = "showpermissions",
        visible_alias = "show-permissions",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_permissions: Option<bool>,

    /// Directory containing the users' home directories
    #[arg(long, env = "EXTSCAN_USERS_ROOT", value_name = "DIR")]
    pub users_root: Option<PathBuf>,

    /// Web store detail page prefix used for name lookups
    #[arg(long, env = "EXTSCAN_STORE_URL", value_name = "URL")]
    pub store_url: Option<String>,

    /// Never contact the web store
    #[arg(long)]
    pub offline: bool,

    /// Web store request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Host name to report instead of the detected one
    #[arg(long, env = "EXTSCAN_COMPUTER", value_name = "NAME")]
    pub computer: Option<String>,

    /// Read settings from a TOML file
    #[arg(short, long, env = "EXTSCAN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer explicitly given flags and environment variables over `config`.
    pub fn apply_to(&self, config: &mut ScanConfig) {
        if let Some(show_defaults) = self.show_defaults {
            config.show_defaults = show_defaults;
        }
        if let Some(show_permissions) = self.show_permissions {
            config.show_permissions = show_permissions;
        }
        if let Some(users_root) = &self.users_root {
            config.users_root = users_root.clone();
        }
        if let Some(store_url) = &self.store_url {
            config.store.base_url = store_url.clone();
        }
        if self.offline {
            config.store.enabled = false;
        }
        if let Some(timeout) = self.timeout {
            config.store.timeout_secs = timeout;
        }
        if let Some(computer) = &self.computer {
            config.computer = Some(computer.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["extscan"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_default_to_unset() {
        let cli = parse(&[]);
        assert_eq!(cli.show_defaults, None);
        assert_eq!(cli.show_permissions, None);
        assert!(!cli.offline);
    }

    #[rstest]
    #[case(&["--showdefaults"], Some(true))]
    #[case(&["--showdefaults", "True"], Some(true))]
    #[case(&["--showdefaults=yes"], Some(true))]
    #[case(&["--showdefaults", "False"], Some(false))]
    #[case(&["--showdefaults=0"], Some(false))]
    #[case(&["--show-defaults"], Some(true))]
    fn show_defaults_is_a_real_boolean(#[case] args: &[&str], #[case] expected: Option<bool>) {
        assert_eq!(parse(args).show_defaults, expected);
    }

    #[test]
    fn bare_flags_do_not_swallow_each_other() {
        let cli = parse(&["--showdefaults", "--showpermissions"]);
        assert_eq!(cli.show_defaults, Some(true));
        assert_eq!(cli.show_permissions, Some(true));
    }

    #[test]
    fn garbage_boolean_is_rejected() {
        assert!(Cli::try_parse_from(["extscan", "--showdefaults", "sometimes"]).is_err());
    }

    #[test]
    fn apply_overrides_only_given_values() {
        let mut config = ScanConfig::from_toml(
            "show_permissions = true\ncomputer = \"from-file\"\n[store]\ntimeout_secs = 9\n",
        )
        .unwrap();
        let cli = parse(&[
            "--showdefaults",
            "--users-root",
            "/srv/homes",
            "--offline",
        ]);

        cli.apply_to(&mut config);

        assert!(config.show_defaults);
        assert!(config.show_permissions);
        assert_eq!(config.users_root, PathBuf::from("/srv/homes"));
        assert!(!config.store.enabled);
        assert_eq!(config.store.timeout_secs, 9);
        assert_eq!(config.computer.as_deref(), Some("from-file"));
    }

    #[test]
    fn explicit_false_overrides_config_file() {
        let mut config = ScanConfig::from_toml("show_defaults = true").unwrap();
        parse(&["--showdefaults", "false"]).apply_to(&mut config);
        assert!(!config.show_defaults);
    }
}
