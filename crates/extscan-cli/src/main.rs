//! extscan CLI
//!
//! Inventories the Chrome extensions of every local user and prints the
//! result as JSON.

mod cli;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use extscan_core::{ScanConfig, Scanner};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!("Verbose mode enabled");

    let config = load_config(&cli)?;
    let scanner = Scanner::from_config(&config)?;
    let report = scanner.run()?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report.write_json(&mut handle)?;
    writeln!(handle)?;
    handle.flush()?;
    Ok(())
}

/// Defaults, then the config file, then environment and flags.
fn load_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    cli.apply_to(&mut config);
    tracing::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_without_file() {
        let cli = Cli::try_parse_from(["extscan", "--showpermissions"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert!(config.show_permissions);
        assert!(!config.show_defaults);
    }

    #[test]
    fn test_load_config_file_then_flags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("extscan.toml");
        fs::write(&path, "show_defaults = true\n[store]\nenabled = false\n").unwrap();

        let cli = Cli::try_parse_from([
            "extscan",
            "--config",
            path.to_str().unwrap(),
            "--timeout",
            "3",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert!(config.show_defaults);
        assert!(!config.store.enabled);
        assert_eq!(config.store.timeout_secs, 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        let cli = Cli::try_parse_from(["extscan", "--config", path.to_str().unwrap()]).unwrap();

        let error = load_config(&cli).unwrap_err();
        assert!(matches!(error, CliError::Core(_)));
    }
}
