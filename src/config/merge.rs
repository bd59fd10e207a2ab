//! Configuration merging logic
//!
//! Priority: CLI args > tmuxfix.toml > defaults

use std::path::PathBuf;

use super::toml_schema::FixSection;

/// Destination written when neither the CLI nor the config file names one
pub const DEFAULT_OUTPUT: &str = "new.conf.tmux";

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct FixOptions {
    pub output: PathBuf,
    pub diff: bool,
    pub verbose: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            diff: false,
            verbose: false,
        }
    }
}

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliFixOptions {
    /// Second positional argument
    pub output: Option<PathBuf>,
    pub diff: Option<bool>,
    pub verbose: Option<bool>,
}

/// Merge configurations from CLI, TOML, and defaults.
pub fn merge_fix_options(cli: &CliFixOptions, toml: Option<&FixSection>) -> FixOptions {
    let defaults = FixOptions::default();

    FixOptions {
        output: cli
            .output
            .clone()
            .or_else(|| toml.and_then(|t| t.output.clone()))
            .unwrap_or(defaults.output),
        diff: cli
            .diff
            .or_else(|| toml.and_then(|t| t.diff))
            .unwrap_or(defaults.diff),
        verbose: cli
            .verbose
            .or_else(|| toml.and_then(|t| t.verbose))
            .unwrap_or(defaults.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let cli = CliFixOptions::default();
        let options = merge_fix_options(&cli, None);

        assert_eq!(options.output, PathBuf::from("new.conf.tmux"));
        assert!(!options.diff);
        assert!(!options.verbose);
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let cli = CliFixOptions::default();
        let toml = FixSection {
            output: Some(PathBuf::from("tmux.fixed.conf")),
            diff: Some(true),
            verbose: None,
        };

        let options = merge_fix_options(&cli, Some(&toml));

        assert_eq!(options.output, PathBuf::from("tmux.fixed.conf"));
        assert!(options.diff);
        assert!(!options.verbose); // default
    }

    #[test]
    fn test_merge_cli_overrides_toml() {
        let cli = CliFixOptions {
            output: Some(PathBuf::from("cli.conf")),
            diff: None,
            verbose: Some(true),
        };
        let toml = FixSection {
            output: Some(PathBuf::from("toml.conf")),
            diff: Some(true),
            verbose: Some(false),
        };

        let options = merge_fix_options(&cli, Some(&toml));

        assert_eq!(options.output, PathBuf::from("cli.conf")); // CLI wins
        assert!(options.diff); // TOML (CLI not set)
        assert!(options.verbose); // CLI wins
    }
}
