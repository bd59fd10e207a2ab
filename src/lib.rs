pub mod colors;
pub mod config;
pub mod consolidate;
mod output;

pub use colors::{should_use_colors, Colors};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_fix_options, CliFixOptions,
    ConfigError, FixOptions, FixSection, TmuxfixToml, DEFAULT_OUTPUT, TMUXFIX_TOML_TEMPLATE,
};
pub use consolidate::{
    classify, consolidate_content, consolidate_lines, split_lines, AttrType, ConsolidateResult,
    LegacyOption, LineKind, StyleFamily,
};
pub use output::{print_diff, Config, OutputContext, OutputMode, RunResult};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for a consolidation run
#[derive(Debug)]
pub enum FixError {
    /// Source config could not be read
    Read { path: PathBuf, source: io::Error },
    /// Destination could not be written
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            FixError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixError::Read { source, .. } | FixError::Write { source, .. } => Some(source),
        }
    }
}

/// Main entry point: consolidate `source` into `destination`.
///
/// In check mode nothing is written.
pub fn run(
    source: &Path,
    destination: &Path,
    config: &Config,
    ctx: &OutputContext,
) -> Result<RunResult, FixError> {
    let content = fs::read_to_string(source).map_err(|e| FixError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let result = consolidate_content(&content);

    if config.check_only {
        output::print_check_result(source, &result, ctx);
        return Ok(RunResult::from(result));
    }

    fs::write(destination, &result.content).map_err(|e| FixError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;

    if ctx.mode == OutputMode::Diff && result.has_changes() {
        print_diff(
            &source.display().to_string(),
            &destination.display().to_string(),
            &result.original,
            &result.content,
        );
    }

    let run_result = RunResult::from(result);
    if ctx.verbose {
        output::print_families(&run_result, ctx);
    }
    output::print_success(destination, ctx);

    Ok(run_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_ctx() -> OutputContext {
        OutputContext::new(OutputMode::Quiet, false, false)
    }

    fn fix_config() -> Config {
        Config { check_only: false }
    }

    #[test]
    fn test_run_writes_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tmux.conf");
        let destination = dir.path().join("new.conf.tmux");
        fs::write(&source, "set -g status-fg red\nset -g status-bg black\n").unwrap();

        let result = run(&source, &destination, &fix_config(), &quiet_ctx()).unwrap();

        assert_eq!(result.families.len(), 1);
        assert_eq!(result.lines_removed, 1);
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "set -g status-style fg=red,bg=black\n"
        );
        // Source is left alone
        assert_eq!(
            fs::read_to_string(&source).unwrap(),
            "set -g status-fg red\nset -g status-bg black\n"
        );
    }

    #[test]
    fn test_run_overwrites_existing_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tmux.conf");
        let destination = dir.path().join("out.conf");
        fs::write(&source, "set -g mouse on").unwrap();
        fs::write(&destination, "stale content that is longer").unwrap();

        run(&source, &destination, &fix_config(), &quiet_ctx()).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "set -g mouse on");
    }

    #[test]
    fn test_run_check_only_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tmux.conf");
        let destination = dir.path().join("new.conf.tmux");
        fs::write(&source, "set status-attr bold\n").unwrap();

        let config = Config { check_only: true };
        let result = run(&source, &destination, &config, &quiet_ctx()).unwrap();

        assert!(result.has_legacy_options());
        assert!(!destination.exists());
    }

    #[test]
    fn test_run_missing_source_is_read_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("missing.conf");
        let destination = dir.path().join("new.conf.tmux");

        let err = run(&source, &destination, &fix_config(), &quiet_ctx()).unwrap_err();

        assert!(matches!(err, FixError::Read { .. }));
        assert!(!destination.exists());
    }

    #[test]
    fn test_run_unwritable_destination_is_write_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("tmux.conf");
        fs::write(&source, "set status-fg red").unwrap();
        let destination = dir.path().join("no-such-dir").join("new.conf.tmux");

        let err = run(&source, &destination, &fix_config(), &quiet_ctx()).unwrap_err();

        assert!(matches!(err, FixError::Write { .. }));
        assert!(err.to_string().contains("failed to write"));
    }
}
