//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

/// Template tmuxfix.toml with documentation
pub const TMUXFIX_TOML_TEMPLATE: &str = r#"# tmuxfix.toml - Configuration for tmuxfix
#
# tmuxfix rewrites deprecated tmux -fg, -bg and -attr options into the
# combined -style options introduced in tmux 1.9:
#
#   set -g status-fg white      =>  set -g status-style fg=white,bg=black
#   set -g status-bg black
#
# Every other line is copied unchanged. The settings below are defaults;
# command-line arguments take precedence.

[fix]
# Destination used when no second path is given.
# Default: "new.conf.tmux"
# output = "new.conf.tmux"

# Print a unified diff between the old and new config after writing.
# Default: false
# diff = false

# List every consolidated option family.
# Default: false
# verbose = false
"#;

/// Generate tmuxfix.toml in the specified directory (or current directory if None).
///
/// Returns an error if tmuxfix.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |d| d.join(CONFIG_FILE_NAME));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "tmuxfix.toml already exists",
        ));
    }

    fs::write(&path, TMUXFIX_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate tmuxfix.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
