//! Configuration file support for tmuxfix.
//!
//! This module provides:
//! - Loading configuration from `tmuxfix.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI args, config file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_config_file, load_config, ConfigError};
pub use init::{generate_init_file, generate_init_file_in, TMUXFIX_TOML_TEMPLATE};
pub use merge::{merge_fix_options, CliFixOptions, FixOptions, DEFAULT_OUTPUT};
pub use toml_schema::{FixSection, TmuxfixToml};
