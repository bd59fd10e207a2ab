//! TOML schema definitions for tmuxfix.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root structure for tmuxfix.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TmuxfixToml {
    #[serde(default)]
    pub fix: FixSection,
}

/// `[fix]` section in tmuxfix.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FixSection {
    /// Destination used when none is given on the command line
    pub output: Option<PathBuf>,

    /// Print a diff after writing (default: false)
    pub diff: Option<bool>,

    /// List every consolidated family (default: false)
    pub verbose: Option<bool>,
}
