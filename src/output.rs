use crate::colors::Colors;
use crate::consolidate::{ConsolidateResult, StyleFamily};
use similar::{ChangeTag, TextDiff};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

pub struct Config {
    pub check_only: bool,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
        }
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub families: Vec<StyleFamily>,
    pub lines_removed: usize,
}

impl From<ConsolidateResult> for RunResult {
    fn from(result: ConsolidateResult) -> Self {
        Self {
            lines_removed: result.removed_lines(),
            families: result.families,
        }
    }
}

impl RunResult {
    pub fn has_legacy_options(&self) -> bool {
        !self.families.is_empty()
    }
}

pub fn print_success(destination: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{}", destination.display());
        return;
    }

    println!("{}Success!{}", ctx.colors.success, ctx.colors.reset());
    println!(
        "New tmux config saved to {}{}{}",
        ctx.colors.bold,
        destination.display(),
        ctx.colors.reset()
    );
}

pub fn print_check_result(path: &Path, result: &ConsolidateResult, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        if !result.families.is_empty() {
            println!("{}", path.display());
        }
        return;
    }

    if result.families.is_empty() {
        println!(
            "{}Up to date:{} {}",
            ctx.colors.info,
            ctx.colors.reset(),
            path.display()
        );
        return;
    }

    println!(
        "{}Legacy options:{} {}",
        ctx.colors.error,
        ctx.colors.reset(),
        path.display()
    );
    for family in &result.families {
        println!(
            "  - line {}: {} ({} line(s))",
            family.line,
            family.signature,
            family.sources.len()
        );
    }
}

/// List every consolidated family (verbose mode)
pub fn print_families(result: &RunResult, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    for family in &result.families {
        println!(
            "{}Merged:{} line {}: {}",
            ctx.colors.info,
            ctx.colors.reset(),
            family.line,
            family.combined()
        );
    }
    println!(
        "{} families consolidated, {} lines removed",
        result.families.len(),
        result.lines_removed
    );
}

pub fn print_diff(old_label: &str, new_label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {old_label}");
    println!("+++ {new_label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}
