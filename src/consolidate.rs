//! Consolidation of deprecated tmux `-fg`, `-bg` and `-attr` options.
//!
//! tmux 1.9 introduced combined `-style` options and tmux 2.9 removed the
//! old three-part settings. Every legacy line is grouped into a family keyed
//! by its signature (the setting command with its flags, plus the option
//! name stem). The first line of a family is rewritten into a single
//! `-style` directive and the remaining lines of that family are dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `<setCmd> <prefix><attrType> <value>`, where `setCmd` carries at most one
/// short flag cluster. Text after the value is ignored.
static LEGACY_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(set\S*(?:\s+-[a-z]+)?)\s+((?:[a-z][a-z-]*)?)(fg|bg|attr)\s+(\S+)")
        .unwrap()
});

/// Which part of a style a legacy option sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Fg,
    Bg,
    Attr,
}

impl AttrType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fg" => Some(AttrType::Fg),
            "bg" => Some(AttrType::Bg),
            "attr" => Some(AttrType::Attr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttrType::Fg => "fg",
            AttrType::Bg => "bg",
            AttrType::Attr => "attr",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single legacy option line, borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyOption<'a> {
    /// Setting command and its flag cluster, e.g. `set -g`
    pub set_cmd: &'a str,
    /// Option name stem, e.g. `pane-border-` (may be empty)
    pub prefix: &'a str,
    pub attr_type: AttrType,
    /// Color name, hex code or attribute keyword
    pub value: &'a str,
}

impl<'a> LegacyOption<'a> {
    /// Match `line` against the legacy option pattern
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = LEGACY_OPTION.captures(line)?;
        Some(Self {
            set_cmd: group(&caps, 1),
            prefix: group(&caps, 2),
            attr_type: AttrType::parse(group(&caps, 3))?,
            value: group(&caps, 4),
        })
    }

    /// Family key, and the text the combined directive starts with
    pub fn signature(&self) -> String {
        format!("{} {}style", self.set_cmd, self.prefix)
    }

    /// Style fragment contributed to the family (`fg=red`, `bg=blue`, `bold`)
    pub fn fragment(&self) -> String {
        match self.attr_type {
            AttrType::Attr => self.value.to_string(),
            attr => format!("{attr}={}", self.value),
        }
    }
}

fn group<'h>(caps: &Captures<'h>, idx: usize) -> &'h str {
    caps.get(idx).map_or("", |m| m.as_str())
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Legacy(LegacyOption<'a>),
    Other,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }
    match LegacyOption::parse(line) {
        Some(option) => LineKind::Legacy(option),
        None => LineKind::Other,
    }
}

/// All legacy lines sharing one signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFamily {
    pub signature: String,
    /// 1-based input line of the first occurrence
    pub line: usize,
    /// Fragments in order of appearance
    pub fragments: Vec<String>,
    /// 1-based input lines of every contributing occurrence
    pub sources: Vec<usize>,
}

impl StyleFamily {
    /// The combined `-style` directive
    pub fn combined(&self) -> String {
        format!("{} {}", self.signature, self.fragments.join(","))
    }
}

#[derive(Debug, Clone)]
pub struct ConsolidateResult {
    pub original: String,
    pub content: String,
    pub families: Vec<StyleFamily>,
}

impl ConsolidateResult {
    pub fn has_changes(&self) -> bool {
        self.original != self.content
    }

    /// Number of duplicate legacy lines dropped from the output
    pub fn removed_lines(&self) -> usize {
        self.families.iter().map(|f| f.sources.len() - 1).sum()
    }
}

/// Split on `\r?\n`. A trailing newline leaves a trailing empty line so that
/// joining with `\n` restores it.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

enum Slot<'a> {
    Keep(&'a str),
    Family(usize),
}

/// Consolidate legacy options in `lines`.
///
/// Returns the rewritten lines and the families found, in order of first
/// appearance.
pub fn consolidate_lines(lines: &[&str]) -> (Vec<String>, Vec<StyleFamily>) {
    let mut families: Vec<StyleFamily> = vec![];
    let mut by_signature: HashMap<String, usize> = HashMap::new();
    let mut slots = Vec::with_capacity(lines.len());

    for (line_idx, &line) in lines.iter().enumerate() {
        let LineKind::Legacy(option) = classify(line) else {
            slots.push(Slot::Keep(line));
            continue;
        };

        let signature = option.signature();
        let existing = by_signature.get(&signature).copied();
        match existing {
            Some(index) => {
                let family = &mut families[index];
                family.fragments.push(option.fragment());
                family.sources.push(line_idx + 1);
            }
            None => {
                let index = families.len();
                by_signature.insert(signature.clone(), index);
                slots.push(Slot::Family(index));
                families.push(StyleFamily {
                    signature,
                    line: line_idx + 1,
                    fragments: vec![option.fragment()],
                    sources: vec![line_idx + 1],
                });
            }
        }
    }

    let output = slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Keep(line) => line.to_string(),
            Slot::Family(index) => families[index].combined(),
        })
        .collect();

    (output, families)
}

/// Consolidate a whole configuration file
pub fn consolidate_content(content: &str) -> ConsolidateResult {
    let lines = split_lines(content);
    let (output, families) = consolidate_lines(&lines);

    ConsolidateResult {
        original: content.to_string(),
        content: output.join("\n"),
        families,
    }
}
