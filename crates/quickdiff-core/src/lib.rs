use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Mode
// ──────────────────────────────────────────────

/// Comparison granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// One token per `\n`-separated line.
    #[default]
    Line,
    /// Alternating word and whitespace-run tokens.
    Word,
}

impl DiffMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffMode::Line => "line",
            DiffMode::Word => "word",
        }
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diff mode {:?} (expected \"line\" or \"word\")", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for DiffMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(DiffMode::Line),
            "word" => Ok(DiffMode::Word),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

// ──────────────────────────────────────────────
// Diff units
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

/// One token of diff output.
///
/// Each variant only carries the line numbers that mean something for it:
/// an addition has no "before" position and a removal has no "after" position.
/// In word mode every line number is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffUnit {
    Unchanged {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before_line: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_line: Option<usize>,
    },
    Added {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_line: Option<usize>,
    },
    Removed {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before_line: Option<usize>,
    },
}

impl DiffUnit {
    pub fn unchanged(content: impl Into<String>) -> Self {
        DiffUnit::Unchanged {
            content: content.into(),
            before_line: None,
            after_line: None,
        }
    }

    pub fn added(content: impl Into<String>) -> Self {
        DiffUnit::Added {
            content: content.into(),
            after_line: None,
        }
    }

    pub fn removed(content: impl Into<String>) -> Self {
        DiffUnit::Removed {
            content: content.into(),
            before_line: None,
        }
    }

    pub fn kind(&self) -> DiffKind {
        match self {
            DiffUnit::Unchanged { .. } => DiffKind::Unchanged,
            DiffUnit::Added { .. } => DiffKind::Added,
            DiffUnit::Removed { .. } => DiffKind::Removed,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            DiffUnit::Unchanged { content, .. }
            | DiffUnit::Added { content, .. }
            | DiffUnit::Removed { content, .. } => content,
        }
    }

    pub fn before_line(&self) -> Option<usize> {
        match self {
            DiffUnit::Unchanged { before_line, .. } | DiffUnit::Removed { before_line, .. } => {
                *before_line
            }
            DiffUnit::Added { .. } => None,
        }
    }

    pub fn after_line(&self) -> Option<usize> {
        match self {
            DiffUnit::Unchanged { after_line, .. } | DiffUnit::Added { after_line, .. } => {
                *after_line
            }
            DiffUnit::Removed { .. } => None,
        }
    }

    /// Unified-diff style marker character.
    pub fn marker(&self) -> char {
        match self.kind() {
            DiffKind::Unchanged => ' ',
            DiffKind::Added => '+',
            DiffKind::Removed => '-',
        }
    }
}

// ──────────────────────────────────────────────
// Results
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Count unit kinds in a single pass.
    pub fn from_units(units: &[DiffUnit]) -> Self {
        let mut stats = DiffStats::default();
        for unit in units {
            match unit.kind() {
                DiffKind::Unchanged => stats.unchanged += 1,
                DiffKind::Added => stats.additions += 1,
                DiffKind::Removed => stats.deletions += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.unchanged
    }

    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }
}

/// Output of one comparison. Replaced wholesale on every compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub mode: DiffMode,
    pub units: Vec<DiffUnit>,
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffResult {
    pub fn empty(mode: DiffMode) -> Self {
        Self {
            mode,
            units: Vec::new(),
            additions: 0,
            deletions: 0,
            unchanged: 0,
        }
    }

    pub fn from_units(mode: DiffMode, units: Vec<DiffUnit>) -> Self {
        let stats = DiffStats::from_units(&units);
        Self {
            mode,
            units,
            additions: stats.additions,
            deletions: stats.deletions,
            unchanged: stats.unchanged,
        }
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats {
            additions: self.additions,
            deletions: self.deletions,
            unchanged: self.unchanged,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        self.stats().has_changes()
    }
}
