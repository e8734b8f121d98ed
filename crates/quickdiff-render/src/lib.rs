// quickdiff-render: turn a DiffResult into rows, spans and text.

pub mod text;

use quickdiff_core::{DiffKind, DiffResult, DiffStats, DiffUnit};

pub use text::{AnsiRenderer, PlainRenderer, TextRenderer};

// ──────────────────────────────────────────────
// Unified gutter table
// ──────────────────────────────────────────────

/// One row of the two-column gutter table: old # | new # | marker | content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterRow<'a> {
    pub before_line: Option<usize>,
    pub after_line: Option<usize>,
    pub kind: DiffKind,
    pub marker: char,
    pub content: &'a str,
}

pub fn unified_rows(result: &DiffResult) -> Vec<GutterRow<'_>> {
    result
        .units
        .iter()
        .map(|unit| GutterRow {
            before_line: unit.before_line(),
            after_line: unit.after_line(),
            kind: unit.kind(),
            marker: unit.marker(),
            content: unit.content(),
        })
        .collect()
}

// ──────────────────────────────────────────────
// Side-by-side pairing
// ──────────────────────────────────────────────

/// A paired row for side-by-side display. `None` leaves that side blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBySideRow<'a> {
    pub left: Option<&'a DiffUnit>,
    pub right: Option<&'a DiffUnit>,
}

/// Pair units for side-by-side rendering.
/// Unchanged units appear on both sides. A run of removals goes left and is
/// paired in order with the run of additions that follows it.
pub fn side_by_side_rows(units: &[DiffUnit]) -> Vec<SideBySideRow<'_>> {
    let mut result = Vec::new();
    let mut i = 0;
    while i < units.len() {
        match units[i].kind() {
            DiffKind::Unchanged => {
                result.push(SideBySideRow {
                    left: Some(&units[i]),
                    right: Some(&units[i]),
                });
                i += 1;
            }
            DiffKind::Removed => {
                let mut removed = Vec::new();
                while i < units.len() && units[i].kind() == DiffKind::Removed {
                    removed.push(&units[i]);
                    i += 1;
                }
                let mut added = Vec::new();
                while i < units.len() && units[i].kind() == DiffKind::Added {
                    added.push(&units[i]);
                    i += 1;
                }
                let max_len = removed.len().max(added.len());
                for j in 0..max_len {
                    result.push(SideBySideRow {
                        left: removed.get(j).copied(),
                        right: added.get(j).copied(),
                    });
                }
            }
            DiffKind::Added => {
                result.push(SideBySideRow {
                    left: None,
                    right: Some(&units[i]),
                });
                i += 1;
            }
        }
    }
    result
}

// ──────────────────────────────────────────────
// Inline spans (word mode)
// ──────────────────────────────────────────────

/// A run of consecutive units sharing a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub kind: DiffKind,
    pub text: String,
}

pub fn inline_spans(units: &[DiffUnit]) -> Vec<InlineSpan> {
    let mut spans: Vec<InlineSpan> = Vec::new();
    for unit in units {
        match spans.last_mut() {
            Some(span) if span.kind == unit.kind() => span.text.push_str(unit.content()),
            _ => spans.push(InlineSpan {
                kind: unit.kind(),
                text: unit.content().to_string(),
            }),
        }
    }
    spans
}

// ──────────────────────────────────────────────
// Summary
// ──────────────────────────────────────────────

/// Short readout, e.g. `+1 -1 =3`.
pub fn summary(stats: &DiffStats) -> String {
    format!("+{} -{} ={}", stats.additions, stats.deletions, stats.unchanged)
}
