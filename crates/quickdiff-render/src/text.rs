// Text output: unified table, side-by-side columns and inline word diffs.

use colored::Colorize;
use quickdiff_core::{DiffKind, DiffResult, DiffUnit};
use unicode_width::UnicodeWidthChar;

use crate::{inline_spans, side_by_side_rows, unified_rows};

/// Decorates pieces of diff output. Implementations decide how a kind is
/// made visible (markers only, or terminal colors).
pub trait TextRenderer {
    /// A whole row whose content has kind `kind`.
    fn line(&self, kind: DiffKind, text: &str) -> String;
    /// An inline span inside running text.
    fn span(&self, kind: DiffKind, text: &str) -> String;
    /// Line-number gutter.
    fn gutter(&self, text: &str) -> String;
}

/// No escape codes. Inline changes use `[-removed-]` / `{+added+}` brackets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl TextRenderer for PlainRenderer {
    fn line(&self, _kind: DiffKind, text: &str) -> String {
        text.to_string()
    }

    fn span(&self, kind: DiffKind, text: &str) -> String {
        match kind {
            DiffKind::Unchanged => text.to_string(),
            DiffKind::Added => format!("{{+{}+}}", text),
            DiffKind::Removed => format!("[-{}-]", text),
        }
    }

    fn gutter(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Terminal colors: green additions, red removals, dimmed gutter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl TextRenderer for AnsiRenderer {
    fn line(&self, kind: DiffKind, text: &str) -> String {
        match kind {
            DiffKind::Unchanged => text.to_string(),
            DiffKind::Added => text.green().to_string(),
            DiffKind::Removed => text.red().to_string(),
        }
    }

    fn span(&self, kind: DiffKind, text: &str) -> String {
        match kind {
            DiffKind::Unchanged => text.to_string(),
            DiffKind::Added => text.black().on_green().to_string(),
            DiffKind::Removed => text.black().on_red().strikethrough().to_string(),
        }
    }

    fn gutter(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

fn number_width(result: &DiffResult) -> usize {
    let max = result
        .units
        .iter()
        .flat_map(|u| [u.before_line(), u.after_line()])
        .flatten()
        .max()
        .unwrap_or(0);
    max.to_string().len()
}

fn format_number(n: Option<usize>, width: usize) -> String {
    match n {
        Some(n) => format!("{:>width$}", n, width = width),
        None => " ".repeat(width),
    }
}

/// Truncate or pad `s` to exactly `width` display columns.
/// Tabs become a single space; other control characters are dropped.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in s.chars() {
        let ch = if ch == '\t' { ' ' } else { ch };
        if ch.is_control() {
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Two-column gutter table, one line per unit.
pub fn render_unified(result: &DiffResult, renderer: &dyn TextRenderer) -> String {
    let width = number_width(result);
    let mut out = String::new();
    for row in unified_rows(result) {
        let gutter = format!(
            "{} {} ",
            format_number(row.before_line, width),
            format_number(row.after_line, width)
        );
        out.push_str(&renderer.gutter(&gutter));
        out.push_str(&renderer.line(row.kind, &format!("{} {}", row.marker, row.content)));
        out.push('\n');
    }
    out
}

fn side_cell(
    unit: Option<&DiffUnit>,
    line: Option<usize>,
    num_width: usize,
    col_width: usize,
    renderer: &dyn TextRenderer,
) -> String {
    match unit {
        Some(unit) => {
            let body = format!("{} {}", unit.marker(), unit.content());
            format!(
                "{} {}",
                renderer.gutter(&format_number(line, num_width)),
                renderer.line(unit.kind(), &fit_to_width(&body, col_width))
            )
        }
        None => format!("{} {}", " ".repeat(num_width), " ".repeat(col_width)),
    }
}

/// Old and new side by side within `total_width` display columns.
pub fn render_side_by_side(
    result: &DiffResult,
    total_width: usize,
    renderer: &dyn TextRenderer,
) -> String {
    let num_width = number_width(result).max(1);
    // "<num> <body> │ <num> <body>"
    let chrome = 2 * (num_width + 1) + 3;
    let col_width = total_width.saturating_sub(chrome).max(8) / 2;

    let mut out = String::new();
    for row in side_by_side_rows(&result.units) {
        let left = side_cell(
            row.left,
            row.left.and_then(DiffUnit::before_line),
            num_width,
            col_width,
            renderer,
        );
        let right = side_cell(
            row.right,
            row.right.and_then(DiffUnit::after_line),
            num_width,
            col_width,
            renderer,
        );
        out.push_str(&left);
        out.push_str(&renderer.gutter(" │ "));
        out.push_str(right.trim_end());
        out.push('\n');
    }
    out
}

/// Word-mode output: the merged text with changed spans decorated.
pub fn render_inline(result: &DiffResult, renderer: &dyn TextRenderer) -> String {
    let mut out: String = inline_spans(&result.units)
        .iter()
        .map(|span| renderer.span(span.kind, &span.text))
        .collect();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdiff_core::DiffMode;
    use quickdiff_engine::compute_diff;

    #[test]
    fn fit_to_width_pads_and_truncates_by_display_width() {
        assert_eq!(fit_to_width("abc", 5), "abc  ");
        assert_eq!(fit_to_width("abcdef", 3), "abc");
        // Wide CJK characters take two columns each.
        assert_eq!(fit_to_width("你好世界", 5), "你好 ");
        assert_eq!(fit_to_width("a\tb\r", 4), "a b ");
    }

    #[test]
    fn unified_plain_output() {
        let result = compute_diff("line one\nline two", "line one\nline three", DiffMode::Line);
        assert_eq!(
            render_unified(&result, &PlainRenderer),
            "1 1   line one\n2   - line two\n  2 + line three\n"
        );
    }

    #[test]
    fn unified_gutter_widens_for_large_numbers() {
        let before: String = (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let result = compute_diff(&before, &before, DiffMode::Line);
        let text = render_unified(&result, &PlainRenderer);
        assert!(text.starts_with(" 1  1   1\n"));
        assert!(text.ends_with("10 10   10\n"));
    }

    #[test]
    fn side_by_side_plain_output() {
        let result = compute_diff("a\nb", "a\nc", DiffMode::Line);
        // 2 * (1 + 1) + 3 = 7 chrome columns, (27 - 7) / 2 = 10 per side.
        assert_eq!(
            render_side_by_side(&result, 27, &PlainRenderer),
            "1   a        │ 1   a\n2 - b        │ 2 + c\n"
        );
    }

    #[test]
    fn inline_plain_output() {
        let result = compute_diff("hello world", "hello there", DiffMode::Word);
        assert_eq!(
            render_inline(&result, &PlainRenderer),
            "hello [-world-]{+there+}\n"
        );
    }

    #[test]
    fn empty_result_renders_nothing() {
        let result = compute_diff("", "", DiffMode::Word);
        assert_eq!(render_inline(&result, &PlainRenderer), "");
        assert_eq!(render_unified(&result, &PlainRenderer), "");
    }
}
