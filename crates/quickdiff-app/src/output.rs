// Writes a DiffResult in the selected format.

use std::io::{self, Write};

use quickdiff_core::{DiffMode, DiffResult};
use quickdiff_render::text::{render_inline, render_side_by_side, render_unified};
use quickdiff_render::{summary, AnsiRenderer, PlainRenderer, TextRenderer};

use crate::settings::{OutputFormat, Settings};

pub fn write_result<W: Write>(
    out: &mut W,
    result: &DiffResult,
    settings: &Settings,
    use_color: bool,
    stats_only: bool,
) -> io::Result<()> {
    if settings.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    if result.is_empty() {
        writeln!(out, "nothing to compare")?;
        return Ok(());
    }

    let renderer: &dyn TextRenderer = if use_color {
        &AnsiRenderer
    } else {
        &PlainRenderer
    };

    if !stats_only {
        let body = match (result.mode, settings.format) {
            (DiffMode::Word, _) => render_inline(result, renderer),
            (DiffMode::Line, OutputFormat::SideBySide) => {
                render_side_by_side(result, settings.side_by_side_width, renderer)
            }
            (DiffMode::Line, _) => render_unified(result, renderer),
        };
        out.write_all(body.as_bytes())?;
    }

    writeln!(out, "{}", renderer.gutter(&summary(&result.stats())))?;
    Ok(())
}
