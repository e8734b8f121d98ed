// quickdiff-engine: LCS-based text differencing over lines or words.

pub mod lcs;
pub mod renumber;
pub mod session;
pub mod tokenize;


use quickdiff_core::{DiffMode, DiffResult, DiffUnit};

pub use lcs::{backtrack, DiffOp, LcsTable};
pub use renumber::renumber;
pub use session::DiffSession;
pub use tokenize::{token_count, tokenize};

/// Compare `before` against `after` at the granularity given by `mode`.
///
/// Two empty inputs short-circuit to an empty result instead of reporting a
/// single unchanged empty line. Line numbers are only assigned in line mode.
pub fn compute_diff(before: &str, after: &str, mode: DiffMode) -> DiffResult {
    if before.is_empty() && after.is_empty() {
        log::debug!("compute_diff: both inputs empty, nothing to compare");
        return DiffResult::empty(mode);
    }

    let a = tokenize(before, mode);
    let b = tokenize(after, mode);

    let table = LcsTable::build(&a, &b);
    log::trace!(
        "compute_diff: {}x{} table, lcs length {}",
        table.rows(),
        table.cols(),
        table.lcs_len()
    );

    let ops = backtrack(&table, &a, &b);
    let mut units = materialize(&ops, &a, &b);
    if mode == DiffMode::Line {
        renumber(&mut units);
    }

    let result = DiffResult::from_units(mode, units);
    log::debug!(
        "compute_diff ({}): {} vs {} tokens -> +{} -{} ={}",
        mode,
        a.len(),
        b.len(),
        result.additions,
        result.deletions,
        result.unchanged
    );
    result
}

/// Exchange the two inputs. Does not recompute anything.
pub fn swap<T>(before: T, after: T) -> (T, T) {
    (after, before)
}

/// Turn index-based edit ops into owned units without line numbers.
fn materialize(ops: &[DiffOp], before: &[&str], after: &[&str]) -> Vec<DiffUnit> {
    ops.iter()
        .map(|op| match *op {
            DiffOp::Equal { before: i, .. } => DiffUnit::unchanged(before[i]),
            DiffOp::Insert(j) => DiffUnit::added(after[j]),
            DiffOp::Delete(i) => DiffUnit::removed(before[i]),
        })
        .collect()
}
