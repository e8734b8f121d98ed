// Line-mode renumbering: independent 1-based counters for each side.

use quickdiff_core::DiffUnit;

/// Assign before/after line numbers to `units` in forward order.
///
/// Unchanged units advance both counters, additions only the "after" counter
/// and removals only the "before" counter.
pub fn renumber(units: &mut [DiffUnit]) {
    let mut before_num = 1;
    let mut after_num = 1;

    for unit in units.iter_mut() {
        match unit {
            DiffUnit::Unchanged {
                before_line,
                after_line,
                ..
            } => {
                *before_line = Some(before_num);
                *after_line = Some(after_num);
                before_num += 1;
                after_num += 1;
            }
            DiffUnit::Added { after_line, .. } => {
                *after_line = Some(after_num);
                after_num += 1;
            }
            DiffUnit::Removed { before_line, .. } => {
                *before_line = Some(before_num);
                before_num += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_advance_per_side() {
        let mut units = vec![
            DiffUnit::unchanged("a"),
            DiffUnit::removed("b"),
            DiffUnit::added("c"),
            DiffUnit::added("d"),
            DiffUnit::unchanged("e"),
        ];
        renumber(&mut units);

        let numbers: Vec<_> = units
            .iter()
            .map(|u| (u.before_line(), u.after_line()))
            .collect();
        assert_eq!(
            numbers,
            vec![
                (Some(1), Some(1)),
                (Some(2), None),
                (None, Some(2)),
                (None, Some(3)),
                (Some(3), Some(4)),
            ]
        );
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut units: Vec<DiffUnit> = Vec::new();
        renumber(&mut units);
        assert!(units.is_empty());
    }
}
