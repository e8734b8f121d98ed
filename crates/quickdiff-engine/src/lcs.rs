// Longest-common-subsequence table and edit-script backtracking.

/// A single edit operation, in terms of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    /// Token present on both sides.
    Equal { before: usize, after: usize },
    /// Token present only in the "after" sequence.
    Insert(usize), // after index
    /// Token present only in the "before" sequence.
    Delete(usize), // before index
}

/// `(m+1) × (n+1)` table where `get(i, j)` is the LCS length of
/// `before[..i]` and `after[..j]`.
#[derive(Debug, Clone)]
pub struct LcsTable {
    dp: Vec<Vec<u32>>,
}

impl LcsTable {
    pub fn build<T: PartialEq>(before: &[T], after: &[T]) -> Self {
        let m = before.len();
        let n = after.len();

        let mut dp = vec![vec![0u32; n + 1]; m + 1];
        for i in 1..=m {
            for j in 1..=n {
                if before[i - 1] == after[j - 1] {
                    dp[i][j] = dp[i - 1][j - 1] + 1;
                } else {
                    dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
                }
            }
        }

        Self { dp }
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.dp[i][j]
    }

    pub fn rows(&self) -> usize {
        self.dp.len()
    }

    pub fn cols(&self) -> usize {
        self.dp.first().map_or(0, Vec::len)
    }

    /// Length of the LCS of the full sequences.
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows() - 1, self.cols() - 1)
    }
}

/// Walk `table` from the bottom-right corner back to the origin and return
/// the edit script in forward order.
///
/// On ties (`dp[i][j-1] >= dp[i-1][j]`) the walk steps into `after` first,
/// i.e. an insertion is emitted before a deletion. Since the walk runs
/// backwards, a changed region reads removals-then-additions in forward order.
pub fn backtrack<T: PartialEq>(table: &LcsTable, before: &[T], after: &[T]) -> Vec<DiffOp> {
    let mut ops = Vec::with_capacity(before.len().max(after.len()));
    let mut i = before.len();
    let mut j = after.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && before[i - 1] == after[j - 1] {
            ops.push(DiffOp::Equal {
                before: i - 1,
                after: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(DiffOp::Insert(j - 1));
            j -= 1;
        } else {
            ops.push(DiffOp::Delete(i - 1));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_dimensions_include_empty_prefix() {
        let table = LcsTable::build(&["a", "b"], &["a", "b", "c"]);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 4);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(2, 0), 0);
    }

    #[test]
    fn table_holds_prefix_lcs_lengths() {
        let a = ["a", "b", "c", "b", "d", "a", "b"];
        let b = ["b", "d", "c", "a", "b", "a"];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.lcs_len(), 4);
        assert_eq!(table.get(1, 1), 0);
        assert_eq!(table.get(2, 1), 1);
        assert_eq!(table.get(3, 3), 2);
    }

    #[test]
    fn backtrack_equal_sequences_is_all_equal() {
        let a = ["x", "y"];
        let table = LcsTable::build(&a, &a);
        assert_eq!(
            backtrack(&table, &a, &a),
            vec![
                DiffOp::Equal { before: 0, after: 0 },
                DiffOp::Equal { before: 1, after: 1 },
            ]
        );
    }

    #[test]
    fn backtrack_prefers_insert_on_ties() {
        let a = ["a"];
        let b = ["b"];
        let table = LcsTable::build(&a, &b);
        // Insertion is emitted first while walking back from (1, 1).
        assert_eq!(
            backtrack(&table, &a, &b),
            vec![DiffOp::Delete(0), DiffOp::Insert(0)]
        );
    }

    #[test]
    fn backtrack_handles_empty_sides() {
        let empty: [&str; 0] = [];
        let b = ["p", "q"];
        let table = LcsTable::build(&empty, &b);
        assert_eq!(
            backtrack(&table, &empty, &b),
            vec![DiffOp::Insert(0), DiffOp::Insert(1)]
        );

        let table = LcsTable::build(&b, &empty);
        assert_eq!(
            backtrack(&table, &b, &empty),
            vec![DiffOp::Delete(0), DiffOp::Delete(1)]
        );
    }
}
