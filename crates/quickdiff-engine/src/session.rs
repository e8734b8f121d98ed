// Diff session: the caller's transient comparison state.

use quickdiff_core::{DiffMode, DiffResult};

use crate::compute_diff;

/// Two inputs, a mode and the result of the last comparison.
///
/// Nothing is recomputed implicitly: edits, swaps and mode changes only touch
/// the inputs, and `compare` replaces the stored result wholesale.
#[derive(Debug, Clone, Default)]
pub struct DiffSession {
    before: String,
    after: String,
    mode: DiffMode,
    result: Option<DiffResult>,
    generation: u64,
}

impl DiffSession {
    pub fn new(mode: DiffMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_texts(before: impl Into<String>, after: impl Into<String>, mode: DiffMode) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            mode,
            ..Self::default()
        }
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    /// Result of the last `compare`, if it is still current.
    pub fn result(&self) -> Option<&DiffResult> {
        self.result.as_ref()
    }

    /// Bumped on every state change so callers can tell when to redraw.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_before(&mut self, text: impl Into<String>) {
        self.before = text.into();
        self.generation += 1;
    }

    pub fn set_after(&mut self, text: impl Into<String>) {
        self.after = text.into();
        self.generation += 1;
    }

    pub fn set_mode(&mut self, mode: DiffMode) {
        if mode != self.mode {
            self.mode = mode;
            self.generation += 1;
        }
    }

    /// Recompute the diff from the current inputs.
    pub fn compare(&mut self) -> &DiffResult {
        let result = compute_diff(&self.before, &self.after, self.mode);
        self.generation += 1;
        self.result.insert(result)
    }

    /// Exchange the inputs verbatim.
    ///
    /// The previous result described the old orientation, so it is dropped
    /// rather than shown against swapped inputs. Call `compare` to refresh.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.before, &mut self.after);
        self.result = None;
        self.generation += 1;
        log::debug!("session swapped inputs");
    }

    /// Clear both inputs and the last result. The mode is kept.
    pub fn reset(&mut self) {
        self.before.clear();
        self.after.clear();
        self.result = None;
        self.generation += 1;
        log::debug!("session reset");
    }
}
