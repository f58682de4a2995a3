use parking_lot::RwLock;
use std::sync::Arc;

use crate::scanner::category::CategoryResult;

/// Published engine state, read by the presentation layer.
///
/// At most one of `is_analyzing`/`is_cleaning` is true at any time; the
/// `try_begin_*` gates on [`StateHandle`] enforce it. `progress` is
/// monotonically non-decreasing within a run and resets to `0.0` only when a
/// new run begins.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub is_analyzing: bool,
    pub is_cleaning: bool,

    /// Fractional progress of the current run, in `[0, 1]`
    pub progress: f64,

    /// Human-readable description of the current step
    pub current_task: String,

    /// Bytes reclaimed so far by the current (or last) clean run
    pub cleaned_bytes: u64,

    /// Results of the last completed analysis, replaced wholesale
    pub results: Vec<CategoryResult>,
}

impl EngineState {
    /// True while either operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_analyzing || self.is_cleaning
    }
}

/// Shared, cloneable handle to the published state.
///
/// The single active worker writes through this handle; everyone else reads
/// immutable [`snapshot`] clones. Each mutation happens under one write-lock
/// acquisition, so readers observe updates in the order they were published.
///
/// [`snapshot`]: StateHandle::snapshot
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    inner: Arc<RwLock<EngineState>>,
}

impl StateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an immutable copy of the current state.
    pub fn snapshot(&self) -> EngineState {
        self.inner.read().clone()
    }

    /// Try to claim the engine for an analysis run.
    ///
    /// Returns false (leaving state untouched) if either operation is
    /// already in flight. On success the progress fields are reset.
    pub fn try_begin_analysis(&self, task: &str) -> bool {
        let mut state = self.inner.write();
        if state.is_busy() {
            return false;
        }
        state.is_analyzing = true;
        state.progress = 0.0;
        state.current_task = task.to_string();
        true
    }

    /// Try to claim the engine for a clean run.
    pub fn try_begin_clean(&self, task: &str) -> bool {
        let mut state = self.inner.write();
        if state.is_busy() {
            return false;
        }
        state.is_cleaning = true;
        state.progress = 0.0;
        state.cleaned_bytes = 0;
        state.current_task = task.to_string();
        true
    }

    /// Publish the current step label and progress fraction.
    pub fn publish_task(&self, task: &str, progress: f64) {
        let mut state = self.inner.write();
        state.current_task = task.to_string();
        state.progress = progress.clamp(0.0, 1.0);
    }

    /// Publish the running reclaimed-byte counter and progress fraction.
    pub fn publish_cleaned(&self, cleaned_bytes: u64, progress: f64) {
        let mut state = self.inner.write();
        state.cleaned_bytes = cleaned_bytes;
        state.progress = progress.clamp(0.0, 1.0);
    }

    /// Terminal publication for an analysis run: results are replaced
    /// wholesale and the busy flag cleared.
    pub fn finish_analysis(&self, results: Vec<CategoryResult>) {
        let mut state = self.inner.write();
        state.progress = 1.0;
        state.current_task = "Analysis complete".to_string();
        state.is_analyzing = false;
        state.results = results;
    }

    /// Terminal publication for a clean run.
    pub fn finish_clean(&self, cleaned_bytes: u64) {
        let mut state = self.inner.write();
        state.progress = 1.0;
        state.cleaned_bytes = cleaned_bytes;
        state.current_task = "Cleanup complete".to_string();
        state.is_cleaning = false;
    }

    /// Drop stale analysis results. Callers do this after a clean, before
    /// triggering a fresh analysis.
    pub fn clear_results(&self) {
        self.inner.write().results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_gates_are_mutually_exclusive() {
        let handle = StateHandle::new();
        assert!(handle.try_begin_analysis("analyzing"));
        assert!(!handle.try_begin_analysis("again"));
        assert!(!handle.try_begin_clean("cleaning"));

        handle.finish_analysis(Vec::new());
        assert!(handle.try_begin_clean("cleaning"));
        assert!(!handle.try_begin_analysis("analyzing"));
        handle.finish_clean(0);
    }

    #[test]
    fn rejected_begin_leaves_state_untouched() {
        let handle = StateHandle::new();
        assert!(handle.try_begin_clean("cleaning"));
        handle.publish_cleaned(42, 0.5);

        let before = handle.snapshot();
        assert!(!handle.try_begin_analysis("analyzing"));
        let after = handle.snapshot();

        assert_eq!(after.cleaned_bytes, before.cleaned_bytes);
        assert_eq!(after.progress, before.progress);
        assert_eq!(after.current_task, before.current_task);
        assert!(after.is_cleaning && !after.is_analyzing);
    }

    #[test]
    fn snapshots_are_detached_copies() {
        let handle = StateHandle::new();
        assert!(handle.try_begin_analysis("analyzing"));
        let snap = handle.snapshot();
        handle.publish_task("step two", 0.5);
        assert_eq!(snap.current_task, "analyzing");
        assert_eq!(snap.progress, 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        let handle = StateHandle::new();
        handle.publish_task("over", 1.5);
        assert_eq!(handle.snapshot().progress, 1.0);
        handle.publish_task("under", -0.5);
        assert_eq!(handle.snapshot().progress, 0.0);
    }

    #[test]
    fn begin_clean_resets_counters() {
        let handle = StateHandle::new();
        assert!(handle.try_begin_clean("first"));
        handle.finish_clean(1000);
        assert_eq!(handle.snapshot().cleaned_bytes, 1000);

        assert!(handle.try_begin_clean("second"));
        let snap = handle.snapshot();
        assert_eq!(snap.cleaned_bytes, 0);
        assert_eq!(snap.progress, 0.0);
    }
}
