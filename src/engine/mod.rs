pub mod state;

use crossbeam_channel::{bounded, Receiver};
use std::thread;
use thiserror::Error;
use tracing::debug;

use crate::cleaner;
use crate::common::context::ScanContext;
use crate::scanner;
use crate::scanner::category::{CacheCategory, CategoryResult};
pub use state::{EngineState, StateHandle};

/// Typed failures at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A new request arrived while an analyze or clean was in flight.
    /// The request is rejected, not queued; published state is untouched.
    #[error("another analyze or clean operation is already running")]
    Busy,
}

/// The analysis-and-cleaning engine.
///
/// One background worker thread executes one operation at a time; analyze
/// and clean are mutually exclusive and a request received while either is
/// running is rejected with [`EngineError::Busy`]. Accepted operations
/// return a completion channel that carries exactly one terminal message:
/// the result sequence for analyze, the reclaimed byte count for clean.
/// Live progress is read through [`CacheEngine::state`] snapshots.
pub struct CacheEngine {
    ctx: ScanContext,
    state: StateHandle,
}

impl CacheEngine {
    pub fn new(ctx: ScanContext) -> Self {
        Self {
            ctx,
            state: StateHandle::new(),
        }
    }

    /// Handle for reading published state.
    pub fn state(&self) -> StateHandle {
        self.state.clone()
    }

    /// Start a background analysis of `category`.
    pub fn analyze(
        &self,
        category: CacheCategory,
    ) -> Result<Receiver<Vec<CategoryResult>>, EngineError> {
        if !self.state.try_begin_analysis(&format!("Analyzing {category}")) {
            return Err(EngineError::Busy);
        }
        debug!(%category, "analysis started");

        let ctx = self.ctx.clone();
        let state = self.state.clone();
        let (tx, rx) = bounded(1);
        thread::spawn(move || {
            let results = scanner::run_analysis(&ctx, &state, category);
            // Receiver may have been dropped; the run already published.
            let _ = tx.send(results);
        });
        Ok(rx)
    }

    /// Start a background clean of `category`.
    ///
    /// The worker re-classifies the category before deleting, so the items
    /// removed reflect the current on-disk state, not stale analysis
    /// results.
    pub fn clean(&self, category: CacheCategory) -> Result<Receiver<u64>, EngineError> {
        if !self.state.try_begin_clean(&format!("Cleaning {category}")) {
            return Err(EngineError::Busy);
        }
        debug!(%category, "clean started");

        let ctx = self.ctx.clone();
        let state = self.state.clone();
        let (tx, rx) = bounded(1);
        thread::spawn(move || {
            let reclaimed = cleaner::run_clean(&ctx, &state, category);
            let _ = tx.send(reclaimed);
        });
        Ok(rx)
    }
}
