use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::common::context::ScanContext;
use crate::engine::state::StateHandle;
use crate::scanner::category::{CacheCategory, CacheItem};
use crate::scanner::classify;

/// Clean worker body: re-scan the category and delete what was found.
///
/// The item list is a fresh classification, never a reuse of earlier
/// analysis results, since deletion must reflect the on-disk state now. Returns
/// the total bytes reclaimed; the operation as a whole always succeeds.
pub fn run_clean(ctx: &ScanContext, state: &StateHandle, category: CacheCategory) -> u64 {
    let items = classify::list_items(ctx, category);
    let reclaimed = clean_items(state, &items);
    state.finish_clean(reclaimed);
    reclaimed
}

/// Delete items one at a time in the given order, publishing progress
/// after each deletion.
///
/// Progress is weighted by size (`cleaned / total_to_clean`), falling back
/// to an index fraction when the total is zero. A failed deletion is
/// logged, contributes zero bytes, and never aborts the batch.
pub fn clean_items(state: &StateHandle, items: &[CacheItem]) -> u64 {
    if items.is_empty() {
        state.publish_task("Nothing to clean", 1.0);
        return 0;
    }

    let total_to_clean: u64 = items.iter().map(|i| i.size_bytes).sum();
    let mut cleaned = 0u64;

    for (index, item) in items.iter().enumerate() {
        state.publish_task(
            &format!("Cleaning {}", item.name),
            fraction(cleaned, total_to_clean, index, items.len()),
        );

        match delete_path(&item.path) {
            Ok(()) => {
                cleaned += item.size_bytes;
                debug!(path = %item.path.display(), bytes = item.size_bytes, "deleted");
            }
            Err(e) => {
                warn!(path = %item.path.display(), error = %e, "failed to delete, skipping");
            }
        }

        state.publish_cleaned(
            cleaned,
            fraction(cleaned, total_to_clean, index + 1, items.len()),
        );
    }

    cleaned
}

/// Size-weighted progress, with an index fallback for all-zero batches.
fn fraction(cleaned: u64, total_to_clean: u64, processed: usize, total_items: usize) -> f64 {
    if total_to_clean > 0 {
        cleaned as f64 / total_to_clean as f64
    } else {
        processed as f64 / total_items.max(1) as f64
    }
}

/// Remove a single file or directory tree.
fn delete_path(path: &Path) -> io::Result<()> {
    // Missing path counts as a failure: it was measured at classify time
    // but something else removed it first.
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
