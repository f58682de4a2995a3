use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Traversal stops once this many entries have been visited under one root.
///
/// Pathological trees (node_modules-style directories) can hold hundreds of
/// thousands of entries; the cap bounds worst-case latency. The partial sum
/// gathered so far is returned as-is.
pub const MAX_VISITED_ENTRIES: usize = 10_000;

/// Compute the total byte size of a file or directory subtree.
///
/// Returns `None` only when the root itself cannot be stat'ed (missing or
/// inaccessible). A regular file yields its byte length. A directory yields
/// the sum over all regular files transitively contained, where:
///
/// - hidden entries (leading `.`) and everything beneath them are skipped,
/// - unreadable entries are skipped silently,
/// - directory entries themselves contribute no bytes,
/// - an empty readable directory yields `Some(0)`.
pub fn compute_size(path: &Path) -> Option<u64> {
    compute_size_capped(path, MAX_VISITED_ENTRIES)
}

/// [`compute_size`] with an explicit entry cap.
pub fn compute_size_capped(path: &Path, max_entries: usize) -> Option<u64> {
    let meta = fs::metadata(path).ok()?;
    if !meta.is_dir() {
        return Some(meta.len());
    }

    let mut total = 0u64;
    let mut visited = 0usize;

    let walker = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        // The root itself may be hidden (~/.Trash); only prune below it.
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // Permission denied or vanished mid-walk: skip, not an error
            Err(e) => {
                trace!(root = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        visited += 1;
        if visited > max_entries {
            trace!(root = %path.display(), max_entries, "entry cap reached, returning partial sum");
            break;
        }

        if entry.file_type().is_file() {
            if let Ok(meta) = entry.metadata() {
                total += meta.len();
            }
        }
    }

    Some(total)
}

/// Leading-dot check on a bare file name.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
