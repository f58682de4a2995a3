use std::fs;
use std::path::Path;

use super::context::ScanContext;

/// Check whether the process can usefully scan at all.
///
/// True when at least one of the standard user cache/log directories is
/// both present and readable. Advisory only: the engine never enforces
/// this; callers use it to decide whether to surface a permission warning.
pub fn has_minimum_access(ctx: &ScanContext) -> bool {
    [ctx.user_cache_dir(), ctx.user_log_dir()]
        .iter()
        .any(|p| can_read_dir(p))
}

/// Check if a directory exists and its contents can be listed
pub fn can_read_dir(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

/// Get a helpful message for permission issues
pub fn permission_hint() -> String {
    "Some directories could not be read. Grant access in \
     System Settings > Privacy & Security > Full Disk Access."
        .to_string()
}
