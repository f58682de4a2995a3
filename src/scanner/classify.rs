use std::fs;
use std::path::Path;
use tracing::debug;

use super::catalog::{self, RootKind};
use super::category::{CacheCategory, CacheItem};
use super::walker;
use crate::common::context::ScanContext;

/// List the cleanable items belonging to a category.
///
/// For `All` this is the concatenation over the six concrete categories in
/// their fixed order. Roots that do not exist or cannot be read yield no
/// items; a machine without Xcode simply has an empty DerivedData list.
pub fn list_items(ctx: &ScanContext, category: CacheCategory) -> Vec<CacheItem> {
    if category == CacheCategory::All {
        return category
            .expand()
            .into_iter()
            .flat_map(|c| list_items(ctx, c))
            .collect();
    }

    let roots = catalog::category_roots(ctx, category);
    let mut items = Vec::new();

    for root in &roots.paths {
        match roots.kind {
            RootKind::WholeRoot => {
                if let Some(item) = whole_root_item(root) {
                    items.push(item);
                }
            }
            RootKind::PerChild => items.extend(child_items(root)),
        }
    }

    debug!(%category, count = items.len(), "classified items");
    items
}

/// Measure a root as a single item. Missing roots yield nothing.
fn whole_root_item(root: &Path) -> Option<CacheItem> {
    let size_bytes = walker::compute_size(root)?;
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    Some(CacheItem {
        name,
        path: root.to_path_buf(),
        size_bytes,
    })
}

/// One item per immediate child of the root, skipping hidden and unreadable
/// entries. Children whose size cannot be computed are dropped, not fatal.
fn child_items(root: &Path) -> Vec<CacheItem> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(root = %root.display(), error = %e, "root not readable, skipping");
            return Vec::new();
        }
    };

    let mut children: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    // Directory enumeration order is filesystem-dependent; sort for a
    // stable item order.
    children.sort_by_key(|e| e.file_name());

    let mut items = Vec::new();
    for child in children {
        let name_os = child.file_name();
        if walker::is_hidden(&name_os) {
            continue;
        }

        let path = child.path();
        if path.is_dir() && fs::read_dir(&path).is_err() {
            debug!(path = %path.display(), "child not readable, skipping");
            continue;
        }

        match walker::compute_size(&path) {
            Some(size_bytes) => items.push(CacheItem {
                name: name_os.to_string_lossy().into_owned(),
                path,
                size_bytes,
            }),
            None => {
                debug!(path = %path.display(), "size computation failed, skipping");
            }
        }
    }

    items
}
