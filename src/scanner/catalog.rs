use std::path::PathBuf;

use super::category::CacheCategory;
use crate::common::context::ScanContext;

/// How the classifier turns a category root into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// Enumerate the root's immediate children; each child becomes an item.
    PerChild,
    /// Each root path is itself one item, measured whole.
    WholeRoot,
}

/// The root paths belonging to one concrete category.
#[derive(Debug, Clone)]
pub struct CategoryRoots {
    pub kind: RootKind,
    pub paths: Vec<PathBuf>,
}

/// Look up the filesystem roots for a concrete category.
///
/// This table is the single source of truth for category membership.
/// Pure lookup: no I/O, no existence checks. `All` has no roots of its
/// own; expand it first.
pub fn category_roots(ctx: &ScanContext, category: CacheCategory) -> CategoryRoots {
    match category {
        CacheCategory::UserCache => CategoryRoots {
            kind: RootKind::PerChild,
            paths: vec![ctx.user_cache_dir()],
        },
        CacheCategory::SystemCache => CategoryRoots {
            kind: RootKind::PerChild,
            paths: vec![ctx.system_cache_root.clone()],
        },
        CacheCategory::BrowserCache => CategoryRoots {
            kind: RootKind::WholeRoot,
            paths: ctx.browser_cache_dirs(),
        },
        CacheCategory::Logs => CategoryRoots {
            kind: RootKind::PerChild,
            paths: vec![ctx.user_log_dir()],
        },
        CacheCategory::Trash => CategoryRoots {
            kind: RootKind::PerChild,
            paths: vec![ctx.trash_dir()],
        },
        CacheCategory::DerivedData => CategoryRoots {
            kind: RootKind::PerChild,
            paths: vec![ctx.derived_data_dir()],
        },
        CacheCategory::All => CategoryRoots {
            kind: RootKind::PerChild,
            paths: Vec::new(),
        },
    }
}
