use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─── Core types ───────────────────────────────────────────────────────────────

/// A named category of cleanable data.
///
/// `All` is a meta-category: it never maps to a filesystem location of its
/// own and always expands to the six concrete categories via [`expand`].
///
/// [`expand`]: CacheCategory::expand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheCategory {
    UserCache,
    SystemCache,
    BrowserCache,
    Logs,
    Trash,
    DerivedData,
    All,
}

impl CacheCategory {
    /// The six concrete categories, in scan order.
    ///
    /// This is the single definition of the order; both analysis and
    /// cleaning expand `All` through it.
    pub const CONCRETE: [CacheCategory; 6] = [
        CacheCategory::UserCache,
        CacheCategory::SystemCache,
        CacheCategory::BrowserCache,
        CacheCategory::Logs,
        CacheCategory::Trash,
        CacheCategory::DerivedData,
    ];

    /// Expand a requested category into the concrete categories to scan.
    pub fn expand(self) -> Vec<CacheCategory> {
        match self {
            CacheCategory::All => Self::CONCRETE.to_vec(),
            concrete => vec![concrete],
        }
    }
}

impl std::fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheCategory::UserCache => write!(f, "User Caches"),
            CacheCategory::SystemCache => write!(f, "System Caches"),
            CacheCategory::BrowserCache => write!(f, "Browser Caches"),
            CacheCategory::Logs => write!(f, "Logs"),
            CacheCategory::Trash => write!(f, "Trash"),
            CacheCategory::DerivedData => write!(f, "Xcode DerivedData"),
            CacheCategory::All => write!(f, "All Categories"),
        }
    }
}

/// One top-level entry (file or directory) found under a category root.
///
/// Immutable once constructed; only the classifier creates these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheItem {
    /// Display name (last path component)
    pub name: String,

    /// Absolute path of the entry
    pub path: PathBuf,

    /// Measured size in bytes at classification time
    pub size_bytes: u64,
}

/// Aggregated analysis result for one concrete category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: CacheCategory,

    /// Sum of `items[i].size_bytes`
    pub total_bytes: u64,

    /// Equal to `items.len()`
    pub item_count: usize,

    /// Items in the order the classifier produced them
    pub items: Vec<CacheItem>,
}

impl CategoryResult {
    /// Build a result from classified items, deriving the totals.
    pub fn from_items(category: CacheCategory, items: Vec<CacheItem>) -> Self {
        let total_bytes = items.iter().map(|i| i.size_bytes).sum();
        Self {
            category,
            total_bytes,
            item_count: items.len(),
            items,
        }
    }
}
