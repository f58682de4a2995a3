use std::path::PathBuf;

/// Resolved filesystem roots for the current machine.
///
/// All path resolution happens here, once, and the context is passed
/// explicitly into the catalog, classifier, and permission checks; there
/// are no process-wide singletons. Tests construct one pointed at a temp
/// directory and exercise the full engine against it.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// The user's home directory
    pub home: PathBuf,

    /// System-wide cache root (`/Library/Caches` in production)
    pub system_cache_root: PathBuf,
}

impl ScanContext {
    /// Build a context for the current user.
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
        Self {
            home,
            system_cache_root: PathBuf::from("/Library/Caches"),
        }
    }

    /// User cache root (`~/Library/Caches`)
    pub fn user_cache_dir(&self) -> PathBuf {
        self.home.join("Library/Caches")
    }

    /// User log root (`~/Library/Logs`)
    pub fn user_log_dir(&self) -> PathBuf {
        self.home.join("Library/Logs")
    }

    /// User trash (`~/.Trash`)
    pub fn trash_dir(&self) -> PathBuf {
        self.home.join(".Trash")
    }

    /// Xcode DerivedData root
    pub fn derived_data_dir(&self) -> PathBuf {
        self.home.join("Library/Developer/Xcode/DerivedData")
    }

    /// Known browser cache locations, each measured as a single unit.
    pub fn browser_cache_dirs(&self) -> Vec<PathBuf> {
        [
            "Library/Caches/com.apple.Safari",
            "Library/Caches/com.google.Chrome",
            "Library/Caches/com.google.Chrome.helper",
            "Library/Caches/com.mozilla.firefox",
            "Library/Caches/com.operasoftware.Opera",
            "Library/Caches/com.microsoft.edgemac",
            "Library/Safari/LocalStorage",
            "Library/Application Support/Google/Chrome/Default/Cache",
            "Library/Application Support/Firefox/Profiles",
            "Library/Caches/com.brave.Browser",
            "Library/Caches/com.vivaldi.Vivaldi",
        ]
        .iter()
        .map(|rel| self.home.join(rel))
        .collect()
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_hang_off_home() {
        let ctx = ScanContext {
            home: PathBuf::from("/Users/test"),
            system_cache_root: PathBuf::from("/Library/Caches"),
        };
        assert_eq!(
            ctx.user_cache_dir(),
            PathBuf::from("/Users/test/Library/Caches")
        );
        assert_eq!(ctx.trash_dir(), PathBuf::from("/Users/test/.Trash"));
        assert!(ctx
            .browser_cache_dirs()
            .iter()
            .all(|p| p.starts_with("/Users/test")));
    }
}
