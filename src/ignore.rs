//! Paths the entity rename must never touch.
//! Tooling metadata directories and compiled/packaged artifacts are matched
//! with glob patterns against paths relative to the project root.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Version control, dependency and bytecode/type-checker cache directories
pub const SKIP_DIRS: [&str; 5] = [".git", ".venv", "node_modules", "__pycache__", ".mypy_cache"];

/// Compiled bytecode, wheel/egg archives and shared libraries
pub const SKIP_EXTENSIONS: [&str; 7] = ["pyc", "pyo", "whl", "egg", "so", "dll", "dylib"];

fn build(patterns: impl IntoIterator<Item = String>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(&pattern).map_err(|e| {
            Error::ValidationError(format!("invalid exclusion pattern '{pattern}': {e}"))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::ValidationError(format!("exclusion set failed to build: {e}")))
}

/// Compiled exclusion rules.
#[derive(Debug, Clone)]
pub struct Exclusions {
    dirs: GlobSet,
    files: GlobSet,
}

impl Exclusions {
    /// The fixed rule set used by the rename pass.
    pub fn new() -> Result<Self> {
        let dirs = build(
            SKIP_DIRS.iter().flat_map(|dir| [format!("**/{dir}"), format!("**/{dir}/**")]),
        )?;
        let files = build(SKIP_EXTENSIONS.iter().map(|ext| format!("**/*.{ext}")))?;
        Ok(Self { dirs, files })
    }

    /// Returns true if `relative_path` lies inside an excluded directory, or
    /// is itself a file with an excluded extension.
    pub fn is_excluded(&self, relative_path: &Path, is_file: bool) -> bool {
        self.dirs.is_match(relative_path) || (is_file && self.files.is_match(relative_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_directories() {
        let exclusions = Exclusions::new().unwrap();
        assert!(exclusions.is_excluded(Path::new(".git"), false));
        assert!(exclusions.is_excluded(Path::new(".git/config"), true));
        assert!(exclusions.is_excluded(Path::new("web/node_modules/items/index.js"), true));
        assert!(exclusions.is_excluded(Path::new("src/__pycache__"), false));
        assert!(!exclusions.is_excluded(Path::new("src/items"), false));
        assert!(!exclusions.is_excluded(Path::new("src/.gitkeep"), true));
    }

    #[test]
    fn test_excluded_extensions_only_apply_to_files() {
        let exclusions = Exclusions::new().unwrap();
        assert!(exclusions.is_excluded(Path::new("item.pyc"), true));
        assert!(exclusions.is_excluded(Path::new("lib/libitem.so"), true));
        assert!(!exclusions.is_excluded(Path::new("item.so"), false));
        assert!(!exclusions.is_excluded(Path::new("item.py"), true));
    }
}
