//! Data-root resolution.
//! Locates the directory holding the bundled stacks (`<data>/stacks/<id>/manifest.yaml`).

use crate::constants::{HOME_ENV, STACKS_DIR};
use log::debug;
use std::path::{Path, PathBuf};

/// Runtime settings shared by the registry and the binary.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the bundled data (contains `stacks/`)
    pub data_dir: PathBuf,
}

impl Settings {
    /// Creates settings for an explicit data root.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the data root.
    ///
    /// # Search order
    /// 1. `data_dir_override` (the `--data-dir` flag)
    /// 2. `JVIS_HOME` (its `data/` subdirectory when present, else itself)
    /// 3. `data/` next to the running executable
    /// 4. `data/` in the crate source tree
    pub fn resolve(data_dir_override: Option<&Path>) -> Self {
        if let Some(dir) = data_dir_override {
            debug!("Using data directory from command line: {}", dir.display());
            return Self::new(dir);
        }

        if let Some(home) = std::env::var_os(HOME_ENV).map(PathBuf::from) {
            if home.is_dir() {
                let nested = home.join("data");
                let dir = if nested.is_dir() { nested } else { home };
                debug!("Using data directory from {}: {}", HOME_ENV, dir.display());
                return Self::new(dir);
            }
            debug!("{} is set but is not a directory, ignoring", HOME_ENV);
        }

        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|parent| parent.join("data")))
            .filter(|dir| dir.join(STACKS_DIR).is_dir())
        {
            debug!("Using data directory next to executable: {}", dir.display());
            return Self::new(dir);
        }

        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Directory scanned by the stack registry.
    pub fn stacks_dir(&self) -> PathBuf {
        self.data_dir.join(STACKS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let settings = Settings::resolve(Some(Path::new("/opt/jvis-data")));
        assert_eq!(settings.data_dir, PathBuf::from("/opt/jvis-data"));
        assert_eq!(settings.stacks_dir(), PathBuf::from("/opt/jvis-data/stacks"));
    }
}
