//! Stack discovery.
//! Scans `<data>/stacks/*/manifest.yaml`, turns each manifest into a
//! [`StackDescriptor`] and keeps the result in an explicit, invalidatable cache.

use crate::config::Settings;
use crate::constants::{DEFAULT_DEV_PORT, FILES_DIR, MANIFEST_FILE};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use walkdir::WalkDir;

/// Selection group of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackCategory {
    #[default]
    Backend,
    Frontend,
    Fullstack,
    Mobile,
}

impl StackCategory {
    pub const ALL: [StackCategory; 4] =
        [Self::Backend, Self::Frontend, Self::Fullstack, Self::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for StackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "Unknown stack type '{s}'. Expected backend, frontend, fullstack or mobile."
                ))
            })
    }
}

/// Setup hints shown after a project is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GettingStarted {
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Summary of one discoverable stack, parsed from its manifest header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub category: StackCategory,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub framework: String,
    /// Directory holding `manifest.yaml` and the `files/` bundle
    #[serde(skip)]
    pub source_dir: PathBuf,
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub requires_database: bool,
    #[serde(default)]
    pub dev_command: String,
    #[serde(default = "default_dev_port")]
    pub dev_port: u16,
    #[serde(default)]
    pub getting_started: Option<GettingStarted>,
}

fn default_dev_port() -> u16 {
    DEFAULT_DEV_PORT
}

impl StackDescriptor {
    /// One-line label used in listings.
    pub fn display(&self) -> String {
        format!("{} — {}", self.name, self.description)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join(MANIFEST_FILE)
    }

    /// Bundle that manifest `src` paths are relative to.
    pub fn files_dir(&self) -> PathBuf {
        self.source_dir.join(FILES_DIR)
    }
}

/// Discovered stacks keyed by id, in discovery order.
pub type StackMap = IndexMap<String, StackDescriptor>;

/// Parses one manifest into a descriptor.
///
/// # Errors
/// * `Error::DiscoveryError` if the file cannot be read, is not valid YAML,
///   or lacks a required field (`id`, `name`)
pub fn load_descriptor<P: AsRef<Path>>(manifest_path: P) -> Result<StackDescriptor> {
    let manifest_path = manifest_path.as_ref();
    let discovery_error = |reason: String| Error::DiscoveryError {
        path: manifest_path.to_path_buf(),
        reason,
    };

    let content =
        std::fs::read_to_string(manifest_path).map_err(|e| discovery_error(e.to_string()))?;
    let mut descriptor: StackDescriptor =
        serde_yaml::from_str(&content).map_err(|e| discovery_error(e.to_string()))?;

    if descriptor.id.trim().is_empty() {
        return Err(discovery_error("field `id` is empty".to_string()));
    }
    if descriptor.name.trim().is_empty() {
        return Err(discovery_error("field `name` is empty".to_string()));
    }

    descriptor.source_dir = manifest_path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(descriptor)
}

/// Scans every immediate subdirectory of `stacks_dir` in lexicographic order.
/// Broken manifests and duplicate ids are logged and left out.
pub fn scan_stacks<P: AsRef<Path>>(stacks_dir: P) -> StackMap {
    let stacks_dir = stacks_dir.as_ref();
    let mut stacks = StackMap::new();

    if !stacks_dir.is_dir() {
        debug!("Stacks directory {} does not exist", stacks_dir.display());
        return stacks;
    }

    // Stack directories may be symlinks into another checkout.
    let walker = WalkDir::new(stacks_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable stack entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let manifest_path = entry.path().join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            debug!("No {} in {}, skipping", MANIFEST_FILE, entry.path().display());
            continue;
        }

        match load_descriptor(&manifest_path) {
            Ok(descriptor) if stacks.contains_key(&descriptor.id) => {
                let err = Error::DiscoveryError {
                    path: manifest_path,
                    reason: format!("duplicate stack id '{}'", descriptor.id),
                };
                warn!("Skipping invalid manifest: {}", err);
            }
            Ok(descriptor) => {
                debug!(
                    "Discovered stack '{}' in {}",
                    descriptor.id,
                    descriptor.source_dir.display()
                );
                stacks.insert(descriptor.id.clone(), descriptor);
            }
            Err(err) => warn!("Skipping invalid manifest: {}", err),
        }
    }

    stacks
}

/// Read-mostly index of the stacks under one directory.
///
/// The first call to [`StackRegistry::discover`] scans the directory; later
/// calls return the same shared map until [`StackRegistry::invalidate`] is called.
#[derive(Debug)]
pub struct StackRegistry {
    stacks_dir: PathBuf,
    cache: RwLock<Option<Arc<StackMap>>>,
}

impl StackRegistry {
    pub fn new<P: Into<PathBuf>>(stacks_dir: P) -> Self {
        Self {
            stacks_dir: stacks_dir.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.stacks_dir())
    }

    /// Returns every valid stack, scanning on first use.
    pub fn discover(&self) -> Arc<StackMap> {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(stacks) = cache.as_ref() {
                return Arc::clone(stacks);
            }
        }

        // Scan outside the lock; concurrent callers may both scan, the first publish wins.
        let scanned = Arc::new(scan_stacks(&self.stacks_dir));
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.get_or_insert(scanned))
    }

    /// Drops the cached scan so the next lookup rescans the directory.
    pub fn invalidate(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn get(&self, id: &str) -> Option<StackDescriptor> {
        self.discover().get(id).cloned()
    }

    /// Like [`StackRegistry::get`], but unknown ids become an error listing the known ones.
    pub fn require(&self, id: &str) -> Result<StackDescriptor> {
        self.get(id).ok_or_else(|| Error::UnknownStack {
            id: id.to_string(),
            available: self.ids().join(", "),
        })
    }

    pub fn by_category(&self, category: StackCategory) -> StackMap {
        self.discover()
            .iter()
            .filter(|(_, stack)| stack.category == category)
            .map(|(id, stack)| (id.clone(), stack.clone()))
            .collect()
    }

    /// Sorted stack ids.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.discover().keys().cloned().collect();
        ids.sort();
        ids
    }
}
