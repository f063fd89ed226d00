//! Full stack manifests: the directory list and the file list with
//! copy/render instructions. Loaded only when a stack is scaffolded.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::registry::StackDescriptor;
use log::debug;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// One file instruction, decided once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEntry {
    /// Bytes copied verbatim from `src` to `dst`
    Copy { src: PathBuf, dst: PathBuf },
    /// `src` rendered through the template engine, result written to `dst`
    Render { src: PathBuf, dst: PathBuf },
}

impl FileEntry {
    pub fn src(&self) -> &Path {
        match self {
            FileEntry::Copy { src, .. } | FileEntry::Render { src, .. } => src,
        }
    }

    /// Destination relative to the target root, template marker already stripped.
    pub fn dst(&self) -> &Path {
        match self {
            FileEntry::Copy { dst, .. } | FileEntry::Render { dst, .. } => dst,
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, FileEntry::Render { .. })
    }
}

/// Everything a stack asks the materializer to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFileEntry {
    Path(String),
    Mapping {
        src: String,
        #[serde(default)]
        dst: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    directories: Option<Vec<String>>,
    #[serde(default)]
    files: Option<Vec<RawFileEntry>>,
}

/// Returns true if `filename` carries the template marker (`*.j2`).
pub fn is_template_name(filename: &str) -> bool {
    filename.len() > TEMPLATE_SUFFIX.len() && filename.ends_with(TEMPLATE_SUFFIX)
}

/// Strips the template marker from a destination path, if present.
pub fn strip_template_suffix(path: &str) -> &str {
    if is_template_name(path) {
        &path[..path.len() - TEMPLATE_SUFFIX.len()]
    } else {
        path
    }
}

/// A manifest path must stay inside the target root: relative, no `..`.
fn safe_relative_path(raw: &str, manifest_path: &Path) -> Result<PathBuf> {
    let path = PathBuf::from(raw);
    let is_safe = !raw.trim().is_empty()
        && path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !is_safe {
        return Err(Error::ManifestError {
            path: manifest_path.to_path_buf(),
            reason: format!("path '{raw}' escapes the project root"),
        });
    }
    Ok(path)
}

impl FileEntry {
    fn from_raw(raw: RawFileEntry, manifest_path: &Path) -> Result<Self> {
        let (src, dst) = match raw {
            RawFileEntry::Path(path) => (path.clone(), path),
            RawFileEntry::Mapping { src, dst } => {
                let dst = dst.unwrap_or_else(|| src.clone());
                (src, dst)
            }
        };

        let src_path = safe_relative_path(&src, manifest_path)?;
        let dst_path = safe_relative_path(strip_template_suffix(&dst), manifest_path)?;

        Ok(if is_template_name(&src) {
            FileEntry::Render {
                src: src_path,
                dst: dst_path,
            }
        } else {
            FileEntry::Copy {
                src: src_path,
                dst: dst_path,
            }
        })
    }
}

/// Parses manifest text. `manifest_path` is only used in error messages.
///
/// # Errors
/// * `Error::ManifestError` if the YAML is malformed, an entry has the wrong
///   shape, or a path escapes the project root
pub fn parse_manifest(content: &str, manifest_path: &Path) -> Result<ManifestDocument> {
    let raw: RawManifest = if content.trim().is_empty() {
        RawManifest::default()
    } else {
        serde_yaml::from_str::<Option<RawManifest>>(content)
            .map_err(|e| Error::ManifestError {
                path: manifest_path.to_path_buf(),
                reason: e.to_string(),
            })?
            .unwrap_or_default()
    };

    let directories = raw
        .directories
        .unwrap_or_default()
        .iter()
        .map(|dir| safe_relative_path(dir, manifest_path))
        .collect::<Result<Vec<_>>>()?;

    let files = raw
        .files
        .unwrap_or_default()
        .into_iter()
        .map(|entry| FileEntry::from_raw(entry, manifest_path))
        .collect::<Result<Vec<_>>>()?;

    Ok(ManifestDocument { directories, files })
}

/// Reads the full manifest of `stack`.
pub fn load(stack: &StackDescriptor) -> Result<ManifestDocument> {
    let manifest_path = stack.manifest_path();
    debug!("Loading manifest {}", manifest_path.display());
    let content = std::fs::read_to_string(&manifest_path)
        .map_err(|e| Error::io_at(&manifest_path, e))?;
    parse_manifest(&content, &manifest_path)
}
