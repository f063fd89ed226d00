//! Entity rename post-processing.
//! Replaces the placeholder entity (`item`, `Items`, `ITEMS`, ...) with a
//! user-chosen noun across a generated tree: file contents first, then file
//! names, then directory names, children before parents.

use crate::constants::DEFAULT_ENTITY;
use crate::error::{Error, Result};
use crate::ignore::Exclusions;
use crate::naming::EntityReplacementPlan;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Changes made by one rename run, as paths relative to the project root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameReport {
    pub rewritten: Vec<PathBuf>,
    pub renamed_files: Vec<(PathBuf, PathBuf)>,
    pub renamed_dirs: Vec<(PathBuf, PathBuf)>,
    /// Entries left alone because their new name was already taken
    pub collisions: Vec<PathBuf>,
}

impl RenameReport {
    pub fn is_empty(&self) -> bool {
        self.rewritten.is_empty()
            && self.renamed_files.is_empty()
            && self.renamed_dirs.is_empty()
            && self.collisions.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Every non-excluded entry of `kind` under `root`, children before parents.
///
/// The walk is pre-order so excluded directories can be pruned without
/// skipping their siblings; the result is reversed afterwards.
fn collect(root: &Path, exclusions: &Exclusions, kind: EntryKind) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !entry.file_type().is_dir()
                || !exclusions.is_excluded(&relative(root, entry.path()), false)
        });

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();
        let wanted = match kind {
            EntryKind::File => file_type.is_file(),
            EntryKind::Dir => file_type.is_dir(),
        };
        if wanted && !exclusions.is_excluded(&relative(root, entry.path()), file_type.is_file()) {
            paths.push(entry.into_path());
        }
    }
    paths.reverse();
    Ok(paths)
}

/// Rewrites one file's content. Returns false for unreadable or non-text files.
fn rewrite_content(path: &Path, plan: &EntityReplacementPlan) -> Result<bool> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!("Skipping unreadable file {}", path.display());
            return Ok(false);
        }
        Err(e) => return Err(Error::io_at(path, e)),
    };
    let Ok(text) = String::from_utf8(bytes) else {
        debug!("Skipping non-text file {}", path.display());
        return Ok(false);
    };

    let replaced = plan.apply(&text);
    if replaced == text {
        return Ok(false);
    }
    fs::write(path, replaced).map_err(|e| Error::io_at(path, e))?;
    Ok(true)
}

/// Renames the last path component. Returns the new path, or `None` when the
/// name has no entity variant in it.
fn rename_entry(
    path: &Path,
    plan: &EntityReplacementPlan,
    collisions: &mut Vec<PathBuf>,
) -> Result<Option<PathBuf>> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    if !plan.matches(name) {
        return Ok(None);
    }
    let new_name = plan.apply(name);
    if new_name == name {
        return Ok(None);
    }

    let new_path = path.with_file_name(&new_name);
    if fs::symlink_metadata(&new_path).is_ok() {
        warn!(
            "Not renaming {} to {}: target already exists",
            path.display(),
            new_path.display()
        );
        collisions.push(path.to_path_buf());
        return Ok(None);
    }

    fs::rename(path, &new_path).map_err(|e| Error::io_at(path, e))?;
    debug!("Renamed {} -> {}", path.display(), new_path.display());
    Ok(Some(new_path))
}

/// Replaces the placeholder entity with `entity` throughout `target_root`.
///
/// Does nothing when `entity` is the placeholder itself.
///
/// # Passes
/// 1. Content of every text file
/// 2. File names
/// 3. Directory names, deepest first
///
/// # Errors
/// * `Error::IoErrorAt` if a rewrite or rename fails
/// * `Error::WalkError` if the tree cannot be traversed
pub fn apply_entity_name(target_root: &Path, entity: &str) -> Result<RenameReport> {
    let mut report = RenameReport::default();
    if entity == DEFAULT_ENTITY {
        return Ok(report);
    }

    let plan = EntityReplacementPlan::new(DEFAULT_ENTITY, entity);
    if plan.is_empty() {
        return Ok(report);
    }
    let exclusions = Exclusions::new()?;

    for path in collect(target_root, &exclusions, EntryKind::File)? {
        if rewrite_content(&path, &plan)? {
            report.rewritten.push(relative(target_root, &path));
        }
    }

    for path in collect(target_root, &exclusions, EntryKind::File)? {
        if let Some(new_path) = rename_entry(&path, &plan, &mut report.collisions)? {
            report
                .renamed_files
                .push((relative(target_root, &path), relative(target_root, &new_path)));
        }
    }

    // Post-order: a directory is renamed only after everything inside it.
    for path in collect(target_root, &exclusions, EntryKind::Dir)? {
        if let Some(new_path) = rename_entry(&path, &plan, &mut report.collisions)? {
            report
                .renamed_dirs
                .push((relative(target_root, &path), relative(target_root, &new_path)));
        }
    }

    report.collisions =
        report.collisions.iter().map(|path| relative(target_root, path)).collect();
    Ok(report)
}
