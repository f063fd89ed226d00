//! Scaffold materialization.
//! Creates a stack's declared directories under the target root, then renders
//! or copies every declared file into place.

use crate::error::{Error, Result};
use crate::manifest::{self, FileEntry, ManifestDocument};
use crate::registry::StackDescriptor;
use crate::renderer::{RenderContext, TemplateRenderer};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with one manifest entry once its source is known to exist.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Copy the source bytes to `target` unchanged
    Copy { source: PathBuf, target: PathBuf },
    /// Write rendered `content` to `target`
    Write { target: PathBuf, content: String },
}

/// Paths (relative to the target root) touched by one materialization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories: Vec<PathBuf>,
    pub rendered: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
    /// Entries whose source file was missing from the bundle
    pub skipped: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn files_written(&self) -> usize {
        self.rendered.len() + self.copied.len()
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io_at(path, e))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io_at(path, e))
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        create_dir_all(parent)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(|e| Error::io_at(dest, e))
}

/// Turns manifest entries into file operations for one stack bundle.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    files_dir: &'a Path,
    target_root: &'a Path,
    context: serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        files_dir: &'a Path,
        target_root: &'a Path,
        context: &RenderContext,
    ) -> Self {
        Self {
            renderer,
            files_dir,
            target_root,
            context: context.to_value(),
        }
    }

    /// Resolves one entry into the operation that materializes it.
    ///
    /// # Errors
    /// * `Error::MissingSourceFile` if the source is absent from the bundle
    /// * `Error::TemplateSyntaxError` / `Error::TemplateRenderError` for broken templates
    pub fn process(&self, entry: &FileEntry) -> Result<FileOperation> {
        let source = self.files_dir.join(entry.src());
        if !source.is_file() {
            return Err(Error::MissingSourceFile { path: source });
        }
        let target = self.target_root.join(entry.dst());

        match entry {
            FileEntry::Render { src, .. } => {
                debug!("Rendering file: {}", target.display());
                let template = fs::read_to_string(&source).map_err(|e| Error::io_at(&source, e))?;
                let name = src.to_string_lossy();
                let content = self.renderer.render(&name, &template, &self.context)?;
                Ok(FileOperation::Write { target, content })
            }
            FileEntry::Copy { .. } => {
                debug!("Copying file: {}", target.display());
                Ok(FileOperation::Copy { source, target })
            }
        }
    }
}

/// Applies an already-loaded manifest to `target_root`.
///
/// Missing sources are logged and skipped; template and filesystem errors
/// abort the run. Nothing already written is rolled back.
pub fn materialize(
    renderer: &dyn TemplateRenderer,
    manifest: &ManifestDocument,
    files_dir: &Path,
    target_root: &Path,
    context: &RenderContext,
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for dir in &manifest.directories {
        create_dir_all(&target_root.join(dir))?;
        debug!("Created directory: {}", dir.display());
        report.directories.push(dir.clone());
    }

    let processor = Processor::new(renderer, files_dir, target_root, context);
    for entry in &manifest.files {
        match processor.process(entry) {
            Ok(FileOperation::Write { target, content }) => {
                write_file(&target, &content)?;
                report.rendered.push(entry.dst().to_path_buf());
            }
            Ok(FileOperation::Copy { source, target }) => {
                copy_file(&source, &target)?;
                report.copied.push(entry.dst().to_path_buf());
            }
            Err(e @ Error::MissingSourceFile { .. }) => {
                warn!("{} Skipping.", e);
                report.skipped.push(entry.src().to_path_buf());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Scaffolds `stack` into `target_root`.
///
/// # Arguments
/// * `renderer` - Engine used for `*.j2` entries
/// * `stack` - Stack to materialize
/// * `target_root` - Project directory (created if needed)
/// * `project_name` / `project_description` / `database` - Render context inputs
pub fn run_stack(
    renderer: &dyn TemplateRenderer,
    stack: &StackDescriptor,
    target_root: &Path,
    project_name: &str,
    project_description: &str,
    database: &str,
) -> Result<ScaffoldReport> {
    debug!("Scaffolding stack '{}' into {}", stack.id, target_root.display());
    let manifest = manifest::load(stack)?;
    let context = RenderContext::new(project_name, project_description, database);
    create_dir_all(target_root)?;
    materialize(renderer, &manifest, &stack.files_dir(), target_root, &context)
}
