//! Input validation for project names, entity names, databases and target paths.

use crate::constants::DATABASES;
use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]{1,63}$").expect("valid project name regex"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,30}$").expect("valid entity regex"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.]+").expect("valid separator regex"));
static INVALID_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid character regex"));

/// System directories that are never valid scaffold targets.
const FORBIDDEN_PATHS: [&str; 17] = [
    "/",
    "/bin",
    "/sbin",
    "/usr",
    "/etc",
    "/var",
    "/tmp",
    "/root",
    "/home",
    "/System",
    "/Library",
    "/Applications",
    "/proc",
    "/dev",
    "/sys",
    "/boot",
    "/run",
];

pub const MAX_DESCRIPTION_LENGTH: usize = 512;

/// Normalizes raw input into a project name: lowercase, whitespace and dots
/// become `-`, anything outside `[a-z0-9_-]` is dropped.
pub fn sanitize_project_name(raw: &str) -> String {
    let name = raw.trim().to_lowercase();
    let name = SEPARATOR_RE.replace_all(&name, "-");
    let name = INVALID_CHAR_RE.replace_all(&name, "");
    name.trim_matches(|c| c == '-' || c == '_').to_string()
}

pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ValidationError("Project name cannot be empty.".to_string()));
    }
    if !NAME_RE.is_match(name) {
        return Err(Error::ValidationError(
            "Project name must start with a letter, be 2-64 characters, and contain only \
             lowercase letters, digits, hyphens, or underscores."
                .to_string(),
        ));
    }
    Ok(())
}

/// Returns the normalized (trimmed, lowercased) entity name.
pub fn validate_entity_name(raw: &str) -> Result<String> {
    let entity = raw.trim().to_lowercase();
    if entity.len() < 2 {
        return Err(Error::ValidationError(
            "Entity name must be at least 2 characters.".to_string(),
        ));
    }
    if !ENTITY_RE.is_match(&entity) {
        return Err(Error::ValidationError(
            "Entity name must be a single word, lowercase letters only (2-30 chars).".to_string(),
        ));
    }
    Ok(entity)
}

pub fn validate_database(database: &str) -> Result<()> {
    if DATABASES.contains(&database) {
        return Ok(());
    }
    Err(Error::ValidationError(format!(
        "Unknown database '{database}'. Available: {}.",
        DATABASES.join(", ")
    )))
}

pub fn validate_description(description: &str) -> Result<()> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(Error::ValidationError(format!(
            "Description too long ({length} chars). Maximum is {MAX_DESCRIPTION_LENGTH}."
        )));
    }
    Ok(())
}

/// Rejects traversal and system directories, checking both the literal and
/// the canonical form so symlinks cannot sneak past.
pub fn validate_safe_path(path: &Path) -> Result<()> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(Error::ValidationError(
            "Path contains '..' (directory traversal not allowed).".to_string(),
        ));
    }

    let literal = path.to_string_lossy().to_string();
    let resolved = path
        .canonicalize()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| literal.clone());

    for candidate in [literal.as_str(), resolved.as_str()] {
        let trimmed = if candidate.len() > 1 {
            candidate.trim_end_matches('/')
        } else {
            candidate
        };
        if FORBIDDEN_PATHS.contains(&trimmed) {
            return Err(Error::ValidationError(format!(
                "Cannot operate on system directory: {candidate}"
            )));
        }
    }
    Ok(())
}
