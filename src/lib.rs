//! JVIS is a project scaffolder driven by stack manifests.
//! Each stack declares its directories and files in a YAML manifest; the
//! crate discovers stacks, materializes one into a target directory (rendering
//! `*.j2` templates on the way) and can rename the placeholder domain entity
//! throughout the generated tree.

/// Command-line interface module for the JVIS binary
pub mod cli;

/// Data-root resolution
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Paths excluded from the entity rename
pub mod ignore;

/// Logger setup for the binary
pub mod logger;

/// Full manifest loading and the `FileEntry` model
pub mod manifest;

/// Pluralization and entity replacement plans
pub mod naming;

/// Scaffold materialization
/// Creates directories, renders templates and copies static files
pub mod processor;

/// Project orchestration (single stack or monorepo, then entity rename)
pub mod project;

/// Stack discovery and lookup
pub mod registry;

/// Entity rename post-processing
pub mod rename;

/// Sandboxed template rendering
pub mod renderer;

/// Input validation
pub mod validation;
