//! Common constants used throughout the JVIS scaffolder.

/// Manifest file name expected in every stack directory
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Directory inside a stack that holds the file bundle referenced by the manifest
pub const FILES_DIR: &str = "files";

/// Stacks live under this directory of the data root
pub const STACKS_DIR: &str = "stacks";

/// Filename suffix marking a file as template source
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Placeholder domain noun baked into every bundled stack
pub const DEFAULT_ENTITY: &str = "item";

/// Database used when a database-backed stack is scaffolded without an explicit choice
pub const DEFAULT_DATABASE: &str = "postgresql";

/// Supported database ids, recommended first
pub const DATABASES: [&str; 3] = ["postgresql", "mysql", "dynamodb"];

/// Dev server port assumed when a manifest does not declare one
pub const DEFAULT_DEV_PORT: u16 = 8000;

/// Environment variable overriding the data root
pub const HOME_ENV: &str = "JVIS_HOME";
