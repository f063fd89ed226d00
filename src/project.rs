//! Project-level scaffolding: runs one stack (or a backend/frontend pair)
//! into the project directory, then applies the entity rename.

use crate::constants::{DEFAULT_DATABASE, DEFAULT_ENTITY};
use crate::error::{Error, Result};
use crate::processor::{run_stack, ScaffoldReport};
use crate::registry::StackDescriptor;
use crate::rename::{apply_entity_name, RenameReport};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Monorepo subdirectory receiving the backend stack
pub const SERVER_DIR: &str = "server";
/// Monorepo subdirectory receiving the frontend stack
pub const CLIENT_DIR: &str = "client";
/// Monorepo subdirectory receiving the mobile stack, created only when one is chosen
pub const MOBILE_DIR: &str = "mobile";

/// How stacks are arranged inside the project directory.
#[derive(Debug, Clone)]
pub enum ProjectLayout {
    /// One stack at the project root
    Single(StackDescriptor),
    /// Backend under `server/`, frontend under `client/`, mobile under `mobile/`
    Monorepo {
        backend: Option<StackDescriptor>,
        frontend: Option<StackDescriptor>,
        mobile: Option<StackDescriptor>,
    },
}

impl ProjectLayout {
    /// The stack whose metadata (database, setup hints) drives the project.
    pub fn primary_stack(&self) -> Option<&StackDescriptor> {
        match self {
            ProjectLayout::Single(stack) => Some(stack),
            ProjectLayout::Monorepo {
                backend,
                frontend,
                mobile,
            } => backend.as_ref().or(frontend.as_ref()).or(mobile.as_ref()),
        }
    }
}

/// Fully resolved inputs for one generated project.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub dir: PathBuf,
    pub layout: ProjectLayout,
    /// Empty unless the primary stack needs a database
    pub database: String,
    pub entity: String,
}

impl ProjectConfig {
    pub fn new(name: &str, dir: PathBuf, layout: ProjectLayout) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            dir,
            layout,
            database: String::new(),
            entity: DEFAULT_ENTITY.to_string(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Keeps the requested database only when the primary stack uses one.
    pub fn with_database(mut self, requested: Option<&str>) -> Self {
        let requires_database =
            self.layout.primary_stack().is_some_and(|stack| stack.requires_database);
        self.database = if requires_database {
            requested
                .filter(|db| !db.is_empty())
                .unwrap_or(DEFAULT_DATABASE)
                .to_string()
        } else {
            String::new()
        };
        self
    }

    pub fn with_entity(mut self, entity: &str) -> Self {
        self.entity = entity.to_string();
        self
    }
}

/// Per-stack materialization results plus the rename summary.
#[derive(Debug, Default)]
pub struct ProjectReport {
    pub stacks: Vec<(String, ScaffoldReport)>,
    pub rename: RenameReport,
}

/// Generates the whole project described by `config`.
pub fn scaffold_project(
    renderer: &dyn TemplateRenderer,
    config: &ProjectConfig,
) -> Result<ProjectReport> {
    fs::create_dir_all(&config.dir).map_err(|e| Error::io_at(&config.dir, e))?;
    let mut report = ProjectReport::default();

    let mut run = |stack: &StackDescriptor, target: PathBuf| -> Result<()> {
        let result = run_stack(
            renderer,
            stack,
            &target,
            &config.name,
            &config.description,
            &config.database,
        )?;
        report.stacks.push((stack.id.clone(), result));
        Ok(())
    };

    match &config.layout {
        ProjectLayout::Single(stack) => run(stack, config.dir.clone())?,
        ProjectLayout::Monorepo {
            backend,
            frontend,
            mobile,
        } => {
            let server = config.dir.join(SERVER_DIR);
            let client = config.dir.join(CLIENT_DIR);
            for dir in [&server, &client] {
                fs::create_dir_all(dir).map_err(|e| Error::io_at(dir, e))?;
            }
            if let Some(stack) = backend {
                run(stack, server)?;
            }
            if let Some(stack) = frontend {
                run(stack, client)?;
            }
            if let Some(stack) = mobile {
                run(stack, config.dir.join(MOBILE_DIR))?;
            }
        }
    }

    if config.entity != DEFAULT_ENTITY {
        debug!("Applying entity name '{}'", config.entity);
        report.rename = apply_entity_name(&config.dir, &config.entity)?;
    }

    Ok(report)
}
