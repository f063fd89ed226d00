//! Template rendering for stack files.
//! Wraps a sandboxed MiniJinja environment: no loader, so templates cannot
//! reach the filesystem or import other templates, and only the values passed
//! in the context are visible.
use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, Value};
use serde::Serialize;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name used in diagnostics (usually the source path)
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// The values every stack template can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub project_description: String,
    pub database_type: String,
    /// ISO 8601 calendar date, fixed for the whole run
    pub date: String,
}

impl RenderContext {
    /// Builds the context with today's date.
    pub fn new(project_name: &str, project_description: &str, database: &str) -> Self {
        Self::with_date(project_name, project_description, database, Local::now().date_naive())
    }

    /// Builds the context for a given date.
    ///
    /// An empty description becomes `"<name> project"`, an empty database `postgresql`.
    pub fn with_date(
        project_name: &str,
        project_description: &str,
        database: &str,
        date: NaiveDate,
    ) -> Self {
        let project_description = if project_description.is_empty() {
            format!("{project_name} project")
        } else {
            project_description.to_string()
        };
        let database_type = if database.is_empty() {
            crate::constants::DEFAULT_DATABASE.to_string()
        } else {
            database.to_string()
        };

        Self {
            project_name: project_name.to_string(),
            project_description,
            database_type,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "project_name": self.project_name,
            "project_description": self.project_description,
            "database_type": self.database_type,
            "date": self.date,
        })
    }
}

/// Serializes a value into a block-style YAML string.
fn toyaml(value: Value) -> std::result::Result<String, minijinja::Error> {
    serde_yaml::to_string(&value).map(|yaml| yaml.trim().to_string()).map_err(|e| {
        minijinja::Error::new(ErrorKind::InvalidOperation, "cannot serialize value to YAML")
            .with_source(e)
    })
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer where undefined names render as empty strings.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Stacks may reference optional keys; those must render blank, never fail.
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        // Output is source code, not markup: `package.json.j2` must not get JSON-quoted values.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("toyaml", toyaml);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateSyntaxError` if the template source does not parse
    /// * `Error::TemplateRenderError` for any other evaluation failure
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_named_str(name, template, context).map_err(|source| {
            if source.kind() == ErrorKind::SyntaxError {
                Error::TemplateSyntaxError {
                    path: name.into(),
                    source,
                }
            } else {
                Error::TemplateRenderError {
                    path: name.into(),
                    source,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let ctx = RenderContext::with_date("shop", "", "", date);
        assert_eq!(ctx.project_description, "shop project");
        assert_eq!(ctx.database_type, "postgresql");
        assert_eq!(ctx.date, "2024-03-09");
    }

    #[test]
    fn test_context_keeps_explicit_values() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let ctx = RenderContext::with_date("shop", "A shop", "mysql", date);
        assert_eq!(ctx.project_description, "A shop");
        assert_eq!(ctx.database_type, "mysql");

        let value = ctx.to_value();
        assert_eq!(value.as_object().map(|o| o.len()), Some(4));
        assert_eq!(value["date"], "2024-12-31");
    }
}
