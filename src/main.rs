//! JVIS entry point.
//! Parses arguments, resolves the stack data directory and dispatches to the
//! `new`, `list` and `show` commands.

use jvis::{
    cli::{get_args, Args, Command, NewArgs},
    config::Settings,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    project::{scaffold_project, ProjectConfig, ProjectLayout},
    registry::{StackCategory, StackDescriptor, StackRegistry},
    renderer::MiniJinjaRenderer,
    validation::{
        sanitize_project_name, validate_database, validate_description, validate_entity_name,
        validate_project_name, validate_safe_path,
    },
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::resolve(args.data_dir.as_deref());
    let registry = StackRegistry::from_settings(&settings);

    match args.command {
        Command::New(new_args) => run_new(&registry, new_args),
        Command::List { category } => {
            list_stacks(&registry, category);
            Ok(())
        }
        Command::Show { id } => {
            show_stack(&registry.require(&id)?);
            Ok(())
        }
    }
}

/// Validates the `new` arguments into a project configuration.
fn build_config(registry: &StackRegistry, args: NewArgs) -> Result<ProjectConfig> {
    let name = sanitize_project_name(&args.name);
    validate_project_name(&name)?;
    validate_description(&args.description)?;

    let dir = std::path::absolute(&args.path).map_err(|e| Error::io_at(&args.path, e))?;
    validate_safe_path(&dir)?;

    if let Some(database) = &args.database {
        validate_database(database)?;
    }
    let entity = validate_entity_name(&args.entity)?;

    let layout = match args.stack {
        Some(id) => ProjectLayout::Single(registry.require(&id)?),
        None => ProjectLayout::Monorepo {
            backend: args.backend.map(|id| registry.require(&id)).transpose()?,
            frontend: args.frontend.map(|id| registry.require(&id)).transpose()?,
            mobile: args.mobile.map(|id| registry.require(&id)).transpose()?,
        },
    };

    Ok(ProjectConfig::new(&name, dir, layout)
        .with_description(&args.description)
        .with_database(args.database.as_deref())
        .with_entity(&entity))
}

fn run_new(registry: &StackRegistry, args: NewArgs) -> Result<()> {
    let config = build_config(registry, args)?;
    let renderer = MiniJinjaRenderer::new();

    println!("Creating project '{}' in {}", config.name, config.dir.display());
    let report = scaffold_project(&renderer, &config)?;

    for (stack_id, result) in &report.stacks {
        println!(
            "  {}: {} directories, {} files rendered, {} copied",
            stack_id,
            result.directories.len(),
            result.rendered.len(),
            result.copied.len()
        );
        for skipped in &result.skipped {
            println!("    skipped missing source '{}'", skipped.display());
        }
    }
    if config.entity != jvis::constants::DEFAULT_ENTITY {
        println!(
            "  Entity '{}': {} files rewritten, {} files and {} directories renamed",
            config.entity,
            report.rename.rewritten.len(),
            report.rename.renamed_files.len(),
            report.rename.renamed_dirs.len()
        );
    }

    println!("Project generation completed successfully in {}.", config.dir.display());
    if let Some(stack) = config.layout.primary_stack() {
        print_setup_hints(stack);
    }
    Ok(())
}

fn print_setup_hints(stack: &StackDescriptor) {
    let Some(hints) = &stack.getting_started else {
        return;
    };

    if !hints.prerequisites.is_empty() {
        println!("\nSetup ({} required):", hints.prerequisites);
    } else if !hints.commands.is_empty() {
        println!("\nSetup:");
    } else {
        return;
    }
    for command in &hints.commands {
        println!("  {command}");
    }
}

fn list_stacks(registry: &StackRegistry, category: Option<StackCategory>) {
    let categories = match category {
        Some(category) => vec![category],
        None => StackCategory::ALL.to_vec(),
    };

    for category in categories {
        let stacks = registry.by_category(category);
        if stacks.is_empty() {
            continue;
        }
        println!("{category}:");
        for (id, stack) in &stacks {
            println!("  {:<18} {}", id, stack.display());
        }
    }
}

fn show_stack(stack: &StackDescriptor) {
    println!("{}", stack.display());
    println!("  id:                {}", stack.id);
    println!("  type:              {}", stack.category);
    println!("  language:          {}", stack.language);
    println!("  framework:         {}", stack.framework);
    println!("  requires database: {}", stack.requires_database);
    if !stack.dev_command.is_empty() {
        println!("  dev command:       {} (port {})", stack.dev_command, stack.dev_port);
    }
    if !stack.agents.is_empty() {
        println!("  agents:            {}", stack.agents.join(", "));
    }
}
