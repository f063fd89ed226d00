//! Command-line interface implementation for JVIS.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_ENTITY;
use crate::registry::StackCategory;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for JVIS.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "JVIS: project scaffolding from stack manifests",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing the bundled `stacks/` (overrides JVIS_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from one stack or a backend/frontend pair
    New(NewArgs),

    /// List available stacks
    List {
        /// Only show stacks of this type (backend, frontend, fullstack, mobile)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        category: Option<StackCategory>,
    },

    /// Show details of one stack
    Show {
        /// Stack id
        #[arg(value_name = "STACK")]
        id: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Project name
    #[arg(short, long)]
    pub name: String,

    /// Stack id for a single-stack project
    #[arg(
        short,
        long,
        conflicts_with_all = ["backend", "frontend", "mobile"],
        required_unless_present_any = ["backend", "frontend", "mobile"]
    )]
    pub stack: Option<String>,

    /// Backend stack id for a monorepo (generated under server/)
    #[arg(long)]
    pub backend: Option<String>,

    /// Frontend stack id for a monorepo (generated under client/)
    #[arg(long)]
    pub frontend: Option<String>,

    /// Mobile stack id for a monorepo (generated under mobile/)
    #[arg(long)]
    pub mobile: Option<String>,

    /// Directory where the project will be created
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// Database for stacks that need one: postgresql, mysql, dynamodb
    #[arg(short, long)]
    pub database: Option<String>,

    /// Short project description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Domain entity name replacing the placeholder (singular, e.g. product)
    #[arg(short, long, default_value = DEFAULT_ENTITY)]
    pub entity: String,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
