//! catalog-guard - domain catalog aggregation and conflict validation
//!
//! Each domain declares its event-streaming resources (topics, schema subjects,
//! service accounts) per environment. This tool merges those declarations into
//! one catalog per environment and refuses change sets in which two domains
//! claim the same resource or a deployed resource changes owner.

use clap::Parser;

mod aggregate;
mod catalog;
mod cli;
mod commands;
mod domain;
mod error;
mod hash;
mod render;
mod ui;
mod validate;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Aggregate(args) => commands::aggregate::run(cli.root, cli.verbose, args),
        Commands::AggregateSchemas(args) => {
            commands::aggregate::run_schemas(cli.root, cli.verbose, args)
        }
        Commands::Validate(args) => commands::validate::run(cli.root, cli.verbose, args),
        Commands::Render(args) => commands::render::run(cli.root, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
