//! vigil CLI — audit-adjacency enforcement for UI test suites.
//!
//! This binary provides the `vigil` command with `check` and `fix`
//! subcommands. See `vigil --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn vigil_output::OutputFormatter> = if cli.json {
        Box::new(vigil_output::json::JsonFormatter)
    } else {
        Box::new(vigil_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            paths,
            scope,
            strict,
            config,
        } => commands::check::run(&*formatter, cli.verbose, paths, scope, strict, config),
        Commands::Fix {
            paths,
            scope,
            dry_run,
            config,
        } => commands::fix::run(&*formatter, cli.verbose, paths, scope, dry_run, config),
    };

    std::process::exit(exit_code);
}
