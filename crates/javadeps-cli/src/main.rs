//! javadeps CLI entry point.
//!
//! Parses arguments, installs logging, dispatches the subcommand and turns
//! errors into miette diagnostics.

use clap::Parser;
use javadeps_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Find(find_args) => commands::find_execute(find_args, args.quiet),
        cli::Command::Index(index_args) => commands::index_execute(index_args, args.quiet),
    };

    result.map_err(error::cli_error_to_miette)
}
