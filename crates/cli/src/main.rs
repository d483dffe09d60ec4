use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cmdarg_cli::cli_args::Args;
use cmdarg_cli::output::{render_error, render_result};
use cmdarg_core::config;
use cmdarg_core::definitions::load_parser_definition;
use cmdarg_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();

    let definitions_path = config::get_definitions_path(args.config_path.as_deref());
    debug!("Definitions path: `{definitions_path}`");

    let parser = load_parser_definition(&definitions_path)?.into_parser()?;

    if args.show_help {
        println!("{}", parser.help());
        return Ok(());
    }

    let result = parser.parse(&args.tokens)?;
    print!("{}", render_result(&result)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}
