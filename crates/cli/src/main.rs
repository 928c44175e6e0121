//! `hookgen`: generate JSON field transformers from resolved operation shapes.

use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod logging;

#[derive(Parser)]
#[command(
    name = "hookgen",
    version,
    about = "Generate JSON field transformers for react-query client bindings"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit input/output transformers for every operation
    Generate(commands::generate::GenerateArgs),
    /// Report which operations carry JSON fields
    Check(commands::check::CheckArgs),
}

fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => commands::generate::run(args),
            Some(Commands::Check(args)) => commands::check::run(args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn main() -> ExitCode {
    logging::init_tracing();
    let code = run_cli(std::env::args().collect());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
