mod cli;
mod commands;
mod logger;

use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use colored::Colorize;
use commands::run_command;
use logger::init_logger;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run_command(&args.command) {
        Ok(output) => {
            println!("{}", output.green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
