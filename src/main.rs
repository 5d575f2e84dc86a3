//! `extract-images-automated` entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! extraction, and exit with status 1 on any failure (including missing
//! arguments). For programmatic use, prefer the library API (`cardcrop::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
