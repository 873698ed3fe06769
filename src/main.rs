//! scanrs command-line tool.
//!
//! Usage:
//!     scanrs [-h] [-f file_name|-] [-m words|checksum] [-v word]

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_logging();
    cli::main_with_args(std::env::args_os())
}
