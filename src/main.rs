use std::process::ExitCode;

use clap::Parser;
use payroll_import_lib::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    payroll_import_lib::run(Cli::parse()).await
}
