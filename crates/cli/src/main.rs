use std::process::ExitCode;

use clap::Parser;

mod list;
mod printer;

use lsl_runtime::logging;

// No positional arguments or listing flags; clap only contributes the
// generated --help and --version.
#[derive(Debug, Parser)]
#[command(
    name = "lsl",
    version,
    about = "List the current working directory in long format"
)]
pub struct Cli {}

fn main() -> ExitCode {
    logging::init().ok();

    let _cli = Cli::parse();
    list::run()
}
