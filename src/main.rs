use clap::Parser;
use matrader::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
