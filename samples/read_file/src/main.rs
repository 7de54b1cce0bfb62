//! Read File Sample Entry Point
//!
//! Prints `file.txt` from the current working directory.

use pho::result::Outcome;
use read_file::read_relative;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,read_file=debug".into()),
        )
        .init();

    let working_directory = Outcome::wrap(std::env::current_dir());

    match read_relative(working_directory, "file.txt").into_result() {
        Ok(text) => println!("{text}"),
        Err(error) => {
            tracing::error!(%error, "error reading file");
            std::process::exit(1);
        }
    }
}
