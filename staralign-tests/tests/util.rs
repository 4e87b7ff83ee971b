use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use staralign::{align, matrix};

/// The root directory of the repository, which contains `test_files`.
pub fn repo_root() -> &'static Path {
    // The manifest directory is "[...]/staralign-tests".
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/.."))
}

pub fn repo_path(path: &str) -> PathBuf {
    repo_root().join(path)
}

/// Runs a staralign subcommand.
///
/// Arguments starting with `test_files/` or `sample_config/` are resolved relative to the repository root.
pub fn run_in_repo_root(args: &str) -> Result<()> {
    let args = std::iter::once("staralign".to_string()).chain(args.split_whitespace().map(
        |arg| {
            if arg.starts_with("test_files/") || arg.starts_with("sample_config/") {
                repo_path(arg).to_string_lossy().into_owned()
            } else {
                arg.to_string()
            }
        },
    ));
    let mut args = args.collect::<Vec<_>>();
    let subcommand = args.remove(1);

    match subcommand.as_str() {
        "align" => align::cli(align::Cli::parse_from(args))?,
        "matrix" => matrix::cli(matrix::Cli::parse_from(args))?,
        other => panic!("Unknown subcommand {other}"),
    }

    Ok(())
}
