use clap::Parser;
use staralign::{align, matrix};

#[derive(Parser)]
#[command(version, about)]
enum CliCommand {
    /// Compute a center star alignment of the sequences in a fasta file.
    Align(align::Cli),

    /// Print a built-in substitution matrix.
    Matrix(matrix::Cli),
}

fn main() -> anyhow::Result<()> {
    match CliCommand::parse() {
        CliCommand::Align(cli) => align::cli(cli),
        CliCommand::Matrix(cli) => matrix::cli(cli),
    }
}
