use anyhow::Result;
use clap::Parser;
use lib_staralign::substitution_matrix::SubstitutionMatrix;
use log::LevelFilter;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The name of the substitution matrix.
    #[clap(long, short = 'm', default_value = SubstitutionMatrix::BLOSUM62_NAME)]
    matrix: String,
}

pub fn cli(cli: Cli) -> Result<()> {
    crate::align::init_logging(cli.log_level);

    let matrix = SubstitutionMatrix::by_name(&cli.matrix)?;
    matrix.write_plain(std::io::stdout().lock())?;

    Ok(())
}
