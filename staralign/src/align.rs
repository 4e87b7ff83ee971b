use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use lib_staralign::star_aligner::{
    CenterStarAligner, StarAlignerConfig, StarAlignmentStatistics,
};
use log::{LevelFilter, debug, info, warn};
use serde::Serialize;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::align::fasta_parser::parse_fasta_file;

mod fasta_parser;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The path to a fasta file containing the sequences to align.
    ///
    /// The id of each record is used as the name of its sequence.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// A toml file containing the aligner configuration.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// The name of the substitution matrix.
    ///
    /// Overrides the matrix given in the configuration file.
    #[clap(long, short = 'm')]
    matrix: Option<String>,

    /// The file to store the alignment statistics in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// A string of characters that should be skipped in the input fasta.
    ///
    /// For example, whitespace or `*` stop symbols can be skipped this way.
    #[clap(long, default_value = "")]
    skip_characters: String,

    /// Convert the input sequences to upper case.
    #[clap(long)]
    uppercase: bool,
}

#[derive(Serialize)]
struct AlignmentOutput {
    statistics: StarAlignmentStatistics,
    runtime: Runtime,
}

#[derive(Serialize)]
struct Runtime {
    seconds: f64,
}

pub fn init_logging(log_level: LevelFilter) {
    if let Err(error) = TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        warn!("Logger was already initialised: {error}");
    }
}

pub fn cli(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let mut config = if let Some(config_path) = &cli.config {
        info!("Loading configuration file {config_path:?}");
        let mut config_file = BufReader::new(File::open(config_path).map_err(|error| {
            anyhow!("Unable to open configuration file {config_path:?}: {error}")
        })?);
        let mut config = String::new();
        config_file.read_to_string(&mut config)?;
        toml::from_str::<StarAlignerConfig>(&config)?
    } else {
        StarAlignerConfig::default()
    };
    if let Some(matrix) = &cli.matrix {
        config.matrix = matrix.clone();
    }
    debug!("Using configuration {config:?}");

    info!("Loading input file {:?}", cli.input);
    let mut records = parse_fasta_file(&cli.input)?;

    // Remove skip characters.
    let skip_characters = cli.skip_characters.chars().collect::<Vec<_>>();
    for record in &mut records {
        record.sequence.retain(|c| !skip_characters.contains(&c));
        if cli.uppercase {
            record.sequence.make_ascii_uppercase();
        }
    }

    let aligner = CenterStarAligner::new(&config)?;

    let start_time = Instant::now();
    let alignment = aligner.align(
        records
            .iter()
            .map(|record| (record.id.as_str(), record.sequence.as_str())),
    )?;
    let duration = start_time.elapsed();
    info!(
        "Aligned {} sequences in {}ms ({}µs)",
        records.len(),
        duration.as_millis(),
        duration.as_micros()
    );

    if let Some(output) = &cli.output {
        info!("Writing statistics to {output:?}");
        let output_data = AlignmentOutput {
            statistics: alignment.statistics(aligner.scoring()),
            runtime: Runtime {
                seconds: duration.as_secs_f64(),
            },
        };
        let mut output = BufWriter::new(File::create(output)?);
        write!(output, "{}", toml::to_string(&output_data)?)?;
    }

    print!("{alignment}");

    Ok(())
}
