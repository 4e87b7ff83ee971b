use thiserror::Error;

use crate::alphabet::NonAlphabetCharacter;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),

    #[error("Unknown substitution matrix '{0}'.")]
    UnknownMatrix(String),

    #[error("Sequence '{sequence}' contains {source}.")]
    UnknownSymbol {
        sequence: String,
        source: NonAlphabetCharacter,
    },

    #[error("No sequences were given.")]
    EmptyInput,

    #[error("The sequence name {0} was encountered twice.")]
    DuplicateSequenceName(String),

    #[error(
        "The traceback did not progress at x index {x_index} and y index {y_index}, the substitution matrix is inconsistent."
    )]
    DegenerateTraceback { x_index: usize, y_index: usize },

    #[error(
        "Merging the gap profile of sequence {sequence} ran past its block {block_index}, the pairwise alignments are inconsistent."
    )]
    ProfileMergeOverflow { sequence: usize, block_index: usize },

    #[error(
        "A gap profile for a sequence of length {profile_length} was applied to a sequence of length {sequence_length}."
    )]
    ProfileLengthMismatch {
        sequence_length: usize,
        profile_length: usize,
    },

    #[error("An alignment was given {names} sequence names, but {rows} rows.")]
    NameCountMismatch { names: usize, rows: usize },

    #[error(
        "The aligned row of sequence {sequence} has {actual} columns, but the alignment has {expected} columns."
    )]
    UnequalRowLengths {
        sequence: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The substitution matrix is not symmetric for the characters '{first}' and '{second}'.")]
    AsymmetricMatrix { first: char, second: char },
}
