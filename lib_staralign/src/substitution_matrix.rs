use log::debug;

use crate::{
    alphabet::AminoAcid,
    error::{Error, Result},
    score::Score,
};

pub mod io;

const BLOSUM62: &str = include_str!("substitution_matrix/blosum62.txt");

/// A symmetric table of substitution scores over the amino acid alphabet.
///
/// The gap symbol is part of the alphabet, hence aligning a residue with a gap,
/// as well as a gap with a gap, is scored by the table itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubstitutionMatrix {
    name: String,
    score_table: Vec<Score>,
}

impl SubstitutionMatrix {
    pub const BLOSUM62_NAME: &'static str = "blosum62";

    pub fn new(name: impl Into<String>, score_table: impl Into<Vec<Score>>) -> Self {
        let score_table = score_table.into();
        debug_assert_eq!(score_table.len(), AminoAcid::SIZE * AminoAcid::SIZE);

        Self {
            name: name.into(),
            score_table,
        }
    }

    /// Resolves a built-in matrix by its name.
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            Self::BLOSUM62_NAME => Self::blosum62(),
            _ => Err(Error::UnknownMatrix(name.to_string())),
        }
    }

    pub fn blosum62() -> Result<Self> {
        let matrix = Self::read_plain(BLOSUM62.as_bytes())?;
        matrix.verify()?;
        debug!("Loaded substitution matrix {}", matrix.name());
        Ok(matrix)
    }

    /// Returns an error if the matrix is not symmetric.
    pub fn verify(&self) -> Result<()> {
        for c1 in AminoAcid::iter() {
            for c2 in AminoAcid::iter().skip(c1.index() + 1) {
                if self.score(c1, c2) != self.score(c2, c1) {
                    return Err(Error::AsymmetricMatrix {
                        first: c1.as_char(),
                        second: c2.as_char(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, c1: AminoAcid, c2: AminoAcid) -> Score {
        self.score_table[c1.index() * AminoAcid::SIZE + c2.index()]
    }

    /// The score of aligning `c` with a gap.
    pub fn gap_score(&self, c: AminoAcid) -> Score {
        self.score(c, AminoAcid::GAP)
    }
}
