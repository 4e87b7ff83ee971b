//! The center star multiple sequence aligner.

use std::collections::HashSet;

use log::{debug, info};

use crate::{
    alphabet::ProteinSequence,
    center::PairwiseAlignmentTable,
    consensus::consensus_score,
    error::{Error, Result},
    gap_profile::{ReconciliationState, merge_gap_profiles},
    multiple_alignment::{MultipleAlignment, materialize},
    score::Score,
    substitution_matrix::SubstitutionMatrix,
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StarAlignerConfig {
    /// The name of the substitution matrix.
    pub matrix: String,
}

impl Default for StarAlignerConfig {
    fn default() -> Self {
        Self {
            matrix: SubstitutionMatrix::BLOSUM62_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CenterStarAligner {
    scoring: SubstitutionMatrix,
}

/// A multiple alignment computed with [`CenterStarAligner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarAlignment {
    score: Score,
    center: usize,
    alignment: MultipleAlignment,
    /// Optimal pairwise scores of all pairs `(a, b)` with `a > b`, as `pairwise_scores[a][b]`.
    pairwise_scores: Vec<Vec<Score>>,
}

/// Summary of a [`StarAlignment`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarAlignmentStatistics {
    pub matrix: String,
    pub score: Score,
    pub center: String,
    pub sequence_count: usize,
    pub column_count: usize,
}

impl CenterStarAligner {
    pub fn new(config: &StarAlignerConfig) -> Result<Self> {
        Ok(Self::with_scoring(SubstitutionMatrix::by_name(
            &config.matrix,
        )?))
    }

    pub fn with_scoring(scoring: SubstitutionMatrix) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &SubstitutionMatrix {
        &self.scoring
    }

    /// Aligns the given named sequences.
    ///
    /// The rows of the resulting alignment are in the order of the input.
    pub fn align<Name: Into<String>, Body: AsRef<str>>(
        &self,
        sequences: impl IntoIterator<Item = (Name, Body)>,
    ) -> Result<StarAlignment> {
        let mut names = Vec::new();
        let mut parsed_sequences = Vec::new();
        let mut known_names = HashSet::new();

        for (name, body) in sequences {
            let name = name.into();
            if !known_names.insert(name.clone()) {
                return Err(Error::DuplicateSequenceName(name));
            }

            let sequence = ProteinSequence::parse(body.as_ref()).map_err(|source| {
                Error::UnknownSymbol {
                    sequence: name.clone(),
                    source,
                }
            })?;
            names.push(name);
            parsed_sequences.push(sequence);
        }

        if parsed_sequences.is_empty() {
            return Err(Error::EmptyInput);
        }

        self.align_sequences(names, parsed_sequences)
    }

    fn align_sequences(
        &self,
        names: Vec<String>,
        sequences: Vec<ProteinSequence>,
    ) -> Result<StarAlignment> {
        info!(
            "Aligning {} sequences with substitution matrix {}",
            sequences.len(),
            self.scoring.name()
        );

        let table = PairwiseAlignmentTable::compute(&self.scoring, &sequences)?;
        let center = table.select_center().ok_or(Error::EmptyInput)?;
        info!("Selected center sequence {}", names[center]);

        let states = (0..sequences.len())
            .map(|sequence| {
                let (center_gaps, own_gaps) = table.center_relative_gaps(center, sequence);
                ReconciliationState::new(sequence, center_gaps, own_gaps)
            })
            .collect();
        let profiles = merge_gap_profiles(states)?;

        let rows = sequences
            .iter()
            .zip(&profiles)
            .map(|(sequence, profile)| materialize(sequence, profile))
            .collect::<Result<Vec<_>>>()?;
        let alignment = MultipleAlignment::new(names, rows)?;
        info!(
            "Merged pairwise alignments into {} columns",
            alignment.column_count()
        );

        let score = consensus_score(&self.scoring, alignment.rows());
        debug!("Consensus score: {score}");

        let pairwise_scores = (0..sequences.len())
            .map(|a| (0..a).map(|b| table.score(a, b)).collect())
            .collect();

        Ok(StarAlignment {
            score,
            center,
            alignment,
            pairwise_scores,
        })
    }
}

impl StarAlignment {
    pub fn score(&self) -> Score {
        self.score
    }

    /// The index of the center sequence.
    pub fn center(&self) -> usize {
        self.center
    }

    pub fn alignment(&self) -> &MultipleAlignment {
        &self.alignment
    }

    pub fn aligned_sequences(&self) -> Vec<String> {
        self.alignment.aligned_sequences()
    }

    /// The score of an optimal pairwise alignment of the sequences `a` and `b`.
    ///
    /// **Panics** if `a == b`.
    pub fn optimal_pairwise_score(&self, a: usize, b: usize) -> Score {
        assert_ne!(a, b);
        if a > b {
            self.pairwise_scores[a][b]
        } else {
            self.pairwise_scores[b][a]
        }
    }

    pub fn statistics(&self, matrix: &SubstitutionMatrix) -> StarAlignmentStatistics {
        StarAlignmentStatistics {
            matrix: matrix.name().to_string(),
            score: self.score,
            center: self.alignment.names()[self.center].clone(),
            sequence_count: self.alignment.len(),
            column_count: self.alignment.column_count(),
        }
    }
}

impl core::fmt::Display for StarAlignment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "score: {}", self.score)?;
        write!(f, "{}", self.alignment)
    }
}

/// Aligns the named sequences with the substitution matrix of the given name.
///
/// Returns the consensus score and the aligned sequences in input order.
pub fn align<Name: Into<String>, Body: AsRef<str>>(
    matrix_name: &str,
    sequences: impl IntoIterator<Item = (Name, Body)>,
) -> Result<(Score, Vec<String>)> {
    let aligner = CenterStarAligner::new(&StarAlignerConfig {
        matrix: matrix_name.to_string(),
    })?;
    let alignment = aligner.align(sequences)?;
    Ok((alignment.score(), alignment.aligned_sequences()))
}
