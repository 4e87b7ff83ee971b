//! Alignment of all sequence pairs and selection of the center sequence.

use log::{debug, info};

use crate::{
    alignment_matrix::gap_vector::GapVector,
    alphabet::ProteinSequence,
    error::Result,
    pairwise_alignment::PairwiseAlignment,
    score::Score,
    substitution_matrix::SubstitutionMatrix,
};

/// The optimal pairwise alignments of all unordered pairs of sequences.
///
/// The alignment of the pair `(a, b)` with `a > b` is computed with `a` as `x` and `b` as `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseAlignmentTable {
    /// Row `a` holds the alignments of `a` against all `b < a`.
    rows: Vec<Vec<PairwiseAlignment>>,
    sequence_lengths: Vec<usize>,
}

impl PairwiseAlignmentTable {
    pub fn compute(scoring: &SubstitutionMatrix, sequences: &[ProteinSequence]) -> Result<Self> {
        info!(
            "Computing {} pairwise alignments",
            sequences.len() * sequences.len().saturating_sub(1) / 2
        );

        #[cfg(feature = "parallel")]
        let rows = {
            use rayon::prelude::*;
            (0..sequences.len())
                .into_par_iter()
                .map(|a| {
                    (0..a)
                        .map(|b| PairwiseAlignment::compute(scoring, &sequences[a], &sequences[b]))
                        .collect::<Result<Vec<_>>>()
                })
                .collect::<Result<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let rows = {
            let mut rows = Vec::with_capacity(sequences.len());
            for a in 0..sequences.len() {
                let mut row = Vec::with_capacity(a);
                for b in 0..a {
                    row.push(PairwiseAlignment::compute(
                        scoring,
                        &sequences[a],
                        &sequences[b],
                    )?);
                }
                rows.push(row);
            }
            rows
        };

        Ok(Self {
            rows,
            sequence_lengths: sequences.iter().map(ProteinSequence::len).collect(),
        })
    }

    pub fn sequence_count(&self) -> usize {
        self.rows.len()
    }

    /// The alignment of `a` against `b`, computed with the higher index as `x`.
    ///
    /// **Panics** if `a == b`.
    pub fn get(&self, a: usize, b: usize) -> &PairwiseAlignment {
        assert_ne!(a, b, "a sequence is not aligned against itself");
        if a > b {
            &self.rows[a][b]
        } else {
            &self.rows[b][a]
        }
    }

    /// The score of the optimal alignment of `a` against `b`.
    pub fn score(&self, a: usize, b: usize) -> Score {
        self.get(a, b).score()
    }

    /// The sum of the scores of all pairwise alignments involving each sequence.
    pub fn totals(&self) -> Vec<Score> {
        let mut totals = vec![Score::ZERO; self.sequence_count()];
        for (a, row) in self.rows.iter().enumerate() {
            for (b, alignment) in row.iter().enumerate() {
                totals[a] += alignment.score();
                totals[b] += alignment.score();
            }
        }
        totals
    }

    /// Selects the sequence with the maximum total score, preferring lower indices on ties.
    ///
    /// Returns `None` if the table is empty.
    pub fn select_center(&self) -> Option<usize> {
        let totals = self.totals();
        debug!("Pairwise score totals: {totals:?}");

        let mut center = None;
        for (index, total) in totals.iter().enumerate() {
            match center {
                Some((_, best)) if *total <= best => {}
                _ => center = Some((index, *total)),
            }
        }

        center.map(|(index, _)| index)
    }

    /// The gap vectors of the alignment of `center` against `sequence`.
    ///
    /// Returns the gaps of the center followed by the gaps of the sequence.
    /// The center aligned against itself requires no gaps.
    pub fn center_relative_gaps(&self, center: usize, sequence: usize) -> (GapVector, GapVector) {
        if sequence == center {
            let length = self.sequence_lengths[center];
            (GapVector::new_zeroed(length), GapVector::new_zeroed(length))
        } else if center > sequence {
            let alignment = self.get(center, sequence);
            (alignment.x_gaps().clone(), alignment.y_gaps().clone())
        } else {
            let alignment = self.get(sequence, center);
            (alignment.y_gaps().clone(), alignment.x_gaps().clone())
        }
    }
}
