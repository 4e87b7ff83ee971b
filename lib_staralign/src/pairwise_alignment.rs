use log::trace;

use crate::{
    alignment_matrix::{AlignmentMatrix, gap_vector::GapVector},
    alphabet::ProteinSequence,
    error::Result,
    score::Score,
    substitution_matrix::SubstitutionMatrix,
};

/// An optimal global alignment of a sequence `x` against a sequence `y`.
///
/// The alignment is represented by the gaps that need to be inserted into both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseAlignment {
    score: Score,
    x_gaps: GapVector,
    y_gaps: GapVector,
}

impl PairwiseAlignment {
    pub fn compute(
        scoring: &SubstitutionMatrix,
        x: &ProteinSequence,
        y: &ProteinSequence,
    ) -> Result<Self> {
        let mut alignment_matrix = AlignmentMatrix::new(scoring, x.len(), y.len());
        let score = alignment_matrix.align(x, y);
        let (x_gaps, y_gaps) = alignment_matrix.traceback(x, y)?;
        debug_assert_eq!(x_gaps.gapped_length(), y_gaps.gapped_length());

        trace!("Aligned {x} against {y} with score {score}");
        Ok(Self {
            score,
            x_gaps,
            y_gaps,
        })
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn x_gaps(&self) -> &GapVector {
        &self.x_gaps
    }

    pub fn y_gaps(&self) -> &GapVector {
        &self.y_gaps
    }

    /// The number of columns of the alignment.
    pub fn column_count(&self) -> usize {
        self.x_gaps.gapped_length()
    }
}
